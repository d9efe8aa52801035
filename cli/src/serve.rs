use std::env;

use changelog::{ChangelogService, PackageMetadata};
use preview::PreviewConfig;

use crate::config::{self, CliOverrides};
use crate::error::Result;
use crate::ui;

pub fn execute(
    input: Option<std::path::PathBuf>,
    template: Option<String>,
    config_path: String,
    port: u16,
    host: String,
    verbose: bool,
) -> Result<()> {
    let overrides = CliOverrides {
        input,
        template,
        verbose,
        ..CliOverrides::default()
    };
    let config = config::load(&config_path, overrides)?;

    init_tracing(config.verbose);

    let metadata = env::current_dir()
        .map(|dir| PackageMetadata::discover(&dir))
        .unwrap_or_default();
    let input_path = config.input.clone();
    let service = ChangelogService::with_metadata(config, metadata);

    let preview_config = PreviewConfig { host, port };
    ui::info_message(&format!(
        "Previewing {} at {}",
        input_path.display(),
        preview_config.url()
    ));
    ui::info_message("Press Ctrl+C to stop");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(preview::run_server(preview_config, service))?;

    Ok(())
}

/// Route tracing output to stderr so it never mixes with command output.
/// `RUST_LOG` overrides the level chosen by `--verbose`.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
