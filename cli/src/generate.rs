use std::env;

use changelog::{ChangelogService, PackageMetadata};

use crate::config::{self, CliOverrides};
use crate::error::Result;
use crate::progress::{self, ProgressTracker};
use crate::ui;

#[allow(clippy::too_many_arguments)]
pub fn execute(
    input: Option<std::path::PathBuf>,
    output: Option<std::path::PathBuf>,
    template: Option<String>,
    config_path: String,
    install_command: Option<String>,
    title: Option<String>,
    author: Option<String>,
    description: Option<String>,
    verbose: bool,
) -> Result<()> {
    let overrides = CliOverrides {
        input,
        output,
        template,
        install_command,
        title,
        author,
        description,
        verbose,
    };
    let config =
        config::load(&config_path, overrides).map_err(|err| err.with_context("Loading configuration"))?;
    let verbose = config.verbose;

    let mut progress = ProgressTracker::new("Changelog Generation").with_steps(vec![
        format!("Reading {}", config.input.display()),
        "Parsing releases".to_string(),
        format!("Writing {}", config.output.display()),
    ]);

    let metadata = env::current_dir()
        .map(|dir| PackageMetadata::discover(&dir))
        .unwrap_or_default();
    let mut service = ChangelogService::with_metadata(config, metadata);

    progress.start_step();
    progress.complete_step();
    progress.start_step();
    progress.complete_step();
    progress.start_step();
    let report = service.generate()?;
    progress.complete_step();
    progress.complete();

    ui::success_message(&format!(
        "Generated {} with {} releases in {}",
        report.output.display(),
        report.total_releases,
        progress::format_duration(report.duration)
    ));
    if report.total_releases == 0 {
        ui::warning_message("No releases found in the input file");
    }

    if verbose {
        println!("Source: {}", report.source.display());
        println!("Template: {}", service.config().template);
    }

    Ok(())
}
