//! Configuration loading for CLI commands.
//!
//! Precedence is CLI flags over the `changelog-pro.toml` file over built-in
//! defaults. A missing config file is fine; a malformed one is an error.

use std::path::{Path, PathBuf};

use changelog::{ChangelogConfig, InstallCommandSpec};

use crate::error::Result;

/// Values supplied on the command line, applied on top of the file config.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub template: Option<String>,
    pub install_command: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub verbose: bool,
}

/// Load the effective configuration for a command.
pub fn load(config_path: &str, overrides: CliOverrides) -> Result<ChangelogConfig> {
    let path = Path::new(config_path);
    let mut config = if path.exists() {
        ChangelogConfig::load_file(path)?
    } else {
        ChangelogConfig::default()
    };

    if let Some(input) = overrides.input {
        config.input = input;
    }
    if let Some(output) = overrides.output {
        config.output = output;
    }
    if let Some(template) = overrides.template {
        config.template = template;
    }
    if let Some(command) = overrides.install_command {
        config.install_command = Some(InstallCommandSpec::Single(command));
    }
    if overrides.title.is_some() {
        config.title = overrides.title;
    }
    if overrides.author.is_some() {
        config.author = overrides.author;
    }
    if overrides.description.is_some() {
        config.description = overrides.description;
    }
    config.verbose = config.verbose || overrides.verbose;

    Ok(config)
}
