use colored::Colorize;

use changelog::ChangelogService;

use crate::config::{self, CliOverrides};
use crate::error::{CliError, Result};
use crate::ui;

pub fn execute(input: Option<std::path::PathBuf>, config_path: String, json: bool) -> Result<()> {
    let overrides = CliOverrides {
        input,
        ..CliOverrides::default()
    };
    let config = config::load(&config_path, overrides)?;
    let source = config.input.clone();

    let mut service = ChangelogService::new(config);
    let stats = service.stats()?;

    if json {
        let rendered = serde_json::to_string_pretty(&stats)
            .map_err(|err| CliError::Other(format!("Failed to encode statistics: {err}")))?;
        println!("{rendered}");
        return Ok(());
    }

    ui::section_header(&format!("Changelog Statistics ({})", source.display()));
    println!("Releases: {}", stats.total_releases.to_string().bold());
    if let Some(latest) = &stats.latest_version {
        println!("Latest:   {}", latest.bold());
    }
    if let Some(first) = &stats.first_version {
        println!("Oldest:   {}", first.bold());
    }

    if stats.section_counts.is_empty() {
        ui::info_message("No change entries found");
    } else {
        println!("\n{}", "Entries by section:".bright_white());
        for (section, count) in &stats.section_counts {
            println!("  {:<14} {}", section, count.to_string().cyan());
        }
    }

    Ok(())
}
