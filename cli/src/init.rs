use std::fs;
use std::path::Path;

use chrono::Local;

use crate::error::{CliError, Result};
use crate::ui;

const CONFIG_FILE: &str = "changelog-pro.toml";
const CHANGELOG_FILE: &str = "CHANGELOG.md";

const STARTER_CONFIG: &str = r#"# changelog-pro configuration
input = "CHANGELOG.md"
output = "changelog.html"
template = "default"

# Shown in version badge tooltips; {version} is replaced per release.
# Also accepts a list of commands, or a table of named commands.
# install_command = "npm install my-package@{version}"

# title = "My Project"
# description = "Release notes for My Project"
# author = "The My Project team"
"#;

pub fn execute(force: bool) -> Result<()> {
    write_file(Path::new(CHANGELOG_FILE), &starter_changelog(), force)?;
    write_file(Path::new(CONFIG_FILE), STARTER_CONFIG, force)?;

    ui::success_message(&format!("Created {CHANGELOG_FILE} and {CONFIG_FILE}"));
    ui::info_message("Run `changelog-pro generate` to build your changelog page");
    Ok(())
}

fn starter_changelog() -> String {
    let today = Local::now().format("%Y-%m-%d");
    format!(
        "# Changelog\n\n\
         ## [0.1.0] - {today}\n\n\
         ### Added\n\
         - Initial release\n"
    )
}

fn write_file(path: &Path, content: &str, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(CliError::Other(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    fs::write(path, content)?;
    Ok(())
}
