//! Configuration for changelog generation.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;
use crate::install::InstallCommandSpec;

/// Options for changelog generation and preview.
///
/// Deserializable from a `changelog-pro.toml` project file; callers merge
/// CLI overrides on top. `title`, `description` and `author` fall back to
/// package metadata, then to hardcoded defaults, at render time.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChangelogConfig {
    /// Input markdown file
    pub input: PathBuf,
    /// Output HTML file
    pub output: PathBuf,
    /// Built-in template name
    pub template: String,
    pub install_command: Option<InstallCommandSpec>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub verbose: bool,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("CHANGELOG.md"),
            output: PathBuf::from("changelog.html"),
            template: "default".to_string(),
            install_command: None,
            title: None,
            description: None,
            author: None,
            verbose: false,
        }
    }
}

impl ChangelogConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error when the file cannot be read or parsed.
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

/// Host-project metadata used as a fallback for template placeholders
#[derive(Debug, Clone, Default)]
pub struct PackageMetadata {
    pub name: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CargoManifest {
    package: Option<CargoPackage>,
}

#[derive(Debug, Deserialize)]
struct CargoPackage {
    name: Option<String>,
    description: Option<String>,
    #[serde(default)]
    authors: Vec<String>,
}

impl PackageMetadata {
    /// Best-effort read of the `Cargo.toml` in `dir`; missing or malformed
    /// manifests yield empty metadata rather than an error.
    #[must_use]
    pub fn discover(dir: &Path) -> Self {
        let Ok(content) = fs::read_to_string(dir.join("Cargo.toml")) else {
            return Self::default();
        };
        let Ok(manifest) = toml::from_str::<CargoManifest>(&content) else {
            return Self::default();
        };
        let Some(package) = manifest.package else {
            return Self::default();
        };

        Self {
            name: package.name,
            description: package.description,
            author: package.authors.into_iter().next(),
        }
    }
}
