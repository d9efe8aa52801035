//! Install-command configuration and per-release resolution.
//!
//! The configured spec takes one of three TOML shapes (string, list, or
//! label-to-command table). Per release it is
//! resolved by substituting `{version}`, de-duplicating, and classifying
//! the commands by package-manager prefix, which drives the tooltip markup
//! the renderer emits.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// User configuration for install-command tooltips
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InstallCommandSpec {
    /// One template string containing a literal `{version}`
    Single(String),
    /// Ordered list of template strings
    List(Vec<String>),
    /// Label → template string
    Named(IndexMap<String, String>),
}

/// Render shape for one release's install commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedInstall {
    /// One inline command with a copy button
    Single(String),
    /// Several commands sharing one package manager; tab labels are short
    /// contextual hints (install/global/dev/...)
    SameManager(Vec<String>),
    /// Commands from different package managers; tab labels are the
    /// manager names
    MixedManagers(Vec<String>),
    /// User-labeled commands
    Named(IndexMap<String, String>),
}

impl InstallCommandSpec {
    /// Substitute `{version}`, de-duplicate, and classify.
    ///
    /// A list that collapses to one distinct command resolves as `Single`.
    #[must_use]
    pub fn resolve(&self, version: &str) -> ResolvedInstall {
        match self {
            Self::Single(command) => ResolvedInstall::Single(substitute(command, version)),
            Self::List(commands) => {
                let mut resolved: Vec<String> = Vec::with_capacity(commands.len());
                for command in commands {
                    let command = substitute(command, version);
                    if !resolved.contains(&command) {
                        resolved.push(command);
                    }
                }

                match resolved.as_slice() {
                    [] => ResolvedInstall::SameManager(resolved),
                    [only] => ResolvedInstall::Single(only.clone()),
                    rest => {
                        let first_manager = manager_label(&rest[0]);
                        if rest.iter().all(|cmd| manager_label(cmd) == first_manager) {
                            ResolvedInstall::SameManager(resolved)
                        } else {
                            ResolvedInstall::MixedManagers(resolved)
                        }
                    }
                }
            }
            Self::Named(commands) => ResolvedInstall::Named(
                commands
                    .iter()
                    .map(|(label, command)| (label.clone(), substitute(command, version)))
                    .collect(),
            ),
        }
    }
}

fn substitute(command: &str, version: &str) -> String {
    command.replace("{version}", version)
}

/// Package-manager prefix heuristic: the first whitespace-delimited token,
/// "cmd" when unrecognized.
#[must_use]
pub fn manager_label(command: &str) -> &'static str {
    match command.split_whitespace().next() {
        Some("npm") => "npm",
        Some("yarn") => "yarn",
        Some("pnpm") => "pnpm",
        Some("pip") => "pip",
        Some("cargo") => "cargo",
        Some("gem") => "gem",
        Some("go") => "go",
        Some("composer") => "composer",
        _ => "cmd",
    }
}

/// Short contextual label for commands that share one package manager
#[must_use]
pub fn short_label(command: &str) -> &'static str {
    if command.contains("--global") {
        "global"
    } else if command.contains("--save-dev") || command.contains(" -D") {
        "dev"
    } else if command.contains("--save-prod") || command.contains(" -P") {
        "prod"
    } else if command.contains("--save-optional") || command.contains(" -O") {
        "optional"
    } else if command.contains("--user") {
        "user"
    } else if command.contains("--upgrade") {
        "upgrade"
    } else if is_plain_install(command) {
        "install"
    } else {
        manager_label(command)
    }
}

fn is_plain_install(command: &str) -> bool {
    (command.starts_with("npm install ")
        || command.starts_with("yarn add ")
        || command.starts_with("pnpm add ")
        || command.starts_with("pip install "))
        && !command.contains("--")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_substitutes_version() {
        let spec = InstallCommandSpec::Single("npm install x@{version}".to_string());
        assert_eq!(
            spec.resolve("1.0.0"),
            ResolvedInstall::Single("npm install x@1.0.0".to_string())
        );
    }

    #[test]
    fn same_manager_list() {
        let spec = InstallCommandSpec::List(vec![
            "npm install x@{version}".to_string(),
            "npm install --global x@{version}".to_string(),
        ]);
        let ResolvedInstall::SameManager(commands) = spec.resolve("1.0.0") else {
            panic!("expected SameManager");
        };
        assert_eq!(
            commands,
            vec!["npm install x@1.0.0", "npm install --global x@1.0.0"]
        );
    }

    #[test]
    fn mixed_managers_list() {
        let spec = InstallCommandSpec::List(vec![
            "npm install x@{version}".to_string(),
            "pip install x=={version}".to_string(),
        ]);
        assert!(matches!(
            spec.resolve("1.0.0"),
            ResolvedInstall::MixedManagers(_)
        ));
    }

    #[test]
    fn identical_commands_collapse_to_single() {
        let spec = InstallCommandSpec::List(vec![
            "cargo add x@{version}".to_string(),
            "cargo add x@{version}".to_string(),
        ]);
        assert_eq!(
            spec.resolve("2.1.0"),
            ResolvedInstall::Single("cargo add x@2.1.0".to_string())
        );
    }

    #[test]
    fn named_commands_keep_labels_and_order() {
        let mut map = IndexMap::new();
        map.insert("Node.js".to_string(), "npm install x@{version}".to_string());
        map.insert("Python".to_string(), "pip install x=={version}".to_string());
        let ResolvedInstall::Named(resolved) = InstallCommandSpec::Named(map).resolve("3.0.0")
        else {
            panic!("expected Named");
        };
        let labels: Vec<&String> = resolved.keys().collect();
        assert_eq!(labels, vec!["Node.js", "Python"]);
        assert_eq!(resolved["Python"], "pip install x==3.0.0");
    }

    #[test]
    fn unrecognized_prefix_classifies_as_cmd() {
        assert_eq!(manager_label("brew install thing"), "cmd");
        assert_eq!(manager_label(""), "cmd");
    }

    #[test]
    fn short_labels_for_common_flags() {
        assert_eq!(short_label("npm install x"), "install");
        assert_eq!(short_label("npm install --global x"), "global");
        assert_eq!(short_label("npm install --save-dev x"), "dev");
        assert_eq!(short_label("pip install --user x"), "user");
        assert_eq!(short_label("cargo add x"), "cargo");
    }

    #[test]
    fn spec_deserializes_from_all_toml_shapes() {
        #[derive(Deserialize)]
        struct Wrapper {
            install_command: InstallCommandSpec,
        }

        let single: Wrapper = toml::from_str(r#"install_command = "npm install x@{version}""#).unwrap();
        assert!(matches!(single.install_command, InstallCommandSpec::Single(_)));

        let list: Wrapper =
            toml::from_str(r#"install_command = ["npm install x@{version}", "yarn add x@{version}"]"#)
                .unwrap();
        assert!(matches!(list.install_command, InstallCommandSpec::List(_)));

        let named: Wrapper =
            toml::from_str("[install_command]\n\"Node.js\" = \"npm install x@{version}\"").unwrap();
        assert!(matches!(named.install_command, InstallCommandSpec::Named(_)));
    }
}
