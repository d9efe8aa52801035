use thiserror::Error;

/// Errors that can occur when parsing or rendering changelogs
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse changelog: {0}")]
    Parse(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Failed to read or write changelog file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("{0}: {1}")]
    WithContext(String, Box<ChangelogError>),
}

impl ChangelogError {
    #[must_use]
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    /// Get a user-friendly message for command line display
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput(msg) => format!("Invalid input: {msg}"),
            Self::Parse(msg) => format!("Failed to parse changelog: {msg}"),
            Self::Template(msg) => format!("Template error: {msg}"),
            Self::TemplateNotFound(name) => {
                format!("Template not found: {name} (available: default, professional)")
            }
            Self::Read(err) => format!("File operation failed: {err}"),
            Self::Config(err) => format!("Invalid configuration: {err}"),
            Self::Regex(err) => format!("Regular expression error: {err}"),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}

/// Type alias for Result with `ChangelogError`
pub type Result<T> = std::result::Result<T, ChangelogError>;
