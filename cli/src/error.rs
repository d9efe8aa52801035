use changelog::ChangelogError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Changelog error: {0}")]
    Changelog(#[from] ChangelogError),

    #[error("Preview error: {0}")]
    Preview(#[from] preview::PreviewError),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),

    #[error("{0}: {1}")]
    WithContext(String, Box<CliError>),
}

impl CliError {
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Io(err) => format!("I/O operation failed: {err}"),
            Self::Changelog(err) => err.user_message(),
            Self::Preview(err) => err.user_message(),
            Self::Config(err) => format!("Invalid configuration file: {err}"),
            Self::Other(msg) => msg.clone(),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }

    /// Process exit code for this error.
    ///
    /// Read failures exit 2, parse failures 3, template failures 4, preview
    /// server failures 5, everything else 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 2,
            Self::Changelog(err) => changelog_exit_code(err),
            Self::Preview(_) => 5,
            Self::Config(_) => 1,
            Self::Other(_) => 1,
            Self::WithContext(_, err) => err.exit_code(),
        }
    }
}

fn changelog_exit_code(err: &ChangelogError) -> i32 {
    match err {
        ChangelogError::Read(_) => 2,
        ChangelogError::InvalidInput(_) | ChangelogError::Parse(_) => 3,
        ChangelogError::Template(_) | ChangelogError::TemplateNotFound(_) => 4,
        ChangelogError::WithContext(_, inner) => changelog_exit_code(inner),
        _ => 1,
    }
}

pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_distinguish_failure_classes() {
        let read = CliError::Changelog(ChangelogError::Read(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        )));
        assert_eq!(read.exit_code(), 2);

        let parse = CliError::Changelog(ChangelogError::Parse("bad heading".to_string()));
        assert_eq!(parse.exit_code(), 3);

        let template =
            CliError::Changelog(ChangelogError::TemplateNotFound("fancy".to_string()));
        assert_eq!(template.exit_code(), 4);

        let other = CliError::Other("boom".to_string());
        assert_eq!(other.exit_code(), 1);
    }

    #[test]
    fn context_preserves_the_inner_exit_code() {
        let err = CliError::Changelog(ChangelogError::Parse("bad".to_string()))
            .with_context("While generating");
        assert_eq!(err.exit_code(), 3);
        assert!(err.user_message().starts_with("While generating: "));
    }
}
