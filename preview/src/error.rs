use std::io;

use thiserror::Error;

/// Errors raised while starting or running the preview server.
#[derive(Error, Debug)]
pub enum PreviewError {
    #[error("Failed to bind {0}: {1}")]
    Bind(String, #[source] io::Error),

    #[error("File watcher error: {0}")]
    Watch(#[from] notify::Error),

    #[error(transparent)]
    Changelog(#[from] changelog::ChangelogError),

    #[error("Server error: {0}")]
    Serve(#[source] io::Error),
}

impl PreviewError {
    /// Human-readable message for terminal output.
    pub fn user_message(&self) -> String {
        match self {
            Self::Bind(addr, err) => {
                format!("Could not bind to {addr}: {err}. Is the port already in use?")
            }
            Self::Watch(err) => format!("Could not watch the changelog file: {err}"),
            Self::Changelog(err) => err.user_message(),
            Self::Serve(err) => format!("Preview server stopped unexpectedly: {err}"),
        }
    }
}

pub type Result<T> = std::result::Result<T, PreviewError>;
