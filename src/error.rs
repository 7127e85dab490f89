// Error types for the library surface. Binaries wrap these in
// `anyhow::Error` through `?`, so the messages here are what the user
// sees after `Error:` on stderr.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Message shown when no component name reaches the generator.
pub const MISSING_NAME: &str = "Please provide a name for the component.";

#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The component name was missing or empty.
    #[error("{}", MISSING_NAME)]
    InvalidInput,

    /// A directory or file operation failed. Carries the path so the
    /// user can tell which of the steps broke.
    #[error("failed to {action} {}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Progress lines could not be written to the console.
    #[error("failed to print progress")]
    Report(#[source] io::Error),
}

impl ScaffoldError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        ScaffoldError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_uses_fixed_message() {
        assert_eq!(
            ScaffoldError::InvalidInput.to_string(),
            "Please provide a name for the component."
        );
    }

    #[test]
    fn io_error_names_the_path() {
        let err = ScaffoldError::io(
            "write",
            "Card/Card.tsx",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "failed to write Card/Card.tsx");
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("denied"));
    }
}
