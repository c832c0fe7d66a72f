//! Application error types.
//!
//! Structural edits never fail: stale offsets and unsupported languages degrade
//! to no-ops or fallbacks. The variants here cover the few conditions that do
//! surface to a caller, most importantly stored content that cannot be trusted.

use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<std::path::PathBuf>,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// Stored song content is structurally invalid.
    ///
    /// Distinct from "not found": the document exists but cannot be loaded.
    #[error("Corrupt song content: {message}")]
    CorruptContent {
        /// What was wrong with the content.
        message: String,
    },

    /// Generic message error (escape hatch)
    #[error("{0}")]
    Msg(String),
}

impl Error {
    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Create a corrupt-content error
    pub fn corrupt(message: impl Into<String>) -> Self {
        Self::CorruptContent { message: message.into() }
    }

    /// Whether this error marks a stored document as unreadable.
    pub const fn is_corrupt_content(&self) -> bool {
        matches!(self, Self::CorruptContent { .. })
    }
}

// Convenience conversions
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io { source: e, path: None }
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::Msg(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::Msg(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn config_error_includes_hint() {
        let err = Error::config("Unsupported language 'xx'", "Use one of: pl, en");
        assert_eq!(
            err.to_string(),
            "Configuration error: Unsupported language 'xx'. Use one of: pl, en"
        );
    }

    #[test]
    fn corrupt_content_is_distinguishable() {
        assert!(Error::corrupt("root is not an array").is_corrupt_content());
        assert!(!Error::from("plain").is_corrupt_content());
    }

    #[test]
    fn io_error_keeps_path() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        match Error::io(source, Some(std::path::PathBuf::from("song.json"))) {
            Error::Io { path: Some(p), .. } => assert_eq!(p, std::path::PathBuf::from("song.json")),
            other => panic!("Expected Io error with path, got {other:?}"),
        }
    }
}
