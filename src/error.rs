//! Application error types.
//!
//! The annotator itself cannot fail; these cover loading sheets, configuration
//! and writing output.

use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// IO error; `fs_err` sources already name the file in their message
    #[error("IO error: {source}")]
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

    /// Failed to serialize structured output
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),

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
}

// Convenience conversions
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io { source: e, path: None }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn config_error_includes_hint() {
        let err = Error::config("Unknown format 'pdf'", "Use one of: html, json, sections, chords");
        let message = err.to_string();
        assert!(message.contains("pdf"));
        assert!(message.contains("html, json"));
    }

    #[test]
    fn io_error_keeps_path() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        match Error::io(source, std::path::PathBuf::from("song.txt")) {
            Error::Io { path: Some(p), .. } => assert_eq!(p, std::path::PathBuf::from("song.txt")),
            _ => panic!("Expected Io error with path"),
        }
    }
}
