//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{Error, Result};

/// Hint shown when an output format name is not recognized.
const FORMAT_HINT: &str = "Use one of: html, json, sections, chords";

/// What the command-line tool writes to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Annotated markup, one container per line.
    #[default]
    Html,
    /// Annotated lines as JSON.
    Json,
    /// Annotated lines grouped by section, as JSON.
    Sections,
    /// Distinct chords used, one per line.
    Chords,
}

impl OutputFormat {
    /// Returns the name used on the command line and in `CHORDSHEET_FORMAT`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Json => "json",
            Self::Sections => "sections",
            Self::Chords => "chords",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            "sections" => Ok(Self::Sections),
            "chords" => Ok(Self::Chords),
            other => Err(Error::config(format!("Unknown output format '{other}'"), FORMAT_HINT)),
        }
    }
}

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Default output format
    pub format: OutputFormat,
    /// Directory that relative sheet paths are resolved against
    pub sheets_dir: Option<PathBuf>,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            format: OutputFormat::default(),
            sheets_dir: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        if let Ok(format) = env::var("CHORDSHEET_FORMAT") {
            config.format = format.parse()?;
        }

        config.sheets_dir = env::var("CHORDSHEET_SHEETS_DIR")
            .ok()
            .map(|path| PathBuf::from(shellexpand::tilde(&path).to_string()))
            .filter(|p| p.is_dir());

        tracing::debug!("Loaded config: format={}, sheets_dir={:?}", config.format, config.sheets_dir);

        Ok(config)
    }

    /// Resolve a sheet path given on the command line.
    ///
    /// Relative paths are joined onto `sheets_dir` when one is configured.
    pub fn resolve_sheet_path(&self, path: &Path) -> PathBuf {
        match &self.sheets_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }
}
