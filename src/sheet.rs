//! Loading chord sheet text from disk or stdin.

use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};

/// Read a sheet file, normalizing Windows line endings.
pub fn load_sheet(path: &Path) -> Result<String> {
    let text = fs_err::read_to_string(path).map_err(|e| Error::io(e, path.to_path_buf()))?;
    tracing::info!("Loaded sheet {} ({} bytes)", path.display(), text.len());
    Ok(normalize_line_endings(text))
}

/// Read a sheet from stdin.
pub fn read_stdin() -> Result<String> {
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    tracing::info!("Read sheet from stdin ({} bytes)", text.len());
    Ok(normalize_line_endings(text))
}

/// Turn `\r\n` into `\n` so raw lines carry no stray carriage returns.
fn normalize_line_endings(text: String) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n")
    } else {
        text
    }
}
