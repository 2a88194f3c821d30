use std::path::PathBuf;

use quill_common::PlatformError;

/// Returns the directory exported replies land in when none is configured.
///
/// The user's download directory when the platform has one, otherwise the
/// current working directory.
pub fn default_export_dir() -> Result<PathBuf, PlatformError> {
    if let Some(dir) = dirs::download_dir() {
        return Ok(dir);
    }
    std::env::current_dir()
        .map_err(|e| PlatformError::PathError(format!("could not determine export directory: {e}")))
}
