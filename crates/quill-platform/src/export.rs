//! Writes exported replies to plain-text files.

use std::path::PathBuf;

use quill_common::{Exporter, PlatformError};
use tracing::info;

/// [`Exporter`] that saves into a fixed directory, creating it on demand.
#[derive(Debug, Clone)]
pub struct FileExporter {
    dir: PathBuf,
}

impl FileExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Exporter for FileExporter {
    fn save(&self, file_name: &str, content: &str) -> Result<String, PlatformError> {
        if file_name.is_empty()
            || file_name.contains(['/', '\\'])
            || file_name == "."
            || file_name == ".."
        {
            return Err(PlatformError::ExportError(format!(
                "invalid file name {file_name:?}"
            )));
        }

        std::fs::create_dir_all(&self.dir).map_err(|e| {
            PlatformError::ExportError(format!("failed to create {}: {e}", self.dir.display()))
        })?;

        let path = self.dir.join(file_name);
        std::fs::write(&path, content).map_err(|e| {
            PlatformError::ExportError(format!("failed to write {}: {e}", path.display()))
        })?;

        info!(path = %path.display(), bytes = content.len(), "exported reply");
        Ok(path.display().to_string())
    }
}
