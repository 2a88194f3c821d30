//! Reads a user-selected file into an [`UploadFile`].
//!
//! Every call reads the file again, so picking the same path twice submits
//! the current contents twice.

use std::path::{Path, PathBuf};

use quill_common::{PlatformError, UploadFile};

/// File types the editing service expects. Advisory only: nothing here
/// refuses other files.
pub const ACCEPT_HINT: &[&str] = &["docx"];

/// Whether `file` matches [`ACCEPT_HINT`].
pub fn matches_accept_hint(file: &UploadFile) -> bool {
    file.extension()
        .is_some_and(|ext| ACCEPT_HINT.contains(&ext.as_str()))
}

/// Expand a leading `~/` to the home directory.
fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// Read the file at `path`. The upload name is the final path component.
pub fn read_upload(path: &str) -> Result<UploadFile, PlatformError> {
    let expanded = expand_home(path.trim());
    read_upload_path(&expanded)
}

fn read_upload_path(path: &Path) -> Result<UploadFile, PlatformError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| PlatformError::FileReadError(format!("{}: {e}", path.display())))?;
    if !metadata.is_file() {
        return Err(PlatformError::FileReadError(format!(
            "{}: not a regular file",
            path.display()
        )));
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| PlatformError::FileReadError(format!("{}: no file name", path.display())))?;

    let bytes = std::fs::read(path)
        .map_err(|e| PlatformError::FileReadError(format!("{}: {e}", path.display())))?;

    Ok(UploadFile { name, bytes })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_name_and_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.docx");
        std::fs::write(&path, b"PK\x03\x04fake").unwrap();

        let file = read_upload(path.to_str().unwrap()).unwrap();
        assert_eq!(file.name, "report.docx");
        assert_eq!(file.bytes, b"PK\x03\x04fake");
        assert!(matches_accept_hint(&file));
    }

    #[test]
    fn rereading_sees_new_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "one").unwrap();
        let first = read_upload(path.to_str().unwrap()).unwrap();
        std::fs::write(&path, "two").unwrap();
        let second = read_upload(path.to_str().unwrap()).unwrap();

        assert_eq!(first.bytes, b"one");
        assert_eq!(second.bytes, b"two");
        assert!(!matches_accept_hint(&second));
    }

    #[test]
    fn directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_upload(dir.path().to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("not a regular file"));
    }

    #[test]
    fn missing_file_is_rejected() {
        let err = read_upload("/tmp/quill_missing_upload.docx").unwrap_err();
        assert!(matches!(err, PlatformError::FileReadError(_)));
    }
}
