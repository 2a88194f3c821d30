use std::path::PathBuf;

/// Problems reading or writing `config.toml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    /// Unreadable file, bad TOML, or no usable config directory.
    #[error("config parse error: {0}")]
    ParseError(String),

    /// Every failed check, joined with `; `.
    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures of the host side effects behind the session ports.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("clipboard error: {0}")]
    ClipboardError(String),

    #[error("path error: {0}")]
    PathError(String),

    #[error("export error: {0}")]
    ExportError(String),

    /// Reading a file picked for upload.
    #[error("file read error: {0}")]
    FileReadError(String),
}

/// Startup failures of the `quill` binary.
#[derive(Debug, thiserror::Error)]
pub enum QuillError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The editing service client could not be set up.
    #[error("service setup failed: {0}")]
    Service(String),
}
