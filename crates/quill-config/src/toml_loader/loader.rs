use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use quill_common::ConfigError;
use tracing::{debug, info, warn};

use crate::schema::QuillConfig;
use crate::validation;

use super::template::default_config_toml;

/// `<config dir>/quill/config.toml`, e.g. `~/.config/quill/config.toml` on
/// Linux.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("quill").join("config.toml"))
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))
}

/// Parse TOML text. Absent sections and keys keep their defaults.
pub fn parse_config(content: &str) -> Result<QuillConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Read and parse `path`.
///
/// Out-of-range values are reported with `warn!` but kept, so a typo in one
/// key does not throw away the rest of the file.
pub fn load_from_path(path: &Path) -> Result<QuillConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()))
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "failed to read {}: {e}",
                path.display()
            )))
        }
    };

    let config = parse_config(&content).map_err(|e| match e {
        ConfigError::ParseError(msg) => ConfigError::ParseError(format!("{}: {msg}", path.display())),
        other => other,
    })?;

    if let Err(e) = validation::validate(&config) {
        warn!(path = %path.display(), "{e}");
    }
    debug!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Load `path`, writing the default file first if there is none.
pub fn load_or_create(path: &Path) -> Result<QuillConfig, ConfigError> {
    match load_from_path(path) {
        Err(ConfigError::FileNotFound(_)) => {
            write_default_config(path)?;
            Ok(QuillConfig::default())
        }
        other => other,
    }
}

/// [`load_or_create`] at [`default_config_path`].
pub fn load_default() -> Result<QuillConfig, ConfigError> {
    load_or_create(&default_config_path()?)
}

/// Write the commented default config to `path`, creating parent
/// directories. An existing file is left untouched.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_err =
        |e: std::io::Error| ConfigError::ParseError(format!("failed to write {}: {e}", path.display()));

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    let mut file = match std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
    {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(()),
        Err(e) => return Err(write_err(e)),
    };
    file.write_all(default_config_toml().as_bytes())
        .map_err(write_err)?;

    info!(path = %path.display(), "wrote default config");
    Ok(())
}
