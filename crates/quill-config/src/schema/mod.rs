//! Configuration schema types for Quill.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod export;
mod service;
mod session;
mod system;

pub use export::*;
pub use service::*;
pub use session::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Quill.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct QuillConfig {
    pub service: ServiceConfig,
    pub session: SessionConfig,
    pub export: ExportConfig,
    pub logging: LoggingConfig,
}
