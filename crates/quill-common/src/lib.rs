//! Types shared by every Quill crate: errors, ids, and the ports a session
//! uses to reach its host.

pub mod errors;
pub mod id;
pub mod ports;

pub use errors::{ConfigError, PlatformError, QuillError};
pub use id::{new_correlation_id, MessageId, SessionId};
pub use ports::{ClipboardPort, ConfirmPrompt, Exporter, UploadFile};

pub type Result<T> = std::result::Result<T, QuillError>;
