pub mod clipboard;
pub mod export;
pub mod paths;
pub mod picker;

pub use clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
pub use export::FileExporter;
pub use paths::default_export_dir;
pub use picker::{matches_accept_hint, read_upload, ACCEPT_HINT};
