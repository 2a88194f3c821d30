//! Single-session management.
//!
//! A `SessionController` owns the transcript, the compose buffer, and the
//! busy flag. It drives text submissions and uploads against an
//! [`EditingService`](crate::EditingService) and routes clipboard, export,
//! and reset intents through injected ports.

mod intents;
mod manager;
mod orchestrator;
mod types;


pub use manager::SessionController;
pub use types::{
    ClipboardOutcome, ExportOutcome, RejectReason, ResetOutcome, SessionSettings,
    SessionSnapshot, SubmitOutcome,
};
