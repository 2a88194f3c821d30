//! HTTP client for the editing service.
//!
//! `POST /chat` takes `{"message": ...}` as JSON, `POST /upload` takes a
//! multipart form with a single `file` part. Both answer with the same
//! reply object; `GET /` is a health check.

mod api;
mod config;
mod editor;


pub use config::EditorConfig;
pub use editor::{EditorClient, ServiceStatus};
