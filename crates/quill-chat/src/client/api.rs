//! EditingService trait implementation for EditorClient.

use async_trait::async_trait;
use quill_common::UploadFile;
use tracing::debug;

use crate::{EditReply, EditingService, ServiceError};

use super::editor::{mime_for, parse_reply, read_json, EditorClient};

#[async_trait]
impl EditingService for EditorClient {
    async fn submit_text(&self, text: &str) -> Result<EditReply, ServiceError> {
        let url = self.config.endpoint("chat");
        debug!(%url, chars = text.chars().count(), "chat request");

        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "message": text }))
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        let json = read_json(response).await?;
        parse_reply(&json)
    }

    async fn submit_file(&self, file: &UploadFile) -> Result<EditReply, ServiceError> {
        let url = self.config.endpoint("upload");
        let extension = file.extension();
        let mime = mime_for(extension.as_deref());
        debug!(%url, name = %file.name, size = file.bytes.len(), mime, "upload request");

        let part = reqwest::multipart::Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(mime)
            .map_err(|e| ServiceError::Network(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        let json = read_json(response).await?;
        parse_reply(&json)
    }
}
