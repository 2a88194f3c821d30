//! Editing service client struct, reply parsing, and the health check.

use serde_json::Value;
use tracing::debug;

use crate::{EditAnalysis, EditReply, MetricScores, ServiceError, TokenUsage, Violation};

use super::config::EditorConfig;

/// Longest error body kept in a [`ServiceError::Service`].
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Editing service client.
pub struct EditorClient {
    pub(crate) config: EditorConfig,
    pub(crate) http: reqwest::Client,
}

/// What the service reports about itself on `GET /`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceStatus {
    pub message: Option<String>,
    pub status: Option<String>,
    pub version: Option<String>,
}

impl EditorClient {
    /// Build a client. Only the connect phase has a timeout; an accepted
    /// request may take as long as the service needs.
    pub fn new(config: EditorConfig) -> Result<Self, ServiceError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| ServiceError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    /// Check `GET /`. Any success status counts as online. Unlike edit
    /// requests, the check gives up after `health_timeout`.
    pub async fn health(&self) -> Result<ServiceStatus, ServiceError> {
        let url = self.config.endpoint("");
        debug!(%url, "health check");

        let response = self
            .http
            .get(&url)
            .timeout(self.config.health_timeout)
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        let json = read_json(response).await?;
        let field = |name: &str| json[name].as_str().map(String::from);
        Ok(ServiceStatus {
            message: field("message"),
            status: field("status"),
            version: field("version"),
        })
    }
}

/// Fail on non-success status, otherwise decode the body as JSON.
pub(crate) async fn read_json(response: reqwest::Response) -> Result<Value, ServiceError> {
    let status = response.status();
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        return Err(ServiceError::Service {
            status: status.as_u16(),
            body: text.chars().take(MAX_ERROR_BODY_CHARS).collect(),
        });
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| ServiceError::Network(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| ServiceError::MalformedResponse(e.to_string()))
}

/// Turn a reply body into an [`EditReply`].
///
/// Only `manuscript` is required. The other fields are read leniently: a
/// field of the wrong shape is treated as absent.
pub(crate) fn parse_reply(json: &Value) -> Result<EditReply, ServiceError> {
    if !json.is_object() {
        return Err(ServiceError::MalformedResponse(
            "reply is not a JSON object".into(),
        ));
    }

    let manuscript = json["manuscript"]
        .as_str()
        .map(String::from)
        .ok_or_else(|| ServiceError::MalformedResponse("no 'manuscript' field in reply".into()))?;

    Ok(EditReply {
        manuscript,
        token_usage: parse_usage(&json["token_usage"]),
        analysis: parse_analysis(json),
        status: json["status"].as_str().map(String::from),
        original_text: json["original_text"].as_str().map(String::from),
    })
}

fn parse_usage(value: &Value) -> Option<TokenUsage> {
    let obj = value.as_object()?;
    let count = |name: &str| obj.get(name).and_then(Value::as_u64);
    Some(TokenUsage {
        input_tokens: count("input_tokens"),
        output_tokens: count("output_tokens"),
        total_tokens: count("total_tokens"),
    })
}

fn parse_analysis(json: &Value) -> Option<EditAnalysis> {
    let editor_notes = json["editor_notes"]
        .as_array()
        .map(|notes| {
            notes
                .iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    let metric_scores = json["metric_scores"].as_object().and_then(|scores| {
        let score = |name: &str| scores.get(name).and_then(Value::as_f64);
        let parsed = MetricScores {
            strictness: score("strictness"),
            majesty: score("majesty"),
            superiority: score("superiority"),
        };
        (parsed != MetricScores::default()).then_some(parsed)
    });

    let violations = json["violations"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|v| serde_json::from_value::<Violation>(v.clone()).ok())
                .collect()
        })
        .unwrap_or_default();

    let analysis = EditAnalysis {
        editor_notes,
        metric_scores,
        violations,
    };
    (!analysis.is_empty()).then_some(analysis)
}

/// MIME type for an upload, guessed from its extension.
pub(crate) fn mime_for(extension: Option<&str>) -> &'static str {
    match extension {
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        Some("doc") => "application/msword",
        Some("txt") => "text/plain",
        Some("md") => "text/markdown",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}
