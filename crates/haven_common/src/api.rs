//! Request and response bodies for the HTTP API.
//!
//! Request fields are optional and loosely typed on purpose: the schema
//! accepts any JSON so that shape problems surface as typed
//! [`ClassifyError`](crate::ClassifyError)s instead of parse failures.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Service name reported by the health endpoint
pub const SERVICE_NAME: &str = "hostelhaven-ai";

/// A value supplied where a text is expected
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextInput {
    Text(String),
    /// Anything that is not a JSON string
    Other(Value),
}

impl TextInput {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TextInput::Text(text) => Some(text),
            TextInput::Other(_) => None,
        }
    }
}

impl From<&str> for TextInput {
    fn from(text: &str) -> Self {
        TextInput::Text(text.to_string())
    }
}

/// The `texts` field of a batch request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BatchTexts {
    List(Vec<TextInput>),
    /// Anything that is not a JSON array
    Other(Value),
}

impl BatchTexts {
    pub fn from_strs(texts: &[&str]) -> Self {
        BatchTexts::List(texts.iter().map(|text| TextInput::from(*text)).collect())
    }
}

/// POST /analyze body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// `null` deserializes to `None` and counts as missing
    #[serde(default)]
    pub text: Option<TextInput>,
}

/// POST /batch-analyze body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchAnalyzeRequest {
    #[serde(default)]
    pub texts: Option<BatchTexts>,
}

/// GET /health response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

impl HealthResponse {
    pub fn healthy(version: &str) -> Self {
        Self {
            status: "healthy".to_string(),
            service: SERVICE_NAME.to_string(),
            version: version.to_string(),
        }
    }
}

/// Body of every error response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    /// Detail for internal errors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}
