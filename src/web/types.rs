use crate::models::Style;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
    #[serde(default)]
    pub style: Style,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub haiku: String,
    /// Base64 `data:` URL ready for an `<img src>`.
    pub image: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub haiku: Option<String>,
}

impl ApiError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            stage: None,
            haiku: None,
        }
    }
}
