//! Hugging Face Inference API request/response payloads.

use serde::{Deserialize, Serialize};

/// Request body for the OpenAI-compatible chat-completion route.
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub stream: bool,
    pub temperature: f32,
    pub top_p: f32,
}

/// Chat message object.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl ChatMessage {
    pub fn system(content: &str) -> Self {
        Self {
            role: "system".to_string(),
            content: Some(content.to_string()),
        }
    }

    pub fn user(content: &str) -> Self {
        Self {
            role: "user".to_string(),
            content: Some(content.to_string()),
        }
    }
}

/// Top-level chat completion response.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

/// Single choice item returned by chat completions.
#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Request body for the text-to-image task route.
#[derive(Debug, Serialize)]
pub struct TextToImageRequest {
    pub inputs: String,
}

/// Error envelope returned by the Inference API.
#[derive(Debug, Deserialize)]
pub struct InferenceErrorBody {
    pub error: String,
    #[serde(default)]
    pub estimated_time: Option<f64>,
}
