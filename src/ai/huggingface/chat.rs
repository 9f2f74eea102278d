use super::client::HuggingFaceHttpClient;
use super::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::ai::ChatService;
use crate::{prompts, Error, Result};
use async_trait::async_trait;

const MAX_TOKENS: u32 = 30;
const TEMPERATURE: f32 = 0.7;
const TOP_P: f32 = 0.95;

pub struct HuggingFaceChatClient {
    http: HuggingFaceHttpClient,
    model: String,
}

impl HuggingFaceChatClient {
    pub fn new(http: HuggingFaceHttpClient, model: String) -> Self {
        Self { http, model }
    }

    fn build_request(&self, prompt: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(prompts::HAIKU_SYSTEM),
                ChatMessage::user(prompt),
            ],
            max_tokens: MAX_TOKENS,
            stream: false,
            temperature: TEMPERATURE,
            top_p: TOP_P,
        }
    }
}

#[async_trait]
impl ChatService for HuggingFaceChatClient {
    async fn generate_haiku(&self, prompt: &str) -> Result<String> {
        tracing::debug!("Requesting haiku from {}", self.model);

        let request = self.build_request(prompt);
        let path = format!("/models/{}/v1/chat/completions", self.model);
        let response: ChatCompletionResponse = self.http.post_json(&path, &request).await?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .ok_or_else(|| {
                Error::AiProvider("No message content in chat completion response".to_string())
            })
    }
}
