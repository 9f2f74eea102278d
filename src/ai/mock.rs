use super::{ChatService, ImageGenerationService};
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Tiny valid 1x1 PNG returned when no image response is configured.
pub const MOCK_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, // PNG signature
    0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52, // IHDR chunk
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, // 1x1 pixel
    0x08, 0x02, 0x00, 0x00, 0x00, 0x90, 0x77, 0x53, 0xDE, 0x00, 0x00, 0x00, 0x0C, 0x49, 0x44,
    0x41, // IDAT chunk
    0x54, 0x08, 0x99, 0x63, 0xF8, 0xCF, 0xC0, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0xE2, 0x25,
    0x00, 0xBC, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, // IEND chunk
    0x44, 0xAE, 0x42, 0x60, 0x82,
];

#[derive(Clone, Default)]
pub struct MockChatClient {
    responses: Arc<Mutex<Vec<String>>>,
    failure: Arc<Mutex<Option<String>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockChatClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw model reply. Replies cycle when exhausted.
    pub fn with_haiku_response(self, response: String) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    /// Make every call fail with an `AiProvider` error.
    pub fn with_failure(self, message: String) -> Self {
        *self.failure.lock().unwrap() = Some(message);
        self
    }

    pub fn get_call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn received_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatService for MockChatClient {
    async fn generate_haiku(&self, prompt: &str) -> Result<String> {
        let call = {
            let mut prompts = self.prompts.lock().unwrap();
            prompts.push(prompt.to_string());
            prompts.len()
        };

        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(Error::AiProvider(message));
        }

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok(format!("{} drifts\nquiet mock syllables\nfall like rain", prompt))
        } else {
            Ok(responses[(call - 1) % responses.len()].trim().to_string())
        }
    }
}

#[derive(Clone, Default)]
pub struct MockImageGenerationClient {
    responses: Arc<Mutex<Vec<Vec<u8>>>>,
    failure: Arc<Mutex<Option<String>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockImageGenerationClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image_response(self, response: Vec<u8>) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    pub fn with_failure(self, message: String) -> Self {
        *self.failure.lock().unwrap() = Some(message);
        self
    }

    pub fn get_call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn received_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageGenerationService for MockImageGenerationClient {
    async fn generate_image(&self, prompt: &str) -> Result<Vec<u8>> {
        let call = {
            let mut prompts = self.prompts.lock().unwrap();
            prompts.push(prompt.to_string());
            prompts.len()
        };

        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(Error::AiProvider(message));
        }

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok(MOCK_PNG.to_vec())
        } else {
            Ok(responses[(call - 1) % responses.len()].clone())
        }
    }
}
