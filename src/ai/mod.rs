//! AI service integration for haiku and image generation
//!
//! Provides interfaces to the Hugging Face Inference API's chat-completion and
//! text-to-image routes, plus in-memory mocks for tests.

pub mod huggingface;
pub mod mime;
pub mod mock;

pub use huggingface::{HuggingFaceChatClient, HuggingFaceHttpClient, HuggingFaceImageClient};
pub use mock::{MockChatClient, MockImageGenerationClient};

use crate::Result;
use async_trait::async_trait;

/// Turns a user prompt into a haiku.
#[async_trait]
pub trait ChatService: Send + Sync {
    /// Returns the generated haiku with surrounding whitespace removed.
    async fn generate_haiku(&self, prompt: &str) -> Result<String>;
}

/// Turns a text prompt into encoded image bytes.
#[async_trait]
pub trait ImageGenerationService: Send + Sync {
    async fn generate_image(&self, prompt: &str) -> Result<Vec<u8>>;
}
