//! Two-stage generation: a haiku from the prompt, then an image from the haiku.

use crate::ai::{
    ChatService, HuggingFaceChatClient, HuggingFaceHttpClient, HuggingFaceImageClient,
    ImageGenerationService,
};
use crate::models::{Config, Generation, Style};
use crate::{Error, Result};
use thiserror::Error as ThisError;
use tracing::{error, info};

/// Which stage of a generation failed.
#[derive(ThisError, Debug)]
pub enum GenerationError {
    #[error("haiku generation failed: {0}")]
    Haiku(#[source] Error),

    #[error("image generation failed: {source}")]
    Image {
        /// The haiku produced before the image stage failed.
        haiku: String,
        #[source]
        source: Error,
    },
}

impl GenerationError {
    pub fn stage(&self) -> &'static str {
        match self {
            GenerationError::Haiku(_) => "haiku",
            GenerationError::Image { .. } => "image",
        }
    }

    pub fn haiku(&self) -> Option<&str> {
        match self {
            GenerationError::Haiku(_) => None,
            GenerationError::Image { haiku, .. } => Some(haiku),
        }
    }
}

/// Runs haiku generation followed by style-conditioned image generation.
pub struct HaikuPipeline {
    chat: Box<dyn ChatService>,
    image_gen: Box<dyn ImageGenerationService>,
}

impl HaikuPipeline {
    /// Build a pipeline from concrete service dependencies.
    ///
    /// Tests and local harnesses use this to inject mocks.
    pub fn with_services(
        chat: Box<dyn ChatService>,
        image_gen: Box<dyn ImageGenerationService>,
    ) -> Self {
        Self { chat, image_gen }
    }

    /// Construct Hugging Face clients from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        // Reuse one HTTP connection pool across both clients.
        let http = HuggingFaceHttpClient::new(config.api_token.clone(), config.request_timeout)?
            .with_base_url(config.base_url.clone());

        info!("Text model: {}", config.text_model);
        info!("Image model: {}", config.image_model);

        Ok(Self::with_services(
            Box::new(HuggingFaceChatClient::new(
                http.clone(),
                config.text_model.clone(),
            )),
            Box::new(HuggingFaceImageClient::new(http, config.image_model.clone())),
        ))
    }

    /// Generate a haiku for `prompt`, then illustrate the haiku in `style`.
    ///
    /// The image stage only runs after the haiku stage succeeds.
    pub async fn run(
        &self,
        prompt: &str,
        style: Style,
    ) -> std::result::Result<Generation, GenerationError> {
        info!("Generating haiku (style: {})", style);

        let haiku = self.chat.generate_haiku(prompt).await.map_err(|e| {
            error!("Haiku generation failed: {}", e);
            GenerationError::Haiku(e)
        })?;

        let image_prompt = style.apply(&haiku);
        info!("Generating image for haiku ({} chars)", image_prompt.len());

        match self.image_gen.generate_image(&image_prompt).await {
            Ok(image) => {
                info!("Generation complete ({} image bytes)", image.len());
                Ok(Generation { haiku, image })
            }
            Err(e) => {
                error!("Image generation failed: {}", e);
                Err(GenerationError::Image { haiku, source: e })
            }
        }
    }
}
