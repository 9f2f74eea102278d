use super::client::HuggingFaceHttpClient;
use super::types::TextToImageRequest;
use crate::ai::ImageGenerationService;
use crate::Result;
use async_trait::async_trait;

pub struct HuggingFaceImageClient {
    http: HuggingFaceHttpClient,
    model: String,
}

impl HuggingFaceImageClient {
    pub fn new(http: HuggingFaceHttpClient, model: String) -> Self {
        Self { http, model }
    }
}

#[async_trait]
impl ImageGenerationService for HuggingFaceImageClient {
    async fn generate_image(&self, prompt: &str) -> Result<Vec<u8>> {
        tracing::debug!("Requesting image from {}", self.model);

        let request = TextToImageRequest {
            inputs: prompt.to_string(),
        };
        let path = format!("/models/{}", self.model);
        let bytes = self.http.post_for_bytes(&path, &request).await?;

        tracing::debug!("Received {} image bytes", bytes.len());
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::time::Duration;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const IMAGE_PATH: &str = "/models/stabilityai/stable-diffusion-xl-base-1.0";

    fn client_for(server: &MockServer) -> HuggingFaceImageClient {
        let http = HuggingFaceHttpClient::new(None, Duration::from_secs(5))
            .unwrap()
            .with_base_url(server.uri());
        HuggingFaceImageClient::new(http, "stabilityai/stable-diffusion-xl-base-1.0".to_string())
    }

    #[tokio::test]
    async fn test_generate_image_returns_raw_bytes() {
        let server = MockServer::start().await;
        let fake_jpeg = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];

        Mock::given(method("POST"))
            .and(path(IMAGE_PATH))
            .and(body_json(serde_json::json!({
                "inputs": "old pond, in Japanese art style"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_raw(fake_jpeg.clone(), "image/jpeg"))
            .expect(1)
            .mount(&server)
            .await;

        let bytes = client_for(&server)
            .generate_image("old pond, in Japanese art style")
            .await
            .unwrap();
        assert_eq!(bytes, fake_jpeg);
    }

    #[tokio::test]
    async fn test_generate_image_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(IMAGE_PATH))
            .respond_with(ResponseTemplate::new(500).set_body_string("server error"))
            .mount(&server)
            .await;

        let err = client_for(&server).generate_image("a pond").await.unwrap_err();
        assert!(matches!(err, Error::AiProvider(_)));
    }
}
