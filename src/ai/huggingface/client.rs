use super::types::InferenceErrorBody;
use crate::models::DEFAULT_BASE_URL;
use crate::{Error, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Thin REST client for the Hugging Face Inference API.
///
/// One instance is shared by the chat and image clients so both reuse a
/// single connection pool.
#[derive(Clone)]
pub struct HuggingFaceHttpClient {
    pub(crate) client: Client,
    api_token: Option<String>,
    pub(crate) base_url: String,
}

impl HuggingFaceHttpClient {
    pub fn new(api_token: Option<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::new_with_client(api_token, client))
    }

    pub fn new_with_client(api_token: Option<String>, client: Client) -> Self {
        Self {
            client,
            api_token,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn post(&self, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        // Block on cold models instead of receiving 503 "model is loading".
        let request = self.client.post(url).header("x-wait-for-model", "true");
        match &self.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send<Req: Serialize>(&self, path: &str, request: &Req) -> Result<Response> {
        let response = self
            .post(path)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to Hugging Face: {}", e);
                e
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            tracing::error!(
                "Hugging Face API error (status {}): {}",
                status,
                error_text
            );
            return Err(api_error(status, &error_text));
        }

        Ok(response)
    }

    /// POST a JSON body and decode a JSON response.
    pub async fn post_json<Req: Serialize, Resp: DeserializeOwned>(
        &self,
        path: &str,
        request: &Req,
    ) -> Result<Resp> {
        let response = self.send(path, request).await?;

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse Hugging Face response: {}\nBody: {}", e, body);
            Error::AiProvider(format!("Failed to parse Hugging Face response: {}", e))
        })
    }

    /// POST a JSON body and return the raw binary response.
    pub async fn post_for_bytes<Req: Serialize>(&self, path: &str, request: &Req) -> Result<Vec<u8>> {
        let response = self.send(path, request).await?;

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/json"));

        let status = response.status();
        let bytes = response.bytes().await?;

        if is_json {
            let text = String::from_utf8_lossy(&bytes);
            tracing::error!("Hugging Face returned JSON instead of binary: {}", text);
            return Err(api_error(status, &text));
        }
        if bytes.is_empty() {
            return Err(Error::AiProvider(
                "Hugging Face returned an empty body".to_string(),
            ));
        }

        Ok(bytes.to_vec())
    }
}

fn api_error(status: StatusCode, body: &str) -> Error {
    let detail = match serde_json::from_str::<InferenceErrorBody>(body) {
        Ok(parsed) => match parsed.estimated_time {
            Some(eta) => format!("{} (estimated time {:.0}s)", parsed.error, eta),
            None => parsed.error,
        },
        Err(_) => body.to_string(),
    };
    Error::AiProvider(format!(
        "Hugging Face API error (status {}): {}",
        status, detail
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, header_exists, method, path};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    fn client_for(server: &MockServer, token: Option<&str>) -> HuggingFaceHttpClient {
        HuggingFaceHttpClient::new(token.map(str::to_string), Duration::from_secs(5))
            .unwrap()
            .with_base_url(server.uri())
    }

    #[tokio::test]
    async fn test_sends_bearer_and_wait_headers() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/models/a/b"))
            .and(header("Authorization", "Bearer hf_test"))
            .and(header("x-wait-for-model", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
            .expect(1)
            .mount(&server)
            .await;

        let value: serde_json::Value = client_for(&server, Some("hf_test"))
            .post_json("/models/a/b", &json!({ "inputs": "x" }))
            .await
            .unwrap();
        assert_eq!(value["ok"], true);
    }

    #[tokio::test]
    async fn test_omits_authorization_without_token() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(header_exists("Authorization"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let result: Result<serde_json::Value> = client_for(&server, None)
            .post_json("/models/m", &json!({}))
            .await;
        assert!(result.is_ok());

        let requests: Vec<Request> = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].headers.get("authorization").is_none());
    }

    #[tokio::test]
    async fn test_error_body_message_is_extracted() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_json(json!({
                "error": "Model is currently loading",
                "estimated_time": 42.0
            })))
            .mount(&server)
            .await;

        let err = client_for(&server, None)
            .post_for_bytes("/models/m", &json!({}))
            .await
            .unwrap_err();

        match err {
            Error::AiProvider(message) => {
                assert!(message.contains("503"));
                assert!(message.contains("Model is currently loading"));
                assert!(message.contains("42s"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_json_success_body_is_not_an_image() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "error": "bad inputs" })),
            )
            .mount(&server)
            .await;

        let err = client_for(&server, None)
            .post_for_bytes("/models/m", &json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::AiProvider(ref m) if m.contains("bad inputs")));
    }

    #[tokio::test]
    async fn test_empty_binary_body_is_rejected() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(Vec::new(), "image/png"))
            .mount(&server)
            .await;

        let err = client_for(&server, None)
            .post_for_bytes("/models/m", &json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::AiProvider(_)));
    }

    #[tokio::test]
    async fn test_unparseable_json_is_provider_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let result: Result<serde_json::Value> = client_for(&server, None)
            .post_json("/models/m", &json!({}))
            .await;
        assert!(matches!(result, Err(Error::AiProvider(_))));
    }
}
