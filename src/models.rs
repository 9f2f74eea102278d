//! Data models and structures
//!
//! Defines the image style selector, the result of one generation, and the
//! environment-backed configuration for the hosted inference services.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

pub const DEFAULT_TEXT_MODEL: &str = "HuggingFaceH4/zephyr-7b-beta";
pub const DEFAULT_IMAGE_MODEL: &str = "stabilityai/stable-diffusion-xl-base-1.0";
pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Visual style appended to the image prompt.
///
/// Parsing never fails: labels other than `"Japanese"` and `"oil painting"`
/// select [`Style::Default`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Style {
    #[default]
    Default,
    Japanese,
    OilPainting,
}

impl Style {
    pub const ALL: [Style; 3] = [Style::Default, Style::Japanese, Style::OilPainting];

    /// Label shown in the style dropdown.
    pub fn label(self) -> &'static str {
        match self {
            Style::Default => "default",
            Style::Japanese => "Japanese",
            Style::OilPainting => "oil painting",
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Style::Default => "",
            Style::Japanese => ", in Japanese art style",
            Style::OilPainting => ", in the style of an oil painting",
        }
    }

    /// Returns `prompt` with this style's suffix appended.
    pub fn apply(self, prompt: &str) -> String {
        format!("{}{}", prompt, self.suffix())
    }
}

impl From<&str> for Style {
    fn from(label: &str) -> Self {
        match label {
            "Japanese" => Style::Japanese,
            "oil painting" => Style::OilPainting,
            _ => Style::Default,
        }
    }
}

impl From<String> for Style {
    fn from(label: String) -> Self {
        Style::from(label.as_str())
    }
}

impl From<Style> for String {
    fn from(style: Style) -> Self {
        style.label().to_string()
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Output of one successful haiku-then-image run.
#[derive(Debug, Clone)]
pub struct Generation {
    pub haiku: String,
    pub image: Vec<u8>,
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub api_token: Option<String>,
    pub text_model: String,
    pub image_model: String,
    pub base_url: String,
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from the process environment, honoring `.env`.
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> crate::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_token = non_empty("HUGGINGFACE_API_TOKEN");
        if api_token.is_none() {
            tracing::warn!("HUGGINGFACE_API_TOKEN not set, requests will be unauthenticated");
        }

        let request_timeout = match non_empty("HF_REQUEST_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(crate::Error::Config(format!(
                        "HF_REQUEST_TIMEOUT_SECS must be a positive integer, got '{}'",
                        raw
                    )))
                }
            },
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        Ok(Self {
            api_token,
            text_model: non_empty("HF_TEXT_MODEL").unwrap_or_else(|| DEFAULT_TEXT_MODEL.to_string()),
            image_model: non_empty("HF_IMAGE_MODEL")
                .unwrap_or_else(|| DEFAULT_IMAGE_MODEL.to_string()),
            base_url: non_empty("HF_INFERENCE_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            request_timeout,
        })
    }
}
