pub mod chat;
pub mod client;
pub mod image;
pub mod types;

pub use chat::HuggingFaceChatClient;
pub use client::HuggingFaceHttpClient;
pub use image::HuggingFaceImageClient;
