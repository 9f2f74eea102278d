//! HaiKool - turns a prompt into a haiku and an illustration of it
//!
//! The haiku comes from a hosted chat-completion model, the illustration from a
//! hosted text-to-image model, both on the Hugging Face Inference API. A small
//! web UI drives the two calls.

pub mod ai;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod prompts;
pub mod web;

pub use error::{Error, Result};
