//! Answer generation via the Together inference API.

pub mod client;
pub mod prompt;
pub mod types;

pub use client::{AnswerGenerator, TogetherClient, TogetherError};
