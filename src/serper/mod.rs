//! Web search via the Serper Google Search API.

pub mod client;
pub mod types;

pub use client::{SearchClient, SerperClient, SerperError};
pub use types::SearchResult;
