pub mod client;

pub use client::{CompletionService, LLMClient};
