//! LLM module for meetnotes
//!
//! Defines the completion capability used by the AI analysis path and the
//! OpenAI-backed implementation of it.

mod client;
mod openai;
mod prompts;

pub use client::{build_provider, CompletionError, CompletionProvider, CompletionRequest};
pub use openai::OpenAiClient;
pub use prompts::{build_analysis_prompt, ANALYSIS_SYSTEM_PROMPT};
