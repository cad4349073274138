//! # KGB LLM
//!
//! Chat completions via a local Ollama server.

pub mod ollama;

pub use ollama::OllamaChat;
