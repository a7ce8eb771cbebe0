//! Chat-completion client for the symptom API.
//!
//! - [`GrokClient`] — Sends one system + user exchange to an OpenAI-compatible
//!   chat-completion endpoint and returns the first choice's content
//! - [`prompts`] — The fixed system prompt and the user prompt template
//!
//! # Example
//!
//! ```rust,ignore
//! use symptom_config::AppConfig;
//! use symptom_llm::{prompts, GrokClient};
//!
//! let config = AppConfig::from_env();
//! let client = GrokClient::new(&config, config.api_key.clone().unwrap());
//! let response = client
//!     .complete(prompts::SYSTEM_PROMPT, &prompts::user_prompt("sore throat"))
//!     .await?;
//! println!("{}", response.content);
//! ```

mod client;
pub mod prompts;

pub use client::{GrokClient, LlmMetrics, LlmResponse, MAX_TOKENS, TEMPERATURE};
