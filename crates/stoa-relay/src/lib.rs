//! Anthropic Messages API backend for the chat relay.
//!
//! Wraps [`reqwest`] behind the [`ChatRelay`](stoa_core::relay::ChatRelay)
//! trait: transcript in, one persona reply out. No retries, no streaming.

mod anthropic;
pub mod error;

pub use anthropic::{
  AnthropicRelay, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
  PERSONA_PROMPT, RelayConfig,
};
pub use error::Error;
