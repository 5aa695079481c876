//! Error types for the relay backend.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("model API key not configured")]
  Unconfigured,

  #[error("request to model API failed: {0}")]
  Http(#[from] reqwest::Error),

  #[error("model API returned {status}: {body}")]
  Api {
    status: reqwest::StatusCode,
    body:   String,
  },

  #[error("model API returned no text content")]
  EmptyReply,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
