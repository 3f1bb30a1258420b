//! Structured error types for the triage engine.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
  /// Input contract violation; `index` is the record's position in the batch.
  #[error("validation: record[{index}].{field}: {reason}")]
  Validation {
    index: usize,
    field: String,
    reason: String,
  },

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),

  #[error("config: {0}")]
  Config(String),
}

impl EngineError {
  pub fn validation(index: usize, field: &str, reason: &str) -> Self {
    Self::Validation {
      index,
      field: field.to_string(),
      reason: reason.to_string(),
    }
  }

  pub fn config(msg: impl Into<String>) -> Self {
    Self::Config(msg.into())
  }
}
