//! Engine configuration with sane defaults.

use std::path::Path;

use serde::Deserialize;

use crate::error::EngineError;

/// Tunable knobs for relation finding and execution. Defaults reproduce the
/// documented behavior exactly.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
  /// Message token-overlap ratio above which two errors are related (strict `>`).
  pub similarity_threshold: f64,
  /// Minimum token length (chars) counted by the similarity rule.
  pub min_token_chars: usize,
  /// Analyze records on the rayon pool. Output is identical either way.
  pub parallel: bool,
  /// Cap on each related-errors list (first N in batch order).
  pub max_related: Option<usize>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      similarity_threshold: 0.5,
      min_token_chars: 4,
      parallel: true,
      max_related: None,
    }
  }
}

impl Config {
  pub fn from_toml_str(raw: &str) -> Result<Self, EngineError> {
    let config: Config = toml::from_str(raw).map_err(|e| EngineError::config(e.to_string()))?;
    if !(0.0..=1.0).contains(&config.similarity_threshold) {
      return Err(EngineError::config(format!(
        "similarity_threshold must be within 0..=1, got {}",
        config.similarity_threshold
      )));
    }
    Ok(config)
  }

  pub fn load(path: &Path) -> Result<Self, EngineError> {
    let raw = std::fs::read_to_string(path)
      .map_err(|e| EngineError::config(format!("{}: {}", path.display(), e)))?;
    Self::from_toml_str(&raw)
  }
}
