//! Find other errors in the same batch that likely share a root cause.
//!
//! Rules, checked in order (first match includes the candidate once):
//! same file, same kind, or message token overlap above the threshold.
//! The overlap rule is a heuristic; short or generic messages can misfire.

use std::collections::HashSet;

use crate::config::Config;
use crate::types::ErrorRecord;

/// Related records for `batch[index]`, in batch order.
///
/// Identity is positional: the record at `index` is skipped, but a textually
/// identical record at another position is a legitimate match.
pub fn find_related(index: usize, batch: &[ErrorRecord], config: &Config) -> Vec<ErrorRecord> {
  let Some(record) = batch.get(index) else {
    return Vec::new();
  };
  let tokens = tokenize(&record.message, config.min_token_chars);
  let limit = config.max_related.unwrap_or(usize::MAX);

  batch
    .iter()
    .enumerate()
    .filter(|(i, _)| *i != index)
    .filter(|(_, other)| is_related(record, &tokens, other, config))
    .map(|(_, other)| other.clone())
    .take(limit)
    .collect()
}

fn is_related(record: &ErrorRecord, tokens: &HashSet<String>, other: &ErrorRecord, config: &Config) -> bool {
  if let (Some(a), Some(b)) = (&record.file, &other.file) {
    if !a.trim().is_empty() && a == b {
      return true;
    }
  }
  if record.kind == other.kind {
    return true;
  }
  let other_tokens = tokenize(&other.message, config.min_token_chars);
  token_overlap(tokens, &other_tokens) > config.similarity_threshold
}

/// Lower-cased whitespace tokens with at least `min_chars` characters.
fn tokenize(message: &str, min_chars: usize) -> HashSet<String> {
  message
    .split_whitespace()
    .map(str::to_lowercase)
    .filter(|t| t.chars().count() >= min_chars)
    .collect()
}

/// `|a ∩ b| / max(|a|, |b|)`; zero when either side is empty.
fn token_overlap(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
  if a.is_empty() || b.is_empty() {
    return 0.0;
  }
  let common = a.intersection(b).count();
  common as f64 / a.len().max(b.len()) as f64
}

/// Token-overlap similarity between two messages under `config`.
pub fn message_similarity(a: &str, b: &str, config: &Config) -> f64 {
  token_overlap(
    &tokenize(a, config.min_token_chars),
    &tokenize(b, config.min_token_chars),
  )
}
