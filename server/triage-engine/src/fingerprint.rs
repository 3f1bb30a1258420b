//! Stable fingerprint for de-duplicating the same failure across CI runs.

use crate::types::ErrorRecord;

/// Compute a stable fingerprint from a record.
///
/// Key components: kind + file + line + rule + normalized message.
/// Uses blake3 for a fast, deterministic hash.
pub fn compute(record: &ErrorRecord) -> String {
  let mut hasher = blake3::Hasher::new();
  hasher.update(record.kind.as_str().as_bytes());
  hasher.update(b"|");
  hasher.update(record.file.as_deref().unwrap_or_default().as_bytes());
  hasher.update(b"|");
  if let Some(line) = record.line {
    hasher.update(line.to_string().as_bytes());
  }
  hasher.update(b"|");
  hasher.update(record.rule.as_deref().unwrap_or_default().as_bytes());
  hasher.update(b"|");
  hasher.update(normalize_message(&record.message).as_bytes());

  // First 16 bytes (32 hex chars) keep the ID compact.
  let hex = hasher.finalize().to_hex();
  hex[..32].to_string()
}

/// Lowercase and collapse digit runs to `#` so counts and durations don't split groups.
fn normalize_message(message: &str) -> String {
  let mut out = String::with_capacity(message.len());
  let mut in_digits = false;
  for ch in message.trim().chars() {
    if ch.is_ascii_digit() {
      if !in_digits {
        out.push('#');
      }
      in_digits = true;
    } else {
      in_digits = false;
      out.extend(ch.to_lowercase());
    }
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::{ErrorKind, Severity};

  fn rec(kind: ErrorKind, message: &str) -> ErrorRecord {
    ErrorRecord::new(kind, Severity::Error, message)
  }

  #[test]
  fn fingerprint_is_32_hex_chars() {
    let fp = compute(&rec(ErrorKind::Build, "boom"));
    assert_eq!(fp.len(), 32);
    assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
  }

  #[test]
  fn same_inputs_same_fingerprint() {
    let a = rec(ErrorKind::Eslint, "x").with_file("src/a.ts").with_line(3);
    assert_eq!(compute(&a), compute(&a.clone()));
  }

  #[test]
  fn counts_and_case_do_not_change_fingerprint() {
    let a = rec(ErrorKind::Test, "3 tests failed in 120ms");
    let b = rec(ErrorKind::Test, "12 Tests failed in 98ms");
    assert_eq!(compute(&a), compute(&b));
  }

  #[test]
  fn severity_and_raw_log_are_not_part_of_identity() {
    let a = rec(ErrorKind::Build, "boom").with_raw_log("run 1");
    let mut b = rec(ErrorKind::Build, "boom").with_raw_log("run 2");
    b.severity = Severity::Warning;
    assert_eq!(compute(&a), compute(&b));
  }

  #[test]
  fn location_and_kind_change_fingerprint() {
    let base = rec(ErrorKind::Eslint, "x").with_file("src/a.ts");
    assert_ne!(compute(&base), compute(&base.clone().with_file("src/b.ts")));
    assert_ne!(compute(&base), compute(&base.clone().with_line(1)));
    assert_ne!(compute(&base), compute(&base.clone().with_rule("no-console")));
    assert_ne!(compute(&base), compute(&rec(ErrorKind::Build, "x").with_file("src/a.ts")));
  }

  #[test]
  fn normalize_message_basics() {
    assert_eq!(normalize_message("  Found 42 Errors "), "found # errors");
    assert_eq!(normalize_message("v1.2.3"), "v#.#.#");
  }
}
