//! Normalize inbound parser records into canonical ErrorRecord models.

use crate::error::EngineError;
use crate::types::*;

/// Validate and normalize a whole batch. A `None` batch is treated as empty.
///
/// Fails on the first offending record; records are never silently dropped.
pub fn normalize_batch(raw: Option<&[InboundRecord]>) -> Result<Vec<ErrorRecord>, EngineError> {
  raw
    .unwrap_or_default()
    .iter()
    .enumerate()
    .map(|(index, record)| normalize(index, record))
    .collect()
}

/// Parse and normalize one inbound record at position `index`.
pub fn normalize(index: usize, raw: &InboundRecord) -> Result<ErrorRecord, EngineError> {
  // Mandatory: kind (any non-blank value; unrecognized maps to Unknown)
  let kind = match non_blank(&raw.kind) {
    Some(k) => ErrorKind::from_str_loose(k),
    None => return Err(EngineError::validation(index, "kind", "is required")),
  };

  // Mandatory: severity (closed set)
  let severity = match non_blank(&raw.severity) {
    Some(s) => Severity::from_str_loose(s)
      .ok_or_else(|| EngineError::validation(index, "severity", "expected error|warning|info"))?,
    None => return Err(EngineError::validation(index, "severity", "is required")),
  };

  Ok(ErrorRecord {
    kind,
    message: raw.message.clone().unwrap_or_default(),
    severity,
    raw_log: raw.raw_log.clone().unwrap_or_default(),
    file: non_blank(&raw.file).map(str::to_string),
    line: raw.line.as_ref().and_then(parse_line),
    rule: non_blank(&raw.rule).map(str::to_string),
  })
}

/// Positive integer (or a string holding one) that fits u32; anything else is absent.
fn parse_line(value: &serde_json::Value) -> Option<u32> {
  let n = match value {
    serde_json::Value::Number(n) => n.as_u64()?,
    serde_json::Value::String(s) => s.trim().parse::<u64>().ok()?,
    _ => return None,
  };
  u32::try_from(n).ok().filter(|&l| l > 0)
}

/// Blank strings are absent, not empty.
fn non_blank(value: &Option<String>) -> Option<&str> {
  value.as_deref().filter(|v| !v.trim().is_empty())
}
