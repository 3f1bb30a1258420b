//! Priority score (0–100) and the impact tier derived from it.

use crate::types::{ErrorKind, ErrorRecord, Impact, Severity};

/// Priority 0–100: severity base + kind bonus + message keyword boosts, clamped.
pub fn compute_priority(record: &ErrorRecord) -> u8 {
  let mut score = severity_base(record.severity) + kind_bonus(record.kind);

  let msg = record.message.to_lowercase();
  if msg.contains("critical") || msg.contains("severe") {
    score += 10;
  }
  if msg.contains("vulnerability") {
    score += 15;
  }
  if msg.contains("cannot find") || msg.contains("not found") {
    score += 5;
  }

  score.min(100) as u8
}

fn severity_base(severity: Severity) -> u32 {
  match severity {
    Severity::Error => 50,
    Severity::Warning => 30,
    Severity::Info => 10,
  }
}

fn kind_bonus(kind: ErrorKind) -> u32 {
  match kind {
    ErrorKind::Security => 40,
    ErrorKind::Build => 35,
    ErrorKind::Deploy => 30,
    ErrorKind::Typescript => 25,
    ErrorKind::Dependency => 20,
    ErrorKind::Configuration => 15,
    ErrorKind::Test => 15,
    ErrorKind::Eslint => 10,
    ErrorKind::Unknown => 5,
  }
}

/// Impact tier for a record; always goes through the same scorer.
pub fn assess_impact(record: &ErrorRecord) -> Impact {
  impact_for_priority(compute_priority(record))
}

/// Lower bounds are inclusive.
pub fn impact_for_priority(priority: u8) -> Impact {
  match priority {
    80.. => Impact::Critical,
    60..=79 => Impact::High,
    40..=59 => Impact::Medium,
    _ => Impact::Low,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn record(kind: ErrorKind, severity: Severity, message: &str) -> ErrorRecord {
    ErrorRecord::new(kind, severity, message)
  }

  #[test]
  fn exact_kind_bonuses_at_error_severity() {
    let cases = [
      (ErrorKind::Security, 90),
      (ErrorKind::Build, 85),
      (ErrorKind::Deploy, 80),
      (ErrorKind::Typescript, 75),
      (ErrorKind::Dependency, 70),
      (ErrorKind::Configuration, 65),
      (ErrorKind::Test, 65),
      (ErrorKind::Eslint, 60),
      (ErrorKind::Unknown, 55),
    ];
    for (kind, expected) in cases {
      assert_eq!(compute_priority(&record(kind, Severity::Error, "plain")), expected, "{kind:?}");
    }
  }

  #[test]
  fn severity_orders_error_over_warning_over_info() {
    let e = compute_priority(&record(ErrorKind::Eslint, Severity::Error, "x"));
    let w = compute_priority(&record(ErrorKind::Eslint, Severity::Warning, "x"));
    let i = compute_priority(&record(ErrorKind::Eslint, Severity::Info, "x"));
    assert_eq!((e, w, i), (60, 40, 20));
  }

  #[test]
  fn keyword_boosts_stack() {
    let r = record(ErrorKind::Eslint, Severity::Info, "SEVERE: module not found");
    assert_eq!(compute_priority(&r), 10 + 10 + 10 + 5);
    let r = record(ErrorKind::Dependency, Severity::Warning, "known vulnerability");
    assert_eq!(compute_priority(&r), 30 + 20 + 15);
  }

  #[test]
  fn all_boosts_clamp_at_100() {
    let r = record(
      ErrorKind::Security,
      Severity::Error,
      "Critical severe vulnerability cannot find module",
    );
    assert_eq!(compute_priority(&r), 100);
    assert_eq!(assess_impact(&r), Impact::Critical);
  }

  #[test]
  fn impact_boundaries() {
    assert_eq!(impact_for_priority(100), Impact::Critical);
    assert_eq!(impact_for_priority(80), Impact::Critical);
    assert_eq!(impact_for_priority(79), Impact::High);
    assert_eq!(impact_for_priority(60), Impact::High);
    assert_eq!(impact_for_priority(59), Impact::Medium);
    assert_eq!(impact_for_priority(40), Impact::Medium);
    assert_eq!(impact_for_priority(39), Impact::Low);
    assert_eq!(impact_for_priority(0), Impact::Low);
  }
}
