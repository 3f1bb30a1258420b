//! Category derived from error kind, with message inference for unknown kinds.

use crate::types::{Category, ErrorKind, ErrorRecord};

/// Map a record to its category. Total: every record gets one.
pub fn categorize(record: &ErrorRecord) -> Category {
  match record.kind {
    ErrorKind::Eslint | ErrorKind::Test => Category::CodeQuality,
    ErrorKind::Typescript => Category::TypeSafety,
    ErrorKind::Build => Category::BuildFailure,
    ErrorKind::Deploy => Category::Deployment,
    ErrorKind::Security => Category::SecurityVulnerability,
    ErrorKind::Configuration => Category::Configuration,
    ErrorKind::Dependency => Category::Dependency,
    ErrorKind::Unknown => infer_from_message(&record.message),
  }
}

/// First match wins, in this order.
fn infer_from_message(message: &str) -> Category {
  let msg = message.to_lowercase();
  if msg.contains("type") || msg.contains("interface") {
    Category::TypeSafety
  } else if msg.contains("build") || msg.contains("compile") {
    Category::BuildFailure
  } else if msg.contains("deploy") || msg.contains("publish") {
    Category::Deployment
  } else {
    Category::CodeQuality
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::Severity;

  fn record(kind: ErrorKind, message: &str) -> ErrorRecord {
    ErrorRecord::new(kind, Severity::Error, message)
  }

  #[test]
  fn known_kinds_use_fixed_table() {
    let cases = [
      (ErrorKind::Eslint, Category::CodeQuality),
      (ErrorKind::Typescript, Category::TypeSafety),
      (ErrorKind::Build, Category::BuildFailure),
      (ErrorKind::Deploy, Category::Deployment),
      (ErrorKind::Security, Category::SecurityVulnerability),
      (ErrorKind::Configuration, Category::Configuration),
      (ErrorKind::Dependency, Category::Dependency),
      (ErrorKind::Test, Category::CodeQuality),
    ];
    for (kind, expected) in cases {
      // Message keywords must not override a known kind.
      assert_eq!(categorize(&record(kind, "deploy type build")), expected, "{kind:?}");
    }
  }

  #[test]
  fn unknown_kind_infers_from_message_case_insensitively() {
    assert_eq!(categorize(&record(ErrorKind::Unknown, "Interface mismatch")), Category::TypeSafety);
    assert_eq!(categorize(&record(ErrorKind::Unknown, "COMPILE failed")), Category::BuildFailure);
    assert_eq!(categorize(&record(ErrorKind::Unknown, "publish step failed")), Category::Deployment);
    assert_eq!(categorize(&record(ErrorKind::Unknown, "something odd")), Category::CodeQuality);
    assert_eq!(categorize(&record(ErrorKind::Unknown, "")), Category::CodeQuality);
  }

  #[test]
  fn unknown_kind_inference_order_is_type_then_build_then_deploy() {
    assert_eq!(
      categorize(&record(ErrorKind::Unknown, "deploy of build with bad type")),
      Category::TypeSafety
    );
    assert_eq!(
      categorize(&record(ErrorKind::Unknown, "deploy after build")),
      Category::BuildFailure
    );
  }
}
