//! Core types for the triage engine (JSON contracts + analysis models).

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Inbound types (JSON contract — what the log parser sends)
// ---------------------------------------------------------------------------

/// One record as emitted by the log parser. Every field is optional at the
/// serde level so that missing mandatory fields can be reported with the
/// record's position instead of an opaque parse error. Unknown fields are
/// silently ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundRecord {
  #[serde(alias = "type")]
  pub kind: Option<String>,
  pub message: Option<String>,
  pub severity: Option<String>,
  #[serde(alias = "raw_log")]
  pub raw_log: Option<String>,
  pub file: Option<String>,
  /// Kept loose: parsers emit negative, fractional or quoted line numbers.
  pub line: Option<serde_json::Value>,
  pub rule: Option<String>,
}

// ---------------------------------------------------------------------------
// Closed sets (normalized)
// ---------------------------------------------------------------------------

/// Error type as reported by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
  Eslint,
  Typescript,
  Build,
  Deploy,
  Security,
  Dependency,
  Configuration,
  Test,
  Unknown,
}

impl ErrorKind {
  /// Unrecognized values are not an error; they fall through to `Unknown`.
  pub fn from_str_loose(s: &str) -> Self {
    match s.trim().to_ascii_lowercase().as_str() {
      "eslint" | "lint" => Self::Eslint,
      "typescript" | "ts" => Self::Typescript,
      "build" => Self::Build,
      "deploy" | "deployment" => Self::Deploy,
      "security" => Self::Security,
      "dependency" | "deps" => Self::Dependency,
      "configuration" | "config" => Self::Configuration,
      "test" | "tests" => Self::Test,
      _ => Self::Unknown,
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Eslint => "eslint",
      Self::Typescript => "typescript",
      Self::Build => "build",
      Self::Deploy => "deploy",
      Self::Security => "security",
      Self::Dependency => "dependency",
      Self::Configuration => "configuration",
      Self::Test => "test",
      Self::Unknown => "unknown",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
  Error,
  Warning,
  Info,
}

impl Severity {
  pub fn from_str_loose(s: &str) -> Option<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "error" | "err" | "fatal" => Some(Self::Error),
      "warning" | "warn" => Some(Self::Warning),
      "info" | "information" | "notice" => Some(Self::Info),
      _ => None,
    }
  }
}

/// Coarse classification bucket. Declaration order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
  CodeQuality,
  TypeSafety,
  BuildFailure,
  Deployment,
  SecurityVulnerability,
  Configuration,
  Dependency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
  Critical,
  High,
  Medium,
  Low,
}

// ---------------------------------------------------------------------------
// Canonical record
// ---------------------------------------------------------------------------

/// One parsed CI failure after validation. Never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorRecord {
  pub kind: ErrorKind,
  pub message: String,
  pub severity: Severity,
  #[serde(default)]
  pub raw_log: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub file: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub line: Option<u32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub rule: Option<String>,
}

impl ErrorRecord {
  /// Record with only the mandatory fields set.
  pub fn new(kind: ErrorKind, severity: Severity, message: impl Into<String>) -> Self {
    Self {
      kind,
      message: message.into(),
      severity,
      raw_log: String::new(),
      file: None,
      line: None,
      rule: None,
    }
  }

  pub fn with_file(mut self, file: impl Into<String>) -> Self {
    self.file = Some(file.into());
    self
  }

  pub fn with_line(mut self, line: u32) -> Self {
    self.line = Some(line);
    self
  }

  pub fn with_rule(mut self, rule: impl Into<String>) -> Self {
    self.rule = Some(rule.into());
    self
  }

  pub fn with_raw_log(mut self, raw_log: impl Into<String>) -> Self {
    self.raw_log = raw_log.into();
    self
  }
}

// ---------------------------------------------------------------------------
// Output types (JSON contract — what we emit)
// ---------------------------------------------------------------------------

/// One proposed remedy: either an auto-executable command or a manual step list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixSuggestion {
  pub title: String,
  pub description: String,
  pub auto_fixable: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub command: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub steps: Option<Vec<String>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub estimated_time: Option<String>,
}

impl FixSuggestion {
  /// Suggestion backed by a concrete shell command.
  pub fn auto(
    title: impl Into<String>,
    description: impl Into<String>,
    command: impl Into<String>,
  ) -> Self {
    Self {
      title: title.into(),
      description: description.into(),
      auto_fixable: true,
      command: Some(command.into()),
      steps: None,
      estimated_time: None,
    }
  }

  /// Suggestion a human has to carry out.
  pub fn manual(
    title: impl Into<String>,
    description: impl Into<String>,
    steps: Vec<String>,
  ) -> Self {
    Self {
      title: title.into(),
      description: description.into(),
      auto_fixable: false,
      command: None,
      steps: Some(steps),
      estimated_time: None,
    }
  }

  pub fn with_estimated_time(mut self, estimate: impl Into<String>) -> Self {
    self.estimated_time = Some(estimate.into());
    self
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorAnalysis {
  pub error: ErrorRecord,
  pub category: Category,
  pub priority: u8,
  pub impact: Impact,
  pub fixable: bool,
  pub related_errors: Vec<ErrorRecord>,
  pub suggestions: Vec<FixSuggestion>,
  /// Stable hash for de-duplicating the same failure across runs.
  pub fingerprint: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactCounts {
  pub critical: usize,
  pub high: usize,
  pub medium: usize,
  pub low: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
  pub category: Category,
  pub count: usize,
}

/// Batch-level rollup for dashboards and bot comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
  pub total: usize,
  pub fixable: usize,
  pub by_impact: ImpactCounts,
  pub by_category: Vec<CategoryCount>,
  pub auto_fix_commands: Vec<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub highest_impact: Option<Impact>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
  pub generated_at: String,
  pub summary: Summary,
  pub analyses: Vec<ErrorAnalysis>,
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// Structured error output for rejected input.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub index: Option<usize>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      index: None,
      field: None,
    }
  }

  pub fn with_location(mut self, index: usize, field: impl Into<String>) -> Self {
    self.index = Some(index);
    self.field = Some(field.into());
    self
  }
}
