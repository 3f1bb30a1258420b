//! PushLog CI Triage Engine — deterministic, rule-based.
//!
//! Takes parsed CI failures (lint, type-check, build, deploy, security,
//! dependency, config, test), categorizes and scores each one, links related
//! failures in the same batch, and emits ranked fix suggestions.
//!
//! No AI, no DB, no network; pure computation, no state between calls.

pub mod analyzer;
pub mod categorize;
pub mod config;
pub mod error;
pub mod fingerprint;
pub mod normalize;
pub mod relation;
pub mod report;
pub mod score;
pub mod suggest;
pub mod types;

pub use analyzer::Analyzer;
pub use config::Config;
pub use error::EngineError;
pub use types::{
  Category, ErrorAnalysis, ErrorKind, ErrorRecord, FixSuggestion, Impact, InboundRecord, Report,
  Severity, Summary,
};

/// Analyze a validated batch with the default configuration.
pub fn analyze(batch: &[ErrorRecord]) -> Vec<ErrorAnalysis> {
  Analyzer::with_defaults().analyze(batch)
}
