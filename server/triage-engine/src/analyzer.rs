//! Core analyzer: categorize, score, relate and suggest fixes for a batch.

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::categorize;
use crate::config::Config;
use crate::error::EngineError;
use crate::fingerprint;
use crate::normalize;
use crate::relation;
use crate::score;
use crate::suggest;
use crate::types::*;

/// The triage analyzer. Holds only configuration; no state survives a call.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
  config: Config,
}

impl Analyzer {
  pub fn new(config: Config) -> Self {
    Self { config }
  }

  pub fn with_defaults() -> Self {
    Self::new(Config::default())
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Analyze a validated batch.
  ///
  /// Output is sorted by priority descending; ties keep batch order.
  pub fn analyze(&self, batch: &[ErrorRecord]) -> Vec<ErrorAnalysis> {
    debug!(records = batch.len(), parallel = self.config.parallel, "analyzing batch");

    let mut analyses: Vec<ErrorAnalysis> = if self.config.parallel {
      (0..batch.len())
        .into_par_iter()
        .map(|i| self.analyze_one(i, batch))
        .collect()
    } else {
      (0..batch.len()).map(|i| self.analyze_one(i, batch)).collect()
    };

    // sort_by is stable.
    analyses.sort_by(|a, b| b.priority.cmp(&a.priority));
    analyses
  }

  /// Validate raw parser output, then analyze it. `None` is an empty batch.
  pub fn analyze_inbound(
    &self,
    raw: Option<&[InboundRecord]>,
  ) -> Result<Vec<ErrorAnalysis>, EngineError> {
    let batch = normalize::normalize_batch(raw)?;
    Ok(self.analyze(&batch))
  }

  fn analyze_one(&self, index: usize, batch: &[ErrorRecord]) -> ErrorAnalysis {
    let record = &batch[index];
    let category = categorize::categorize(record);
    let priority = score::compute_priority(record);
    let impact = score::impact_for_priority(priority);
    let related_errors = relation::find_related(index, batch, &self.config);
    let suggestions = suggest::suggest(record);
    let fixable = suggestions.iter().any(|s| s.auto_fixable);

    trace!(
      index,
      kind = record.kind.as_str(),
      ?category,
      priority,
      related = related_errors.len(),
      "analyzed record"
    );

    ErrorAnalysis {
      error: record.clone(),
      category,
      priority,
      impact,
      fixable,
      related_errors,
      suggestions,
      fingerprint: fingerprint::compute(record),
    }
  }
}
