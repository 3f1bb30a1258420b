//! Batch summary for reporters: counts per tier and category, fix commands.

use chrono::{SecondsFormat, Utc};

use crate::types::*;

/// Roll up a priority-sorted analysis list.
pub fn summarize(analyses: &[ErrorAnalysis]) -> Summary {
  let mut by_impact = ImpactCounts::default();
  let mut categories: Vec<Category> = Vec::new();
  let mut auto_fix_commands: Vec<String> = Vec::new();

  for analysis in analyses {
    match analysis.impact {
      Impact::Critical => by_impact.critical += 1,
      Impact::High => by_impact.high += 1,
      Impact::Medium => by_impact.medium += 1,
      Impact::Low => by_impact.low += 1,
    }
    categories.push(analysis.category);

    let commands = analysis
      .suggestions
      .iter()
      .filter(|s| s.auto_fixable)
      .filter_map(|s| s.command.as_ref());
    for command in commands {
      if !auto_fix_commands.contains(command) {
        auto_fix_commands.push(command.clone());
      }
    }
  }

  // Declaration order of Category.
  categories.sort();
  let mut by_category: Vec<CategoryCount> = Vec::new();
  for category in categories {
    match by_category.last_mut() {
      Some(last) if last.category == category => last.count += 1,
      _ => by_category.push(CategoryCount { category, count: 1 }),
    }
  }

  Summary {
    total: analyses.len(),
    fixable: analyses.iter().filter(|a| a.fixable).count(),
    by_impact,
    by_category,
    auto_fix_commands,
    highest_impact: analyses.first().map(|a| a.impact),
  }
}

/// Wrap analyses in a timestamped report envelope.
pub fn build_report(analyses: Vec<ErrorAnalysis>) -> Report {
  Report {
    generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    summary: summarize(&analyses),
    analyses,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::analyzer::Analyzer;
  use pretty_assertions::assert_eq;

  #[test]
  fn empty_summary() {
    let summary = summarize(&[]);
    assert_eq!(summary.total, 0);
    assert_eq!(summary.by_impact, ImpactCounts::default());
    assert!(summary.by_category.is_empty());
    assert!(summary.auto_fix_commands.is_empty());
    assert_eq!(summary.highest_impact, None);
  }

  #[test]
  fn counts_and_commands() {
    let batch = vec![
      ErrorRecord::new(ErrorKind::Eslint, Severity::Warning, "semi"),
      ErrorRecord::new(ErrorKind::Security, Severity::Error, "lodash vulnerability"),
      ErrorRecord::new(ErrorKind::Eslint, Severity::Info, "quotes"),
      ErrorRecord::new(ErrorKind::Test, Severity::Error, "snapshot mismatch"),
    ];
    let analyses = Analyzer::with_defaults().analyze(&batch);
    let summary = summarize(&analyses);

    assert_eq!(summary.total, 4);
    assert_eq!(summary.fixable, 3);
    assert_eq!(
      summary.by_impact,
      ImpactCounts {
        critical: 1,
        high: 1,
        medium: 1,
        low: 1
      }
    );
    assert_eq!(
      summary.by_category,
      vec![
        CategoryCount {
          category: Category::CodeQuality,
          count: 3
        },
        CategoryCount {
          category: Category::SecurityVulnerability,
          count: 1
        },
      ]
    );
    // Security ranks first, so its command comes first; lint fix appears once.
    assert_eq!(summary.auto_fix_commands, vec!["npm audit fix", "npx eslint . --fix"]);
    assert_eq!(summary.highest_impact, Some(Impact::Critical));
  }

  #[test]
  fn report_wraps_summary() {
    let report = build_report(Vec::new());
    assert!(report.generated_at.ends_with('Z'));
    assert_eq!(report.summary.total, 0);
  }
}
