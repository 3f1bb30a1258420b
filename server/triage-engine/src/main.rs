//! Binary entrypoint: read a JSON array of records, write analyses as JSON.
//!
//! Input is the log parser's output (a JSON array, or `null`). Output is
//! either the ranked ErrorAnalysis array or, with `--report`, a Report
//! envelope. Rejected input produces an ErrorOutput object and exit code 1.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use triage_engine::types::ErrorOutput;
use triage_engine::{report, Analyzer, Config, EngineError, InboundRecord};

#[derive(Parser, Debug)]
#[command(
  name = "triage-engine",
  version,
  about = "Rank CI failures and suggest fixes"
)]
struct Cli {
  /// JSON file with the parsed error records (default: stdin).
  #[arg(long)]
  input: Option<PathBuf>,

  /// Engine config TOML.
  #[arg(long)]
  config: Option<PathBuf>,

  /// Emit a report envelope with a batch summary.
  #[arg(long)]
  report: bool,

  /// Pretty-print JSON output.
  #[arg(long)]
  pretty: bool,

  /// Increase log verbosity on stderr (-v, -vv, -vvv).
  #[arg(short, long, action = clap::ArgAction::Count)]
  verbose: u8,
}

fn main() {
  let cli = Cli::parse();
  init_logging(cli.verbose);

  match run(&cli) {
    Ok(()) => {}
    Err(e) => {
      // Contract violations are reported on stdout for the caller to parse.
      let out = match e.downcast_ref::<EngineError>() {
        Some(EngineError::Validation { index, field, reason }) => {
          ErrorOutput::new(reason.clone()).with_location(*index, field.clone())
        }
        _ => ErrorOutput::new(e.to_string()),
      };
      let mut stdout = io::stdout().lock();
      let _ = serde_json::to_writer(&mut stdout, &out);
      let _ = writeln!(stdout);
      let _ = writeln!(io::stderr(), "triage-engine error: {:#}", e);
      std::process::exit(1);
    }
  }
}

fn init_logging(verbose: u8) {
  let default_level = match verbose {
    0 => "warn",
    1 => "info",
    2 => "debug",
    _ => "trace",
  };
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
    )
    .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
  let config = match &cli.config {
    Some(path) => Config::load(path)?,
    None => Config::default(),
  };
  debug!(?config, "loaded config");

  let raw = match &cli.input {
    Some(path) => fs::read_to_string(path)
      .with_context(|| format!("reading {}", path.display()))?,
    None => {
      let mut buf = String::new();
      io::stdin().lock().read_to_string(&mut buf).context("reading stdin")?;
      buf
    }
  };

  // Blank input is an absent batch, same as `null`.
  let records: Option<Vec<InboundRecord>> = if raw.trim().is_empty() {
    None
  } else {
    serde_json::from_str(&raw).map_err(EngineError::from)?
  };
  let analyses = Analyzer::new(config).analyze_inbound(records.as_deref())?;
  info!(analyses = analyses.len(), "analysis complete");

  let mut out = io::BufWriter::new(io::stdout().lock());
  if cli.report {
    write_json(&mut out, &report::build_report(analyses), cli.pretty)?;
  } else {
    write_json(&mut out, &analyses, cli.pretty)?;
  }
  writeln!(out)?;
  out.flush()?;
  Ok(())
}

fn write_json<W: Write, T: serde::Serialize>(out: &mut W, value: &T, pretty: bool) -> anyhow::Result<()> {
  if pretty {
    serde_json::to_writer_pretty(out, value)?;
  } else {
    serde_json::to_writer(out, value)?;
  }
  Ok(())
}
