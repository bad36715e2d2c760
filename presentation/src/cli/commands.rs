//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for escalation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Single status line
    Status,
    /// Full trace with per-stage verdicts
    Trace,
    /// JSON report
    Json,
}

/// CLI arguments for qsa
#[derive(Parser, Debug)]
#[command(name = "qsa")]
#[command(version, about = "Sentinel escalation pipeline - score a query through a ladder of consensus stages")]
#[command(long_about = r#"
qsa escalates a query through a ladder of scoring stages until one of them
declares consensus or the depth bound is reached, then prints a status line:

  QSA RESOLVED | Trueness: 0.812 | Latency: 0.3 ms

Every score is a uniform random draw; pass --seed to make the whole run
reproducible.

Configuration files are loaded from (in priority order):
1. --config <path>   Explicit config file
2. ./qsa.toml        Project-level config
3. ~/.config/qsa/config.toml   Global config

Example:
  qsa "Should the deploy proceed tonight?"
  qsa --seed 42 --output trace "Should the deploy proceed tonight?"
  qsa --max-depth 5
"#)]
pub struct Cli {
    /// The query to escalate (a built-in example query is used if omitted)
    pub query: Option<String>,

    /// Maximum depth the escalation may reach (must not exceed the ladder ceiling)
    #[arg(long, value_name = "DEPTH")]
    pub max_depth: Option<usize>,

    /// Acceptance threshold for the initial mediation pass
    #[arg(long, value_name = "SCORE")]
    pub threshold: Option<f64>,

    /// Seed the entropy source for a reproducible run
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Output format (defaults to the config file's choice, then "status")
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress per-stage progress lines
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
