//! CLI entrypoint for qsa
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use qsa_application::{RunEscalationInput, RunEscalationUseCase};
use qsa_domain::{EntropySource, Query};
use qsa_infrastructure::{ConfigLoader, FileOutputFormat, OsEntropy, SeededEntropy};
use qsa_presentation::{Cli, ConsoleFormatter, ConsoleObserver, OutputFormat};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Query used when none is given on the command line
const EXAMPLE_QUERY: &str = "Design a harmless, creative AGI agent that respects all sentient beings";

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    // CLI flags override file values
    let mut params = file_config.escalation.to_params();
    if let Some(max_depth) = cli.max_depth {
        params = params.with_max_depth(max_depth);
    }
    if let Some(threshold) = cli.threshold {
        params = params.with_mediation_threshold(threshold);
    }

    let output = cli.output.unwrap_or(match file_config.output.format {
        FileOutputFormat::Status => OutputFormat::Status,
        FileOutputFormat::Trace => OutputFormat::Trace,
        FileOutputFormat::Json => OutputFormat::Json,
    });
    let quiet = cli.quiet || file_config.output.quiet;

    let query = match cli.query {
        Some(content) => match Query::try_new(content) {
            Some(query) => query,
            None => bail!("Query cannot be empty"),
        },
        None => Query::new(EXAMPLE_QUERY),
    };

    info!("Starting QSA escalation");

    // === Dependency Injection ===
    let entropy: Arc<dyn EntropySource> = match cli.seed {
        Some(seed) => Arc::new(SeededEntropy::from_seed(seed)),
        None => Arc::new(OsEntropy),
    };
    let use_case = RunEscalationUseCase::new(entropy);
    let input = RunEscalationInput::new(query).with_params(params);

    // Per-stage progress goes to stderr unless suppressed or redundant
    // with the trace output
    let report = if !quiet && output == OutputFormat::Status {
        use_case.execute_with_observer(input, &ConsoleObserver::new())?
    } else {
        use_case.execute(input)?
    };

    let rendered = match output {
        OutputFormat::Status => ConsoleFormatter::format_status(&report),
        OutputFormat::Trace => ConsoleFormatter::format_trace(&report),
        OutputFormat::Json => ConsoleFormatter::format_json(&report),
    };

    println!("{}", rendered);

    Ok(())
}
