//! Alert Sync Planner
//!
//! Loads a desired alert declaration and a live-system snapshot, reconciles
//! them, and renders the resulting plan with a one-line summary.

mod settings;

pub use settings::{LogFormat, Settings};

use anyhow::{Context, Result};
use clap::Parser;
use loader::{load_current_from_file, load_desired_from_file, render_plan, OutputFormat};
use reconciler::{DuplicatePolicy, RandomIdGenerator, Reconciler, Summary};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(
    name = "alertsync",
    version,
    about = "Plan the changes that sync declared alerts with a live system"
)]
pub struct Cli {
    /// Desired alert declaration (yaml)
    #[arg(long = "desired-config", value_name = "YAML")]
    pub desired_config: PathBuf,

    /// Current alerts as returned by the API (json)
    #[arg(long = "current-config", value_name = "JSON")]
    pub current_config: PathBuf,

    /// Plan output format [json, yaml]
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Settings file (toml, yaml, or json)
    #[arg(long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Fail when a collection lists the same alert name twice
    #[arg(long)]
    pub strict_names: bool,

    /// Seed for generated alert identifiers
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Settings with command-line overrides applied
    pub fn settings(&self) -> Result<Settings> {
        let mut settings =
            Settings::load(self.settings.as_deref()).context("failed to load settings")?;
        if let Some(format) = self.format {
            settings.format = format;
        }
        if self.strict_names {
            settings.reconcile.duplicate_policy = DuplicatePolicy::Reject;
        }
        if self.verbose {
            settings.log_level = "debug".to_string();
        }
        Ok(settings)
    }
}

/// Rendered plan plus its summary
#[derive(Debug, Clone)]
pub struct Report {
    pub plan: String,
    pub summary: Summary,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.plan)?;
        write!(f, "Summary: {{{}}}", self.summary)
    }
}

/// Initialize logging on stderr, keeping stdout for the plan
pub fn init_logging(settings: &Settings) -> Result<()> {
    let level: Level = settings
        .log_level
        .parse()
        .with_context(|| format!("invalid log_level '{}'", settings.log_level))?;
    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    let installed = match settings.log_format {
        LogFormat::Pretty => tracing::subscriber::set_global_default(builder.finish()),
        LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish()),
    };
    installed.context("failed to set tracing subscriber")
}

/// Load both collections, reconcile, and render the plan
pub fn run(cli: &Cli, settings: &Settings) -> Result<Report> {
    let desired = load_desired_from_file(&cli.desired_config)
        .context("something went wrong reading desired-config (yaml)")?;
    let current = load_current_from_file(&cli.current_config)
        .context("something went wrong reading current-config (json)")?;

    let ids = match cli.seed {
        Some(seed) => RandomIdGenerator::with_seed(seed),
        None => RandomIdGenerator::new(),
    };
    let mut reconciler = Reconciler::with_generator(settings.reconcile.clone(), ids);
    let result = reconciler
        .reconcile(&desired, &current)
        .context("failed to reconcile alerts")?;

    let plan = render_plan(&result, settings.format)
        .context("something went wrong with generating reconcile plan")?;
    let summary = Summary::tally(&result);
    info!("Planned {} actions", summary.total());

    Ok(Report { plan, summary })
}
