use anyhow::Context;
use clap::{Parser, ValueEnum};
use eos::headless::{self, HeadlessOptions};
use eos_core::{config::Config, export::OutputFormat, Field, Roster, SearchMode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "eos", about = "Engineer On Site Database — terminal roster lookup")]
struct Cli {
    /// Write debug logs to /tmp/eos-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// JSON roster to load instead of the bundled dataset.
    #[arg(long, value_name = "PATH")]
    data: Option<PathBuf>,

    /// View the TUI opens on.
    #[arg(long, value_enum)]
    view: Option<ViewArg>,

    /// Print matching records to stdout and exit.
    #[arg(long)]
    headless: bool,

    /// Field searched by --query (name, company, location).
    #[arg(long, requires = "query")]
    field: Option<Field>,

    /// Simple search on a single field.
    #[arg(long, conflicts_with_all = ["name", "company", "location"])]
    query: Option<String>,

    /// Advanced search: engineer name contains.
    #[arg(long)]
    name: Option<String>,

    /// Advanced search: company name contains.
    #[arg(long)]
    company: Option<String>,

    /// Advanced search: location equals.
    #[arg(long)]
    location: Option<String>,

    /// Headless output format (table, jsonl).
    #[arg(long, default_value = "table")]
    format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum ViewArg {
    Simple,
    Advanced,
}

impl From<ViewArg> for SearchMode {
    fn from(v: ViewArg) -> Self {
        match v {
            ViewArg::Simple => SearchMode::Simple,
            ViewArg::Advanced => SearchMode::Advanced,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/eos-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("eos debug log started — tail -f /tmp/eos-debug.log");
    }

    let mut config = Config::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "config unreadable, using defaults");
        Config::defaults()
    });
    if let Some(view) = cli.view {
        config.ui.start_view = view.into();
    }

    let data_path = cli.data.clone().or_else(|| config.data.dataset_path());
    let roster = Roster::load(data_path.as_deref()).context("failed to load engineer roster")?;

    if cli.headless {
        let opts = HeadlessOptions {
            field: cli.field,
            query: cli.query,
            name: cli.name,
            company: cli.company,
            location: cli.location,
            format: cli.format,
        };
        let mut stdout = std::io::stdout().lock();
        headless::run(&roster, &opts, config.ui.default_field, &mut stdout)?;
        return Ok(());
    }

    eos_tui::run(roster, config)
}
