use std::error::Error;
use std::io;
use std::path::PathBuf;

use budget_tracker_core::models::settings::Settings;
use budget_tracker_core::BudgetTracker;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod app;
mod command;
mod surface;

use surface::TerminalSurface;

#[derive(Parser, Debug)]
#[command(name = "budget-tracker")]
#[command(about = "Track income and expenses; reads commands from stdin (try `help`)")]
struct Cli {
    /// JSON file with display settings (currency symbol, separators).
    #[arg(long, env = "BUDGET_SETTINGS")]
    settings: Option<PathBuf>,

    /// Currency symbol; overrides the settings file.
    #[arg(long, env = "BUDGET_CURRENCY")]
    currency: Option<String>,

    /// Log level or filter directive (logs go to stderr).
    #[arg(long, env = "BUDGET_LOG", default_value = "warn")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let settings = load_settings(&cli)?;
    tracing::debug!(?settings, "settings loaded");

    let mut tracker = BudgetTracker::new(TerminalSurface::new(), settings);
    tracker.start();

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    app::run(stdin.lock(), &mut stdout, &mut tracker)?;
    Ok(())
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(format!(
        "budget_tracker={level},budget_tracker_core={level}"
    ))
    .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_settings(cli: &Cli) -> Result<Settings, Box<dyn Error>> {
    let settings = match &cli.settings {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read settings file {}: {e}", path.display()))?;
            Settings::from_json(&json)?
        }
        None => Settings::default(),
    };

    Ok(match &cli.currency {
        Some(symbol) => settings.with_currency_symbol(symbol),
        None => settings,
    })
}
