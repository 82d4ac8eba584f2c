pub mod cli;
pub mod core;
pub mod providers;

use crate::core::config::AppConfig;
use crate::core::{ConversionForm, Currency};
use anyhow::Result;
use tracing::{debug, info};

pub enum AppCommand {
    /// Interactive four-field converter
    Window,
    Rates {
        json: bool,
    },
    Convert {
        amount: String,
        currency: Currency,
    },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Currency converter starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let term = console::Term::stdout();
    if matches!(command, AppCommand::Window) {
        // Fail before the fetch when there is nowhere to show the window
        cli::window::ensure_terminal(&term)?;
    }

    let provider = providers::CursBnrProvider::new(&config.providers.cursbnr.base_url);
    let rates = cli::fetch_rates(&provider).await?;
    let form = ConversionForm::new(rates).with_precision(config.precision);

    match command {
        AppCommand::Window => cli::window::FormWindow::new(form).run(&term),
        AppCommand::Rates { json } => cli::rates::run(form.rates(), json),
        AppCommand::Convert { amount, currency } => cli::convert::run(form, &amount, currency),
    }
}
