use anyhow::Result;
use clap::{Parser, Subcommand};
use cursconv::core::Currency;
use cursconv::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for cursconv::AppCommand {
    fn from(cmd: Commands) -> cursconv::AppCommand {
        match cmd {
            Commands::Rates { json } => cursconv::AppCommand::Rates { json },
            Commands::Convert { amount, currency } => {
                cursconv::AppCommand::Convert { amount, currency }
            }
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Display the current BNR exchange rates
    Rates {
        /// Print rates as JSON
        #[arg(long)]
        json: bool,
    },
    /// Convert an amount into the other currencies
    Convert {
        /// Amount to convert
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Currency of the amount (RON, EUR, USD or GBP)
        currency: Currency,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => cursconv::cli::setup::setup(),
        Some(cmd) => cursconv::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            cursconv::run_command(cursconv::AppCommand::Window, cli.config_path.as_deref()).await
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
