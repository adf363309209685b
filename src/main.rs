use anyhow::Result;
use chrono::NaiveDate;
use clap::{CommandFactory, Parser, Subcommand};
use fixer_rates::cli::setup::setup;
use fixer_rates::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    /// Fixer access key, overrides the configured one
    #[arg(short, long, global = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Show the exchange rate between two currencies
    Rate {
        from: String,
        to: String,
        /// Historical date (YYYY-MM-DD), latest when omitted
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
    /// Convert an amount between two currencies
    Convert {
        from: String,
        to: String,
        amount: f64,
        /// Historical date (YYYY-MM-DD), latest when omitted
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
}

impl From<Commands> for fixer_rates::AppCommand {
    fn from(cmd: Commands) -> fixer_rates::AppCommand {
        match cmd {
            Commands::Rate { from, to, date } => fixer_rates::AppCommand::Rate { from, to, date },
            Commands::Convert {
                from,
                to,
                amount,
                date,
            } => fixer_rates::AppCommand::Convert {
                from,
                to,
                amount,
                date,
            },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => setup(),
        Some(cmd) => {
            fixer_rates::run_command(
                cmd.into(),
                cli.config_path.as_deref(),
                cli.api_key.as_deref(),
            )
            .await
        }
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
