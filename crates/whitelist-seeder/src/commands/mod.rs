use clap::Subcommand;
use eyre::Result;

use crate::config::Config;

pub mod check;
pub mod common;
pub mod seed;

#[derive(Subcommand)]
pub enum Commands {
    /// Add every configured account to whitelist group 0
    Seed {
        /// Resolve the contract and print the planned calls without sending them
        #[arg(long)]
        dry_run: bool,

        /// Maximum number of updates in flight at once (default: all)
        #[arg(long)]
        max_in_flight: Option<usize>,
    },
    /// Query the whitelist flag of every configured account
    Check,
    /// Print the configured account list
    Accounts,
}

pub async fn handle_command(command: Commands, key: Option<&str>, config: &Config) -> Result<()> {
    match command {
        Commands::Seed {
            dry_run,
            max_in_flight,
        } => seed::seed(key, dry_run, max_in_flight, config).await,
        Commands::Check => check::check(key, config).await,
        Commands::Accounts => {
            for address in config.get_accounts()? {
                println!("{address}");
            }
            Ok(())
        }
    }
}
