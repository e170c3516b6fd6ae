use clap::Parser;
use eyre::Result;
use log::{debug, LevelFilter};

use whitelist_seeder::commands::{handle_command, Commands};
use whitelist_seeder::config::Config;

#[derive(Parser)]
#[command(name = "whitelist-seeder")]
#[command(about = "Seeds the NodeList contract whitelist with the node operator accounts")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<String>,

    /// Environment file path
    #[arg(long, global = true, default_value = ".env")]
    env_file: String,

    /// Named network (staging, local)
    #[arg(short = 'n', long, global = true)]
    network: Option<String>,

    /// RPC URL (overrides network)
    #[arg(short = 'r', long, global = true)]
    rpc_url: Option<String>,

    /// Path to the NodeList build artifact
    #[arg(long, global = true)]
    artifact: Option<String>,

    /// NodeList contract address (overrides the artifact's network entry)
    #[arg(long, global = true)]
    contract_address: Option<String>,

    /// Private key source (env:VAR_NAME or file:/path). Uses the node's first
    /// unlocked account when omitted
    #[arg(short = 'k', long, global = true)]
    key: Option<String>,

    /// Log level
    #[arg(short = 'l', long, global = true, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.log_level.as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };
    env_logger::Builder::new()
        .filter_level(log_level)
        .filter_module("alloy", LevelFilter::Warn)
        .format_timestamp(None)
        .init();
    debug!("Log level: {log_level}");

    let config = Config::load(cli.config.as_deref(), &cli.env_file)?
        .with_network(cli.network)
        .with_rpc_url(cli.rpc_url)
        .with_artifact_path(cli.artifact)
        .with_contract_address(cli.contract_address);

    handle_command(cli.command, cli.key.as_deref(), &config).await
}
