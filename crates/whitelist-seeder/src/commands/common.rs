use eyre::{Context, Result};
use log::{info, warn};
use shared::web3::contracts::core::artifact::ContractArtifact;
use shared::web3::{Deployment, Wallet};
use std::path::Path;

use crate::config::Config;
use crate::secure_key::get_private_key;

pub async fn create_wallet(key: Option<&str>, config: &Config) -> Result<Wallet> {
    let rpc_url = config.get_rpc_url()?;
    info!("Using RPC endpoint {rpc_url}");

    let wallet = match get_private_key(key)? {
        Some(private_key) => Wallet::new(&private_key, rpc_url),
        None => Wallet::with_node_account(rpc_url).await,
    }
    .context("Wallet creation error")?;

    wallet.ensure_capable().await?;

    let balance = wallet.get_balance().await?;
    if balance.is_zero() {
        warn!("Sender {} has no balance, transactions will not be mined", wallet.address());
    } else {
        info!("Sender balance: {balance} wei");
    }
    Ok(wallet)
}

/// Loads the build artifact, falling back to the embedded NodeList ABI when
/// an explicit contract address is configured and no artifact file exists.
pub fn load_artifact(config: &Config) -> Result<ContractArtifact> {
    let path = config.get_artifact_path();
    if !Path::new(path).exists() && config.get_contract_address()?.is_some() {
        info!("Artifact {path} not found, using embedded NodeList ABI");
        return ContractArtifact::embedded_node_list()
            .context("Failed to load embedded NodeList ABI");
    }

    ContractArtifact::from_file(path)
        .with_context(|| format!("Failed to load contract artifact from {path}"))
}

pub async fn create_deployment(key: Option<&str>, config: &Config) -> Result<Deployment> {
    let wallet = create_wallet(key, config).await?;
    let artifact = load_artifact(config)?;

    Ok(Deployment::new(&wallet, artifact)
        .with_address(config.get_contract_address()?)
        .with_receipt_timeout(config.receipt_timeout()))
}
