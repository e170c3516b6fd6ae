use alloy::{
    network::EthereumWallet,
    primitives::{Address, U256},
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::client::RpcClient,
    signers::local::PrivateKeySigner,
};
use log::{debug, info};
use url::Url;

use crate::web3::contracts::core::error::{ContractError, ContractResult};

/// Who signs outgoing transactions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SenderKind {
    /// Signed locally. Nonce, gas price and chain id are filled in before signing.
    LocalKey,
    /// Signed by the node through an unlocked account (`eth_sendTransaction`).
    /// The node assigns nonces.
    NodeAccount,
}

pub struct Wallet {
    pub kind: SenderKind,
    pub provider: DynProvider,
    address: Address,
}

impl Wallet {
    pub fn new(private_key: &str, provider_url: Url) -> ContractResult<Self> {
        Self::with_client(private_key, RpcClient::new_http(provider_url))
    }

    pub fn with_client(private_key: &str, client: RpcClient) -> ContractResult<Self> {
        let signer: PrivateKeySigner = private_key
            .trim()
            .parse()
            .map_err(|e| ContractError::Web3Error(format!("Invalid private key: {e}")))?;
        let address = signer.address();

        // No nonce or gas fillers: the contract wrappers fetch both right
        // before each broadcast.
        let provider = ProviderBuilder::new()
            .disable_recommended_fillers()
            .wallet(EthereumWallet::from(signer))
            .connect_client(client)
            .erased();

        Ok(Self {
            kind: SenderKind::LocalKey,
            provider,
            address,
        })
    }

    /// Uses the first account the node reports as the sender.
    pub async fn with_node_account(provider_url: Url) -> ContractResult<Self> {
        Self::node_account_with_client(RpcClient::new_http(provider_url)).await
    }

    pub async fn node_account_with_client(client: RpcClient) -> ContractResult<Self> {
        let provider = ProviderBuilder::new()
            .disable_recommended_fillers()
            .connect_client(client)
            .erased();

        let accounts = provider.get_accounts().await?;
        let address = accounts.first().copied().ok_or_else(|| {
            ContractError::Web3Error("Node did not report any unlocked accounts".to_string())
        })?;
        debug!("Using node account {address} ({} available)", accounts.len());

        Ok(Self {
            kind: SenderKind::NodeAccount,
            provider,
            address,
        })
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// Verifies the endpoint answers asynchronous JSON-RPC requests before
    /// any contract work starts. Returns the chain id.
    pub async fn ensure_capable(&self) -> ContractResult<u64> {
        let chain_id = self.provider.get_chain_id().await.map_err(|e| {
            ContractError::Web3Error(format!("RPC endpoint is not usable: {e}"))
        })?;
        info!("Connected to chain {chain_id} as {}", self.address);
        Ok(chain_id)
    }

    pub async fn get_balance(&self) -> ContractResult<U256> {
        Ok(self.provider.get_balance(self.address).await?)
    }
}
