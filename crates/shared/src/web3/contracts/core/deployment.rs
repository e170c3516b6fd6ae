use std::time::Duration;

use alloy::primitives::Address;
use alloy::providers::{DynProvider, Provider};
use async_trait::async_trait;
use log::{debug, info};

use crate::web3::contracts::core::artifact::ContractArtifact;
use crate::web3::contracts::core::contract::{Contract, Sender};
use crate::web3::contracts::core::error::{ContractError, ContractResult};
use crate::web3::contracts::implementations::node_list_contract::{
    NodeListContract, WhitelistRegistry,
};
use crate::web3::wallet::{SenderKind, Wallet};

/// Resolves an already-published contract into something that can be called.
#[async_trait]
pub trait ResolveDeployment: Send + Sync {
    type Registry: WhitelistRegistry;

    async fn deployed(&self) -> ContractResult<Self::Registry>;
}

/// Pairing of a build artifact with the network the wallet is connected to.
pub struct Deployment {
    provider: DynProvider,
    sender_address: Address,
    sender_kind: SenderKind,
    artifact: ContractArtifact,
    address_override: Option<Address>,
    receipt_timeout: Option<Duration>,
}

impl Deployment {
    pub fn new(wallet: &Wallet, artifact: ContractArtifact) -> Self {
        Self {
            provider: wallet.provider.clone(),
            sender_address: wallet.address(),
            sender_kind: wallet.kind,
            artifact,
            address_override: None,
            receipt_timeout: None,
        }
    }

    /// Skips the artifact's network table and uses this address instead.
    pub fn with_address(mut self, address: Option<Address>) -> Self {
        self.address_override = address;
        self
    }

    pub fn with_receipt_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.receipt_timeout = timeout;
        self
    }

    async fn resolve_address(&self) -> ContractResult<Address> {
        if let Some(address) = self.address_override {
            debug!("Using explicit {} address {address}", self.artifact.name());
            return Ok(address);
        }
        let network_id = self.provider.get_net_version().await?;
        debug!("Detected network id {network_id}");
        self.artifact.address_for_network(network_id)
    }
}

#[async_trait]
impl ResolveDeployment for Deployment {
    type Registry = NodeListContract;

    async fn deployed(&self) -> ContractResult<NodeListContract> {
        let address = self.resolve_address().await?;

        let code = self.provider.get_code_at(address).await?;
        if code.is_empty() {
            return Err(ContractError::NoCodeAtAddress(address));
        }
        let chain_id = self.provider.get_chain_id().await?;

        info!("Resolved {} at {address}", self.artifact.name());
        let sender = Sender {
            address: self.sender_address,
            kind: self.sender_kind,
            chain_id,
        };
        let contract = Contract::new(address, self.provider.clone(), &self.artifact, sender);
        Ok(NodeListContract::new(contract).with_receipt_timeout(self.receipt_timeout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{Bytes, U64};
    use alloy::rpc::client::RpcClient;
    use alloy::transports::mock::Asserter;

    const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const NODE_LIST_ADDRESS: &str = "0x4c5b8e5f0f0a4d5f6b3c2a1908f7e6d5c4b3a291";

    fn artifact() -> ContractArtifact {
        let json = format!(
            r#"{{
                "contractName": "NodeList",
                "abi": [],
                "networks": {{ "1337": {{ "address": "{NODE_LIST_ADDRESS}" }} }}
            }}"#
        );
        ContractArtifact::from_slice(json.as_bytes()).unwrap()
    }

    fn deployment(asserter: &Asserter) -> Deployment {
        let wallet = Wallet::with_client(DEV_KEY, RpcClient::mocked(asserter.clone())).unwrap();
        Deployment::new(&wallet, artifact())
    }

    #[tokio::test]
    async fn test_resolves_address_from_network_table() {
        let asserter = Asserter::new();
        asserter.push_success(&U64::from(1337));
        asserter.push_success(&Bytes::from_static(&[0x60, 0x80, 0x60, 0x40]));
        asserter.push_success(&U64::from(1337));

        let node_list = deployment(&asserter).deployed().await.unwrap();

        assert_eq!(node_list.address(), NODE_LIST_ADDRESS.parse::<Address>().unwrap());
        assert_eq!(node_list.instance.sender().chain_id, 1337);
        assert_eq!(node_list.instance.sender().kind, SenderKind::LocalKey);
    }

    #[tokio::test]
    async fn test_unknown_network_is_not_deployed() {
        let asserter = Asserter::new();
        asserter.push_success(&U64::from(5));

        match deployment(&asserter).deployed().await {
            Err(ContractError::NotDeployed { network_id }) => assert_eq!(network_id, 5),
            Err(e) => panic!("expected NotDeployed, got {e}"),
            Ok(_) => panic!("expected NotDeployed"),
        }
    }

    #[tokio::test]
    async fn test_address_without_code_is_rejected() {
        let asserter = Asserter::new();
        let address: Address = "0x184b56d50300b4cd604a587491cb7bcb0ffc7454".parse().unwrap();
        // The explicit address skips net_version, so the first request is eth_getCode.
        asserter.push_success(&Bytes::new());

        match deployment(&asserter).with_address(Some(address)).deployed().await {
            Err(ContractError::NoCodeAtAddress(missing)) => assert_eq!(missing, address),
            Err(e) => panic!("expected NoCodeAtAddress, got {e}"),
            Ok(_) => panic!("expected NoCodeAtAddress"),
        }
    }

    #[tokio::test]
    async fn test_explicit_address_overrides_network_table() {
        let asserter = Asserter::new();
        let address: Address = "0x184b56d50300b4cd604a587491cb7bcb0ffc7454".parse().unwrap();
        asserter.push_success(&Bytes::from_static(&[0x60, 0x80]));
        asserter.push_success(&U64::from(31337));

        let node_list = deployment(&asserter)
            .with_address(Some(address))
            .deployed()
            .await
            .unwrap();

        assert_eq!(node_list.address(), address);
        assert_eq!(node_list.instance.sender().chain_id, 31337);
    }

    #[tokio::test]
    async fn test_unreachable_node_fails_resolution() {
        let asserter = Asserter::new();
        asserter.push_failure_msg("connection refused");

        let result = deployment(&asserter).deployed().await;
        assert!(matches!(result, Err(ContractError::Web3Error(_))));
    }
}
