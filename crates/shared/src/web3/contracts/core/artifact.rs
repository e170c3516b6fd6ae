use std::collections::HashMap;
use std::path::Path;

use alloy::json_abi::JsonAbi;
use alloy::primitives::Address;
use serde::Deserialize;

use crate::web3::contracts::core::error::{ContractError, ContractResult};

macro_rules! include_abi {
    ($path:expr) => {{
        const ABI_BYTES: &[u8] = include_bytes!($path);
        ABI_BYTES
    }};
}

/// Deployment record of a Truffle build artifact, keyed by network id.
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkDeployment {
    pub address: Address,
}

/// Truffle-style build artifact: interface plus per-network deployments.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    #[serde(default)]
    pub contract_name: Option<String>,
    pub abi: JsonAbi,
    #[serde(default)]
    pub networks: HashMap<String, NetworkDeployment>,
}

impl ContractArtifact {
    pub fn from_file(path: impl AsRef<Path>) -> ContractResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            ContractError::ArtifactReadError(format!("{}: {e}", path.display()))
        })?;
        Self::from_slice(&bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> ContractResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// NodeList interface compiled into the binary. Carries no deployments,
    /// so the contract address has to be supplied separately.
    pub fn embedded_node_list() -> ContractResult<Self> {
        let abi: JsonAbi =
            serde_json::from_slice(include_abi!("../../../../artifacts/abi/node_list.json"))?;
        Ok(Self {
            contract_name: Some("NodeList".to_string()),
            abi,
            networks: HashMap::new(),
        })
    }

    pub fn name(&self) -> &str {
        self.contract_name.as_deref().unwrap_or("contract")
    }

    pub fn address_for_network(&self, network_id: u64) -> ContractResult<Address> {
        self.networks
            .get(&network_id.to_string())
            .map(|deployment| deployment.address)
            .ok_or(ContractError::NotDeployed { network_id })
    }

    pub fn has_function(&self, name: &str) -> bool {
        self.abi.function(name).is_some_and(|overloads| !overloads.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TRUFFLE_ARTIFACT: &str = r#"{
        "contractName": "NodeList",
        "abi": [
            {
                "inputs": [
                    { "name": "epoch", "type": "uint256" },
                    { "name": "nodeAddress", "type": "address" },
                    { "name": "allowed", "type": "bool" }
                ],
                "name": "updateWhiteList",
                "outputs": [],
                "stateMutability": "nonpayable",
                "type": "function"
            }
        ],
        "networks": {
            "1337": {
                "address": "0x4c5b8e5f0f0a4d5f6b3c2a1908f7e6d5c4b3a291",
                "transactionHash": "0x01"
            }
        }
    }"#;

    #[test]
    fn test_address_for_known_network() {
        let artifact = ContractArtifact::from_slice(TRUFFLE_ARTIFACT.as_bytes()).unwrap();
        let address = artifact.address_for_network(1337).unwrap();
        assert_eq!(
            address,
            "0x4c5b8e5f0f0a4d5f6b3c2a1908f7e6d5c4b3a291"
                .parse::<Address>()
                .unwrap()
        );
        assert_eq!(artifact.name(), "NodeList");
    }

    #[test]
    fn test_unknown_network_is_not_deployed() {
        let artifact = ContractArtifact::from_slice(TRUFFLE_ARTIFACT.as_bytes()).unwrap();
        match artifact.address_for_network(5) {
            Err(ContractError::NotDeployed { network_id }) => assert_eq!(network_id, 5),
            other => panic!("expected NotDeployed, got {other:?}"),
        }
    }

    #[test]
    fn test_embedded_abi_exposes_node_list_functions() {
        let artifact = ContractArtifact::embedded_node_list().unwrap();
        assert!(artifact.has_function("updateWhiteList"));
        assert!(artifact.has_function("isWhitelisted"));
        assert!(!artifact.has_function("whitelistProvider"));
        assert!(artifact.networks.is_empty());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TRUFFLE_ARTIFACT.as_bytes()).unwrap();

        let artifact = ContractArtifact::from_file(file.path()).unwrap();
        assert!(artifact.has_function("updateWhiteList"));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let result = ContractArtifact::from_file("/nonexistent/NodeList.json");
        assert!(matches!(result, Err(ContractError::ArtifactReadError(_))));
    }

    #[test]
    fn test_malformed_artifact_is_parse_error() {
        let result = ContractArtifact::from_slice(b"{\"abi\": 42}");
        assert!(matches!(result, Err(ContractError::AbiParseError(_))));
    }
}
