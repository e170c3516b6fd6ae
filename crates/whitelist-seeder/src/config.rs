use alloy::primitives::Address;
use eyre::{bail, eyre, Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use shared::web3::contracts::constants::networks::{network_rpc_url, DEFAULT_NETWORK};
use std::path::Path;
use std::time::Duration;
use url::Url;

use crate::accounts::{default_accounts, parse_accounts};

pub const DEFAULT_ARTIFACT_PATH: &str = "build/contracts/NodeList.json";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub network: Option<String>,
    pub rpc_url: Option<String>,
    pub artifact_path: Option<String>,
    pub contract_address: Option<String>,
    pub max_in_flight: Option<usize>,
    pub receipt_timeout_secs: Option<u64>,
    pub accounts: Option<Vec<String>>,
}

impl Config {
    /// Layers the optional TOML file under the environment. The env file is
    /// best effort, a config file named on the command line is not.
    pub fn load(config_path: Option<&str>, env_file: &str) -> Result<Self> {
        if dotenv::from_filename(env_file).is_err() {
            debug!("No env file at {env_file}");
        }

        let mut config = match config_path {
            Some(path) => Self::from_toml_file(Path::new(path))?,
            None => Self::default(),
        };
        config.load_from_env();
        Ok(config)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            bail!("Config file not found: {}", path.display());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn load_from_env(&mut self) {
        if let Ok(rpc_url) = std::env::var("RPC_URL") {
            self.rpc_url = Some(rpc_url);
        }
        if let Ok(path) = std::env::var("NODE_LIST_ARTIFACT") {
            self.artifact_path = Some(path);
        }
        if let Ok(address) = std::env::var("NODE_LIST_ADDRESS") {
            self.contract_address = Some(address);
        }
    }

    pub fn with_network(mut self, network: Option<String>) -> Self {
        if network.is_some() {
            self.network = network;
        }
        self
    }

    pub fn with_rpc_url(mut self, rpc_url: Option<String>) -> Self {
        if rpc_url.is_some() {
            self.rpc_url = rpc_url;
        }
        self
    }

    pub fn with_artifact_path(mut self, path: Option<String>) -> Self {
        if path.is_some() {
            self.artifact_path = path;
        }
        self
    }

    pub fn with_contract_address(mut self, address: Option<String>) -> Self {
        if address.is_some() {
            self.contract_address = address;
        }
        self
    }

    /// An explicit RPC URL wins over the named network.
    pub fn get_rpc_url(&self) -> Result<Url> {
        let raw = match &self.rpc_url {
            Some(url) => url.clone(),
            None => {
                let network = self.network.as_deref().unwrap_or(DEFAULT_NETWORK);
                network_rpc_url(network)
                    .ok_or_else(|| {
                        eyre!("Unknown network '{network}'. Use --rpc-url for custom endpoints")
                    })?
                    .to_string()
            }
        };
        Url::parse(&raw).map_err(|e| eyre!("URL parse error: {e}"))
    }

    pub fn get_artifact_path(&self) -> &str {
        self.artifact_path.as_deref().unwrap_or(DEFAULT_ARTIFACT_PATH)
    }

    pub fn get_contract_address(&self) -> Result<Option<Address>> {
        self.contract_address
            .as_deref()
            .map(|address| {
                address
                    .parse()
                    .map_err(|e| eyre!("Invalid contract address {address}: {e}"))
            })
            .transpose()
    }

    pub fn get_accounts(&self) -> Result<Vec<Address>> {
        match &self.accounts {
            Some(accounts) => parse_accounts(accounts),
            None => default_accounts(),
        }
    }

    pub fn receipt_timeout(&self) -> Option<Duration> {
        self.receipt_timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::web3::contracts::constants::networks::{LOCAL_RPC_URL, STAGING_RPC_URL};
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_to_staging() {
        let config = Config::default();
        assert_eq!(config.get_rpc_url().unwrap(), Url::parse(STAGING_RPC_URL).unwrap());
        assert_eq!(config.get_artifact_path(), DEFAULT_ARTIFACT_PATH);
        assert_eq!(config.get_contract_address().unwrap(), None);
        assert_eq!(config.get_accounts().unwrap().len(), 20);
        assert_eq!(config.receipt_timeout(), None);
    }

    #[test]
    fn test_load_toml_file() {
        let file = write_config(
            r#"
network = "local"
artifact_path = "out/NodeList.json"
contract_address = "0x4c5b8e5f0f0a4d5f6b3c2a1908f7e6d5c4b3a291"
max_in_flight = 4
receipt_timeout_secs = 30
accounts = [
    "0x52c476751142ce2fb4db4f19b500e78feee10b06",
    "0xff364b6b86ea5a4f59cc4989da23b833dac15304",
]
"#,
        );

        let config = Config::from_toml_file(file.path()).unwrap();
        assert_eq!(config.get_rpc_url().unwrap(), Url::parse(LOCAL_RPC_URL).unwrap());
        assert_eq!(config.get_artifact_path(), "out/NodeList.json");
        assert!(config.get_contract_address().unwrap().is_some());
        assert_eq!(config.max_in_flight, Some(4));
        assert_eq!(config.receipt_timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.get_accounts().unwrap().len(), 2);
    }

    #[test]
    fn test_explicit_missing_config_file_fails() {
        let err = Config::load(Some("/nonexistent/seeder.toml"), "/nonexistent/.env").unwrap_err();
        assert!(err.to_string().contains("Config file not found: /nonexistent/seeder.toml"));
    }

    #[test]
    fn test_no_config_file_yields_defaults() {
        let config = Config::load(None, "/nonexistent/.env").unwrap();
        assert!(config.network.is_none());
        assert_eq!(config.max_in_flight, None);
    }

    #[test]
    fn test_invalid_toml_fails() {
        let file = write_config("network = [");
        assert!(Config::from_toml_file(file.path()).is_err());
    }

    #[test]
    fn test_cli_overrides() {
        let config = Config {
            network: Some("local".to_string()),
            ..Default::default()
        }
        .with_network(None)
        .with_rpc_url(Some("http://10.0.0.2:8545".to_string()))
        .with_artifact_path(Some("custom.json".to_string()));

        assert_eq!(config.network.as_deref(), Some("local"));
        assert_eq!(
            config.get_rpc_url().unwrap(),
            Url::parse("http://10.0.0.2:8545").unwrap()
        );
        assert_eq!(config.get_artifact_path(), "custom.json");
    }

    #[test]
    fn test_unknown_network_fails() {
        let config = Config::default().with_network(Some("mainnet".to_string()));
        let err = config.get_rpc_url().unwrap_err();
        assert!(err.to_string().contains("Unknown network"));
    }

    #[test]
    fn test_duplicate_account_override_fails() {
        let config = Config {
            accounts: Some(vec![
                "0x52c476751142ce2fb4db4f19b500e78feee10b06".to_string(),
                "0x52c476751142ce2fb4db4f19b500e78feee10b06".to_string(),
            ]),
            ..Default::default()
        };
        assert!(config.get_accounts().is_err());
    }

    #[test]
    fn test_invalid_contract_address_fails() {
        let config = Config::default().with_contract_address(Some("0xnothex".to_string()));
        assert!(config.get_contract_address().is_err());
    }
}
