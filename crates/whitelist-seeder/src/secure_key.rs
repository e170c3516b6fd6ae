use eyre::{eyre, Context, Result};
use std::env;

/// Where the signing key comes from. Without one, transactions are sent
/// from the node's first unlocked account.
#[derive(Debug, PartialEq, Eq)]
pub enum KeySource {
    Environment(String),
    File(String),
    NodeAccount,
}

impl KeySource {
    pub fn from_arg(key_arg: Option<&str>) -> Result<Self> {
        match key_arg {
            Some(key) => {
                if let Some(var_name) = key.strip_prefix("env:") {
                    Ok(Self::Environment(var_name.to_string()))
                } else if let Some(path) = key.strip_prefix("file:") {
                    Ok(Self::File(path.to_string()))
                } else {
                    log::warn!("Direct private key arguments are rejected for security reasons");
                    Err(eyre!(
                        "Use 'env:VAR_NAME' or 'file:/path/to/key' to provide a private key"
                    ))
                }
            }
            None => Ok(Self::NodeAccount),
        }
    }

    pub fn resolve(&self) -> Result<Option<String>> {
        match self {
            Self::Environment(var_name) => env::var(var_name)
                .with_context(|| format!("Environment variable {var_name} not found"))
                .map(Some),
            Self::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read private key from file: {path}"))
                .map(|s| Some(s.trim().to_string())),
            Self::NodeAccount => Ok(None),
        }
    }
}

pub fn get_private_key(key_arg: Option<&str>) -> Result<Option<String>> {
    KeySource::from_arg(key_arg)?.resolve()
}
