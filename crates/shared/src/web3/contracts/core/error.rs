use alloy::primitives::Address;
use std::fmt;

#[derive(Debug)]
pub enum ContractError {
    // Initialization errors
    AbiParseError(String),
    ArtifactReadError(String),

    // Deployment resolution errors
    NotDeployed { network_id: u64 },
    NoCodeAtAddress(Address),

    // Contract interaction errors
    CallError(String),
    TransactionError(String),
    Reverted { address: Address, tx_hash: String },

    // Data parsing errors
    DecodingError(String),

    // Generic errors
    Web3Error(String),
}

impl std::error::Error for ContractError {}

impl fmt::Display for ContractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Initialization errors
            ContractError::AbiParseError(msg) => write!(f, "Failed to parse ABI: {msg}"),
            ContractError::ArtifactReadError(msg) => write!(f, "Failed to read artifact: {msg}"),

            // Deployment resolution errors
            ContractError::NotDeployed { network_id } => write!(
                f,
                "Contract has not been deployed to detected network (network id {network_id})"
            ),
            ContractError::NoCodeAtAddress(address) => {
                write!(f, "No contract code found at {address}")
            }

            // Contract interaction errors
            ContractError::CallError(msg) => write!(f, "Contract call failed: {msg}"),
            ContractError::TransactionError(msg) => write!(f, "Transaction failed: {msg}"),
            ContractError::Reverted { address, tx_hash } => {
                write!(f, "Transaction {tx_hash} for {address} reverted")
            }

            // Data parsing errors
            ContractError::DecodingError(msg) => write!(f, "Failed to decode data: {msg}"),

            // Generic errors
            ContractError::Web3Error(msg) => write!(f, "Web3 error: {msg}"),
        }
    }
}

pub type ContractResult<T> = Result<T, ContractError>;

impl From<std::io::Error> for ContractError {
    fn from(err: std::io::Error) -> Self {
        ContractError::ArtifactReadError(err.to_string())
    }
}

impl From<serde_json::Error> for ContractError {
    fn from(err: serde_json::Error) -> Self {
        ContractError::AbiParseError(err.to_string())
    }
}

impl From<alloy::contract::Error> for ContractError {
    fn from(err: alloy::contract::Error) -> Self {
        ContractError::CallError(err.to_string())
    }
}

impl From<alloy::transports::TransportError> for ContractError {
    fn from(err: alloy::transports::TransportError) -> Self {
        ContractError::Web3Error(err.to_string())
    }
}

impl From<alloy::providers::PendingTransactionError> for ContractError {
    fn from(err: alloy::providers::PendingTransactionError) -> Self {
        ContractError::TransactionError(err.to_string())
    }
}
