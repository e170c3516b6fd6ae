pub mod contracts;
pub mod wallet;

pub use contracts::core::deployment::{Deployment, ResolveDeployment};
pub use contracts::core::error::{ContractError, ContractResult};
pub use contracts::implementations::node_list_contract::{NodeListContract, WhitelistRegistry};
pub use wallet::Wallet;
