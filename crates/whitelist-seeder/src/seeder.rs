use std::fmt;

use alloy::primitives::{Address, TxHash, U256};
use futures::stream::{self, StreamExt};
use log::{debug, info};
use shared::web3::{ContractError, ResolveDeployment, WhitelistRegistry};

/// Whitelist group every seeded account is added to.
pub const WHITELIST_GROUP_ID: U256 = U256::ZERO;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WhitelistEntry {
    pub group_id: U256,
    pub address: Address,
    pub enabled: bool,
}

impl WhitelistEntry {
    pub fn enable(address: Address) -> Self {
        Self {
            group_id: WHITELIST_GROUP_ID,
            address,
            enabled: true,
        }
    }
}

#[derive(Debug)]
pub struct SeedOutcome {
    pub entry: WhitelistEntry,
    pub result: Result<TxHash, ContractError>,
}

impl SeedOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcome of every submitted update, in account list order.
#[derive(Debug, Default)]
pub struct SeedReport {
    pub outcomes: Vec<SeedOutcome>,
}

impl SeedReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &SeedOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }

    pub fn into_result(self) -> Result<SeedReport, SeedError> {
        let failed = self.failed();
        if failed == 0 {
            Ok(self)
        } else {
            Err(SeedError::Failed {
                failed,
                total: self.total(),
            })
        }
    }
}

#[derive(Debug)]
pub enum SeedError {
    Resolve(ContractError),
    Failed { failed: usize, total: usize },
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedError::Resolve(e) => write!(f, "Failed to resolve deployed contract: {e}"),
            SeedError::Failed { failed, total } => {
                write!(f, "{failed} of {total} whitelist updates failed")
            }
        }
    }
}

impl std::error::Error for SeedError {}

pub struct WhitelistSeeder {
    max_in_flight: Option<usize>,
}

impl WhitelistSeeder {
    pub fn new(max_in_flight: Option<usize>) -> Self {
        Self { max_in_flight }
    }

    pub fn plan(accounts: &[Address]) -> Vec<WhitelistEntry> {
        accounts.iter().copied().map(WhitelistEntry::enable).collect()
    }

    /// Submits one whitelist update per account. All updates are in flight
    /// together (up to `max_in_flight`) and every one is awaited before the
    /// report is returned. Nothing is submitted if resolution fails.
    pub async fn seed<D: ResolveDeployment>(
        &self,
        deployment: &D,
        accounts: &[Address],
    ) -> Result<SeedReport, SeedError> {
        let registry = deployment.deployed().await.map_err(SeedError::Resolve)?;
        let entries = Self::plan(accounts);
        let limit = self.max_in_flight.unwrap_or(entries.len()).max(1);
        info!("Submitting {} whitelist updates ({limit} in flight)", entries.len());

        let registry = &registry;
        let outcomes = stream::iter(entries)
            .map(|entry| async move {
                debug!("Whitelisting {} in group {}", entry.address, entry.group_id);
                let result = registry
                    .update_whitelist(entry.group_id, entry.address, entry.enabled)
                    .await;
                SeedOutcome { entry, result }
            })
            .buffered(limit)
            .collect::<Vec<_>>()
            .await;

        Ok(SeedReport { outcomes })
    }

    /// Resolves the contract and returns what `seed` would submit.
    pub async fn dry_run<D: ResolveDeployment>(
        &self,
        deployment: &D,
        accounts: &[Address],
    ) -> Result<Vec<WhitelistEntry>, SeedError> {
        deployment.deployed().await.map_err(SeedError::Resolve)?;
        Ok(Self::plan(accounts))
    }

    /// Reads the current whitelist flag of every account.
    pub async fn check<D: ResolveDeployment>(
        &self,
        deployment: &D,
        accounts: &[Address],
    ) -> Result<Vec<(Address, Result<bool, ContractError>)>, SeedError> {
        let registry = deployment.deployed().await.map_err(SeedError::Resolve)?;
        let limit = self.max_in_flight.unwrap_or(accounts.len()).max(1);

        let registry = &registry;
        let statuses = stream::iter(accounts.iter().copied())
            .map(|address| async move {
                let status = registry.is_whitelisted(WHITELIST_GROUP_ID, address).await;
                (address, status)
            })
            .buffered(limit)
            .collect::<Vec<_>>()
            .await;

        Ok(statuses)
    }
}
