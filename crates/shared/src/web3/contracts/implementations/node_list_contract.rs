use std::sync::Arc;
use std::time::Duration;

use alloy::eips::{BlockId, BlockNumberOrTag};
use alloy::network::{Ethereum, ReceiptResponse, TransactionBuilder};
use alloy::primitives::{Address, TxHash, U256};
use alloy::providers::{PendingTransactionBuilder, Provider};
use async_trait::async_trait;
use log::debug;
use tokio::sync::Mutex;

use crate::web3::contracts::core::contract::Contract;
use crate::web3::contracts::core::error::{ContractError, ContractResult};
use crate::web3::wallet::SenderKind;

const UPDATE_WHITELIST_FN: &str = "updateWhiteList";
const IS_WHITELISTED_FN: &str = "isWhitelisted";

/// Whitelist operations of a node registry contract.
#[async_trait]
pub trait WhitelistRegistry: Send + Sync {
    /// Sets the whitelist flag of `address` within `group_id` and waits for
    /// the transaction to be mined.
    async fn update_whitelist(
        &self,
        group_id: U256,
        address: Address,
        enabled: bool,
    ) -> ContractResult<TxHash>;

    async fn is_whitelisted(&self, group_id: U256, address: Address) -> ContractResult<bool>;
}

#[derive(Clone)]
pub struct NodeListContract {
    pub instance: Contract,
    receipt_timeout: Option<Duration>,
    // Held from nonce lookup until the node accepted the transaction.
    send_lock: Arc<Mutex<()>>,
}

impl NodeListContract {
    pub fn new(instance: Contract) -> Self {
        Self {
            instance,
            receipt_timeout: None,
            send_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn with_receipt_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.receipt_timeout = timeout;
        self
    }

    pub fn address(&self) -> Address {
        self.instance.address()
    }

    /// Broadcasts `updateWhiteList` without waiting for it to be mined.
    ///
    /// Submissions are serialized and a local-key sender reads the pending
    /// nonce from the node every time, so a submission that fails before
    /// broadcast never leaves a gap for the ones after it.
    pub async fn submit_update(
        &self,
        group_id: U256,
        address: Address,
        enabled: bool,
    ) -> ContractResult<PendingTransactionBuilder<Ethereum>> {
        let sender = *self.instance.sender();
        let call = self
            .instance
            .instance()
            .function(
                UPDATE_WHITELIST_FN,
                &[group_id.into(), address.into(), enabled.into()],
            )?
            .from(sender.address);

        let _guard = self.send_lock.lock().await;

        let gas_limit = call.estimate_gas().await?;
        let mut tx = call.into_transaction_request().with_gas_limit(gas_limit);

        if sender.kind == SenderKind::LocalKey {
            let provider = self.instance.provider();
            let gas_price = provider.get_gas_price().await?;
            let nonce = provider
                .get_transaction_count(sender.address)
                .block_id(BlockId::Number(BlockNumberOrTag::Pending))
                .await?;
            tx = tx
                .with_gas_price(gas_price)
                .with_nonce(nonce)
                .with_chain_id(sender.chain_id);
            debug!("Sending {UPDATE_WHITELIST_FN} for {address} with nonce {nonce}");
        }

        let pending = self.instance.provider().send_transaction(tx).await?;
        debug!("Submitted {UPDATE_WHITELIST_FN} for {address}: {}", pending.tx_hash());
        Ok(pending)
    }
}

/// Maps a mined receipt's status onto the update's result.
pub fn receipt_outcome(
    address: Address,
    tx_hash: TxHash,
    succeeded: bool,
) -> ContractResult<TxHash> {
    if succeeded {
        Ok(tx_hash)
    } else {
        Err(ContractError::Reverted {
            address,
            tx_hash: tx_hash.to_string(),
        })
    }
}

#[async_trait]
impl WhitelistRegistry for NodeListContract {
    async fn update_whitelist(
        &self,
        group_id: U256,
        address: Address,
        enabled: bool,
    ) -> ContractResult<TxHash> {
        let pending = self.submit_update(group_id, address, enabled).await?;

        let receipt = pending
            .with_timeout(self.receipt_timeout)
            .get_receipt()
            .await?;

        receipt_outcome(address, receipt.transaction_hash, receipt.status())
    }

    async fn is_whitelisted(&self, group_id: U256, address: Address) -> ContractResult<bool> {
        let result = self
            .instance
            .instance()
            .function(IS_WHITELISTED_FN, &[group_id.into(), address.into()])?
            .call()
            .await?;

        result
            .first()
            .and_then(|value| value.as_bool())
            .ok_or_else(|| {
                ContractError::DecodingError(format!(
                    "{IS_WHITELISTED_FN} did not return a bool for {address}"
                ))
            })
    }
}
