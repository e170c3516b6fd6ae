use alloy::{
    contract::{ContractInstance, Interface},
    primitives::Address,
    providers::DynProvider,
};

use crate::web3::contracts::core::artifact::ContractArtifact;
use crate::web3::wallet::SenderKind;

/// Account transactions are sent from and how they get signed.
#[derive(Clone, Copy, Debug)]
pub struct Sender {
    pub address: Address,
    pub kind: SenderKind,
    pub chain_id: u64,
}

#[derive(Clone)]
pub struct Contract {
    instance: ContractInstance<DynProvider>,
    sender: Sender,
}

impl Contract {
    pub fn new(
        address: Address,
        provider: DynProvider,
        artifact: &ContractArtifact,
        sender: Sender,
    ) -> Self {
        let instance =
            ContractInstance::new(address, provider, Interface::new(artifact.abi.clone()));
        Self { instance, sender }
    }

    pub fn instance(&self) -> &ContractInstance<DynProvider> {
        &self.instance
    }

    pub fn address(&self) -> Address {
        *self.instance.address()
    }

    pub fn sender(&self) -> &Sender {
        &self.sender
    }

    pub fn provider(&self) -> &DynProvider {
        self.instance.provider()
    }
}
