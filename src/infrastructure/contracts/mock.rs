use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use ethers::abi::{self, Token};
use ethers::types::{Address, H256, U256};
use ethers::utils::keccak256;

use crate::domain::models::{NoteBox, TransactionId};
use crate::domain::services::{ContractError, NoteBoxContract};

/// In-memory NoteBoxFactory. Records are indexed in submission order.
#[derive(Debug, Default)]
pub struct MockNoteBoxFactory {
    address: Address,
    records: Mutex<Vec<(U256, String)>>,
    revert_submissions: bool,
}

impl MockNoteBoxFactory {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            ..Default::default()
        }
    }

    /// A factory whose state-changing calls always revert.
    pub fn reverting(address: Address) -> Self {
        Self {
            address,
            revert_submissions: true,
            ..Default::default()
        }
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }

    fn records(&self) -> MutexGuard<'_, Vec<(U256, String)>> {
        self.records.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl NoteBoxContract for MockNoteBoxFactory {
    fn address(&self) -> Address {
        self.address
    }

    async fn submit_create(&self, quantity: U256, label: &str) -> Result<TransactionId, ContractError> {
        if self.revert_submissions {
            return Err(ContractError::TransactionError("Transaction reverted".to_string()));
        }

        let mut records = self.records();
        let index = records.len();
        records.push((quantity, label.to_string()));

        let encoded = abi::encode(&[
            Token::Address(self.address),
            Token::Uint(U256::from(index)),
            Token::String(label.to_string()),
        ]);
        Ok(TransactionId(H256::from(keccak256(encoded))))
    }

    async fn fetch_record(&self, index: u64) -> Result<NoteBox, ContractError> {
        let records = self.records();
        let (quantity, label) = usize::try_from(index)
            .ok()
            .and_then(|i| records.get(i))
            .cloned()
            .ok_or(ContractError::RecordNotFound { index })?;

        Ok(NoteBox { index, quantity, label })
    }
}
