use async_trait::async_trait;
use ethers::types::{Address, U256};

use crate::domain::models::{NoteBox, TransactionId};

// ============ CONTRACT ERROR TYPES ============

#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    #[error("RPC error: {0}")]
    RpcError(String),
    #[error("Invalid signature: {reason}")]
    InvalidSignature { reason: String },
    #[error("Contract call error: {0}")]
    ContractCallError(String),
    #[error("Transaction error: {0}")]
    TransactionError(String),
    #[error("Invalid address: {0}")]
    InvalidAddress(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("ABI error: {0}")]
    AbiError(String),
    #[error("NoteBoxFactory is not deployed on chain {chain_id}")]
    ContractNotDeployed { chain_id: u64 },
    #[error("Unsupported chain: {chain_id}")]
    UnsupportedChain { chain_id: u64 },
    #[error("NoteBox not found at index {index}")]
    RecordNotFound { index: u64 },
}

impl From<ethers::contract::AbiError> for ContractError {
    fn from(err: ethers::contract::AbiError) -> Self {
        ContractError::AbiError(err.to_string())
    }
}

// ============ CONTRACT INTERFACE ============

/// The two calls made against a deployed NoteBoxFactory.
#[async_trait]
pub trait NoteBoxContract: Send + Sync {
    /// Address of the contract instance calls are sent to.
    fn address(&self) -> Address;

    /// `requestNewRandomNoteBox(quantity, label)`; returns the transaction hash.
    async fn submit_create(&self, quantity: U256, label: &str) -> Result<TransactionId, ContractError>;

    /// `noteboxes(index)`; read-only.
    async fn fetch_record(&self, index: u64) -> Result<NoteBox, ContractError>;
}
