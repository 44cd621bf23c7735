use std::fmt;

use ethers::types::{Address, H256, U256};
use serde::{Deserialize, Serialize};

// ============ NOTEBOX MODELS ============

/// A record stored by the NoteBoxFactory contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteBox {
    pub index: u64,
    pub quantity: U256,
    pub label: String,
}

impl fmt::Display for NoteBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NoteBox #{} {{ quantity: {}, label: {:?} }}",
            self.index, self.quantity, self.label
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateNoteBoxRequest {
    pub quantity: U256,
    pub label: String,
}

impl CreateNoteBoxRequest {
    pub fn new(quantity: impl Into<U256>, label: impl Into<String>) -> Self {
        Self {
            quantity: quantity.into(),
            label: label.into(),
        }
    }

    /// Parse a `uint256` quantity given in decimal or `0x`-prefixed hex.
    pub fn parse_quantity(value: &str) -> Result<U256, String> {
        let value = value.trim();
        match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
            Some(hex) if !hex.is_empty() => U256::from_str_radix(hex, 16)
                .map_err(|e| format!("invalid hex quantity {:?}: {}", value, e)),
            Some(_) => Err(format!("invalid hex quantity {:?}", value)),
            None => U256::from_dec_str(value).map_err(|e| format!("invalid quantity {:?}: {}", value, e)),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateNoteBoxResponse {
    pub contract_address: Address,
    pub transaction_hash: TransactionId,
}

/// Hash of a submitted transaction, displayed as 0x-prefixed hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionId(pub H256);

impl TransactionId {
    pub fn is_empty(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // H256's Display elides the middle bytes
        write!(f, "{:?}", self.0)
    }
}

impl From<H256> for TransactionId {
    fn from(hash: H256) -> Self {
        Self(hash)
    }
}
