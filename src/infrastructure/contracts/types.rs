use std::collections::HashMap;

use ethers::abi::Abi;
use ethers::types::{Address, H256};
use serde::Deserialize;

// ============ CONTRACT CONFIGURATION TYPES ============

/// Network configuration
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    pub chain_id: u64,
    pub name: String,
    pub rpc_url: String,
    pub explorer_url: Option<String>,
    pub gas_settings: GasSettings,
}

impl NetworkConfig {
    /// Short name used in deployment file names.
    pub fn network_key(&self) -> &'static str {
        match self.chain_id {
            LOCAL_CHAIN_ID => "anvil",
            GANACHE_CHAIN_ID => "ganache",
            SEPOLIA_CHAIN_ID => "sepolia",
            _ => "unknown",
        }
    }

    /// Block explorer page for a transaction, on networks that have one.
    pub fn transaction_url(&self, transaction_hash: &H256) -> Option<String> {
        self.explorer_url
            .as_deref()
            .map(|base| format!("{}/tx/{:?}", base.trim_end_matches('/'), transaction_hash))
    }
}

/// Gas settings for a chain
#[derive(Debug, Clone)]
pub struct GasSettings {
    /// Gas limit for `requestNewRandomNoteBox`; `None` lets the node estimate it.
    pub default_gas_limit: Option<u64>,
}

pub const LOCAL_CHAIN_ID: u64 = 31337;
pub const GANACHE_CHAIN_ID: u64 = 1337;
pub const SEPOLIA_CHAIN_ID: u64 = 11155111;

// ============ DEPLOYMENT TYPES ============

/// ABI and address of a deployed NoteBoxFactory
#[derive(Debug, Clone)]
pub struct NoteBoxDeployment {
    pub address: Address,
    pub abi: Abi,
}

/// Build artifact emitted by the contract toolchain.
#[derive(Debug, Deserialize)]
pub struct ContractArtifact {
    #[serde(rename = "contractName", default)]
    pub contract_name: Option<String>,
    pub abi: Abi,
    #[serde(default)]
    pub networks: HashMap<String, ArtifactNetwork>,
}

#[derive(Debug, Deserialize)]
pub struct ArtifactNetwork {
    pub address: String,
    #[serde(rename = "transactionHash", default)]
    pub transaction_hash: Option<String>,
}
