use crate::domain::services::ContractError;
use crate::infrastructure::contracts::types::{
    GasSettings, NetworkConfig, GANACHE_CHAIN_ID, LOCAL_CHAIN_ID, SEPOLIA_CHAIN_ID,
};

/// First account of the default Anvil / Hardhat mnemonic.
pub const DEV_PRIVATE_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// First account of `ganache --deterministic`.
pub const GANACHE_PRIVATE_KEY: &str = "0x4f3edf983ac636a65a842ce7c78d9aa706d3b113bce9c46f30d7d21715b23b1d";

/// Network configuration for `CHAIN_ID`, with `RPC_URL` and `GAS_LIMIT` applied.
pub fn get_current_network_config() -> Result<NetworkConfig, ContractError> {
    network_config_from_values(
        std::env::var("CHAIN_ID").ok(),
        std::env::var("RPC_URL").ok(),
        std::env::var("GAS_LIMIT").ok(),
    )
}

pub fn network_config_from_values(
    chain_id: Option<String>,
    rpc_url: Option<String>,
    gas_limit: Option<String>,
) -> Result<NetworkConfig, ContractError> {
    let chain_id = match chain_id.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
        Some(value) => value
            .parse::<u64>()
            .map_err(|e| ContractError::ConfigError(format!("Invalid CHAIN_ID {:?}: {}", value, e)))?,
        None => LOCAL_CHAIN_ID,
    };

    let mut config = get_network_config_by_chain_id(chain_id)?;

    if let Some(rpc_url) = rpc_url.filter(|url| !url.trim().is_empty()) {
        config.rpc_url = rpc_url;
    }

    if let Some(gas_limit) = gas_limit.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
        let gas_limit = gas_limit
            .parse::<u64>()
            .map_err(|e| ContractError::ConfigError(format!("Invalid GAS_LIMIT {:?}: {}", gas_limit, e)))?;
        config.gas_settings.default_gas_limit = Some(gas_limit);
    }

    Ok(config)
}

pub fn get_network_config_by_chain_id(chain_id: u64) -> Result<NetworkConfig, ContractError> {
    match chain_id {
        LOCAL_CHAIN_ID => Ok(get_local_network_config()),
        GANACHE_CHAIN_ID => Ok(get_ganache_network_config()),
        SEPOLIA_CHAIN_ID => Ok(get_sepolia_network_config()),
        _ => Err(ContractError::UnsupportedChain { chain_id }),
    }
}

// Anvil / Hardhat node
pub fn get_local_network_config() -> NetworkConfig {
    NetworkConfig {
        chain_id: LOCAL_CHAIN_ID,
        name: "Anvil Local".to_string(),
        rpc_url: "http://localhost:8545".to_string(),
        explorer_url: None,
        gas_settings: GasSettings {
            default_gas_limit: Some(300_000),
        },
    }
}

// Ganache, the default truffle development network
pub fn get_ganache_network_config() -> NetworkConfig {
    NetworkConfig {
        chain_id: GANACHE_CHAIN_ID,
        name: "Ganache".to_string(),
        rpc_url: "http://localhost:7545".to_string(),
        explorer_url: None,
        gas_settings: GasSettings {
            default_gas_limit: Some(300_000),
        },
    }
}

pub fn get_sepolia_network_config() -> NetworkConfig {
    NetworkConfig {
        chain_id: SEPOLIA_CHAIN_ID,
        name: "Sepolia".to_string(),
        rpc_url: "https://ethereum-sepolia-rpc.publicnode.com".to_string(),
        explorer_url: Some("https://sepolia.etherscan.io".to_string()),
        gas_settings: GasSettings {
            default_gas_limit: None,
        },
    }
}

/// Signing key from `PRIVATE_KEY`, falling back to the dev key on local chains.
pub fn get_private_key(config: &NetworkConfig) -> Result<String, ContractError> {
    select_private_key(config, std::env::var("PRIVATE_KEY").ok())
}

pub fn select_private_key(config: &NetworkConfig, from_env: Option<String>) -> Result<String, ContractError> {
    match from_env.filter(|key| !key.trim().is_empty()) {
        Some(key) => Ok(key),
        None => match config.chain_id {
            LOCAL_CHAIN_ID => Ok(DEV_PRIVATE_KEY.to_string()),
            GANACHE_CHAIN_ID => Ok(GANACHE_PRIVATE_KEY.to_string()),
            _ => Err(ContractError::InvalidSignature {
                reason: format!(
                    "PRIVATE_KEY environment variable not set. Required for chain ID: {}",
                    config.chain_id
                ),
            }),
        },
    }
}
