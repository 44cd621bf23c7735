use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use ethers::types::Address;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::domain::services::ContractError;
use crate::infrastructure::contracts::abis::{self, NOTEBOX_FACTORY_ABI_FILE};
use crate::infrastructure::contracts::config::get_network_config_by_chain_id;
use crate::infrastructure::contracts::types::{ContractArtifact, NetworkConfig, NoteBoxDeployment};

pub const NOTEBOX_FACTORY: &str = "NoteBoxFactory";
pub const DEFAULT_ARTIFACT_PATH: &str = "build/contracts/NoteBoxFactory.json";
pub const ADDRESSES_DIR: &str = "src/infrastructure/contracts/addresses";

/// Where to look for the deployed NoteBoxFactory and its ABI.
#[derive(Debug, Clone)]
pub struct AddressSources {
    pub address_override: Option<String>,
    pub artifact_path: PathBuf,
    pub addresses_dir: PathBuf,
    pub abi_dir: PathBuf,
}

impl AddressSources {
    pub fn from_env() -> Self {
        Self {
            address_override: std::env::var("NOTEBOX_FACTORY_ADDRESS").ok(),
            artifact_path: std::env::var("NOTEBOX_ARTIFACT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_ARTIFACT_PATH)),
            addresses_dir: PathBuf::from(ADDRESSES_DIR),
            abi_dir: abis::abi_dir(),
        }
    }
}

/// ABI and address of the NoteBoxFactory deployed on the configured network.
pub fn load_notebox_deployment(network: &NetworkConfig) -> Result<NoteBoxDeployment, ContractError> {
    load_notebox_deployment_from(network, &AddressSources::from_env())
}

pub fn load_notebox_deployment_from(
    network: &NetworkConfig,
    sources: &AddressSources,
) -> Result<NoteBoxDeployment, ContractError> {
    let address = resolve_notebox_factory_address(network, sources)?;

    // Prefer the bundled ABI, fall back to the one inside the artifact
    let abi = match abis::load_abi_from_path(&sources.abi_dir.join(NOTEBOX_FACTORY_ABI_FILE)) {
        Ok(abi) => abi,
        Err(e) if sources.artifact_path.exists() => {
            debug!("Bundled ABI unavailable ({}), using {}", e, sources.artifact_path.display());
            abis::load_abi_from_path(&sources.artifact_path)?
        }
        Err(e) => return Err(e),
    };

    Ok(NoteBoxDeployment { address, abi })
}

pub fn resolve_notebox_factory_address(
    network: &NetworkConfig,
    sources: &AddressSources,
) -> Result<Address, ContractError> {
    if let Some(address) = sources.address_override.as_deref().filter(|a| !a.trim().is_empty()) {
        info!("Using NoteBoxFactory address from environment");
        return parse_address(NOTEBOX_FACTORY, address);
    }

    if sources.artifact_path.exists() {
        let artifact = abis::load_artifact(&sources.artifact_path)?;
        if let Some(deployed) = artifact.networks.get(&network.chain_id.to_string()) {
            debug!(
                "Found {} in artifact {}",
                artifact.contract_name.as_deref().unwrap_or(NOTEBOX_FACTORY),
                sources.artifact_path.display()
            );
            return parse_address(NOTEBOX_FACTORY, &deployed.address);
        }
    }

    let addresses_file = sources
        .addresses_dir
        .join(format!("deployed_addresses_{}.json", network.network_key()));
    if addresses_file.exists() {
        let addresses = load_addresses_from_file(&addresses_file)?;
        if let Some(address) = addresses.get(NOTEBOX_FACTORY) {
            return parse_address(NOTEBOX_FACTORY, address);
        }
    }

    Err(ContractError::ContractNotDeployed { chain_id: network.chain_id })
}

// ============ ARTIFACT EXTRACTION ============

/// A NoteBoxFactory deployment found in a build artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedAddress {
    pub chain_id: u64,
    pub network_key: &'static str,
    pub address: Address,
    pub transaction_hash: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DeploymentExtraction {
    pub abi_path: PathBuf,
    pub addresses: Vec<ExtractedAddress>,
    /// Chain ids present in the artifact that no network config exists for.
    pub skipped_chains: Vec<String>,
}

/// Copy the ABI and every supported network's address out of a build artifact.
///
/// All entries are validated before anything is written, so a bad address
/// leaves the ABI and address files untouched.
pub fn extract_deployment(
    artifact_path: &Path,
    abi_dir: &Path,
    addresses_dir: &Path,
) -> Result<DeploymentExtraction, ContractError> {
    let content = fs::read_to_string(artifact_path).map_err(|e| {
        ContractError::AbiError(format!("Failed to read artifact {}: {}", artifact_path.display(), e))
    })?;
    let raw: Value = serde_json::from_str(&content).map_err(|e| {
        ContractError::AbiError(format!("Failed to parse artifact {}: {}", artifact_path.display(), e))
    })?;
    let abi = raw.get("abi").cloned().ok_or_else(|| {
        ContractError::AbiError(format!("Artifact {} has no abi", artifact_path.display()))
    })?;
    let artifact: ContractArtifact = serde_json::from_value(raw).map_err(|e| {
        ContractError::AbiError(format!("Failed to parse artifact {}: {}", artifact_path.display(), e))
    })?;

    let mut addresses = Vec::new();
    let mut skipped_chains = Vec::new();

    // sorted so output and errors do not depend on map order
    let networks: BTreeMap<_, _> = artifact.networks.iter().collect();
    for (chain_key, deployed) in networks {
        let network = match chain_key.parse::<u64>().map(get_network_config_by_chain_id) {
            Ok(Ok(network)) => network,
            _ => {
                warn!("Skipping unsupported chain {}", chain_key);
                skipped_chains.push(chain_key.clone());
                continue;
            }
        };

        let address = deployed.address.trim().parse::<Address>().map_err(|e| {
            ContractError::InvalidAddress(format!(
                "Invalid address {:?} for {} on chain {}: {}",
                deployed.address, NOTEBOX_FACTORY, network.chain_id, e
            ))
        })?;

        addresses.push(ExtractedAddress {
            chain_id: network.chain_id,
            network_key: network.network_key(),
            address,
            transaction_hash: deployed.transaction_hash.clone(),
        });
    }

    let abi_json = serde_json::to_string_pretty(&abi)
        .map_err(|e| ContractError::AbiError(format!("Failed to serialize ABI: {}", e)))?;
    fs::create_dir_all(abi_dir).map_err(|e| write_error(abi_dir, e))?;
    let abi_path = abi_dir.join(NOTEBOX_FACTORY_ABI_FILE);
    fs::write(&abi_path, abi_json).map_err(|e| write_error(&abi_path, e))?;

    for extracted in &addresses {
        save_address(addresses_dir, extracted)?;
    }

    Ok(DeploymentExtraction {
        abi_path,
        addresses,
        skipped_chains,
    })
}

fn save_address(addresses_dir: &Path, extracted: &ExtractedAddress) -> Result<(), ContractError> {
    fs::create_dir_all(addresses_dir).map_err(|e| write_error(addresses_dir, e))?;

    let mut addresses = HashMap::new();
    addresses.insert(NOTEBOX_FACTORY.to_string(), format!("{:?}", extracted.address));

    let addresses_file = addresses_dir.join(format!("deployed_addresses_{}.json", extracted.network_key));
    let content = serde_json::to_string_pretty(&addresses)
        .map_err(|e| ContractError::ConfigError(format!("Failed to serialize addresses: {}", e)))?;
    fs::write(&addresses_file, content).map_err(|e| write_error(&addresses_file, e))
}

fn write_error(path: &Path, e: std::io::Error) -> ContractError {
    ContractError::ConfigError(format!("Failed to write {}: {}", path.display(), e))
}

// Load addresses from JSON file
fn load_addresses_from_file(file_path: &Path) -> Result<HashMap<String, String>, ContractError> {
    let content = fs::read_to_string(file_path).map_err(|e| {
        ContractError::ConfigError(format!("Failed to read addresses file {}: {}", file_path.display(), e))
    })?;

    serde_json::from_str(&content).map_err(|e| {
        ContractError::ConfigError(format!(
            "Failed to parse addresses JSON from {}: {}",
            file_path.display(),
            e
        ))
    })
}

fn parse_address(name: &str, value: &str) -> Result<Address, ContractError> {
    value
        .trim()
        .parse::<Address>()
        .map_err(|e| ContractError::InvalidAddress(format!("Invalid address for {}: {}", name, e)))
}
