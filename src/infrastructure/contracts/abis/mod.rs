use std::fs;
use std::path::{Path, PathBuf};

use ethers::abi::Abi;
use serde_json::Value;

use crate::domain::services::ContractError;
use crate::infrastructure::contracts::types::ContractArtifact;

pub const NOTEBOX_FACTORY_ABI_FILE: &str = "noteboxfactory_abi.json";

/// Directory holding the ABI files, `ABI_DIR` or `abis/`.
pub fn abi_dir() -> PathBuf {
    std::env::var("ABI_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("abis"))
}

/// Reads an ABI from either a bare ABI array or a build artifact with an `abi` key.
pub fn load_abi_from_path(path: &Path) -> Result<Abi, ContractError> {
    let abi_content = fs::read_to_string(path).map_err(|e| {
        ContractError::AbiError(format!("Failed to read ABI file {}: {}", path.display(), e))
    })?;

    parse_abi(&abi_content)
        .map_err(|e| ContractError::AbiError(format!("Failed to parse ABI file {}: {}", path.display(), e)))
}

pub fn parse_abi(content: &str) -> Result<Abi, serde_json::Error> {
    let value: Value = serde_json::from_str(content)?;
    match value {
        Value::Object(mut artifact) if artifact.contains_key("abi") => {
            serde_json::from_value(artifact.remove("abi").unwrap_or(Value::Null))
        }
        other => serde_json::from_value(other),
    }
}

pub fn load_artifact(path: &Path) -> Result<ContractArtifact, ContractError> {
    let content = fs::read_to_string(path).map_err(|e| {
        ContractError::AbiError(format!("Failed to read artifact {}: {}", path.display(), e))
    })?;

    serde_json::from_str(&content)
        .map_err(|e| ContractError::AbiError(format!("Failed to parse artifact {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_abi_has_both_functions() {
        let abi = parse_abi(include_str!("../../../../abis/noteboxfactory_abi.json")).unwrap();
        assert!(abi.function("requestNewRandomNoteBox").is_ok());
        assert!(abi.function("noteboxes").is_ok());
    }

    #[test]
    fn abi_is_taken_from_artifact_object() {
        let artifact = r#"{
            "contractName": "NoteBoxFactory",
            "abi": [{
                "inputs": [{ "name": "", "type": "uint256" }],
                "name": "noteboxes",
                "outputs": [{ "name": "quantity", "type": "uint256" }, { "name": "label", "type": "string" }],
                "stateMutability": "view",
                "type": "function"
            }],
            "networks": {}
        }"#;

        let abi = parse_abi(artifact).unwrap();
        let getter = abi.function("noteboxes").unwrap();
        assert_eq!(getter.outputs.len(), 2);
    }

    #[test]
    fn missing_abi_file_is_an_abi_error() {
        let err = load_abi_from_path(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, ContractError::AbiError(_)));
    }
}
