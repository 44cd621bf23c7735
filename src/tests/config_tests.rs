use crate::domain::services::ContractError;
use ethers::types::H256;

use crate::infrastructure::contracts::config::{
    get_network_config_by_chain_id, network_config_from_values, select_private_key, DEV_PRIVATE_KEY,
    GANACHE_PRIVATE_KEY,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_chains() {
        assert_eq!(get_network_config_by_chain_id(31337).unwrap().network_key(), "anvil");
        assert_eq!(get_network_config_by_chain_id(1337).unwrap().network_key(), "ganache");
        assert_eq!(get_network_config_by_chain_id(11155111).unwrap().network_key(), "sepolia");
    }

    #[test]
    fn test_unknown_chain_is_rejected() {
        let err = get_network_config_by_chain_id(1).unwrap_err();
        assert!(matches!(err, ContractError::UnsupportedChain { chain_id: 1 }));
    }

    #[test]
    fn test_dev_keys_only_on_local_chains() {
        let anvil = get_network_config_by_chain_id(31337).unwrap();
        assert_eq!(select_private_key(&anvil, None).unwrap(), DEV_PRIVATE_KEY);

        let ganache = get_network_config_by_chain_id(1337).unwrap();
        assert_eq!(select_private_key(&ganache, Some("  ".to_string())).unwrap(), GANACHE_PRIVATE_KEY);

        let sepolia = get_network_config_by_chain_id(11155111).unwrap();
        let err = select_private_key(&sepolia, None).unwrap_err();
        assert!(matches!(err, ContractError::InvalidSignature { .. }));
    }

    #[test]
    fn test_explicit_key_wins() {
        let sepolia = get_network_config_by_chain_id(11155111).unwrap();
        let key = "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d".to_string();
        assert_eq!(select_private_key(&sepolia, Some(key.clone())).unwrap(), key);
    }

    #[test]
    fn test_gas_limit_defaults() {
        assert_eq!(
            get_network_config_by_chain_id(31337).unwrap().gas_settings.default_gas_limit,
            Some(300_000)
        );
        assert_eq!(
            get_network_config_by_chain_id(11155111).unwrap().gas_settings.default_gas_limit,
            None
        );
    }

    #[test]
    fn test_chain_id_defaults_to_local() {
        let config = network_config_from_values(None, None, None).unwrap();
        assert_eq!(config.chain_id, 31337);
        assert_eq!(config.rpc_url, "http://localhost:8545");

        let config = network_config_from_values(Some(" ".to_string()), None, None).unwrap();
        assert_eq!(config.chain_id, 31337);
    }

    #[test]
    fn test_chain_id_selects_network() {
        let config = network_config_from_values(Some("11155111".to_string()), None, None).unwrap();
        assert_eq!(config.name, "Sepolia");
    }

    #[test]
    fn test_malformed_chain_id_is_a_config_error() {
        let err = network_config_from_values(Some("sepolia".to_string()), None, None).unwrap_err();
        assert!(matches!(err, ContractError::ConfigError(_)));
        assert!(err.to_string().contains("CHAIN_ID"));
    }

    #[test]
    fn test_unsupported_chain_id_from_env() {
        let err = network_config_from_values(Some("5".to_string()), None, None).unwrap_err();
        assert!(matches!(err, ContractError::UnsupportedChain { chain_id: 5 }));
    }

    #[test]
    fn test_rpc_url_override() {
        let config = network_config_from_values(
            Some("1337".to_string()),
            Some("http://127.0.0.1:9545".to_string()),
            None,
        )
        .unwrap();
        assert_eq!(config.rpc_url, "http://127.0.0.1:9545");
    }

    #[test]
    fn test_gas_limit_override() {
        let config = network_config_from_values(Some("11155111".to_string()), None, Some("250000".to_string())).unwrap();
        assert_eq!(config.gas_settings.default_gas_limit, Some(250_000));
    }

    #[test]
    fn test_malformed_gas_limit_is_a_config_error() {
        let err = network_config_from_values(None, None, Some("lots".to_string())).unwrap_err();
        assert!(matches!(err, ContractError::ConfigError(_)));
        assert!(err.to_string().contains("GAS_LIMIT"));
    }

    #[test]
    fn test_transaction_url_only_with_explorer() {
        let hash = H256::repeat_byte(0xab);

        let sepolia = get_network_config_by_chain_id(11155111).unwrap();
        assert_eq!(
            sepolia.transaction_url(&hash).unwrap(),
            format!("https://sepolia.etherscan.io/tx/0x{}", "ab".repeat(32))
        );

        let anvil = get_network_config_by_chain_id(31337).unwrap();
        assert_eq!(anvil.transaction_url(&hash), None);
    }
}
