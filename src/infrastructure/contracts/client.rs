use std::sync::Arc;

use async_trait::async_trait;
use ethers::{
    contract::Contract,
    middleware::SignerMiddleware,
    providers::{Http, Middleware, Provider},
    signers::{LocalWallet, Signer},
    types::{Address, H256, U256},
};
use tracing::{debug, info};

use crate::domain::models::{NoteBox, TransactionId};
use crate::domain::services::{ContractError, NoteBoxContract};
use crate::infrastructure::contracts::types::{NetworkConfig, NoteBoxDeployment};

type SignedProvider = SignerMiddleware<Provider<Http>, LocalWallet>;

// Contract client for the deployed NoteBoxFactory
#[derive(Clone)]
pub struct ContractClient {
    network_config: NetworkConfig,
    notebox_factory: Contract<SignedProvider>,
}

impl ContractClient {
    pub async fn new(
        network_config: NetworkConfig,
        private_key: String,
        deployment: NoteBoxDeployment,
    ) -> Result<Self, ContractError> {
        // Create provider
        let provider = Provider::<Http>::try_from(network_config.rpc_url.as_str())
            .map_err(|e| ContractError::RpcError(e.to_string()))?;

        let chain_id = provider
            .get_chainid()
            .await
            .map_err(|e| ContractError::RpcError(e.to_string()))?;
        if chain_id != U256::from(network_config.chain_id) {
            return Err(ContractError::RpcError(format!(
                "{} reports chain id {}, expected {}",
                network_config.rpc_url, chain_id, network_config.chain_id
            )));
        }

        // Create wallet
        let wallet = private_key
            .trim()
            .parse::<LocalWallet>()
            .map_err(|e| ContractError::InvalidSignature { reason: e.to_string() })?
            .with_chain_id(network_config.chain_id);

        info!(
            "Connected to {} (chain {}) as {:?}",
            network_config.name,
            network_config.chain_id,
            wallet.address()
        );

        let client = Arc::new(SignerMiddleware::new(provider, wallet));
        let notebox_factory = Contract::new(deployment.address, deployment.abi, client);

        Ok(Self {
            network_config,
            notebox_factory,
        })
    }

    pub fn network_config(&self) -> &NetworkConfig {
        &self.network_config
    }

    /// Send `requestNewRandomNoteBox` and wait for it to be mined
    pub async fn request_new_random_notebox(
        &self,
        quantity: U256,
        label: &str,
    ) -> Result<TransactionId, ContractError> {
        let call = self
            .notebox_factory
            .method::<_, H256>("requestNewRandomNoteBox", (quantity, label.to_string()))
            .map_err(|e| ContractError::ContractCallError(e.to_string()))?;

        let call = match self.network_config.gas_settings.default_gas_limit {
            Some(gas_limit) => call.gas(gas_limit),
            None => call,
        };

        // send the transaction
        let pending_tx = call
            .send()
            .await
            .map_err(|e| ContractError::TransactionError(e.to_string()))?;
        debug!("Submitted transaction {:?}", pending_tx.tx_hash());

        // wait for the transaction to be mined
        let receipt = pending_tx
            .await
            .map_err(|e| ContractError::TransactionError(e.to_string()))?
            .ok_or_else(|| ContractError::TransactionError("Transaction dropped from mempool".to_string()))?;

        if let Some(status) = receipt.status {
            if status.as_u64() == 0 {
                return Err(ContractError::TransactionError(format!(
                    "Transaction reverted: {:?}",
                    receipt.transaction_hash
                )));
            }
        }

        debug!(
            "Transaction {:?} mined in block {}",
            receipt.transaction_hash,
            receipt.block_number.unwrap_or_default()
        );

        if let Some(url) = self.network_config.transaction_url(&receipt.transaction_hash) {
            info!("View transaction: {}", url);
        }

        Ok(TransactionId(receipt.transaction_hash))
    }

    /// Read `noteboxes(index)`
    pub async fn get_notebox(&self, index: u64) -> Result<NoteBox, ContractError> {
        let (quantity, label) = self
            .notebox_factory
            .method::<_, (U256, String)>("noteboxes", U256::from(index))
            .map_err(|e| ContractError::ContractCallError(e.to_string()))?
            .call()
            .await
            .map_err(|e| ContractError::ContractCallError(e.to_string()))?;

        Ok(NoteBox { index, quantity, label })
    }
}

#[async_trait]
impl NoteBoxContract for ContractClient {
    fn address(&self) -> Address {
        self.notebox_factory.address()
    }

    async fn submit_create(&self, quantity: U256, label: &str) -> Result<TransactionId, ContractError> {
        self.request_new_random_notebox(quantity, label).await
    }

    async fn fetch_record(&self, index: u64) -> Result<NoteBox, ContractError> {
        self.get_notebox(index).await
    }
}
