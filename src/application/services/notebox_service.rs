use std::sync::Arc;

use tracing::info;

use crate::domain::models::{CreateNoteBoxRequest, CreateNoteBoxResponse, NoteBox};
use crate::domain::services::{ContractError, NoteBoxContract};
use crate::infrastructure::contracts::addresses::load_notebox_deployment;
use crate::infrastructure::contracts::client::ContractClient;
use crate::infrastructure::contracts::config::{get_current_network_config, get_private_key};

/// Runs one NoteBoxFactory interaction per script invocation.
pub struct NoteBoxService<C: NoteBoxContract + ?Sized> {
    contract: Arc<C>,
}

impl NoteBoxService<ContractClient> {
    /// Create a service against the deployment configured in the environment
    pub async fn from_env() -> Result<Self, ContractError> {
        let network_config = get_current_network_config()?;
        let private_key = get_private_key(&network_config)?;
        let deployment = load_notebox_deployment(&network_config)?;

        let client = ContractClient::new(network_config, private_key, deployment).await?;
        Ok(Self::new(Arc::new(client)))
    }
}

impl<C: NoteBoxContract + ?Sized> NoteBoxService<C> {
    pub fn new(contract: Arc<C>) -> Self {
        Self { contract }
    }

    pub fn contract(&self) -> &C {
        &self.contract
    }

    pub async fn generate(&self, request: CreateNoteBoxRequest) -> Result<CreateNoteBoxResponse, ContractError> {
        let contract_address = self.contract.address();
        info!("Creating requests on contract: {:?}", contract_address);

        let transaction_hash = self
            .contract
            .submit_create(request.quantity, &request.label)
            .await?;
        info!("Request submitted in transaction {}", transaction_hash);

        Ok(CreateNoteBoxResponse {
            contract_address,
            transaction_hash,
        })
    }

    pub async fn overview(&self, index: u64) -> Result<NoteBox, ContractError> {
        info!("Let's get the overview of your noteBox!");
        self.contract.fetch_record(index).await
    }
}
