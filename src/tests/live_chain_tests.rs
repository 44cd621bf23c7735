use ethers::types::U256;

use crate::application::services::NoteBoxService;
use crate::domain::models::CreateNoteBoxRequest;
use crate::domain::services::NoteBoxContract;

/// Needs a node at RPC_URL with NoteBoxFactory deployed and resolvable.
pub async fn test_generate_and_read_back() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let service = NoteBoxService::from_env().await?;
    println!(
        "Using NoteBoxFactory at {:?} on {}",
        service.contract().address(),
        service.contract().network_config().name
    );

    let response = service
        .generate(CreateNoteBoxRequest::new(77u64, "This Note Might Be Burnable"))
        .await?;
    println!("   Transaction: {}", response.transaction_hash);
    assert!(!response.transaction_hash.is_empty());

    let notebox = service.overview(0).await?;
    println!("   {}", notebox);
    assert_eq!(notebox.index, 0);
    assert!(notebox.quantity > U256::zero(), "NoteBox 0 should hold a quantity");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires a running node with NoteBoxFactory deployed"]
    async fn test_live_generate_and_read_back() {
        test_generate_and_read_back().await.unwrap();
    }
}
