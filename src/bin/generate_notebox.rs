use clap::Parser;
use dotenvy::dotenv;
use ethers::types::U256;
use tracing::error;
use tracing_subscriber::EnvFilter;

use notebox_client::application::services::NoteBoxService;
use notebox_client::domain::models::CreateNoteBoxRequest;

/// Request a new NoteBox from the deployed NoteBoxFactory
#[derive(Debug, Parser)]
#[command(name = "generate_notebox", version)]
struct Args {
    /// Quantity stored in the new NoteBox (uint256, decimal or 0x-hex)
    #[arg(long, default_value = "77", value_parser = CreateNoteBoxRequest::parse_quantity)]
    quantity: U256,

    /// Label stored in the new NoteBox
    #[arg(long, default_value = "This Note Might Be Burnable")]
    label: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let service = NoteBoxService::from_env().await.map_err(|e| {
        error!("Failed to connect to NoteBoxFactory: {}", e);
        e
    })?;

    let request = CreateNoteBoxRequest::new(args.quantity, args.label);
    let response = service.generate(request).await.map_err(|e| {
        error!("requestNewRandomNoteBox failed: {}", e);
        e
    })?;

    println!("{}", response.transaction_hash);
    Ok(())
}
