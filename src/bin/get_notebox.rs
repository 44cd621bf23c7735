use clap::Parser;
use dotenvy::dotenv;
use tracing::error;
use tracing_subscriber::EnvFilter;

use notebox_client::application::services::NoteBoxService;

/// Print a NoteBox stored by the deployed NoteBoxFactory
#[derive(Debug, Parser)]
#[command(name = "get_notebox", version)]
struct Args {
    /// Index of the NoteBox to read
    #[arg(long, default_value_t = 0)]
    index: u64,

    /// Print the record as JSON
    #[arg(long)]
    json: bool,
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

    let notebox = service.overview(args.index).await.map_err(|e| {
        error!("noteboxes({}) failed: {}", args.index, e);
        e
    })?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&notebox)?);
    } else {
        println!("{}", notebox);
    }

    Ok(())
}
