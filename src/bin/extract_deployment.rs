use std::path::PathBuf;

use clap::Parser;

use notebox_client::infrastructure::contracts::addresses::{
    extract_deployment, ADDRESSES_DIR, DEFAULT_ARTIFACT_PATH, NOTEBOX_FACTORY,
};

/// Copy the NoteBoxFactory ABI and deployed addresses out of a build artifact
#[derive(Debug, Parser)]
#[command(name = "extract_deployment", version)]
struct Args {
    /// Build artifact produced by the contract toolchain
    #[arg(long, default_value = DEFAULT_ARTIFACT_PATH)]
    artifact: PathBuf,

    /// Where the ABI file is written
    #[arg(long, default_value = "abis")]
    abi_dir: PathBuf,

    /// Where deployed_addresses_<network>.json files are written
    #[arg(long, default_value = ADDRESSES_DIR)]
    addresses_dir: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    println!("Extracting NoteBoxFactory deployment from {}...", args.artifact.display());

    let extraction = extract_deployment(&args.artifact, &args.abi_dir, &args.addresses_dir)?;
    println!("Extracted ABI: {}", extraction.abi_path.display());

    for chain_id in &extraction.skipped_chains {
        println!("Warning: skipped unsupported chain {}", chain_id);
    }

    if extraction.addresses.is_empty() {
        println!("No supported deployments recorded in {}", args.artifact.display());
    }

    for extracted in &extraction.addresses {
        match &extracted.transaction_hash {
            Some(tx) => println!(
                "Extracted address for {} on {}: {:?} (deployed in {})",
                NOTEBOX_FACTORY, extracted.network_key, extracted.address, tx
            ),
            None => println!(
                "Extracted address for {} on {}: {:?}",
                NOTEBOX_FACTORY, extracted.network_key, extracted.address
            ),
        }
    }

    println!("Deployment extraction complete!");
    Ok(())
}
