use anyhow::{anyhow, Result};
use clap::{Arg, ArgAction, Command};
use std::path::Path;
use tracing::info;

use vcp_verifier::proof::{verify, MerkleProof};

fn main() -> Result<()> {
    // Parse command line arguments
    let matches = Command::new("verify-proof")
        .version("1.0.0")
        .about("Verify a saved VCP inclusion proof fully offline")
        .arg(
            Arg::new("proof-file")
                .short('f')
                .long("proof-file")
                .value_name("PATH")
                .help("Path to a JSON file holding the inclusion proof")
                .required(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Enable verbose output"),
        )
        .get_matches();

    let proof_path = matches.get_one::<String>("proof-file").unwrap();
    let verbose = matches.get_flag("verbose");

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                if verbose {
                    "vcp_verifier=debug".into()
                } else {
                    "vcp_verifier=info".into()
                }
            }),
        )
        .init();

    if !Path::new(proof_path).exists() {
        return Err(anyhow!("Proof file not found: {}", proof_path));
    }

    let raw = std::fs::read_to_string(proof_path)
        .map_err(|e| anyhow!("Failed to read proof file: {}", e))?;
    let proof: MerkleProof = serde_json::from_str(&raw)
        .map_err(|e| anyhow!("Malformed proof file {}: {}", proof_path, e))?;

    info!("Loaded {}", proof.summary());
    if verbose {
        println!("Event hash:  {}", proof.event_hash);
        println!("Merkle root: {}", proof.merkle_root);
        println!("Proof steps: {}", proof.proof_path.len());
        println!("Tree size:   {}", proof.tree_size);
        println!("Leaf index:  {}", proof.leaf_index);
        println!("Hash algo:   {}", proof.hash_algo);
    }

    let result = verify(&proof);
    println!("{}", result.summary());

    if !result.is_verified() {
        std::process::exit(1);
    }

    Ok(())
}
