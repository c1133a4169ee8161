use anyhow::{anyhow, Result};
use clap::{Arg, ArgAction, Command};
use tracing::{error, info};

use vcp_verifier::client::ExplorerClient;
use vcp_verifier::config::AppConfig;
use vcp_verifier::proof::verify;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let matches = Command::new("verify-event")
        .version("1.0.0")
        .about("Fetch a VCP event's inclusion proof and verify it locally")
        .arg(
            Arg::new("event-id")
                .short('e')
                .long("event-id")
                .value_name("ID")
                .help("Event to verify (defaults to the most recent event)"),
        )
        .arg(
            Arg::new("api-base")
                .long("api-base")
                .value_name("URL")
                .help("Explorer API base URL (overrides VCP_API_BASE)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Enable verbose output"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Suppress output except errors"),
        )
        .get_matches();

    let verbose = matches.get_flag("verbose");
    let quiet = matches.get_flag("quiet");

    // Initialize logging based on flags
    let default_filter = if quiet {
        "error"
    } else if verbose {
        "vcp_verifier=debug"
    } else {
        "vcp_verifier=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    let mut config = AppConfig::load().map_err(|e| anyhow!("Failed to load config: {}", e))?;
    if let Some(api_base) = matches.get_one::<String>("api-base") {
        config.api_base = api_base.clone();
    }

    let event_id = matches.get_one::<String>("event-id").cloned();

    if let Err(e) = fetch_and_verify(&config, event_id, verbose, quiet).await {
        error!("Verification run failed: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn fetch_and_verify(
    config: &AppConfig,
    event_id: Option<String>,
    verbose: bool,
    quiet: bool,
) -> Result<()> {
    let client = ExplorerClient::from_config(config)?;

    // System status is served without authentication
    let status = client.system_status().await?;
    if !quiet {
        println!("Explorer status:");
        println!("  Total events: {}", status.total_events);
        println!("  VCP version:  {}", status.vcp_version);
        println!("  API version:  {}", status.api_version);
        if let Some(anchor) = &status.last_anchor {
            println!("  Last anchor:  {} block #{}", anchor.network, anchor.block_number);
        }
    }

    if !client.has_api_key() {
        return Err(anyhow!(
            "No API key configured. Set VCP_API_KEY to fetch events and proofs"
        ));
    }

    // Resolve the event to verify
    let event_id = match event_id {
        Some(id) => id,
        None => {
            let page = client.list_events(1).await?;
            let event = page
                .events
                .first()
                .ok_or_else(|| anyhow!("No events available to verify"))?;
            info!("No event id given, using most recent event");
            event.header.event_id.clone()
        }
    };

    let event = client.fetch_event(&event_id).await?;
    if !quiet {
        println!("\nEvent: {}", event.summary());
    }

    let proof = client.fetch_proof(&event_id).await?;
    if verbose {
        println!("Proof: {}", proof.summary());
        println!("  Leaf index: {}", proof.leaf_index);
        println!("  Hash algo:  {}", proof.hash_algo);
    }

    // The proof must speak for the event the server described; a mismatch
    // here means the server handed back a proof for something else.
    if event.security.event_hash != proof.event_hash {
        println!(
            "❌ Event/proof mismatch: event claims hash {}, proof covers {}",
            event.security.event_hash, proof.event_hash
        );
        std::process::exit(1);
    }

    // Local verification: no server trust required
    let result = verify(&proof);
    if !quiet {
        println!("\n{}", result.summary());
    }

    if !result.is_verified() {
        std::process::exit(1);
    }

    if !quiet {
        println!("   The event is included in the published log commitment.");
        println!("   The proof was verified on this machine; any tampering would have been detected.");
    }

    Ok(())
}
