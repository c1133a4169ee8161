//! Explorer API Wire Types
//!
//! JSON shapes served by the explorer. Field names follow the wire format
//! exactly; the verifier treats events as opaque apart from the header id
//! and the security block.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Event header as recorded in the log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventHeader {
    pub event_id: String,
    pub trace_id: String,
    pub timestamp_int: String,
    pub timestamp_iso: DateTime<Utc>,
    pub event_type: String,
    pub event_type_code: u32,
    pub venue_id: String,
    pub symbol: String,
    pub account_id: String,
}

/// Security block linking an event into the hash chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventSecurity {
    pub prev_hash: String,
    pub event_hash: String,
    pub hash_algo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

/// One committed event as served by the explorer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    pub header: EventHeader,
    #[serde(default)]
    pub payload: Value,
    pub security: EventSecurity,
}

impl EventRecord {
    /// Get a human-readable one-line summary.
    pub fn summary(&self) -> String {
        format!(
            "{} | {} | {} | {}",
            self.header.event_type,
            self.header.symbol,
            self.header.event_id,
            self.header.timestamp_iso.to_rfc3339()
        )
    }
}

/// Page of events returned by the listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventPage {
    #[serde(default)]
    pub events: Vec<EventRecord>,
    #[serde(default)]
    pub total_count: u64,
}

/// Most recent external-ledger anchor of the log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnchorInfo {
    pub network: String,
    pub block_number: u64,
}

/// Explorer system status. Served without authentication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemStatus {
    #[serde(default)]
    pub total_events: u64,
    #[serde(default = "default_vcp_version")]
    pub vcp_version: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_anchor: Option<AnchorInfo>,
}

fn default_vcp_version() -> String {
    "1.0".to_string()
}

fn default_api_version() -> String {
    "1.1".to_string()
}
