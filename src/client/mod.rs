//! Explorer API Client
//!
//! Retrieval of events and inclusion proofs from the VCP explorer.
//! Pure I/O: values returned here are handed to the verification engine
//! unchanged, and retrieval failures are never conflated with a failed
//! verification.

pub mod explorer;
pub mod types;

pub use explorer::ExplorerClient;
pub use types::{AnchorInfo, EventPage, EventRecord, SystemStatus};
