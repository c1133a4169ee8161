//! Inclusion Proofs
//!
//! Data model and verification engine for Merkle inclusion proofs
//! over the append-only VCP event log. Verification runs entirely
//! locally and never trusts the server that supplied the proof.

pub mod algo;
pub mod types;
pub mod verify;

pub use algo::HashAlgorithm;
pub use types::{FailureReason, MerkleProof, Position, ProofStep, VerificationResult};
pub use verify::verify;
