//! Inclusion Proof Data Model
//!
//! Wire-faithful types for Merkle inclusion proofs as served by the
//! explorer API, plus the engine's verification verdict.

use serde::{Deserialize, Serialize};

/// Byte length of every digest in a proof.
pub const DIGEST_LEN: usize = 32;

/// Side on which a sibling hash sits when combining one level up the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Left,
    Right,
}

impl Position {
    /// The opposite side.
    pub fn flipped(self) -> Self {
        match self {
            Position::Left => Position::Right,
            Position::Right => Position::Left,
        }
    }
}

/// One step of the audit path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStep {
    /// Sibling hash as 64 lowercase hex characters.
    pub hash: String,
    /// Which side of the running hash the sibling occupies.
    pub position: Position,
}

/// Inclusion proof for a single event in the append-only log.
///
/// `proof_path` is ordered leaf-to-root. `tree_size` and `leaf_index` are
/// advisory metadata; the cryptographic verdict depends only on
/// `event_hash`, `proof_path` and `merkle_root`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MerkleProof {
    /// Hash of the event being proven (64 hex characters).
    pub event_hash: String,
    /// Claimed root of the tree at the time the proof was issued.
    pub merkle_root: String,
    /// Sibling hashes from leaf to root.
    #[serde(default)]
    pub proof_path: Vec<ProofStep>,
    /// Total leaves in the tree when the root was computed.
    pub tree_size: u64,
    /// Zero-based position of the leaf. Must be below `tree_size`.
    pub leaf_index: u64,
    /// Identifier of the hash primitive that produced the digests.
    #[serde(default = "default_hash_algo")]
    pub hash_algo: String,
}

fn default_hash_algo() -> String {
    "sha256".to_string()
}

impl MerkleProof {
    /// Get a human-readable one-line description.
    pub fn summary(&self) -> String {
        format!(
            "proof for {} against root {} ({} steps, tree size {})",
            self.event_hash,
            self.merkle_root,
            self.proof_path.len(),
            self.tree_size
        )
    }
}

/// Why verification failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// A field failed structural validation. Detected before any hashing.
    MalformedProof(String),
    /// The proof names a hash primitive this verifier does not implement.
    /// Fails closed; there is no fallback algorithm.
    UnsupportedAlgorithm(String),
    /// Metadata contradicts itself (e.g. `leaf_index >= tree_size`).
    /// The hash chain itself reconciled.
    InconsistentMetadata(String),
    /// The recomputed root differs from the claimed root. The proof is
    /// cryptographically invalid: tampering, staleness or corruption.
    RootMismatch { computed: String, claimed: String },
}

impl FailureReason {
    /// Short machine-friendly tag for this failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            FailureReason::MalformedProof(_) => "malformed_proof",
            FailureReason::UnsupportedAlgorithm(_) => "unsupported_algorithm",
            FailureReason::InconsistentMetadata(_) => "inconsistent_metadata",
            FailureReason::RootMismatch { .. } => "root_mismatch",
        }
    }

    /// Human-readable description of the failure.
    pub fn describe(&self) -> String {
        match self {
            FailureReason::MalformedProof(detail) => {
                format!("Malformed proof: {}", detail)
            }
            FailureReason::UnsupportedAlgorithm(algo) => {
                format!("Unsupported hash algorithm: {}", algo)
            }
            FailureReason::InconsistentMetadata(detail) => {
                format!("Inconsistent proof metadata: {}", detail)
            }
            FailureReason::RootMismatch { computed, claimed } => {
                format!(
                    "Root mismatch: recomputed {}, claimed {}",
                    computed, claimed
                )
            }
        }
    }
}

/// Outcome of verifying one inclusion proof.
///
/// The engine's sole output. Carries no state beyond the single call that
/// produced it; callers branch on the failure kind instead of parsing text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationResult {
    /// The audit path reconciles the leaf with the claimed root.
    Verified,
    /// Verification failed for the tagged reason.
    Failed { reason: FailureReason },
}

impl VerificationResult {
    /// Check whether the proof verified.
    pub fn is_verified(&self) -> bool {
        matches!(self, VerificationResult::Verified)
    }

    /// Get a human-readable summary.
    pub fn summary(&self) -> String {
        match self {
            VerificationResult::Verified => "✅ Proof is mathematically valid".to_string(),
            VerificationResult::Failed { reason } => {
                format!("❌ Proof verification failed: {}", reason.describe())
            }
        }
    }
}
