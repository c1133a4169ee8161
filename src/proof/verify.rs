//! Merkle Inclusion-Proof Verification Engine
//!
//! Recomputes the Merkle root from a leaf hash and its audit path and
//! compares it against the claimed root. This is the security-critical
//! core of the verifier: it runs entirely locally, performs no I/O, holds
//! no state and is safe to call concurrently from any number of threads.

use tracing::debug;

use crate::proof::algo::HashAlgorithm;
use crate::proof::types::{FailureReason, MerkleProof, Position, VerificationResult, DIGEST_LEN};

/// Verify that a proof's audit path reconciles its leaf with the claimed root.
///
/// Three linear phases: pre-flight validation, fold over the path, final
/// comparison. Every failure path returns a tagged reason; the function
/// never panics on untrusted input. An empty path reduces verification to
/// `event_hash == merkle_root` (the singleton tree) with no special case.
pub fn verify(proof: &MerkleProof) -> VerificationResult {
    // Pre-flight: resolve the declared algorithm and decode every digest.
    // Nothing is hashed until all fields hold exactly 32 bytes.
    let algo = match HashAlgorithm::from_identifier(&proof.hash_algo) {
        Some(algo) => algo,
        None => {
            return VerificationResult::Failed {
                reason: FailureReason::UnsupportedAlgorithm(proof.hash_algo.clone()),
            }
        }
    };

    let leaf = match decode_digest(&proof.event_hash, "event_hash") {
        Ok(digest) => digest,
        Err(reason) => return VerificationResult::Failed { reason },
    };

    let claimed_root = match decode_digest(&proof.merkle_root, "merkle_root") {
        Ok(digest) => digest,
        Err(reason) => return VerificationResult::Failed { reason },
    };

    let mut path: Vec<([u8; DIGEST_LEN], Position)> = Vec::with_capacity(proof.proof_path.len());
    for (i, step) in proof.proof_path.iter().enumerate() {
        match decode_digest(&step.hash, &format!("proof_path[{}].hash", i)) {
            Ok(digest) => path.push((digest, step.position)),
            Err(reason) => return VerificationResult::Failed { reason },
        }
    }

    // Fold the audit path, leaf to root.
    let mut current = leaf;
    for (sibling, position) in &path {
        current = algo.combine(sibling, &current, *position);
    }

    // Exact 32-byte comparison; both sides are length-checked above, so a
    // short or padded root can never pass as a prefix match.
    if current != claimed_root {
        debug!(
            "Root mismatch: recomputed {}, claimed {}",
            hex::encode(current),
            hex::encode(claimed_root)
        );
        return VerificationResult::Failed {
            reason: FailureReason::RootMismatch {
                computed: hex::encode(current),
                claimed: hex::encode(claimed_root),
            },
        };
    }

    // The chain reconciled. Self-contradictory metadata is still reported:
    // it does not invalidate the hash chain, but the proof as a whole does
    // not describe a real position in the tree.
    if proof.leaf_index >= proof.tree_size {
        return VerificationResult::Failed {
            reason: FailureReason::InconsistentMetadata(format!(
                "leaf_index {} is out of range for tree_size {}",
                proof.leaf_index, proof.tree_size
            )),
        };
    }

    debug!("Proof verified: {}", proof.summary());
    VerificationResult::Verified
}

/// Decode a 64-hex-character digest field, rejecting anything else.
fn decode_digest(hex_str: &str, field: &str) -> Result<[u8; DIGEST_LEN], FailureReason> {
    let bytes = hex::decode(hex_str)
        .map_err(|_| FailureReason::MalformedProof(format!("{} is not valid hex", field)))?;

    let len = bytes.len();
    bytes.try_into().map_err(|_| {
        FailureReason::MalformedProof(format!(
            "{} must be {} bytes, got {}",
            field, DIGEST_LEN, len
        ))
    })
}
