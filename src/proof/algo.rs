//! Hash Primitive Registry
//!
//! Maps the `hash_algo` identifier carried by a proof to a concrete
//! digest implementation. Proofs declare which primitive produced their
//! digests, so the algorithm is a looked-up capability, never a constant.
//! Unrecognized identifiers fail closed with no default fallback.

use sha2::{Digest, Sha256, Sha512_256};

use crate::proof::types::{Position, DIGEST_LEN};

/// Supported hash primitives. All produce 32-byte digests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Sha256,
    Sha512_256,
}

impl HashAlgorithm {
    /// Resolve an algorithm identifier as it appears in a proof.
    pub fn from_identifier(id: &str) -> Option<Self> {
        match id {
            "sha256" => Some(HashAlgorithm::Sha256),
            "sha512_256" => Some(HashAlgorithm::Sha512_256),
            _ => None,
        }
    }

    /// Identifier under which this primitive is declared on the wire.
    pub fn identifier(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha512_256 => "sha512_256",
        }
    }

    /// Digest a byte buffer.
    pub fn digest(&self, data: &[u8]) -> [u8; DIGEST_LEN] {
        match self {
            HashAlgorithm::Sha256 => {
                let mut hasher = Sha256::new();
                hasher.update(data);
                hasher.finalize().into()
            }
            HashAlgorithm::Sha512_256 => {
                let mut hasher = Sha512_256::new();
                hasher.update(data);
                hasher.finalize().into()
            }
        }
    }

    /// Combine a sibling digest with the running digest one level up.
    ///
    /// A left sibling hashes as `sibling || current`, a right sibling as
    /// `current || sibling`. The order follows the log's RFC 6962-style
    /// construction: the left operand always comes first in byte order.
    pub fn combine(
        &self,
        sibling: &[u8; DIGEST_LEN],
        current: &[u8; DIGEST_LEN],
        position: Position,
    ) -> [u8; DIGEST_LEN] {
        let mut combined = [0u8; DIGEST_LEN * 2];
        match position {
            Position::Left => {
                combined[..DIGEST_LEN].copy_from_slice(sibling);
                combined[DIGEST_LEN..].copy_from_slice(current);
            }
            Position::Right => {
                combined[..DIGEST_LEN].copy_from_slice(current);
                combined[DIGEST_LEN..].copy_from_slice(sibling);
            }
        }
        self.digest(&combined)
    }
}
