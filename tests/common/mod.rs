//! Shared test helpers: an honestly constructed Merkle tree mirroring the
//! log's pairing convention, used to generate known-good inclusion proofs.
//! Tree construction lives here only; production code never builds trees.

use sha2::{Digest, Sha256};

use vcp_verifier::proof::{MerkleProof, Position, ProofStep};

/// Hash arbitrary bytes into a leaf digest.
pub fn leaf_digest(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Hash a left/right pair of nodes into their parent.
pub fn parent_digest(left: &[u8; 32], right: &[u8; 32]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(left);
    hasher.update(right);
    hasher.finalize().into()
}

/// In-memory Merkle tree over fixed leaves. Odd nodes are paired with a
/// duplicate of themselves, matching the log's construction.
pub struct TestTree {
    levels: Vec<Vec<[u8; 32]>>,
}

impl TestTree {
    pub fn build(leaves: Vec<[u8; 32]>) -> Self {
        assert!(!leaves.is_empty(), "tree needs at least one leaf");

        let mut levels = vec![leaves];
        while levels.last().unwrap().len() > 1 {
            let prev = levels.last().unwrap();
            let mut next = Vec::with_capacity(prev.len().div_ceil(2));
            for pair in prev.chunks(2) {
                let left = pair[0];
                let right = if pair.len() == 2 { pair[1] } else { pair[0] };
                next.push(parent_digest(&left, &right));
            }
            levels.push(next);
        }

        Self { levels }
    }

    /// Build a tree over `count` distinct synthetic events.
    pub fn with_events(count: usize) -> Self {
        let leaves = (0..count)
            .map(|i| leaf_digest(format!("event-{}", i).as_bytes()))
            .collect();
        Self::build(leaves)
    }

    pub fn size(&self) -> usize {
        self.levels[0].len()
    }

    pub fn root(&self) -> [u8; 32] {
        *self.levels.last().unwrap().first().unwrap()
    }

    /// Generate the inclusion proof for the leaf at `index`.
    pub fn proof_for(&self, index: usize) -> MerkleProof {
        assert!(index < self.size(), "leaf index out of range");

        let mut proof_path = Vec::new();
        let mut i = index;
        for level in &self.levels[..self.levels.len() - 1] {
            let (sibling, position) = if i % 2 == 0 {
                let sibling = if i + 1 < level.len() {
                    level[i + 1]
                } else {
                    level[i]
                };
                (sibling, Position::Right)
            } else {
                (level[i - 1], Position::Left)
            };

            proof_path.push(ProofStep {
                hash: hex::encode(sibling),
                position,
            });
            i /= 2;
        }

        MerkleProof {
            event_hash: hex::encode(self.levels[0][index]),
            merkle_root: hex::encode(self.root()),
            proof_path,
            tree_size: self.size() as u64,
            leaf_index: index as u64,
            hash_algo: "sha256".to_string(),
        }
    }
}

/// Flip one bit of a hex-encoded digest, keeping it valid hex of the same
/// length.
pub fn flip_bit(hex_digest: &str, bit: usize) -> String {
    let mut bytes = hex::decode(hex_digest).unwrap();
    let byte = (bit / 8) % bytes.len();
    bytes[byte] ^= 1 << (bit % 8);
    hex::encode(bytes)
}
