// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Client-side inclusion checking against a published commitment root.
//!
//! The engine emits proofs without left/right flags, so verification tries
//! both child orderings at every level. Worst-case work is `O(2^depth)`,
//! and depth is `ceil(log2 n)` for a batch of `n` ballots, which stays
//! tractable well past tens of thousands of submissions.

use conclave_commitment::hash_pair;

pub use conclave_commitment::leaf_fingerprint;

/// Check a flag-free inclusion proof.
///
/// With an empty proof the leaf must itself be the root (singleton batch).
/// Otherwise the candidate parent is recomputed with the sibling on either
/// side and the remaining path is checked for each.
pub fn verify_inclusion(leaf: &str, proof: &[String], root: &str) -> bool {
    match proof.split_first() {
        None => leaf == root,
        Some((sibling, rest)) => {
            verify_inclusion(&hash_pair(leaf, sibling), rest, root)
                || verify_inclusion(&hash_pair(sibling, leaf), rest, root)
        }
    }
}

/// Verify a voter's own submission: recompute the leaf fingerprint from the
/// contract-assigned record fields, then check the proof against the root.
pub fn verify_ballot(
    voter: &str,
    timestamp_ns: u64,
    ciphertext_hex: &str,
    proof: &[String],
    root: &str,
) -> bool {
    let leaf = leaf_fingerprint(voter, timestamp_ns, ciphertext_hex);
    verify_inclusion(&leaf, proof, root)
}
