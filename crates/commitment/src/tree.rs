// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::fingerprint::{empty_batch_root, hash_pair};

/// Bottom-up binary commitment tree over leaf fingerprints.
///
/// Level 0 is the leaf sequence in batch-input order. At every level an
/// odd-length tail node is paired with itself. All levels are retained so
/// proofs can be generated after the build.
pub struct CommitmentTree {
    levels: Vec<Vec<String>>,
}

impl CommitmentTree {
    pub fn build(leaves: Vec<String>) -> Self {
        if leaves.is_empty() {
            return Self { levels: Vec::new() };
        }

        let mut levels = Vec::new();
        let mut current = leaves;
        while current.len() > 1 {
            let next = current
                .chunks(2)
                .map(|pair| {
                    let left = &pair[0];
                    let right = pair.get(1).unwrap_or(left);
                    hash_pair(left, right)
                })
                .collect();
            levels.push(current);
            current = next;
        }
        levels.push(current);

        Self { levels }
    }

    pub fn leaf_count(&self) -> usize {
        self.levels.first().map_or(0, Vec::len)
    }

    pub fn leaves(&self) -> &[String] {
        self.levels.first().map_or(&[], Vec::as_slice)
    }

    /// Single node at the topmost level; defined as `sha256("")` for an
    /// empty batch.
    pub fn root(&self) -> String {
        self.levels
            .last()
            .and_then(|level| level.first())
            .cloned()
            .unwrap_or_else(empty_batch_root)
    }

    /// Sibling path for leaf `index`, ordered leaf level upward, stopping
    /// just below the root. No side flags are emitted.
    pub fn proof(&self, index: usize) -> Option<Vec<String>> {
        if index >= self.leaf_count() {
            return None;
        }

        let mut path = Vec::new();
        let mut cursor = index;
        for level in &self.levels[..self.levels.len() - 1] {
            let sibling = if cursor % 2 == 0 {
                level.get(cursor + 1).unwrap_or(&level[cursor])
            } else {
                &level[cursor - 1]
            };
            path.push(sibling.clone());
            cursor /= 2;
        }
        Some(path)
    }

    /// One proof per leaf, in leaf order.
    pub fn proofs(&self) -> Vec<Vec<String>> {
        (0..self.leaf_count())
            .filter_map(|index| self.proof(index))
            .collect()
    }
}
