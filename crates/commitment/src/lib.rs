// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

mod fingerprint;
mod tree;

pub use fingerprint::{empty_batch_root, hash_pair, leaf_fingerprint};
pub use tree::CommitmentTree;
