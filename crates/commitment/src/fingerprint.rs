// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use sha2::{Digest, Sha256};

/// Fingerprint of one submitted ballot, rendered as 64 lowercase hex chars.
///
/// Preimage layout is wire contract: the raw UTF-8 bytes of the voter id,
/// the timestamp as 8 little-endian bytes, then the UTF-8 bytes of the
/// ciphertext hex string. Engine and client must produce identical bytes,
/// and the timestamp must never transit a floating-point representation.
pub fn leaf_fingerprint(voter: &str, timestamp_ns: u64, ciphertext_hex: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(voter.as_bytes());
    hasher.update(timestamp_ns.to_le_bytes());
    hasher.update(ciphertext_hex.as_bytes());
    hex::encode(hasher.finalize())
}

/// Parent of two tree nodes.
///
/// The preimage is the concatenated hex *text* of the children, not their
/// raw 32-byte digests. Also wire contract.
pub fn hash_pair(left: &str, right: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(left.as_bytes());
    hasher.update(right.as_bytes());
    hex::encode(hasher.finalize())
}

/// Root committed for a batch with no submissions: SHA-256 of the empty
/// string.
pub fn empty_batch_root() -> String {
    hex::encode(Sha256::digest(b""))
}
