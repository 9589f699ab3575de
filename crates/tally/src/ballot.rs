// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use serde::{Deserialize, Serialize};

/// One submitted ballot, exactly as the contract stores it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BallotRecord {
    /// Voter's account id.
    pub user: String,

    /// Hybrid ciphertext, lowercase hex.
    pub encrypted_vote: String,

    /// Submission timestamp in nanoseconds, assigned monotonically by the
    /// contract.
    pub timestamp: u64,

    /// Carried for contract-schema compatibility; the ciphertext contains
    /// its own nonce, so this field is ignored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
}

/// Inclusion proof emitted for one ballot.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BallotProof {
    /// Voter's account id.
    pub voter: String,

    /// 0-based index of the ballot in the submitted batch.
    pub vote_index: u32,

    /// Leaf fingerprint of the submission.
    pub vote_hash: String,

    /// Sibling fingerprints from the leaf level up to just below the root.
    pub proof_path: Vec<String>,

    /// Submission timestamp, echoed for client-side leaf recomputation.
    pub timestamp: u64,
}

/// Aggregate outcome for one proposal.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TallyResult {
    pub proposal_id: u64,
    pub yes_count: u32,
    pub no_count: u32,
    pub total_votes: u32,
    pub votes_merkle_root: String,
    pub merkle_proofs: Vec<BallotProof>,
    pub tee_attestation: String,
}
