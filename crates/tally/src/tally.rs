// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::ballot::{BallotProof, BallotRecord, TallyResult};
use conclave_commitment::{leaf_fingerprint, CommitmentTree};
use conclave_crypto::{decrypt_ballot, derive_user_keys, MasterSecret};
use rayon::prelude::*;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use tracing::debug;

/// Canonical affirmative token.
pub const VOTE_YES: &str = "yes";
/// Canonical negative token.
pub const VOTE_NO: &str = "no";

/// Decrypt, reduce and commit one ballot batch.
///
/// Input order is authoritative: records are never sorted, deduplicated or
/// otherwise permuted, and the proof list lines up index-for-index with the
/// batch. Records that do not decrypt to a canonical token are dummies for
/// counting purposes, but their leaves are still committed: the tree covers
/// what was submitted, not what was counted.
pub fn tally_votes(
    master: &MasterSecret,
    dao_account: &str,
    proposal_id: u64,
    ballots: &[BallotRecord],
) -> TallyResult {
    debug!(proposal_id, batch = ballots.len(), "tallying ballot batch");

    // Decrypt pass. Rayon preserves batch order through collect; outcomes
    // are kept as an anonymous Option so no per-record cause ever leaves
    // this pass.
    let tokens: Vec<Option<String>> = ballots
        .par_iter()
        .map(|ballot| decrypt_token(master, dao_account, ballot))
        .collect();

    // Latest-per-voter reduction. Strict `>` means an exact timestamp tie
    // keeps the record seen first.
    let mut chosen: HashMap<&str, (&str, u64)> = HashMap::new();
    for (ballot, token) in ballots.iter().zip(&tokens) {
        let Some(token) = token.as_deref() else {
            continue;
        };
        match chosen.get(ballot.user.as_str()) {
            Some((_, held)) if ballot.timestamp <= *held => {}
            _ => {
                chosen.insert(&ballot.user, (token, ballot.timestamp));
            }
        }
    }

    let yes_count = chosen
        .values()
        .filter(|(token, _)| *token == VOTE_YES)
        .count() as u32;
    let no_count = chosen
        .values()
        .filter(|(token, _)| *token == VOTE_NO)
        .count() as u32;
    let total_votes = yes_count + no_count;

    // Commitment pass covers every submitted record, decryptable or not.
    let leaves: Vec<String> = ballots
        .iter()
        .map(|ballot| leaf_fingerprint(&ballot.user, ballot.timestamp, &ballot.encrypted_vote))
        .collect();
    let tree = CommitmentTree::build(leaves);
    let votes_merkle_root = tree.root();

    let merkle_proofs = ballots
        .iter()
        .enumerate()
        .zip(tree.proofs())
        .map(|((index, ballot), proof_path)| BallotProof {
            voter: ballot.user.clone(),
            vote_index: index as u32,
            vote_hash: tree.leaves()[index].clone(),
            proof_path,
            timestamp: ballot.timestamp,
        })
        .collect();

    let tee_attestation = attestation(proposal_id, &votes_merkle_root, yes_count, no_count);

    debug!(yes_count, no_count, total_votes, "batch tallied");

    TallyResult {
        proposal_id,
        yes_count,
        no_count,
        total_votes,
        votes_merkle_root,
        merkle_proofs,
        tee_attestation,
    }
}

/// Reduce one record to a canonical token, or `None` for any dummy: bad
/// hex, failed authentication, non-UTF-8 plaintext, or a plaintext that is
/// neither canonical token. The distinction between those cases is
/// intentionally not observable.
fn decrypt_token(
    master: &MasterSecret,
    dao_account: &str,
    ballot: &BallotRecord,
) -> Option<String> {
    let ciphertext = hex::decode(&ballot.encrypted_vote).ok()?;
    let keypair = derive_user_keys(master, dao_account, &ballot.user).ok()?;
    let plaintext = decrypt_ballot(&keypair, &ciphertext).ok()?;
    let token = String::from_utf8(plaintext).ok()?;
    (token == VOTE_YES || token == VOTE_NO).then_some(token)
}

/// Binds proposal id, commitment root and counts into the attestation
/// field. Placeholder for a hardware quote; the `attestation:<hex>` shape
/// is wire contract and must survive an upgrade to real attestation
/// material.
pub fn attestation(proposal_id: u64, merkle_root: &str, yes_count: u32, no_count: u32) -> String {
    let preimage = format!("{proposal_id}:{merkle_root}:{yes_count}:{no_count}");
    format!(
        "attestation:{}",
        hex::encode(Sha256::digest(preimage.as_bytes()))
    )
}
