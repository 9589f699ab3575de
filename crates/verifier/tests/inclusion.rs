// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use conclave_commitment::{leaf_fingerprint, CommitmentTree};
use conclave_verifier::{verify_ballot, verify_inclusion};

fn batch(n: usize) -> Vec<(String, u64, String)> {
    (0..n)
        .map(|i| {
            (
                format!("voter-{i}.near"),
                1_000 + i as u64,
                format!("{:02x}{:02x}", i, i + 1),
            )
        })
        .collect()
}

fn tree_for(records: &[(String, u64, String)]) -> CommitmentTree {
    CommitmentTree::build(
        records
            .iter()
            .map(|(voter, ts, ct)| leaf_fingerprint(voter, *ts, ct))
            .collect(),
    )
}

#[test]
fn accepts_every_proof_for_batches_up_to_nine() {
    for n in 1..=9 {
        let records = batch(n);
        let tree = tree_for(&records);
        let root = tree.root();

        for (index, proof) in tree.proofs().into_iter().enumerate() {
            let (voter, ts, ct) = &records[index];
            assert!(
                verify_ballot(voter, *ts, ct, &proof, &root),
                "batch {n}, leaf {index}"
            );
        }
    }
}

#[test]
fn singleton_batch_verifies_with_empty_proof() {
    let leaf = leaf_fingerprint("alice.near", 10, "aabb");
    assert!(verify_inclusion(&leaf, &[], &leaf));
}

#[test]
fn rejects_leaf_tampering() {
    let records = batch(4);
    let tree = tree_for(&records);
    let root = tree.root();
    let proof = tree.proof(1).unwrap();

    // Same record, shifted timestamp: different leaf, same proof.
    assert!(!verify_ballot("voter-1.near", 9_999, "0102", &proof, &root));
}

#[test]
fn rejects_proof_tampering() {
    let records = batch(5);
    let tree = tree_for(&records);
    let root = tree.root();

    for index in 0..records.len() {
        let mut proof = tree.proof(index).unwrap();
        for step in 0..proof.len() {
            let mut corrupted = proof[step].clone().into_bytes();
            corrupted[0] = if corrupted[0] == b'0' { b'1' } else { b'0' };
            let saved = std::mem::replace(&mut proof[step], String::from_utf8(corrupted).unwrap());

            let (voter, ts, ct) = &records[index];
            assert!(
                !verify_ballot(voter, *ts, ct, &proof, &root),
                "leaf {index}, corrupted step {step}"
            );
            proof[step] = saved;
        }
    }
}

#[test]
fn rejects_wrong_root() {
    let records = batch(4);
    let tree = tree_for(&records);
    let proof = tree.proof(0).unwrap();
    let (voter, ts, ct) = &records[0];

    let other_root = leaf_fingerprint("someone-else", 0, "00");
    assert!(!verify_ballot(voter, *ts, ct, &proof, &other_root));
}

#[test]
fn rejects_proof_of_wrong_length() {
    let records = batch(4);
    let tree = tree_for(&records);
    let root = tree.root();
    let (voter, ts, ct) = &records[0];

    let mut proof = tree.proof(0).unwrap();
    proof.pop();
    assert!(!verify_ballot(voter, *ts, ct, &proof, &root));

    let mut proof = tree.proof(0).unwrap();
    proof.push(leaf_fingerprint("extra", 0, "00"));
    assert!(!verify_ballot(voter, *ts, ct, &proof, &root));
}
