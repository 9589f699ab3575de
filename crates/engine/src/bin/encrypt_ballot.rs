// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use clap::Parser;
use conclave_crypto::{derive_user_keys, encrypt_ballot, MasterSecret};
use serde_json::json;

/// Development helper that plays the browser client: derive a voter's
/// public key and produce the ciphertext a ballot submission would carry.
#[derive(Debug, Parser)]
#[command(name = "encrypt_ballot")]
struct Args {
    /// Master secret, 64 lowercase hex characters (development setups only).
    master_secret: String,

    /// DAO account the proposal lives in.
    dao_account: String,

    /// Voter account id.
    user_account: String,

    /// Plaintext ballot: `yes`, `no`, or any dummy text.
    plaintext: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let master = MasterSecret::from_hex(&args.master_secret)?;
    let keypair = derive_user_keys(&master, &args.dao_account, &args.user_account)?;
    let ciphertext = encrypt_ballot(keypair.public(), args.plaintext.as_bytes())?;

    println!(
        "{}",
        serde_json::to_string_pretty(&json!({
            "pubkey": hex::encode(keypair.public()),
            "user": args.user_account,
            "encrypted_vote": hex::encode(&ciphertext),
        }))?
    );
    Ok(())
}
