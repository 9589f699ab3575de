// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! One-shot guest engine: a single JSON request arrives on stdin, the
//! master secret arrives through the environment, and a single JSON
//! response leaves on stdout. Nothing persists between invocations.

use anyhow::{anyhow, Result};
use conclave_crypto::{derive_user_pubkey, MasterSecret};
use conclave_tally::{tally_votes, BallotRecord};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

/// One request, discriminated by the `action` tag.
///
/// Unknown actions and missing required fields are rejected at parse time;
/// extra fields are ignored.
#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Request {
    DerivePubkey {
        dao_account: String,
        user_account: String,
    },
    TallyVotes {
        dao_account: String,
        proposal_id: u64,
        votes: Vec<BallotRecord>,
    },
}

/// The stdout envelope. Exactly one of `result` and `error` is meaningful;
/// the other is serialized as `null`.
#[derive(Debug, Serialize)]
pub struct Response {
    pub success: bool,
    pub result: Value,
    pub error: Option<String>,
}

impl Response {
    pub fn ok(result: Value) -> Self {
        Self {
            success: true,
            result,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            result: Value::Null,
            error: Some(message.into()),
        }
    }
}

/// Parse and execute one request against the injected master secret.
pub fn process_request(raw: &str, master: &MasterSecret) -> Result<Value> {
    let request: Request =
        serde_json::from_str(raw).map_err(|err| anyhow!("invalid request: {err}"))?;

    match request {
        Request::DerivePubkey {
            dao_account,
            user_account,
        } => {
            info!(action = "derive_pubkey", "processing request");
            let public_key = derive_user_pubkey(master, &dao_account, &user_account)?;
            Ok(json!({ "pubkey": hex::encode(public_key) }))
        }
        Request::TallyVotes {
            dao_account,
            proposal_id,
            votes,
        } => {
            info!(action = "tally_votes", batch = votes.len(), "processing request");
            let result = tally_votes(master, &dao_account, proposal_id, &votes);
            Ok(serde_json::to_value(result)?)
        }
    }
}
