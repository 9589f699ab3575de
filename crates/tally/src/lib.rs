// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

mod ballot;
mod tally;

pub use ballot::{BallotProof, BallotRecord, TallyResult};
pub use tally::{attestation, tally_votes, VOTE_NO, VOTE_YES};
