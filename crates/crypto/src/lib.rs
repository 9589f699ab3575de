// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

mod error;
mod hybrid;
mod keys;
mod master_secret;

pub use error::CryptoError;
pub use hybrid::{decrypt_ballot, encrypt_ballot};
pub use keys::{derive_user_keys, derive_user_pubkey, UserKeypair, PUBLIC_KEY_LEN};
pub use master_secret::{MasterSecret, MASTER_SECRET_ENV};
