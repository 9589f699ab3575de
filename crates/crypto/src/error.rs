// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use thiserror::Error;

/// Errors surfaced by the key-derivation and hybrid-encryption layer.
///
/// Decryption failures all collapse into [`CryptoError::Decryption`]: a bad
/// tag, a truncated ciphertext and a wrong recipient must stay
/// indistinguishable to callers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    #[error("master secret is not set in the environment")]
    MasterSecretMissing,

    #[error("master secret must be exactly 64 lowercase hex characters")]
    MasterSecretMalformed,

    #[error("user key derivation failed")]
    KeyDerivation,

    #[error("ballot encryption failed")]
    Encryption,

    #[error("ballot decryption failed")]
    Decryption,
}
