// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::error::CryptoError;
use crate::keys::UserKeypair;

/// Client-side: encrypt one plaintext ballot to a voter's public key.
///
/// The underlying scheme is secp256k1 ECIES: a fresh ephemeral keypair and
/// nonce per call, HKDF-SHA-256 session keys, AES-256-GCM with a 16-byte
/// tag. The ciphertext carries the ephemeral point and tag, so no state is
/// needed beyond the recipient's private scalar to decrypt.
pub fn encrypt_ballot(public_key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    ecies::encrypt(public_key, plaintext).map_err(|_| CryptoError::Encryption)
}

/// Engine-side: authenticated decryption of a submitted ballot.
///
/// The cause of a failure is deliberately discarded.
pub fn decrypt_ballot(keypair: &UserKeypair, ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    ecies::decrypt(keypair.secret(), ciphertext).map_err(|_| CryptoError::Decryption)
}
