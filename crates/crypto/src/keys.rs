// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::error::CryptoError;
use crate::master_secret::MasterSecret;
use hkdf::Hkdf;
use sha2::Sha256;
use zeroize::Zeroizing;

/// Compressed secp256k1 point: 0x02/0x03 marker plus the X coordinate.
pub const PUBLIC_KEY_LEN: usize = 33;

const SCALAR_LEN: usize = 32;

/// A voter's keypair. Recomputed on demand from the master secret and never
/// stored; the private scalar is wiped on drop.
pub struct UserKeypair {
    secret: Zeroizing<[u8; SCALAR_LEN]>,
    public: [u8; PUBLIC_KEY_LEN],
}

impl UserKeypair {
    pub fn public(&self) -> &[u8; PUBLIC_KEY_LEN] {
        &self.public
    }

    pub(crate) fn secret(&self) -> &[u8] {
        self.secret.as_ref()
    }
}

/// Derive the keypair for `(dao_id, user_id)` from the master secret.
///
/// The scalar is the HKDF-SHA-256 expansion (empty salt) of the info string
/// `user:<dao_id>:<user_id>`. A candidate that is zero or not below the
/// curve order is retried with a single counter byte (0x01, 0x02, ...)
/// appended to the info, so the derivation stays deterministic even in that
/// astronomically unlikely case.
pub fn derive_user_keys(
    master: &MasterSecret,
    dao_id: &str,
    user_id: &str,
) -> Result<UserKeypair, CryptoError> {
    let hk = Hkdf::<Sha256>::new(None, master.as_bytes());
    let base_info = format!("user:{dao_id}:{user_id}").into_bytes();

    for counter in 0u8..=u8::MAX {
        let mut info = base_info.clone();
        if counter > 0 {
            info.push(counter);
        }

        let mut seed = Zeroizing::new([0u8; SCALAR_LEN]);
        hk.expand(&info, seed.as_mut_slice())
            .map_err(|_| CryptoError::KeyDerivation)?;

        if let Ok(secret_key) = libsecp256k1::SecretKey::parse_slice(seed.as_slice()) {
            let public =
                libsecp256k1::PublicKey::from_secret_key(&secret_key).serialize_compressed();
            return Ok(UserKeypair {
                secret: seed,
                public,
            });
        }
    }

    Err(CryptoError::KeyDerivation)
}

/// Public half only, for serving key requests to the contract.
pub fn derive_user_pubkey(
    master: &MasterSecret,
    dao_id: &str,
    user_id: &str,
) -> Result<[u8; PUBLIC_KEY_LEN], CryptoError> {
    Ok(*derive_user_keys(master, dao_id, user_id)?.public())
}
