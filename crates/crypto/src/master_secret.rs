// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::error::CryptoError;
use zeroize::Zeroizing;

/// Environment variable the sandbox host injects the master secret through.
pub const MASTER_SECRET_ENV: &str = "DAO_MASTER_SECRET";

const MASTER_SECRET_LEN: usize = 32;
const MASTER_SECRET_HEX_LEN: usize = 2 * MASTER_SECRET_LEN;

/// The 32-byte root secret every per-user key is derived from.
///
/// The buffer is wiped when the container drops, which covers every exit
/// path of the one-shot engine process. The secret is never serialized,
/// logged or returned.
pub struct MasterSecret(Zeroizing<[u8; MASTER_SECRET_LEN]>);

impl std::fmt::Debug for MasterSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("MasterSecret(REDACTED)")
    }
}

impl MasterSecret {
    /// Parse the canonical wire form: exactly 64 lowercase hex characters.
    pub fn from_hex(hex_str: &str) -> Result<Self, CryptoError> {
        if hex_str.len() != MASTER_SECRET_HEX_LEN
            || !hex_str
                .bytes()
                .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
        {
            return Err(CryptoError::MasterSecretMalformed);
        }

        let decoded = Zeroizing::new(
            hex::decode(hex_str).map_err(|_| CryptoError::MasterSecretMalformed)?,
        );
        let mut buf = Zeroizing::new([0u8; MASTER_SECRET_LEN]);
        buf.copy_from_slice(&decoded);
        Ok(Self(buf))
    }

    /// Read the secret from `var`. Absence and malformed values are both
    /// setup errors.
    pub fn from_env(var: &str) -> Result<Self, CryptoError> {
        let value = std::env::var(var).map_err(|_| CryptoError::MasterSecretMissing)?;
        Self::from_hex(&value)
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_ref()
    }
}
