//! Human-readable key identifiers

use std::fmt;

use num_bigint::BigUint;
use sha2::{Digest, Sha256};

use crate::codec::int_to_bytes;

/// Bytes of the SHA-256 digest kept as the identifier
pub const KEY_ID_LEN: usize = 10;

/// Non-secret fingerprint used to tell keys apart on screen
///
/// Carries no security meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyId(pub [u8; KEY_ID_LEN]);

impl KeyId {
    /// Raw identifier bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// First 10 bytes of SHA-256 over the concatenated integer encodings
pub fn key_id(key: &[BigUint]) -> KeyId {
    let mut hasher = Sha256::new();
    for n in key {
        hasher.update(int_to_bytes(n));
    }
    let digest = hasher.finalize();

    let mut id = [0u8; KEY_ID_LEN];
    id.copy_from_slice(&digest[..KEY_ID_LEN]);
    KeyId(id)
}
