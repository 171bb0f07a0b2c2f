//! Knapsack encryption

use num_bigint::BigUint;
use num_traits::Zero;

use crate::codec::{bytes_to_bits, int_to_bytes};
use crate::error::{KnapsackError, Result};
use crate::keys::PublicKey;

/// Sum the public weights selected by a 0/1 bit vector
///
/// Fails with `KeyTooShort` when there are more bits than weights.
pub fn encrypt_bits(weights: &[BigUint], bits: &[u8]) -> Result<BigUint> {
    if weights.len() < bits.len() {
        return Err(KnapsackError::KeyTooShort {
            key_len: weights.len(),
            bit_len: bits.len(),
        });
    }

    let mut ct = BigUint::zero();
    for (w, &bit) in weights.iter().zip(bits) {
        if bit == 1 {
            ct += w;
        }
    }
    Ok(ct)
}

/// Encrypt a message: Enc(pk, m) = Σ b_i · m_i over the MSB-first bits of m
pub fn encrypt(public_key: &PublicKey, plaintext: &[u8]) -> Result<BigUint> {
    encrypt_bits(public_key.elements(), &bytes_to_bits(plaintext))
}

/// Encrypt a message and return the ciphertext's minimal big-endian bytes
pub fn encrypt_bytes(public_key: &PublicKey, plaintext: &[u8]) -> Result<Vec<u8>> {
    encrypt(public_key, plaintext).map(|ct| int_to_bytes(&ct))
}

impl PublicKey {
    /// See [`encrypt`]
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<BigUint> {
        encrypt(self, plaintext)
    }
}
