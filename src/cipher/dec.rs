//! Knapsack decryption via the superincreasing trapdoor

use num_bigint::BigUint;

use crate::codec::{bits_to_bytes, bytes_to_int};
use crate::keys::{KeyPair, PrivateKey};
use crate::math::mul_mod;
use crate::solve::solve_superincreasing;

use super::enc::encrypt_bits;

/// Recover the L-bit mask behind a ciphertext
///
/// Computes c' = c · W^(-1) mod M, then solves the superincreasing
/// knapsack (a, c') greedily.
pub fn decrypt_bits(private_key: &PrivateKey, ciphertext: &BigUint) -> Vec<u8> {
    let target = mul_mod(
        ciphertext,
        private_key.multiplier_inverse(),
        private_key.modulus(),
    );
    solve_superincreasing(private_key.sequence(), &target)
}

/// Decrypt a ciphertext into `floor(L / 8)` bytes
///
/// Key capacity beyond the original message comes back as trailing zero
/// bytes; callers that know the message length trim it themselves.
///
/// A ciphertext that is not a subset sum of the public key still decrypts,
/// to garbage. Use [`decrypt_verified`] to detect that case.
pub fn decrypt(private_key: &PrivateKey, ciphertext: &BigUint) -> Vec<u8> {
    bits_to_bytes(&decrypt_bits(private_key, ciphertext))
}

/// Decrypt a ciphertext given as big-endian bytes
pub fn decrypt_bytes(private_key: &PrivateKey, ciphertext: &[u8]) -> Vec<u8> {
    decrypt(private_key, &bytes_to_int(ciphertext))
}

/// Decrypt, then re-encrypt the recovered bits and compare
///
/// Returns `None` when the ciphertext does not correspond to any bit
/// pattern under this key.
pub fn decrypt_verified(private_key: &PrivateKey, ciphertext: &BigUint) -> Option<Vec<u8>> {
    let bits = decrypt_bits(private_key, ciphertext);
    let public_key = private_key.public_key();
    match encrypt_bits(public_key.elements(), &bits) {
        Ok(ct) if &ct == ciphertext => Some(bits_to_bytes(&bits)),
        _ => None,
    }
}

impl PrivateKey {
    /// See [`decrypt`]
    pub fn decrypt(&self, ciphertext: &BigUint) -> Vec<u8> {
        decrypt(self, ciphertext)
    }
}

impl KeyPair {
    /// See [`decrypt`]
    pub fn decrypt(&self, ciphertext: &BigUint) -> Vec<u8> {
        decrypt(self.private_key(), ciphertext)
    }
}
