//! Bit codec: bytes to MSB-first bit vectors and back
//!
//! Also holds the integer encoding shared by ciphertexts and key files:
//! minimal big-endian unsigned bytes, with zero encoded as the empty string.

use num_bigint::BigUint;
use num_traits::Zero;

/// Expand bytes into one 0/1 value per bit, most significant bit first
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        for shift in (0..8).rev() {
            bits.push((byte >> shift) & 1);
        }
    }
    bits
}

/// Collapse MSB-first bits into bytes
///
/// Trailing bits that do not complete a byte are dropped.
pub fn bits_to_bytes(bits: &[u8]) -> Vec<u8> {
    bits.chunks_exact(8)
        .map(|chunk| chunk.iter().fold(0u8, |acc, &bit| (acc << 1) | (bit & 1)))
        .collect()
}

/// Minimal big-endian encoding of an unsigned integer
///
/// No sign and no leading zero bytes; zero encodes to an empty vector.
pub fn int_to_bytes(n: &BigUint) -> Vec<u8> {
    if n.is_zero() {
        Vec::new()
    } else {
        n.to_bytes_be()
    }
}

/// Decode a big-endian unsigned integer; the empty string decodes to zero
pub fn bytes_to_int(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}
