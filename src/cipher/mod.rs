//! Knapsack encryption and decryption.
//!
//! A message m is expanded into bits m_0, m_1, ... (MSB first per byte) and
//! encrypted as a single integer
//!
//! ```text
//! c = Σ b_i · m_i
//! ```
//!
//! over the public weights b. The holder of the private key computes
//! c · W^(-1) mod M, which equals Σ a_i · m_i over the superincreasing
//! private weights, and reads the bits back off greedily.
//!
//! # Example
//!
//! ```
//! use knapsack_pke::cipher::{decrypt, encrypt};
//! use knapsack_pke::keys::KeyPair;
//! use knapsack_pke::math::KeySampler;
//! use knapsack_pke::params::KnapsackParams;
//!
//! let mut sampler = KeySampler::with_seed(3);
//! let pair = KeyPair::generate(&KnapsackParams::with_key_length(40), &mut sampler).unwrap();
//!
//! let ct = encrypt(pair.public_key(), b"hi").unwrap();
//! let pt = decrypt(pair.private_key(), &ct);
//! assert_eq!(pt, b"hi\0\0\0");
//! ```

mod dec;
mod enc;

pub use dec::{decrypt, decrypt_bits, decrypt_bytes, decrypt_verified};
pub use enc::{encrypt, encrypt_bits, encrypt_bytes};
