//! Knapsack key pairs.
//!
//! The private key is an easy subset-sum instance: a superincreasing
//! sequence a_0, ..., a_{L-1} where every element exceeds the sum of all
//! earlier ones. A modulus M > Σ a_i and a multiplier W coprime to M turn it
//! into the public key
//!
//! ```text
//! b_i = a_i · W mod M
//! ```
//!
//! which looks like an arbitrary (hard) knapsack. Knowing W^(-1) mod M maps
//! any subset sum of b back to the same subset sum of a.
//!
//! # Key Types
//!
//! - [`PublicKey`]: the disguised sequence, safe to share
//! - [`PrivateKey`]: sequence plus `M`, `W`, `W^(-1)`
//! - [`KeyPair`]: both halves, produced only by generation
//!
//! # Example
//!
//! ```
//! use knapsack_pke::keys::KeyPair;
//! use knapsack_pke::math::KeySampler;
//! use knapsack_pke::params::KnapsackParams;
//!
//! let mut sampler = KeySampler::with_seed(7);
//! let pair = KeyPair::generate(&KnapsackParams::with_key_length(64), &mut sampler).unwrap();
//! assert!(pair.is_consistent());
//! println!("public key {}", pair.public_key().id());
//! ```

mod generate;
mod id;
mod types;

pub use generate::{generate, generate_with_options, superincreasing_sequence};
pub use id::{key_id, KeyId, KEY_ID_LEN};
pub use types::{KeyPair, PrivateKey, PublicKey};
