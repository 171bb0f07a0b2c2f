//! knapsack-pke: Merkle-Hellman style trapdoor knapsack cryptosystem
//!
//! This crate implements a subset-sum public-key cryptosystem:
//! a superincreasing private knapsack is disguised by modular multiplication
//! into a public knapsack, messages are encrypted as subset sums of the public
//! weights, and the private trapdoor turns decryption back into an easy
//! greedy problem.
//!
//! The construction is publicly broken (lattice reduction recovers messages
//! from the public key). It is provided for study, not for protecting data.
//!
//! Key components:
//! - Key generation with arbitrary-precision parameters
//! - Bit-packing encryption and trapdoor decryption
//! - Greedy superincreasing solver and meet-in-the-middle general solver
//! - Key file persistence and display identifiers

pub mod params;
pub mod error;
pub mod codec;
pub mod math;
pub mod keys;
pub mod cipher;
pub mod solve;
pub mod keyfile;

pub use cipher::{decrypt, decrypt_bytes, decrypt_verified, encrypt, encrypt_bytes};
pub use error::{KnapsackError, Result};
pub use keyfile::{pack, unpack, unpack_private, unpack_public, PrivateKeyFile, PublicKeyFile};
pub use keys::{generate, key_id, KeyId, KeyPair, PrivateKey, PublicKey};
pub use params::{GenerateOptions, KnapsackParams};
pub use solve::{solve_knapsack, solve_subset_sum, solve_superincreasing};
