//! Number-theoretic primitives for the knapsack cryptosystem.
//!
//! All key and ciphertext arithmetic runs on unbounded [`BigUint`] values:
//! a key of length L needs moduli around 2^(2L+2), far beyond any machine
//! word for realistic L.
//!
//! - **Modular arithmetic**: gcd, extended Euclid, modular inverse
//! - **Sampling**: uniform integers in a closed range from a CSPRNG
//!
//! # Example
//!
//! ```
//! use knapsack_pke::math::{mod_inverse, KeySampler};
//! use num_bigint::BigUint;
//!
//! let mut sampler = KeySampler::with_seed(1);
//! let n = sampler.uniform(&BigUint::from(10u32), &BigUint::from(20u32)).unwrap();
//! assert!(n >= BigUint::from(10u32) && n <= BigUint::from(20u32));
//!
//! let inv = mod_inverse(&BigUint::from(3u32), &BigUint::from(11u32)).unwrap();
//! assert_eq!(inv, BigUint::from(4u32));
//! ```
//!
//! [`BigUint`]: num_bigint::BigUint

pub mod modular;
pub mod sampling;

pub use modular::{extended_gcd, gcd, mod_inverse, mul_mod};
pub use sampling::{uniform_random, KeySampler};
