//! Key generation: superincreasing sequence, modulus, multiplier

use std::time::Instant;

use num_bigint::BigUint;
use num_traits::One;
use rand::{CryptoRng, RngCore};
use tracing::debug;

use crate::error::{knapsack_err, KnapsackError, Result};
use crate::math::{gcd, mod_inverse, uniform_random};
use crate::params::{GenerateOptions, KnapsackParams};

use super::types::{KeyPair, PrivateKey};

/// Generate a random superincreasing sequence of `length` elements
///
/// Element i is drawn from `[(2^i - 1)(2^L + 1) + 1, 2^i (2^L + 1)]`. Since
/// every element is at most `2^i (2^L + 1)`, the first i elements sum to at
/// most `(2^i - 1)(2^L + 1)`, which is below the lower bound for element i.
pub fn superincreasing_sequence<R: RngCore + CryptoRng + ?Sized>(
    rng: &mut R,
    length: usize,
) -> Result<Vec<BigUint>> {
    if length < 1 {
        return Err(knapsack_err!("key length must be > 0, got {}", length));
    }

    let one = BigUint::one();
    let step = (BigUint::one() << length) + &one; // 2^L + 1

    let mut sequence = Vec::with_capacity(length);
    for i in 0..length {
        let pow = BigUint::one() << i; // 2^i
        let min = (&pow - &one) * &step + &one;
        let max = &pow * &step;
        sequence.push(uniform_random(rng, &min, &max)?);
    }
    Ok(sequence)
}

/// Generate a key pair with no deadline on the multiplier search
pub fn generate<R: RngCore + CryptoRng + ?Sized>(
    params: &KnapsackParams,
    rng: &mut R,
) -> Result<KeyPair> {
    generate_with_options(params, &GenerateOptions::default(), rng)
}

/// KeyGen(L) → (pk, sk)
///
/// 1. Private sequence a from [`superincreasing_sequence`]
/// 2. Modulus M uniform in `[2^(2L+1) + 1, 2^(2L+2) - 1]`, above `Σ a_i`
/// 3. Multiplier W = W' / gcd(W', M) for W' uniform in `[2, M - 2]`,
///    resampled until W >= 2 and W is invertible mod M
/// 4. Public key b_i = a_i · W mod M
///
/// The resampling in step 3 has no iteration cap. Each round succeeds with
/// high probability, so in practice it ends after a handful of draws; set
/// `options.deadline` to bound it anyway.
pub fn generate_with_options<R: RngCore + CryptoRng + ?Sized>(
    params: &KnapsackParams,
    options: &GenerateOptions,
    rng: &mut R,
) -> Result<KeyPair> {
    params.validate().map_err(|e| knapsack_err!("{}", e))?;
    let length = params.key_length;

    let sequence = superincreasing_sequence(rng, length)?;

    let one = BigUint::one();
    let m_min = (BigUint::one() << (2 * length + 1)) + &one;
    let m_max = (BigUint::one() << (2 * length + 2)) - &one;
    let modulus = uniform_random(rng, &m_min, &m_max)?;

    let (multiplier, multiplier_inverse) = pick_multiplier(&modulus, options, rng)?;

    let sk = PrivateKey::new(sequence, modulus, multiplier, multiplier_inverse);
    let pk = sk.public_key();

    debug!(key_length = length, "generated knapsack key pair");
    Ok(KeyPair::from_parts(pk, sk))
}

/// Sample an invertible multiplier and its inverse modulo `modulus`
fn pick_multiplier<R: RngCore + CryptoRng + ?Sized>(
    modulus: &BigUint,
    options: &GenerateOptions,
    rng: &mut R,
) -> Result<(BigUint, BigUint)> {
    let two = BigUint::from(2u32);
    if modulus < &BigUint::from(4u32) {
        return Err(knapsack_err!("modulus {} too small for a multiplier", modulus));
    }
    let max = modulus - &two;

    let start = Instant::now();
    let mut attempts = 0u64;
    loop {
        attempts += 1;

        let w_prime = uniform_random(rng, &two, &max)?;
        let w = &w_prime / gcd(&w_prime, modulus);
        if w >= two {
            match mod_inverse(&w, modulus) {
                Ok(wi) => {
                    debug!(attempts, "found invertible multiplier");
                    return Ok((w, wi));
                }
                Err(KnapsackError::NotInvertible) => {}
                Err(e) => return Err(e),
            }
        }

        // Only checked after a rejected draw, so every search gets one attempt
        if let Some(deadline) = options.deadline {
            if start.elapsed() >= deadline {
                return Err(knapsack_err!(
                    "no invertible multiplier found within {:?} ({} attempts)",
                    deadline,
                    attempts
                ));
            }
        }
    }
}

impl KeyPair {
    /// Generate a fresh key pair; see [`generate_with_options`]
    pub fn generate<R: RngCore + CryptoRng + ?Sized>(
        params: &KnapsackParams,
        rng: &mut R,
    ) -> Result<Self> {
        generate(params, rng)
    }
}
