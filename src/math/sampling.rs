//! Uniform big-integer sampling from a cryptographically secure source

use num_bigint::BigUint;
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::error::{knapsack_err, Result};

/// Sample a uniformly distributed integer in `[min, max]` inclusive
///
/// Draws `bits(max - min)` random bits and rejects candidates above the
/// span, so every value in range is equally likely. Any entropy failure is
/// surfaced as `RandomnessFailure` instead of panicking.
pub fn uniform_random<R: RngCore + CryptoRng + ?Sized>(
    rng: &mut R,
    min: &BigUint,
    max: &BigUint,
) -> Result<BigUint> {
    if min > max {
        return Err(knapsack_err!("empty range: min {} > max {}", min, max));
    }

    let span = max - min;
    let bits = span.bits();
    if bits == 0 {
        return Ok(min.clone());
    }

    let byte_len = ((bits + 7) / 8) as usize;
    let excess = (byte_len as u64) * 8 - bits;
    let mut buf = vec![0u8; byte_len];

    loop {
        rng.try_fill_bytes(&mut buf)?;
        // Clear the high bits above the span's bit length
        buf[0] &= 0xffu8 >> excess;
        let candidate = BigUint::from_bytes_be(&buf);
        if candidate <= span {
            return Ok(candidate + min);
        }
    }
}

/// Randomness capability for key generation
///
/// Wraps a ChaCha20 stream so callers can choose between OS entropy and a
/// fixed seed for reproducible keys.
pub struct KeySampler {
    rng: ChaCha20Rng,
}

impl KeySampler {
    /// Create a sampler seeded from operating system entropy
    pub fn new() -> Self {
        Self {
            rng: ChaCha20Rng::from_entropy(),
        }
    }

    /// Create a seeded sampler for reproducibility
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Sample uniformly in `[min, max]`
    pub fn uniform(&mut self, min: &BigUint, max: &BigUint) -> Result<BigUint> {
        uniform_random(&mut self.rng, min, max)
    }
}

impl Default for KeySampler {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for KeySampler {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

impl CryptoRng for KeySampler {}
