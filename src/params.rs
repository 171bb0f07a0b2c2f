//! Parameter sets for knapsack key generation

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Key length used by the command-line tool when none is given
pub const DEFAULT_KEY_LENGTH: usize = 100;

/// Core parameters for a knapsack key pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnapsackParams {
    /// Number of public/private key elements L
    ///
    /// A key of length L encrypts messages of at most L bits,
    /// i.e. `L / 8` whole bytes.
    pub key_length: usize,
}

impl KnapsackParams {
    /// Parameters for a key of the given length
    pub fn with_key_length(key_length: usize) -> Self {
        Self { key_length }
    }

    /// Largest plaintext, in bytes, that fits under this key
    pub fn max_message_bytes(&self) -> usize {
        self.key_length / 8
    }

    /// Bit length of the modulus range `[2^(2L+1) + 1, 2^(2L+2) - 1]`
    pub fn modulus_bits(&self) -> u64 {
        2 * self.key_length as u64 + 2
    }

    /// Check if parameters are valid
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.key_length < 1 {
            return Err("key length must be > 0");
        }
        Ok(())
    }
}

impl Default for KnapsackParams {
    fn default() -> Self {
        Self::with_key_length(DEFAULT_KEY_LENGTH)
    }
}

/// Knobs for the multiplier resampling loop in key generation
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Give up resampling the multiplier after this long
    ///
    /// `None` keeps sampling until an invertible multiplier turns up.
    pub deadline: Option<Duration>,
}

impl GenerateOptions {
    /// Options with a resampling deadline
    pub fn with_deadline(deadline: Duration) -> Self {
        Self {
            deadline: Some(deadline),
        }
    }
}
