//! Error handling for the knapsack cryptosystem
//!
//! Every failure the core can produce is a local, recoverable condition and is
//! reported as a [`KnapsackError`] variant. Subset-sum solvers never use this
//! type for "no solution": that is an ordinary `None`.

use std::fmt;

/// Knapsack operation error
#[derive(Debug)]
pub enum KnapsackError {
    /// Non-positive key length, malformed range bounds, expired deadline
    InvalidParameter(String),
    /// The entropy source failed while sampling
    RandomnessFailure(String),
    /// A modular inverse was requested for a value sharing a factor with the modulus
    NotInvertible,
    /// The message expands to more bits than the public key has entries
    KeyTooShort {
        /// Number of public-key entries
        key_len: usize,
        /// Number of message bits
        bit_len: usize,
    },
    /// Key file encoding or decoding failed
    Serialization(String),
}

impl fmt::Display for KnapsackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter(msg) => write!(f, "invalid parameter: {}", msg),
            Self::RandomnessFailure(msg) => write!(f, "randomness failure: {}", msg),
            Self::NotInvertible => write!(f, "value is not invertible modulo n"),
            Self::KeyTooShort { key_len, bit_len } => write!(
                f,
                "public key must be at least as long as the message bits ({} < {})",
                key_len, bit_len
            ),
            Self::Serialization(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for KnapsackError {}

impl From<rand::Error> for KnapsackError {
    fn from(err: rand::Error) -> Self {
        Self::RandomnessFailure(err.to_string())
    }
}

impl From<std::io::Error> for KnapsackError {
    fn from(err: std::io::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<bincode::Error> for KnapsackError {
    fn from(err: bincode::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for KnapsackError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type for knapsack operations
pub type Result<T> = std::result::Result<T, KnapsackError>;

/// Create an `InvalidParameter` error with format string support
macro_rules! knapsack_err {
    ($($arg:tt)*) => {
        $crate::error::KnapsackError::InvalidParameter(format!($($arg)*))
    };
}

pub(crate) use knapsack_err;
