//! Knapsack key types

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::math::mul_mod;
use crate::solve::is_superincreasing;

use super::id::{key_id, KeyId};

/// Public key: the disguised knapsack `b_i = a_i · W mod M`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    elements: Vec<BigUint>,
}

impl PublicKey {
    /// Wrap an existing public sequence
    pub fn new(elements: Vec<BigUint>) -> Self {
        Self { elements }
    }

    /// Public knapsack weights
    pub fn elements(&self) -> &[BigUint] {
        &self.elements
    }

    /// Key length L
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True for a zero-length key
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Display identifier for this key
    pub fn id(&self) -> KeyId {
        key_id(&self.elements)
    }
}

/// Private key: superincreasing sequence plus the modular trapdoor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateKey {
    sequence: Vec<BigUint>,
    modulus: BigUint,
    multiplier: BigUint,
    multiplier_inverse: BigUint,
}

impl PrivateKey {
    /// Assemble a private key from its four parameters
    ///
    /// No invariants are checked; see [`KeyPair::is_consistent`].
    pub fn new(
        sequence: Vec<BigUint>,
        modulus: BigUint,
        multiplier: BigUint,
        multiplier_inverse: BigUint,
    ) -> Self {
        Self {
            sequence,
            modulus,
            multiplier,
            multiplier_inverse,
        }
    }

    /// Superincreasing sequence a_0 < a_1 < ...
    pub fn sequence(&self) -> &[BigUint] {
        &self.sequence
    }

    /// Modulus M
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Multiplier W
    pub fn multiplier(&self) -> &BigUint {
        &self.multiplier
    }

    /// W^(-1) mod M
    pub fn multiplier_inverse(&self) -> &BigUint {
        &self.multiplier_inverse
    }

    /// Key length L
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// True for a zero-length key
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Recompute the public sequence from the trapdoor
    pub fn public_key(&self) -> PublicKey {
        let elements = self
            .sequence
            .iter()
            .map(|a| mul_mod(a, &self.multiplier, &self.modulus))
            .collect();
        PublicKey::new(elements)
    }

    /// Display identifier for this key (hash of the private sequence)
    pub fn id(&self) -> KeyId {
        key_id(&self.sequence)
    }
}

/// Matching public/private key pair
///
/// Immutable once built. Generation is the only place that picks the
/// parameters; everything else borrows the two halves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    public_key: PublicKey,
    private_key: PrivateKey,
}

impl KeyPair {
    /// Pair a public key with the private key it was derived from
    pub fn from_parts(public_key: PublicKey, private_key: PrivateKey) -> Self {
        Self {
            public_key,
            private_key,
        }
    }

    /// Shareable public half
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Secret trapdoor half
    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    /// Split into the transportable public and private views
    pub fn into_parts(self) -> (PublicKey, PrivateKey) {
        (self.public_key, self.private_key)
    }

    /// Key length L
    pub fn len(&self) -> usize {
        self.private_key.len()
    }

    /// True for a zero-length key
    pub fn is_empty(&self) -> bool {
        self.private_key.is_empty()
    }

    /// Check every structural invariant tying the key pair together
    ///
    /// - the private sequence is superincreasing
    /// - M exceeds its sum
    /// - 2 <= W <= M - 2 and W · W^(-1) ≡ 1 (mod M)
    /// - b_i = a_i · W mod M for every index
    pub fn is_consistent(&self) -> bool {
        let sk = &self.private_key;
        let m = sk.modulus();

        if !is_superincreasing(sk.sequence()) {
            return false;
        }
        let total: BigUint = sk.sequence().iter().sum();
        if &total >= m {
            return false;
        }

        let two = BigUint::from(2u32);
        if m < &(&two + &two) || sk.multiplier() < &two || sk.multiplier() > &(m - &two) {
            return false;
        }
        if sk.multiplier_inverse().is_zero()
            || !mul_mod(sk.multiplier(), sk.multiplier_inverse(), m).is_one()
        {
            return false;
        }

        self.public_key.len() == sk.len() && self.public_key == sk.public_key()
    }
}
