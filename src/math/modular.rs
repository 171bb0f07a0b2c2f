//! Arbitrary-precision modular arithmetic

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::{KnapsackError, Result};

/// Greatest common divisor by the Euclidean algorithm
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    let mut r = a.clone();
    let mut new_r = b.clone();
    while !new_r.is_zero() {
        let rem = &r % &new_r;
        r = new_r;
        new_r = rem;
    }
    r
}

/// Extended Euclidean algorithm
///
/// Returns `(g, x, y)` with `a·x + b·y = g = gcd(a, b)`.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let quotient = old_r.div_floor(&r);

        let tmp_r = &old_r - &quotient * &r;
        old_r = std::mem::replace(&mut r, tmp_r);

        let tmp_s = &old_s - &quotient * &s;
        old_s = std::mem::replace(&mut s, tmp_s);

        let tmp_t = &old_t - &quotient * &t;
        old_t = std::mem::replace(&mut t, tmp_t);
    }

    if old_r.sign() == Sign::Minus {
        (-old_r, -old_s, -old_t)
    } else {
        (old_r, old_s, old_t)
    }
}

/// Compute a modular inverse using the extended Euclidean algorithm
///
/// Returns `x` in `[0, n)` such that `(a * x) % n == 1`, or
/// [`KnapsackError::NotInvertible`] when `gcd(a, n) != 1`.
pub fn mod_inverse(a: &BigUint, n: &BigUint) -> Result<BigUint> {
    if n.is_zero() {
        return Err(KnapsackError::NotInvertible);
    }
    if n.is_one() {
        return Ok(BigUint::zero());
    }

    let a_int = BigInt::from_biguint(Sign::Plus, a % n);
    let n_int = BigInt::from_biguint(Sign::Plus, n.clone());
    let (g, x, _) = extended_gcd(&a_int, &n_int);
    if !g.is_one() {
        return Err(KnapsackError::NotInvertible);
    }

    // x may be negative; mod_floor lands it in [0, n)
    x.mod_floor(&n_int)
        .to_biguint()
        .ok_or(KnapsackError::NotInvertible)
}

/// `(a * b) mod n`
#[inline]
pub fn mul_mod(a: &BigUint, b: &BigUint, n: &BigUint) -> BigUint {
    (a * b) % n
}
