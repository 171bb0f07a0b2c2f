//! Greedy solver for superincreasing knapsacks

use std::ops::{AddAssign, SubAssign};

use num_traits::Zero;

/// Each element strictly exceeds the sum of all preceding elements
pub fn is_superincreasing<T>(sequence: &[T]) -> bool
where
    T: Clone + Ord + Zero + for<'a> AddAssign<&'a T>,
{
    let mut sum = T::zero();
    for n in sequence {
        if n <= &sum {
            return false;
        }
        sum += n;
    }
    true
}

/// Recover the 0/1 mask selecting `target` from a superincreasing sequence
///
/// Walks the weights from largest to smallest. If the target is more than
/// all strictly smaller weights can reach, the current weight must be in
/// the subset. Stops as soon as the target hits zero; every later position
/// stays 0.
///
/// `target` is assumed to be an exact subset sum of `weights`. When it is
/// not, the returned mask is simply wrong: no error is raised. Callers that
/// need to know can re-sum the selection (see [`mask_sum`]).
pub fn solve_superincreasing<T>(weights: &[T], target: &T) -> Vec<u8>
where
    T: Clone + Ord + Zero + for<'a> AddAssign<&'a T> + for<'a> SubAssign<&'a T>,
{
    let mut mask = vec![0u8; weights.len()];

    let mut remaining = T::zero();
    for w in weights {
        remaining += w;
    }
    let mut target = target.clone();

    for i in (0..weights.len()).rev() {
        if target.is_zero() {
            break;
        }
        let last = &weights[i];
        remaining -= last;

        if target > remaining {
            mask[i] = 1;
            if target < *last {
                // Overshoot: the target is not a subset sum, nothing smaller can match
                break;
            }
            target -= last;
        }
    }

    mask
}

/// Weights picked out by a 0/1 mask, in index order
pub fn select<T: Clone>(weights: &[T], mask: &[u8]) -> Vec<T> {
    weights
        .iter()
        .zip(mask)
        .filter(|(_, bit)| **bit == 1)
        .map(|(w, _)| w.clone())
        .collect()
}

/// Sum of the weights picked out by a 0/1 mask
pub fn mask_sum<T>(weights: &[T], mask: &[u8]) -> T
where
    T: Zero + for<'a> AddAssign<&'a T>,
{
    let mut sum = T::zero();
    for (w, &bit) in weights.iter().zip(mask) {
        if bit == 1 {
            sum += w;
        }
    }
    sum
}
