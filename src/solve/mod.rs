//! Subset-sum (knapsack) solvers.
//!
//! Two very different instances show up in a knapsack cryptosystem:
//!
//! - **Superincreasing** weights (the private key) have a unique greedy
//!   solution found in one linear pass, see [`solve_superincreasing`].
//! - **Arbitrary** weights (the public key) need exhaustive search; the
//!   meet-in-the-middle solver [`solve_subset_sum`] cuts the naive `2^n`
//!   down to `2^(n/2)` time and memory, which is still exponential.
//!
//! [`solve_knapsack`] picks the right one for a given weight list.
//!
//! # Example
//!
//! ```
//! use knapsack_pke::solve::{solve_knapsack, solve_superincreasing};
//!
//! assert_eq!(solve_superincreasing(&[5u64, 10, 17, 33, 70], &32), vec![1, 1, 1, 0, 0]);
//!
//! let subset = solve_knapsack(&[1, 2, 3, 4, 5], 10).unwrap().unwrap();
//! assert_eq!(subset.iter().sum::<u64>(), 10);
//! ```

mod meet_in_middle;
mod superincreasing;

pub use meet_in_middle::{solve_subset_sum, solve_subset_sum_all, MAX_WEIGHTS};
pub use superincreasing::{is_superincreasing, mask_sum, select, solve_superincreasing};

use crate::error::Result;

/// Return weights that exactly fill a knapsack of size `target`
///
/// Superincreasing weights are solved greedily; anything else goes to the
/// meet-in-the-middle search. `None` means no subset sums to `target`.
pub fn solve_knapsack(weights: &[u64], target: u64) -> Result<Option<Vec<u64>>> {
    let wide: Vec<u128> = weights.iter().map(|&w| w as u128).collect();
    if !is_superincreasing(&wide) {
        return solve_subset_sum(weights, target);
    }

    let mask = solve_superincreasing(&wide, &(target as u128));
    if mask_sum(&wide, &mask) != target as u128 {
        return Ok(None);
    }
    Ok(Some(select(weights, &mask)))
}
