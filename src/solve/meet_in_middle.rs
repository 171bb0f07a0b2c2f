//! Meet-in-the-middle solver for general exact subset sum
//!
//! Splits the weights into two halves, tabulates every subset sum of each
//! half, then looks for a left sum `s` with `target - s` in the right table.
//! Time and memory are both `O(2^(n/2))`, so this is only usable for a few
//! dozen weights. It exists to show how much work an arbitrary (public)
//! knapsack takes compared with the linear-time superincreasing case.

use std::collections::HashMap;

use crate::error::{knapsack_err, Result};

/// Most weights one instance may carry; each half mask is a `u64` bitset
pub const MAX_WEIGHTS: usize = 64;

/// Subset sum → inclusion mask for one half
///
/// When several masks share a sum, the one enumerated last wins.
type HalfTable = HashMap<u128, u64>;

/// Find one subset of `weights` summing exactly to `target`
///
/// Returns the chosen weight values in their original order (duplicates
/// kept), or `None` when no subset works. When several subsets work, which
/// one comes back is unspecified.
pub fn solve_subset_sum(weights: &[u64], target: u64) -> Result<Option<Vec<u64>>> {
    let (left, right, left_sums, right_sums) = tabulate(weights)?;
    let target = target as u128;

    for (&sum, &left_mask) in &left_sums {
        if sum > target {
            continue;
        }
        if let Some(&right_mask) = right_sums.get(&(target - sum)) {
            return Ok(Some(construct_solution(left, right, left_mask, right_mask)));
        }
    }

    Ok(None)
}

/// Every solution reachable through the per-sum tables
///
/// One subset per distinct (left sum, right sum) pair, so subsets hidden
/// behind a duplicate half sum are not listed.
pub fn solve_subset_sum_all(weights: &[u64], target: u64) -> Result<Vec<Vec<u64>>> {
    let (left, right, left_sums, right_sums) = tabulate(weights)?;
    let target = target as u128;

    let solutions = left_sums
        .iter()
        .filter(|(sum, _)| **sum <= target)
        .filter_map(|(&sum, &left_mask)| {
            right_sums
                .get(&(target - sum))
                .map(|&right_mask| construct_solution(left, right, left_mask, right_mask))
        })
        .collect();

    Ok(solutions)
}

/// Split at the midpoint and build both half tables in parallel
fn tabulate(weights: &[u64]) -> Result<(&[u64], &[u64], HalfTable, HalfTable)> {
    if weights.len() > MAX_WEIGHTS {
        return Err(knapsack_err!(
            "meet-in-the-middle supports at most {} weights, got {}",
            MAX_WEIGHTS,
            weights.len()
        ));
    }

    let (left, right) = weights.split_at(weights.len() / 2);
    let (left_sums, right_sums) = rayon::join(|| unique_sums(left), || unique_sums(right));
    Ok((left, right, left_sums, right_sums))
}

/// Enumerate all `2^len` masks of `half` and record each mask's sum
fn unique_sums(half: &[u64]) -> HalfTable {
    let count = 1u64 << half.len();
    let mut sums = HashMap::with_capacity(count.min(1 << 20) as usize);
    for mask in 0..count {
        sums.insert(sum_with_mask(half, mask), mask);
    }
    sums
}

fn sum_with_mask(half: &[u64], mask: u64) -> u128 {
    half.iter()
        .enumerate()
        .filter(|(i, _)| (mask >> i) & 1 == 1)
        .map(|(_, &w)| w as u128)
        .sum()
}

fn construct_solution(left: &[u64], right: &[u64], left_mask: u64, right_mask: u64) -> Vec<u64> {
    let pick = |half: &[u64], mask: u64| -> Vec<u64> {
        half.iter()
            .enumerate()
            .filter(|(i, _)| (mask >> i) & 1 == 1)
            .map(|(_, &w)| w)
            .collect()
    };

    let mut out = pick(left, left_mask);
    out.extend(pick(right, right_mask));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total(values: &[u64]) -> u128 {
        values.iter().map(|&v| v as u128).sum()
    }

    /// True if `subset` can be drawn from `weights` keeping order
    fn is_subsequence(subset: &[u64], weights: &[u64]) -> bool {
        let mut it = weights.iter();
        subset.iter().all(|s| it.any(|w| w == s))
    }

    #[test]
    fn test_small_instance() {
        let weights = [1, 2, 3, 4, 5];
        let solution = solve_subset_sum(&weights, 10).unwrap().expect("10 is reachable");
        assert_eq!(total(&solution), 10);
        assert!(is_subsequence(&solution, &weights));
    }

    #[test]
    fn test_no_solution() {
        let weights = [2, 4, 6, 8];
        assert_eq!(solve_subset_sum(&weights, 7).unwrap(), None);
        assert_eq!(solve_subset_sum(&weights, 21).unwrap(), None);
    }

    #[test]
    fn test_edge_sizes() {
        assert_eq!(solve_subset_sum(&[], 0).unwrap(), Some(vec![]));
        assert_eq!(solve_subset_sum(&[], 1).unwrap(), None);
        assert_eq!(solve_subset_sum(&[9], 9).unwrap(), Some(vec![9]));
        assert_eq!(solve_subset_sum(&[9], 0).unwrap(), Some(vec![]));
    }

    #[test]
    fn test_duplicates_preserved() {
        let weights = [7, 7, 7, 7];
        let solution = solve_subset_sum(&weights, 21).unwrap().unwrap();
        assert_eq!(solution, vec![7, 7, 7]);
    }

    #[test]
    fn test_large_weights_do_not_overflow() {
        let weights = [u64::MAX, u64::MAX - 1, 3, 5];
        // u64::MAX + 3 wraps in u64 but not in the u128 tables
        assert_eq!(solve_subset_sum(&weights, 2).unwrap(), None);
        let solution = solve_subset_sum(&weights, u64::MAX).unwrap().unwrap();
        assert_eq!(total(&solution), u64::MAX as u128);
    }

    #[test]
    fn test_matches_brute_force() {
        let weights = [31, 7, 19, 44, 3, 12, 28, 9, 16, 50];
        let max: u64 = weights.iter().sum();
        for target in 0..=max + 2 {
            let expected = (0u32..(1 << weights.len())).any(|subset| {
                let sum: u64 = (0..weights.len())
                    .filter(|i| (subset >> i) & 1 == 1)
                    .map(|i| weights[i])
                    .sum();
                sum == target
            });
            match solve_subset_sum(&weights, target).unwrap() {
                Some(solution) => {
                    assert!(expected, "found phantom solution for {}", target);
                    assert_eq!(total(&solution), target as u128);
                    assert!(is_subsequence(&solution, &weights));
                }
                None => assert!(!expected, "missed solution for {}", target),
            }
        }
    }

    #[test]
    fn test_all_solutions() {
        let weights = [1, 2, 3, 4, 5];
        let solutions = solve_subset_sum_all(&weights, 10).unwrap();
        assert!(!solutions.is_empty());
        for s in &solutions {
            assert_eq!(total(s), 10);
        }
        // Each left sum contributes at most once
        assert!(solutions.len() <= 4);
    }

    #[test]
    fn test_too_many_weights() {
        let weights = vec![1u64; MAX_WEIGHTS + 1];
        assert!(solve_subset_sum(&weights, 1).is_err());
    }
}
