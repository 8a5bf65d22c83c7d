//! Permutation generation and counting.

/// Every ordering of `items`, generated with Heap's algorithm.
///
/// Works on an internal copy, so `items` is left untouched. Produces exactly
/// `n!` orderings; an empty slice has a single, empty ordering.
///
/// ```
/// use advent_solutions::utils::combinatorics::permute;
///
/// let mut all = permute(&[1, 2, 3]);
/// all.sort();
/// assert_eq!(all.len(), 6);
/// assert_eq!(all[0], vec![1, 2, 3]);
/// assert_eq!(all[5], vec![3, 2, 1]);
/// ```
pub fn permute<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let mut work = items.to_vec();
    let n = work.len();
    let mut result = vec![work.clone()];

    // Iterative form: c[i] counts the swaps done at level i
    let mut c = vec![0usize; n];
    let mut i = 1;
    while i < n {
        if c[i] < i {
            if i % 2 == 0 {
                work.swap(0, i);
            } else {
                work.swap(c[i], i);
            }
            result.push(work.clone());
            c[i] += 1;
            i = 1;
        } else {
            c[i] = 0;
            i += 1;
        }
    }
    result
}

/// `n!`. Saturates at `u64::MAX` (from `n = 21` on).
pub fn factorial(n: u64) -> u64 {
    (2..=n).try_fold(1u64, |acc, k| acc.checked_mul(k)).unwrap_or(u64::MAX)
}

/// Number of ways to choose `k` of `n` items, ignoring order.
///
/// `0` when `k > n`. Saturates at `u64::MAX`.
pub fn combinations(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        // Exact at every step: result is C(n, i + 1) after the division.
        // C(n, i) only grows while i <= n / 2, so leaving u64 is final.
        let Some(scaled) = result.checked_mul((n - i) as u128) else {
            return u64::MAX;
        };
        result = scaled / (i + 1) as u128;
        if result > u64::MAX as u128 {
            return u64::MAX;
        }
    }
    u64::try_from(result).unwrap_or(u64::MAX)
}

/// Number of ordered selections of `k` out of `n` items, `n! / (n - k)!`.
///
/// `0` when `k > n`. Saturates at `u64::MAX`.
pub fn permutations(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    ((n - k + 1)..=n)
        .try_fold(1u64, |acc, m| acc.checked_mul(m))
        .unwrap_or(u64::MAX)
}
