//! Number theory helpers that keep coming back in puzzles.

pub use super::combinatorics::factorial;

/// Greatest common divisor. `gcd(0, 0) == 0`.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple. `0` if either argument is `0`.
pub fn lcm(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        return 0;
    }
    a / gcd(a, b) * b
}

/// LCM of a whole sequence, `1` for an empty one.
///
/// Typical use: cycle lengths of independent periodic processes.
///
/// ```
/// use advent_solutions::utils::math::lcm_all;
///
/// assert_eq!(lcm_all([4, 6, 10]), 60);
/// ```
pub fn lcm_all<I>(values: I) -> u64
where
    I: IntoIterator<Item = u64>,
{
    values.into_iter().fold(1, lcm)
}

pub fn is_prime(n: u64) -> bool {
    match n {
        0 | 1 => false,
        2 | 3 => true,
        _ if n % 2 == 0 || n % 3 == 0 => false,
        _ => {
            let mut i = 5;
            // i <= n / i rather than i * i <= n, which overflows near u64::MAX
            while i <= n / i {
                if n % i == 0 || n % (i + 2) == 0 {
                    return false;
                }
                i += 6;
            }
            true
        }
    }
}

/// Sieve of Eratosthenes, primes `<= limit` in ascending order.
pub fn primes_up_to(limit: usize) -> Vec<usize> {
    if limit < 2 {
        return Vec::new();
    }
    let mut composite = vec![false; limit + 1];
    let mut i = 2;
    while i * i <= limit {
        if !composite[i] {
            for j in (i * i..=limit).step_by(i) {
                composite[j] = true;
            }
        }
        i += 1;
    }
    (2..=limit).filter(|&n| !composite[n]).collect()
}

/// `base^exp mod modulus` by repeated squaring.
pub fn pow_mod(base: u64, mut exp: u64, modulus: u64) -> u64 {
    if modulus == 1 {
        return 0;
    }
    let m = modulus as u128;
    let mut base = base as u128 % m;
    let mut result: u128 = 1;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % m;
        }
        base = base * base % m;
        exp >>= 1;
    }
    result as u64
}
