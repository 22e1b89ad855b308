/// Whether `n` may serve as a field characteristic.
///
/// Odd trial division up to `sqrt(n)`; only run when a [`PrimeField`] is
/// built.
///
/// [`PrimeField`]: crate::PrimeField
pub const fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut i = 3;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Largest `r` with `r * r <= n`.
pub const fn floor_sqrt(n: usize) -> usize {
    if n < 2 {
        return n;
    }
    // Newton iteration from above converges monotonically.
    let mut x = n;
    let mut y = x / 2 + x % 2;
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

/// `base^exp`, or `None` on overflow.
pub fn checked_pow(base: u64, exp: usize) -> Option<u64> {
    let mut result: u64 = 1;
    for _ in 0..exp {
        result = result.checked_mul(base)?;
    }
    Some(result)
}

/// Distinct prime divisors of `n` in increasing order.
pub fn prime_divisors(mut n: usize) -> Vec<usize> {
    let mut primes = Vec::new();
    let mut d = 2;

    while d <= n / d {
        if n % d == 0 {
            primes.push(d);
            while n % d == 0 {
                n /= d;
            }
        }
        d += 1;
    }

    if n > 1 {
        primes.push(n);
    }

    primes
}
