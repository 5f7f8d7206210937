//! Prime sizing for the slot array

/// Trial division over the 6k ± 1 wheel
pub fn is_prime(n: usize) -> bool {
    if n <= 1 {
        return false;
    }
    if n == 2 || n == 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let mut i = 5;
    // `i <= n / i` instead of `i * i <= n` so we never overflow
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Returns the smallest prime `>= n`, `None` if it does not fit in a `usize`
pub fn next_prime(mut n: usize) -> Option<usize> {
    while !is_prime(n) {
        n = n.checked_add(1)?;
    }
    Some(n)
}
