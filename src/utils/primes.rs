//! Trial-division primality check.

/// Tests whether `n` is prime by trial division up to its square root,
/// walking the 6k±1 wheel after handling 2 and 3.
///
/// Informational utility for inspecting the master parameters; no core
/// component depends on it for correctness.
///
/// Cost grows with √n, so probing numbers near 2^64 takes on the order
/// of 10^9 divisions.
///
/// # Examples
///
/// ```
/// use quadmix::utils::primes::is_prime;
///
/// assert!(is_prime(1_000_000_007));
/// assert!(!is_prime(1_000_000_005));
/// ```
pub fn is_prime(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i: u64 = 5;
    while let Some(sq) = i.checked_mul(i) {
        if sq > n {
            break;
        }
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_numbers() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(5));
        assert!(!is_prime(9));
        assert!(is_prime(97));
        assert!(!is_prime(100));
    }

    #[test]
    fn test_wheel_boundaries() {
        assert!(!is_prime(25)); // 5 * 5, first wheel composite
        assert!(!is_prime(35)); // 5 * 7
        assert!(is_prime(47));
        assert!(!is_prime(49)); // 7 * 7
    }

    #[test]
    fn test_large_primes() {
        assert!(is_prime(1_000_000_007));
        assert!(is_prime(4_294_967_291)); // largest 32-bit prime
        assert!(!is_prime(4_294_967_295)); // 3 * 5 * 17 * 257 * 65537
        assert!(!is_prime(1_000_000_007_u64 * 3));
    }

    #[test]
    fn test_mersenne_like() {
        assert!(is_prime(2_147_483_647)); // 2^31 - 1
        assert!(!is_prime(2_147_483_649)); // 3 * 715827883
    }
}
