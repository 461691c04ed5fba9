//! # Modular Arithmetic
//!
//! Number-theoretic helpers for the permuter: gcd, modular inverse,
//! square-and-multiply exponentiation and a deterministic primality test.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

/// Greatest common divisor.
pub const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// `(a * b) mod m` without overflow.
const fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

/// `base^exp mod m` by repeated squaring, `O(log exp)` multiplications.
pub const fn pow_mod(base: u64, mut exp: u64, m: u64) -> u64 {
    if m == 1 {
        return 0;
    }
    let mut result = 1;
    let mut base = base % m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    result
}

/// Multiplicative inverse of `a` modulo `m`, if `gcd(a, m) == 1`.
pub const fn mod_inverse(a: u64, m: u64) -> Option<u64> {
    if m == 0 {
        return None;
    }
    let (mut old_r, mut r) = ((a % m) as i128, m as i128);
    let (mut old_s, mut s) = (1i128, 0i128);

    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }

    if old_r != 1 {
        return None;
    }
    // rem_euclid result lies in [0, m), so it fits back into u64
    Some(old_s.rem_euclid(m as i128) as u64)
}

/// Deterministic Miller-Rabin for the whole `u64` range.
pub fn is_prime(n: u64) -> bool {
    const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

    if n < 2 {
        return false;
    }
    for p in WITNESSES {
        if n % p == 0 {
            return n == p;
        }
    }

    let mut d = n - 1;
    let mut s = 0;
    while d % 2 == 0 {
        d /= 2;
        s += 1;
    }

    'witness: for a in WITNESSES {
        let mut x = pow_mod(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..s {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(17, 3120), 1);
        assert_eq!(gcd(0, 5), 5);
    }

    #[test]
    fn test_pow_mod() {
        assert_eq!(pow_mod(4, 13, 497), 445);
        assert_eq!(pow_mod(2, 0, 7), 1);
        assert_eq!(pow_mod(0, 5, 7), 0);
        assert_eq!(pow_mod(5, 3, 1), 0);
        assert_eq!(pow_mod(2, 127, 2_148_498_091), 364_578_003);
    }

    #[test]
    fn test_pow_mod_large_exponent() {
        // Exponents near 2^31 must not overflow intermediate products
        let n = 2_148_498_091;
        let e = 1_948_399_795;
        let d = mod_inverse(e, 2_148_399_792).unwrap();
        assert_eq!(pow_mod(pow_mod(12345, e, n), d, n), 12345);
    }

    #[test]
    fn test_mod_inverse() {
        assert_eq!(mod_inverse(17, 3120), Some(2753));
        assert_eq!(mod_inverse(127, 2_148_399_792), Some(744_327_487));
        assert_eq!(mod_inverse(65537, 2_148_399_792), Some(428_585_057));
        assert_eq!(mod_inverse(6, 9), None);
        assert_eq!(mod_inverse(3, 0), None);
    }

    #[test]
    fn test_is_prime() {
        assert!(is_prime(2));
        assert!(is_prime(65497));
        assert!(is_prime(32803));
        assert!(is_prime(4_294_967_291));
        assert!(!is_prime(1));
        assert!(!is_prime(65499));
        assert!(!is_prime(2_148_498_091));
        // Strong pseudoprime to base 2
        assert!(!is_prime(3_215_031_751));
    }
}
