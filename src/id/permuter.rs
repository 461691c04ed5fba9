//! # Permuter
//!
//! RSA-style bijection over `[0, N)`: `encrypt(x) = x^E mod N`,
//! `decrypt(y) = y^D mod N` with `D = E^-1 mod (P-1)(Q-1)`.
//!
//! This scrambles counter order; it is not encryption in any security sense.
//! The parameters are small enough to factor.
//!
//! `0`, `1` and `N - 1` are fixed points for every valid exponent.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use rand::Rng;

use super::math::{gcd, is_prime, mod_inverse, pow_mod};
use crate::{
    constants::{DEFAULT_EXPONENT, DEFAULT_PRIME_P, DEFAULT_PRIME_Q},
    error::IdError,
};

/// An immutable permutation parameter set.
///
/// Changing the exponent means building a new `Permuter`; IDs must be
/// decoded with the same value that encoded them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Permuter {
    p: u64,
    q: u64,
    modulus: u64,
    totient: u64,
    public_exponent: u64,
    private_exponent: u64,
}

impl Default for Permuter {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Permuter {
    /// Default parameters: `P = 65497`, `Q = 32803`, `E = 127`.
    pub const DEFAULT: Self = Self::vetted(DEFAULT_PRIME_P, DEFAULT_PRIME_Q, DEFAULT_EXPONENT);

    /// Builds a permuter from constants known to be valid.
    /// Evaluated at compile time for [`Permuter::DEFAULT`].
    const fn vetted(p: u64, q: u64, e: u64) -> Self {
        let totient = (p - 1) * (q - 1);
        let Some(d) = mod_inverse(e, totient) else {
            panic!("vetted exponent has no inverse");
        };
        Self {
            p,
            q,
            modulus: p * q,
            totient,
            public_exponent: e,
            private_exponent: d,
        }
    }

    /// Builds and validates a permuter for primes `p`, `q` and public exponent `e`.
    ///
    /// Primality is checked here once; `encrypt`/`decrypt` never re-validate.
    pub fn new(p: u64, q: u64, e: u64) -> Result<Self, IdError> {
        for prime in [p, q] {
            if !(3..=u64::from(u32::MAX)).contains(&prime) {
                return Err(IdError::construction(format!(
                    "prime {prime} must be odd and below 2^32"
                )));
            }
            if !is_prime(prime) {
                return Err(IdError::construction(format!("{prime} is not prime")));
            }
        }
        if p == q {
            return Err(IdError::construction("P and Q must be distinct"));
        }

        let totient = (p - 1) * (q - 1);
        if e <= 1 || e >= totient {
            return Err(IdError::construction(format!(
                "exponent {e} must lie strictly between 1 and {totient}"
            )));
        }
        if gcd(e, totient) != 1 {
            return Err(IdError::construction(format!(
                "exponent {e} is not coprime with {totient}"
            )));
        }
        let d = mod_inverse(e, totient).ok_or_else(|| {
            IdError::construction(format!("exponent {e} has no inverse modulo {totient}"))
        })?;

        Ok(Self {
            p,
            q,
            modulus: p * q,
            totient,
            public_exponent: e,
            private_exponent: d,
        })
    }

    /// Same primes, different public exponent.
    pub fn with_exponent(&self, e: u64) -> Result<Self, IdError> {
        Self::new(self.p, self.q, e)
    }

    /// Picks a random exponent in `(1, F)` coprime with `F` for these primes.
    pub fn random_exponent<R: Rng>(&self, rng: &mut R) -> u64 {
        loop {
            let e = rng.random_range(3..self.totient);
            if gcd(e, self.totient) == 1 {
                return e;
            }
        }
    }

    /// Prime factors `(P, Q)`.
    pub const fn primes(&self) -> (u64, u64) {
        (self.p, self.q)
    }

    /// Domain size `N = P * Q`.
    pub const fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Euler's totient `F = (P - 1)(Q - 1)`.
    pub const fn totient(&self) -> u64 {
        self.totient
    }

    /// Public exponent `E`.
    pub const fn public_exponent(&self) -> u64 {
        self.public_exponent
    }

    /// Private exponent `D`.
    pub const fn private_exponent(&self) -> u64 {
        self.private_exponent
    }

    fn check_domain(&self, value: u64) -> Result<(), IdError> {
        if value >= self.modulus {
            return Err(IdError::OutOfRange {
                value,
                modulus: self.modulus,
            });
        }
        Ok(())
    }

    /// Maps a counter in `[0, N)` to its permuted value.
    pub fn encrypt(&self, counter: u64) -> Result<u64, IdError> {
        self.check_domain(counter)?;
        Ok(pow_mod(counter, self.public_exponent, self.modulus))
    }

    /// Inverse of [`Permuter::encrypt`].
    pub fn decrypt(&self, permuted: u64) -> Result<u64, IdError> {
        self.check_domain(permuted)?;
        Ok(pow_mod(permuted, self.private_exponent, self.modulus))
    }
}
