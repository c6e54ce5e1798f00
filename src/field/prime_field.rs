// src/field/prime_field.rs

use log::debug;

use crate::error::{GaloisFieldError, Result};

/// Prime Galois field GF(p) backed by modular integer arithmetic.
///
/// All elements live in [0, p). Intermediate sums and products are widened
/// to u128 so the field works for primes up to the full u64 range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeField {
    prime: u64,
}

impl PrimeField {
    /// The caller (normally the field factory) is responsible for handing in
    /// an actual prime.
    pub fn new(prime: u64) -> Self {
        debug!("Constructing prime field GF({})", prime);
        PrimeField { prime }
    }

    pub fn order(&self) -> u64 {
        self.prime
    }

    pub fn characteristic(&self) -> u64 {
        self.prime
    }

    pub fn degree(&self) -> u32 {
        1
    }

    pub fn add(&self, a: u64, b: u64) -> u64 {
        ((a as u128 + b as u128) % self.prime as u128) as u64
    }

    pub fn subtract(&self, a: u64, b: u64) -> u64 {
        let p = self.prime as u128;
        ((a as u128 % p + p - b as u128 % p) % p) as u64
    }

    pub fn multiply(&self, a: u64, b: u64) -> u64 {
        ((a as u128 * b as u128) % self.prime as u128) as u64
    }

    /// `a * inverse(b) mod p`.
    pub fn divide(&self, a: u64, b: u64) -> Result<u64> {
        if b == 0 {
            return Err(GaloisFieldError::DivisionByZero);
        }
        Ok(self.multiply(a, self.inverse(b)?))
    }

    /// The unique x in [1, p) with `a * x ≡ 1 (mod p)`.
    pub fn inverse(&self, element: u64) -> Result<u64> {
        if element == 0 {
            return Err(GaloisFieldError::DivisionByZero);
        }
        Ok(self.mod_inverse(element % self.prime))
    }

    /// Raise an element to a power. Negative exponents invert the base
    /// first, then square-and-multiply.
    pub fn power(&self, element: u64, exponent: i64) -> Result<u64> {
        let (mut base, mut remaining) = if exponent < 0 {
            (self.inverse(element)?, exponent.unsigned_abs())
        } else {
            (element % self.prime, exponent as u64)
        };

        let mut result = 1 % self.prime;
        while remaining > 0 {
            if remaining & 1 == 1 {
                result = self.multiply(result, base);
            }
            base = self.multiply(base, base);
            remaining >>= 1;
        }

        Ok(result)
    }

    pub fn is_valid_element(&self, element: u64) -> bool {
        element < self.prime
    }

    /// Iterative extended Euclidean algorithm: maintain the remainder pair
    /// and the Bézout-coefficient pair, loop while the remainder exceeds 1,
    /// then normalize a negative final coefficient by adding the modulus.
    fn mod_inverse(&self, a: u64) -> u64 {
        let modulus = self.prime as i128;
        let mut remainder = a as i128;
        let mut divisor = modulus;
        let mut x0: i128 = 0;
        let mut x1: i128 = 1;

        if modulus == 1 {
            return 0;
        }

        while remainder > 1 {
            let quotient = remainder / divisor;

            let next_divisor = remainder % divisor;
            remainder = divisor;
            divisor = next_divisor;

            let next_x0 = x1 - quotient * x0;
            x1 = x0;
            x0 = next_x0;
        }

        if x1 < 0 {
            x1 += modulus;
        }

        x1 as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic_mod_7() {
        let gf7 = PrimeField::new(7);
        assert_eq!(gf7.add(3, 5), 1);
        assert_eq!(gf7.subtract(3, 5), 5);
        assert_eq!(gf7.multiply(3, 5), 1);
        assert_eq!(gf7.divide(6, 3).unwrap(), 2);
    }

    #[test]
    fn test_inverse_times_element_is_one() {
        let gf7 = PrimeField::new(7);
        for element in 1..7 {
            let inverse = gf7.inverse(element).unwrap();
            assert_eq!(gf7.multiply(element, inverse), 1);
        }
    }

    #[test]
    fn test_inverse_of_zero_fails() {
        let gf7 = PrimeField::new(7);
        assert_eq!(gf7.inverse(0), Err(GaloisFieldError::DivisionByZero));
        assert_eq!(gf7.divide(3, 0), Err(GaloisFieldError::DivisionByZero));
    }

    #[test]
    fn test_negative_power_inverts_base() {
        let gf7 = PrimeField::new(7);
        let inverse = gf7.inverse(3).unwrap();
        assert_eq!(gf7.power(3, -1).unwrap(), inverse);
        assert_eq!(gf7.power(3, -2).unwrap(), gf7.multiply(inverse, inverse));
    }

    #[test]
    fn test_power_of_zero() {
        let gf7 = PrimeField::new(7);
        assert_eq!(gf7.power(0, 0).unwrap(), 1);
        assert_eq!(gf7.power(0, 5).unwrap(), 0);
        assert!(gf7.power(0, -1).is_err());
    }

    #[test]
    fn test_valid_elements() {
        let gf7 = PrimeField::new(7);
        assert!(gf7.is_valid_element(0));
        assert!(gf7.is_valid_element(6));
        assert!(!gf7.is_valid_element(7));
    }

    #[test]
    fn test_large_prime_does_not_overflow() {
        // 2^61 - 1 is prime; products must go through u128.
        let p = (1u64 << 61) - 1;
        let field = PrimeField::new(p);
        let a = p - 2;
        let inverse = field.inverse(a).unwrap();
        assert_eq!(field.multiply(a, inverse), 1);
    }
}
