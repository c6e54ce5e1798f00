// src/field/factory.rs

use std::sync::Arc;

use log::debug;

use crate::error::{GaloisFieldError, Result};
use crate::field::binary_extension_field::BinaryExtensionField;
use crate::field::galois_field::GaloisField;
use crate::field::prime_field::PrimeField;
use crate::field::primitive_polynomials::{
    PrimitivePolynomial, PrimitivePolynomials, DEFAULT_PRIMITIVE_POLYNOMIALS,
};

/// Create GF(order) using the built-in primitive polynomial table.
///
/// Supported orders: any prime p, and 2^n for n = 2..=16.
pub fn create(order: u64) -> Result<Arc<GaloisField>> {
    create_with(order, &DEFAULT_PRIMITIVE_POLYNOMIALS)
}

/// Create GF(order) with a caller-supplied primitive polynomial table.
pub fn create_with(order: u64, tables: &PrimitivePolynomials) -> Result<Arc<GaloisField>> {
    if order < 2 {
        return Err(GaloisFieldError::OrderTooSmall(order));
    }

    let (prime, exponent) =
        factorize(order).ok_or(GaloisFieldError::NotPrimePower(order))?;
    debug!("Field order {} factors as {}^{}", order, prime, exponent);

    if exponent == 1 {
        return Ok(Arc::new(GaloisField::Prime(PrimeField::new(prime))));
    }

    if prime == 2 {
        let pattern = match tables.get(2, exponent) {
            Some(PrimitivePolynomial::BitPattern(pattern)) => *pattern,
            _ => return Err(GaloisFieldError::Unsupported { prime, exponent }),
        };
        return Ok(Arc::new(GaloisField::BinaryExtension(
            BinaryExtensionField::new(exponent, pattern),
        )));
    }

    // Odd-prime extension fields only have their defining polynomial on
    // file; constructing them is out of scope.
    Err(GaloisFieldError::Unsupported { prime, exponent })
}

/// True iff a field of this order exists (order is a prime power >= 2).
pub fn is_valid_order(order: u64) -> bool {
    order >= 2 && factorize(order).is_some()
}

/// Non-throwing probe: (prime, exponent) with order = prime^exponent, or
/// None when the order is not a prime power.
pub fn prime_and_exponent(order: u64) -> Option<(u64, u32)> {
    if order < 2 {
        return None;
    }
    factorize(order)
}

/// Factorize order as prime^exponent by trial division up to sqrt(order).
///
/// Finds the smallest prime factor, counts its multiplicity, and requires
/// the remaining quotient to be 1; otherwise the order has a second prime
/// factor and None is returned.
fn factorize(order: u64) -> Option<(u64, u32)> {
    let mut candidate = 2u64;
    while candidate * candidate <= order {
        if order % candidate == 0 {
            let mut exponent = 0u32;
            let mut remaining = order;
            while remaining % candidate == 0 {
                remaining /= candidate;
                exponent += 1;
            }
            if remaining != 1 {
                return None;
            }
            return Some((candidate, exponent));
        }
        candidate += 1;
    }

    // No factor below sqrt(order): the order itself is prime.
    Some((order, 1))
}
