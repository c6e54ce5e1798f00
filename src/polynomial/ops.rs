// src/polynomial/ops.rs
//
// Shared coefficient arithmetic for both polynomial flavors. Coefficients
// are stored highest degree first ([a_n, ..., a_1, a_0]); the zero
// polynomial is the empty slice and has degree -1. Every function that
// produces a coefficient vector returns it normalized.

use crate::error::{GaloisFieldError, Result};
use crate::field::GaloisField;

/// Strip leading zero coefficients.
pub fn normalize(mut coefficients: Vec<u64>) -> Vec<u64> {
    let leading_zeros = coefficients.iter().take_while(|&&c| c == 0).count();
    if leading_zeros > 0 {
        coefficients.drain(..leading_zeros);
    }
    coefficients
}

/// -1 for the zero polynomial, coefficient count minus one otherwise.
pub fn degree(coefficients: &[u64]) -> i64 {
    coefficients.len() as i64 - 1
}

/// The coefficient of x^degree, 0 outside the represented range.
pub fn coefficient_at(coefficients: &[u64], degree: i64) -> u64 {
    let top = coefficients.len() as i64 - 1;
    if degree < 0 || degree > top {
        return 0;
    }
    coefficients[(top - degree) as usize]
}

/// Horner evaluation: ((a_n * x + a_(n-1)) * x + ...) * x + a_0.
/// Returns 0 for the zero polynomial.
pub fn evaluate(field: &GaloisField, coefficients: &[u64], x: u64) -> u64 {
    coefficients
        .iter()
        .fold(0, |result, &coeff| field.add(field.multiply(result, x), coeff))
}

pub fn add(field: &GaloisField, a: &[u64], b: &[u64]) -> Vec<u64> {
    combine(a, b, |x, y| field.add(x, y))
}

pub fn sub(field: &GaloisField, a: &[u64], b: &[u64]) -> Vec<u64> {
    combine(a, b, |x, y| field.subtract(x, y))
}

/// Degree-by-degree combination from max(degA, degB) down to 0.
fn combine(a: &[u64], b: &[u64], mut op: impl FnMut(u64, u64) -> u64) -> Vec<u64> {
    let max_degree = degree(a).max(degree(b));
    let mut result = Vec::with_capacity(max_degree.max(0) as usize + 1);

    let mut deg = max_degree;
    while deg >= 0 {
        result.push(op(coefficient_at(a, deg), coefficient_at(b, deg)));
        deg -= 1;
    }

    normalize(result)
}

/// Convolution product; empty (zero) if either operand is zero.
pub fn mul(field: &GaloisField, a: &[u64], b: &[u64]) -> Vec<u64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut result = vec![0u64; a.len() + b.len() - 1];
    for (i, &coeff_a) in a.iter().enumerate() {
        for (j, &coeff_b) in b.iter().enumerate() {
            let product = field.multiply(coeff_a, coeff_b);
            result[i + j] = field.add(result[i + j], product);
        }
    }

    // A field has no zero divisors, so the leading coefficient is already
    // nonzero; normalize anyway to keep the invariant local.
    normalize(result)
}

/// Every coefficient multiplied by the scalar; zero polynomial for scalar 0.
pub fn scalar_mul(field: &GaloisField, coefficients: &[u64], scalar: u64) -> Vec<u64> {
    if scalar == 0 {
        return Vec::new();
    }
    coefficients
        .iter()
        .map(|&coeff| field.multiply(coeff, scalar))
        .collect()
}

/// Polynomial long division: (quotient, remainder).
///
/// Fails on a zero divisor. When the dividend degree is below the divisor
/// degree the quotient is zero and the remainder is the dividend unchanged.
pub fn divmod(
    field: &GaloisField,
    dividend: &[u64],
    divisor: &[u64],
) -> Result<(Vec<u64>, Vec<u64>)> {
    if divisor.is_empty() {
        return Err(GaloisFieldError::ZeroPolynomialDivisor);
    }
    if dividend.len() < divisor.len() {
        return Ok((Vec::new(), dividend.to_vec()));
    }

    let divisor_degree = degree(divisor);
    let divisor_leading = divisor[0];
    let quotient_len = dividend.len() - divisor.len() + 1;
    let mut quotient = vec![0u64; quotient_len];
    let mut remainder = dividend.to_vec();

    while !remainder.is_empty() && degree(&remainder) >= divisor_degree {
        // Next quotient term: leading(remainder) / leading(divisor),
        // aligned at the degree difference.
        let term = field.divide(remainder[0], divisor_leading)?;
        let degree_diff = (degree(&remainder) - divisor_degree) as usize;

        quotient[quotient_len - 1 - degree_diff] = term;

        for (i, &divisor_coeff) in divisor.iter().enumerate() {
            remainder[i] = field.subtract(remainder[i], field.multiply(term, divisor_coeff));
        }

        // The leading coefficient just cancelled; at least one entry drops.
        remainder = normalize(remainder);
    }

    Ok((quotient, remainder))
}
