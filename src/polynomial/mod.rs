// src/polynomial/mod.rs

pub mod arithmetic;
pub mod converter;
pub mod immutable;
pub mod ops;
pub mod polynomial;

pub use arithmetic::PolynomialArithmetic;
pub use converter::CodewordConverter;
pub use immutable::PolynomialImmutable;
pub use polynomial::Polynomial;

use std::sync::Arc;

use crate::error::{GaloisFieldError, Result};
use crate::field::GaloisField;

/// Read-only surface shared by both polynomial flavors.
///
/// Coefficients are in descending order of degree:
/// `[a_n, ..., a_1, a_0]` → `a_n*x^n + ... + a_1*x + a_0`.
pub trait PolynomialView {
    /// The field this polynomial's coefficients live in. The Arc identity
    /// is what gates cross-polynomial arithmetic.
    fn field(&self) -> &Arc<GaloisField>;

    /// Normalized coefficients, highest degree first. Empty for the zero
    /// polynomial.
    fn coefficients(&self) -> &[u64];

    /// -1 for the zero polynomial.
    fn degree(&self) -> i64 {
        ops::degree(self.coefficients())
    }

    fn is_zero(&self) -> bool {
        self.coefficients().is_empty()
    }

    /// 0 for the zero polynomial.
    fn leading_coefficient(&self) -> u64 {
        self.coefficients().first().copied().unwrap_or(0)
    }

    /// The coefficient of x^degree; 0 outside the represented range.
    fn coefficient_at(&self, degree: i64) -> u64 {
        ops::coefficient_at(self.coefficients(), degree)
    }

    /// Horner evaluation at x; 0 for the zero polynomial.
    fn evaluate(&self, x: u64) -> u64 {
        ops::evaluate(self.field(), self.coefficients(), x)
    }

    /// Coefficient-wise equality, usable across the two flavors.
    fn equals(&self, other: &dyn PolynomialView) -> bool {
        self.coefficients() == other.coefficients()
    }
}

/// Reject operands tied to different field instances. Identity is the Arc
/// pointer, not structural table equality: two separately built fields of
/// the same order do not mix.
pub(crate) fn assert_same_field(a: &Arc<GaloisField>, b: &Arc<GaloisField>) -> Result<()> {
    if Arc::ptr_eq(a, b) {
        Ok(())
    } else {
        Err(GaloisFieldError::FieldMismatch)
    }
}
