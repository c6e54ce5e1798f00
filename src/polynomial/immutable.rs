// src/polynomial/immutable.rs

use std::sync::Arc;

use crate::error::Result;
use crate::field::GaloisField;
use crate::polynomial::{assert_same_field, ops, PolynomialView};

/// Value-semantics polynomial over a Galois field.
///
/// Every arithmetic operation returns a newly allocated polynomial and
/// leaves both operands untouched. Instances are plain immutable values and
/// can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct PolynomialImmutable {
    field: Arc<GaloisField>,
    coefficients: Vec<u64>,
}

impl PolynomialImmutable {
    /// From coefficients in descending degree order; leading zeros are
    /// normalized away.
    pub fn from_coefficients(field: Arc<GaloisField>, coefficients: Vec<u64>) -> Self {
        PolynomialImmutable {
            field,
            coefficients: ops::normalize(coefficients),
        }
    }

    pub fn zero(field: Arc<GaloisField>) -> Self {
        PolynomialImmutable {
            field,
            coefficients: Vec::new(),
        }
    }

    pub fn one(field: Arc<GaloisField>) -> Self {
        PolynomialImmutable {
            field,
            coefficients: vec![1],
        }
    }

    pub fn constant(field: Arc<GaloisField>, value: u64) -> Self {
        PolynomialImmutable::from_coefficients(field, vec![value])
    }

    /// coefficient * x^degree.
    pub fn monomial(field: Arc<GaloisField>, degree: u32, coefficient: u64) -> Self {
        let mut coefficients = vec![0u64; degree as usize + 1];
        coefficients[0] = coefficient;
        PolynomialImmutable::from_coefficients(field, coefficients)
    }

    fn with(&self, coefficients: Vec<u64>) -> Self {
        PolynomialImmutable {
            field: Arc::clone(&self.field),
            coefficients,
        }
    }

    pub fn add(&self, other: &dyn PolynomialView) -> Result<Self> {
        assert_same_field(&self.field, other.field())?;
        Ok(self.with(ops::add(&self.field, &self.coefficients, other.coefficients())))
    }

    pub fn sub(&self, other: &dyn PolynomialView) -> Result<Self> {
        assert_same_field(&self.field, other.field())?;
        Ok(self.with(ops::sub(&self.field, &self.coefficients, other.coefficients())))
    }

    pub fn mul(&self, other: &dyn PolynomialView) -> Result<Self> {
        assert_same_field(&self.field, other.field())?;
        Ok(self.with(ops::mul(&self.field, &self.coefficients, other.coefficients())))
    }

    pub fn scalar_mul(&self, scalar: u64) -> Self {
        self.with(ops::scalar_mul(&self.field, &self.coefficients, scalar))
    }

    /// (quotient, remainder), both freshly allocated.
    pub fn divmod(&self, divisor: &dyn PolynomialView) -> Result<(Self, Self)> {
        assert_same_field(&self.field, divisor.field())?;
        let (quotient, remainder) =
            ops::divmod(&self.field, &self.coefficients, divisor.coefficients())?;
        Ok((self.with(quotient), self.with(remainder)))
    }

    pub fn div(&self, divisor: &dyn PolynomialView) -> Result<Self> {
        Ok(self.divmod(divisor)?.0)
    }

    pub fn rem(&self, divisor: &dyn PolynomialView) -> Result<Self> {
        Ok(self.divmod(divisor)?.1)
    }
}

impl PolynomialView for PolynomialImmutable {
    fn field(&self) -> &Arc<GaloisField> {
        &self.field
    }

    fn coefficients(&self) -> &[u64] {
        &self.coefficients
    }
}

impl PartialEq for PolynomialImmutable {
    fn eq(&self, other: &Self) -> bool {
        self.coefficients == other.coefficients
    }
}

impl Eq for PolynomialImmutable {}
