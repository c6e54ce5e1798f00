// src/polynomial/polynomial.rs

use std::sync::Arc;

use crate::error::Result;
use crate::field::GaloisField;
use crate::polynomial::{assert_same_field, ops, PolynomialView};

/// Mutable polynomial over a Galois field.
///
/// Arithmetic operations rewrite the receiver's coefficients in place and
/// hand the receiver back, enabling fluent chains:
///
/// ```
/// use galois_fields::{GaloisField, Polynomial};
/// use galois_fields::polynomial::PolynomialView;
///
/// let gf7 = GaloisField::new(7).unwrap();
/// let q = Polynomial::from_coefficients(gf7.clone(), vec![1, 1]);
/// let mut p = Polynomial::from_coefficients(gf7.clone(), vec![2, 0, 1]);
/// p.mul(&q).unwrap().scalar_mul(3);
/// assert_eq!(p.degree(), 3);
/// ```
///
/// Not for concurrent mutation; intended for single-owner pipelines.
#[derive(Debug, Clone)]
pub struct Polynomial {
    field: Arc<GaloisField>,
    coefficients: Vec<u64>,
}

impl Polynomial {
    /// From coefficients in descending degree order; leading zeros are
    /// normalized away.
    pub fn from_coefficients(field: Arc<GaloisField>, coefficients: Vec<u64>) -> Self {
        Polynomial {
            field,
            coefficients: ops::normalize(coefficients),
        }
    }

    pub fn zero(field: Arc<GaloisField>) -> Self {
        Polynomial {
            field,
            coefficients: Vec::new(),
        }
    }

    pub fn one(field: Arc<GaloisField>) -> Self {
        Polynomial {
            field,
            coefficients: vec![1],
        }
    }

    pub fn constant(field: Arc<GaloisField>, value: u64) -> Self {
        Polynomial::from_coefficients(field, vec![value])
    }

    /// coefficient * x^degree.
    pub fn monomial(field: Arc<GaloisField>, degree: u32, coefficient: u64) -> Self {
        let mut coefficients = vec![0u64; degree as usize + 1];
        coefficients[0] = coefficient;
        Polynomial::from_coefficients(field, coefficients)
    }

    pub fn add(&mut self, other: &dyn PolynomialView) -> Result<&mut Self> {
        assert_same_field(&self.field, other.field())?;
        self.coefficients = ops::add(&self.field, &self.coefficients, other.coefficients());
        Ok(self)
    }

    pub fn sub(&mut self, other: &dyn PolynomialView) -> Result<&mut Self> {
        assert_same_field(&self.field, other.field())?;
        self.coefficients = ops::sub(&self.field, &self.coefficients, other.coefficients());
        Ok(self)
    }

    pub fn mul(&mut self, other: &dyn PolynomialView) -> Result<&mut Self> {
        assert_same_field(&self.field, other.field())?;
        self.coefficients = ops::mul(&self.field, &self.coefficients, other.coefficients());
        Ok(self)
    }

    pub fn scalar_mul(&mut self, scalar: u64) -> &mut Self {
        self.coefficients = ops::scalar_mul(&self.field, &self.coefficients, scalar);
        self
    }

    /// Divide in place: the receiver keeps the remainder, the quotient is
    /// returned as a new polynomial.
    pub fn divmod(&mut self, divisor: &dyn PolynomialView) -> Result<Polynomial> {
        assert_same_field(&self.field, divisor.field())?;
        let (quotient, remainder) =
            ops::divmod(&self.field, &self.coefficients, divisor.coefficients())?;
        self.coefficients = remainder;
        Ok(Polynomial {
            field: Arc::clone(&self.field),
            coefficients: quotient,
        })
    }

    /// Keep only the quotient.
    pub fn div(&mut self, divisor: &dyn PolynomialView) -> Result<&mut Self> {
        assert_same_field(&self.field, divisor.field())?;
        let (quotient, _) =
            ops::divmod(&self.field, &self.coefficients, divisor.coefficients())?;
        self.coefficients = quotient;
        Ok(self)
    }

    /// Keep only the remainder.
    pub fn rem(&mut self, divisor: &dyn PolynomialView) -> Result<&mut Self> {
        assert_same_field(&self.field, divisor.field())?;
        let (_, remainder) =
            ops::divmod(&self.field, &self.coefficients, divisor.coefficients())?;
        self.coefficients = remainder;
        Ok(self)
    }

    /// Replace all coefficients (descending degree order).
    pub fn set_coefficients(&mut self, coefficients: Vec<u64>) -> &mut Self {
        self.coefficients = ops::normalize(coefficients);
        self
    }

    /// Overwrite the coefficient of x^degree, growing the polynomial when
    /// the degree is above the current one.
    pub fn set_coefficient_at(&mut self, degree: u32, value: u64) -> &mut Self {
        let current = ops::degree(&self.coefficients);
        if (degree as i64) > current {
            let mut extended = vec![0u64; degree as usize + 1];
            let offset = extended.len() - self.coefficients.len();
            extended[offset..].copy_from_slice(&self.coefficients);
            self.coefficients = extended;
        }

        let top = self.coefficients.len() - 1;
        self.coefficients[top - degree as usize] = value;
        self.coefficients = ops::normalize(std::mem::take(&mut self.coefficients));
        self
    }
}

impl PolynomialView for Polynomial {
    fn field(&self) -> &Arc<GaloisField> {
        &self.field
    }

    fn coefficients(&self) -> &[u64] {
        &self.coefficients
    }
}

impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        self.coefficients == other.coefficients
    }
}

impl Eq for Polynomial {}
