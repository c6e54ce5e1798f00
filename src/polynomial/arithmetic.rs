// src/polynomial/arithmetic.rs

use std::sync::Arc;

use log::debug;
use rayon::prelude::*;

use crate::error::{GaloisFieldError, Result};
use crate::field::GaloisField;
use crate::polynomial::{assert_same_field, ops, PolynomialImmutable, PolynomialView};

/// Higher-level polynomial algorithms over one Galois field.
///
/// Accepts either polynomial flavor, never mutates caller-supplied
/// polynomials, and always returns value-semantics results.
pub struct PolynomialArithmetic {
    field: Arc<GaloisField>,
}

impl PolynomialArithmetic {
    pub fn new(field: Arc<GaloisField>) -> Self {
        PolynomialArithmetic { field }
    }

    pub fn field(&self) -> &Arc<GaloisField> {
        &self.field
    }

    /// Euclidean polynomial GCD, scaled so its leading coefficient is 1
    /// (monic) unless the result is zero.
    pub fn gcd(
        &self,
        a: &dyn PolynomialView,
        b: &dyn PolynomialView,
    ) -> Result<PolynomialImmutable> {
        assert_same_field(&self.field, a.field())?;
        assert_same_field(&self.field, b.field())?;

        // Work on copies so the inputs stay untouched.
        let mut current = a.coefficients().to_vec();
        let mut divisor = b.coefficients().to_vec();

        let mut steps = 0u32;
        while !divisor.is_empty() {
            let (_, remainder) = ops::divmod(&self.field, &current, &divisor)?;
            current = std::mem::replace(&mut divisor, remainder);
            steps += 1;
        }
        debug!("Polynomial gcd settled after {} euclidean steps", steps);

        if let Some(&leading) = current.first() {
            if leading != 1 {
                let scale = self.field.inverse(leading)?;
                current = ops::scalar_mul(&self.field, &current, scale);
            }
        }

        Ok(PolynomialImmutable::from_coefficients(
            Arc::clone(&self.field),
            current,
        ))
    }

    /// True iff the GCD is a nonzero constant.
    pub fn are_coprime(&self, a: &dyn PolynomialView, b: &dyn PolynomialView) -> Result<bool> {
        Ok(self.gcd(a, b)?.degree() == 0)
    }

    /// Evaluate at each point independently, preserving input order.
    /// Field instances are read-only after construction, so the points are
    /// farmed out across threads.
    pub fn multi_evaluate<P>(&self, polynomial: &P, points: &[u64]) -> Vec<u64>
    where
        P: PolynomialView + Sync + ?Sized,
    {
        points
            .par_iter()
            .map(|&point| polynomial.evaluate(point))
            .collect()
    }

    /// Lagrange interpolation through the points (xs[i], ys[i]).
    ///
    /// Fails when the slices differ in length or xs repeats a value.
    /// The empty input yields the zero polynomial. Points with a zero
    /// ordinate contribute nothing and are skipped.
    pub fn interpolate(&self, xs: &[u64], ys: &[u64]) -> Result<PolynomialImmutable> {
        if xs.len() != ys.len() {
            return Err(GaloisFieldError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        if xs.is_empty() {
            return Ok(PolynomialImmutable::zero(Arc::clone(&self.field)));
        }
        for (i, &x) in xs.iter().enumerate() {
            if xs[..i].contains(&x) {
                return Err(GaloisFieldError::DuplicateAbscissa(x));
            }
        }

        let mut result: Vec<u64> = Vec::new();

        for (i, &y) in ys.iter().enumerate() {
            if y == 0 {
                continue;
            }

            // basis = Π_{j≠i} (x - x_j), denominator = Π_{j≠i} (x_i - x_j)
            let mut basis: Vec<u64> = vec![1];
            let mut denominator = 1u64;
            for (j, &xj) in xs.iter().enumerate() {
                if i == j {
                    continue;
                }
                let factor = [1, self.field.subtract(0, xj)];
                basis = ops::mul(&self.field, &basis, &factor);
                denominator = self
                    .field
                    .multiply(denominator, self.field.subtract(xs[i], xj));
            }

            // L_i(x) = basis * (y_i / denominator)
            let scale = self.field.divide(y, denominator)?;
            let term = ops::scalar_mul(&self.field, &basis, scale);
            result = ops::add(&self.field, &result, &term);
        }

        Ok(PolynomialImmutable::from_coefficients(
            Arc::clone(&self.field),
            result,
        ))
    }

    /// Formal derivative. The derivative of x^i is (i mod p) * x^(i-1),
    /// computed by adding the coefficient to itself (i mod p) times since
    /// the field only exposes field-element operands. In characteristic 2
    /// every even-degree term vanishes.
    pub fn derivative(&self, polynomial: &dyn PolynomialView) -> Result<PolynomialImmutable> {
        assert_same_field(&self.field, polynomial.field())?;

        if polynomial.degree() <= 0 {
            return Ok(PolynomialImmutable::zero(Arc::clone(&self.field)));
        }

        let characteristic = self.field.characteristic();
        let degree = polynomial.degree();
        let mut coefficients = Vec::with_capacity(degree as usize);

        for i in (1..=degree).rev() {
            let coeff = polynomial.coefficient_at(i);
            let multiplicity = (i as u64) % characteristic;

            let mut derived = 0u64;
            for _ in 0..multiplicity {
                derived = self.field.add(derived, coeff);
            }
            coefficients.push(derived);
        }

        Ok(PolynomialImmutable::from_coefficients(
            Arc::clone(&self.field),
            coefficients,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polynomial::Polynomial;

    #[test]
    fn test_gcd_is_monic_and_divides_inputs() {
        let gf7 = GaloisField::new(7).unwrap();
        let arithmetic = PolynomialArithmetic::new(Arc::clone(&gf7));

        // a = (x + 1)(x + 2) * 3, b = (x + 1)(x + 3) * 5
        let common = PolynomialImmutable::from_coefficients(Arc::clone(&gf7), vec![1, 1]);
        let a = common
            .mul(&PolynomialImmutable::from_coefficients(
                Arc::clone(&gf7),
                vec![1, 2],
            ))
            .unwrap()
            .scalar_mul(3);
        let b = common
            .mul(&PolynomialImmutable::from_coefficients(
                Arc::clone(&gf7),
                vec![1, 3],
            ))
            .unwrap()
            .scalar_mul(5);

        let gcd = arithmetic.gcd(&a, &b).unwrap();
        assert_eq!(gcd.leading_coefficient(), 1);
        assert_eq!(gcd.coefficients(), common.coefficients());
        assert!(a.rem(&gcd).unwrap().is_zero());
        assert!(b.rem(&gcd).unwrap().is_zero());
    }

    #[test]
    fn test_gcd_does_not_mutate_mutable_inputs() {
        let gf7 = GaloisField::new(7).unwrap();
        let arithmetic = PolynomialArithmetic::new(Arc::clone(&gf7));

        let a = Polynomial::from_coefficients(Arc::clone(&gf7), vec![1, 0, 6]);
        let b = Polynomial::from_coefficients(Arc::clone(&gf7), vec![1, 1]);

        arithmetic.gcd(&a, &b).unwrap();
        assert_eq!(a.coefficients(), &[1, 0, 6]);
        assert_eq!(b.coefficients(), &[1, 1]);
    }

    #[test]
    fn test_are_coprime() {
        let gf7 = GaloisField::new(7).unwrap();
        let arithmetic = PolynomialArithmetic::new(Arc::clone(&gf7));

        let a = PolynomialImmutable::from_coefficients(Arc::clone(&gf7), vec![1, 1]);
        let b = PolynomialImmutable::from_coefficients(Arc::clone(&gf7), vec![1, 2]);
        assert!(arithmetic.are_coprime(&a, &b).unwrap());

        let multiple = a.mul(&b).unwrap();
        assert!(!arithmetic.are_coprime(&a, &multiple).unwrap());
    }

    #[test]
    fn test_interpolate_validates_inputs() {
        let gf7 = GaloisField::new(7).unwrap();
        let arithmetic = PolynomialArithmetic::new(Arc::clone(&gf7));

        assert_eq!(
            arithmetic.interpolate(&[1, 2], &[3]),
            Err(GaloisFieldError::LengthMismatch { xs: 2, ys: 1 })
        );
        assert_eq!(
            arithmetic.interpolate(&[1, 2, 1], &[3, 4, 5]),
            Err(GaloisFieldError::DuplicateAbscissa(1))
        );
        assert!(arithmetic.interpolate(&[], &[]).unwrap().is_zero());
    }

    #[test]
    fn test_interpolate_hits_every_sample() {
        let gf7 = GaloisField::new(7).unwrap();
        let arithmetic = PolynomialArithmetic::new(Arc::clone(&gf7));

        let xs = [0u64, 1, 2, 3];
        let ys = [5u64, 0, 3, 1];
        let interpolated = arithmetic.interpolate(&xs, &ys).unwrap();

        assert!(interpolated.degree() <= 3);
        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_eq!(interpolated.evaluate(*x), *y);
        }
    }

    #[test]
    fn test_derivative_in_characteristic_2() {
        let gf16 = GaloisField::new(16).unwrap();
        let arithmetic = PolynomialArithmetic::new(Arc::clone(&gf16));

        // d/dx (x^2 + x + 1) = 1: the quadratic term vanishes.
        let p = PolynomialImmutable::from_coefficients(Arc::clone(&gf16), vec![1, 1, 1]);
        let derivative = arithmetic.derivative(&p).unwrap();
        assert_eq!(derivative.coefficients(), &[1]);
    }

    #[test]
    fn test_derivative_of_constant_is_zero() {
        let gf7 = GaloisField::new(7).unwrap();
        let arithmetic = PolynomialArithmetic::new(Arc::clone(&gf7));

        let constant = PolynomialImmutable::constant(Arc::clone(&gf7), 4);
        assert!(arithmetic.derivative(&constant).unwrap().is_zero());
        let zero = PolynomialImmutable::zero(Arc::clone(&gf7));
        assert!(arithmetic.derivative(&zero).unwrap().is_zero());
    }

    #[test]
    fn test_multi_evaluate_preserves_order() {
        let gf7 = GaloisField::new(7).unwrap();
        let arithmetic = PolynomialArithmetic::new(Arc::clone(&gf7));

        let p = PolynomialImmutable::from_coefficients(Arc::clone(&gf7), vec![1, 0, 1]);
        let points = [0u64, 1, 2, 3, 4, 5, 6];
        let values = arithmetic.multi_evaluate(&p, &points);

        assert_eq!(values.len(), points.len());
        for (point, value) in points.iter().zip(values.iter()) {
            assert_eq!(p.evaluate(*point), *value);
        }
    }
}
