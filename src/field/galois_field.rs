// src/field/galois_field.rs

use std::fmt;
use std::sync::Arc;

use crate::error::{GaloisFieldError, Result};
use crate::field::binary_extension_field::BinaryExtensionField;
use crate::field::factory;
use crate::field::prime_field::PrimeField;
use crate::field::primitive_polynomials::PrimitivePolynomials;

/// A finite field of prime-power order.
///
/// The set of field kinds is closed: prime fields GF(p) and binary extension
/// fields GF(2^n). Shared arithmetic dispatches over the variant; the
/// binary-only capabilities (discrete log/exp, alpha-power notation) are
/// gated by `is_binary` and fail with `NotBinaryField` on a prime field.
///
/// Instances are immutable after construction and are handed out as
/// `Arc<GaloisField>`: the Arc is the field's identity. Polynomials refuse
/// to mix operands whose Arcs differ, even when the orders agree.
///
/// ```
/// use galois_fields::GaloisField;
///
/// let gf256 = GaloisField::new(256).unwrap();
/// assert_eq!(gf256.multiply(2, 3), 6);
/// ```
#[derive(Debug, Clone)]
pub enum GaloisField {
    Prime(PrimeField),
    BinaryExtension(BinaryExtensionField),
}

impl GaloisField {
    /// GF(order), built with the default primitive polynomial table.
    pub fn new(order: u64) -> Result<Arc<GaloisField>> {
        factory::create(order)
    }

    /// GF(order) built against a caller-supplied primitive polynomial table.
    pub fn with_tables(order: u64, tables: &PrimitivePolynomials) -> Result<Arc<GaloisField>> {
        factory::create_with(order, tables)
    }

    /// Field size q = p^n.
    pub fn order(&self) -> u64 {
        match self {
            GaloisField::Prime(field) => field.order(),
            GaloisField::BinaryExtension(field) => field.order(),
        }
    }

    /// The prime p.
    pub fn characteristic(&self) -> u64 {
        match self {
            GaloisField::Prime(field) => field.characteristic(),
            GaloisField::BinaryExtension(field) => field.characteristic(),
        }
    }

    /// The exponent n with order = characteristic^degree.
    pub fn degree(&self) -> u32 {
        match self {
            GaloisField::Prime(field) => field.degree(),
            GaloisField::BinaryExtension(field) => field.degree(),
        }
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, GaloisField::BinaryExtension(_))
    }

    /// "GF(p^n)" notation for display purposes.
    pub fn notation(&self) -> String {
        format!("GF({}^{})", self.characteristic(), self.degree())
    }

    pub fn add(&self, a: u64, b: u64) -> u64 {
        match self {
            GaloisField::Prime(field) => field.add(a, b),
            GaloisField::BinaryExtension(field) => field.add(a, b),
        }
    }

    pub fn subtract(&self, a: u64, b: u64) -> u64 {
        match self {
            GaloisField::Prime(field) => field.subtract(a, b),
            GaloisField::BinaryExtension(field) => field.subtract(a, b),
        }
    }

    pub fn multiply(&self, a: u64, b: u64) -> u64 {
        match self {
            GaloisField::Prime(field) => field.multiply(a, b),
            GaloisField::BinaryExtension(field) => field.multiply(a, b),
        }
    }

    pub fn divide(&self, a: u64, b: u64) -> Result<u64> {
        match self {
            GaloisField::Prime(field) => field.divide(a, b),
            GaloisField::BinaryExtension(field) => field.divide(a, b),
        }
    }

    pub fn inverse(&self, element: u64) -> Result<u64> {
        match self {
            GaloisField::Prime(field) => field.inverse(element),
            GaloisField::BinaryExtension(field) => field.inverse(element),
        }
    }

    pub fn power(&self, element: u64, exponent: i64) -> Result<u64> {
        match self {
            GaloisField::Prime(field) => field.power(element, exponent),
            GaloisField::BinaryExtension(field) => field.power(element, exponent),
        }
    }

    pub fn is_valid_element(&self, element: u64) -> bool {
        match self {
            GaloisField::Prime(field) => field.is_valid_element(element),
            GaloisField::BinaryExtension(field) => field.is_valid_element(element),
        }
    }

    pub fn zero(&self) -> u64 {
        0
    }

    pub fn one(&self) -> u64 {
        1
    }

    /// Discrete logarithm of an element (binary extension fields only).
    pub fn log(&self, element: u64) -> Result<u64> {
        self.binary("log")?.log(element)
    }

    /// The element α^power (binary extension fields only).
    pub fn exp(&self, power: i64) -> Result<u64> {
        Ok(self.binary("exp")?.exp(power))
    }

    /// Render an element as "α^n", "0" (binary extension fields only).
    pub fn to_alpha_power(&self, element: u64) -> Result<String> {
        self.binary("to_alpha_power")?.to_alpha_power(element)
    }

    /// Parse "α^n" / "0" / "1" notation (binary extension fields only).
    pub fn from_alpha_power(&self, text: &str) -> Result<u64> {
        self.binary("from_alpha_power")?.from_alpha_power(text)
    }

    /// The binary extension implementation, when this field is one.
    pub fn as_binary(&self) -> Option<&BinaryExtensionField> {
        match self {
            GaloisField::BinaryExtension(field) => Some(field),
            GaloisField::Prime(_) => None,
        }
    }

    fn binary(&self, operation: &'static str) -> Result<&BinaryExtensionField> {
        self.as_binary()
            .ok_or(GaloisFieldError::NotBinaryField { operation })
    }
}

impl fmt::Display for GaloisField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notation())
    }
}
