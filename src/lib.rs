// src/lib.rs

//! Exact arithmetic over finite (Galois) fields GF(p) and GF(2^n), and
//! polynomial arithmetic over those fields: the machinery behind
//! Reed-Solomon codes, QR error correction, AES-style diffusion layers and
//! secret sharing.
//!
//! ```
//! use galois_fields::{GaloisField, PolynomialArithmetic, PolynomialImmutable};
//! use galois_fields::polynomial::PolynomialView;
//!
//! let gf256 = GaloisField::new(256).unwrap();
//! assert_eq!(gf256.multiply(2, 3), 6);
//!
//! let arithmetic = PolynomialArithmetic::new(gf256.clone());
//! let secret = arithmetic.interpolate(&[1, 2, 3], &[5, 17, 29]).unwrap();
//! assert_eq!(secret.evaluate(2), 17);
//! ```

pub mod error;
pub mod field;
pub mod polynomial;

pub use error::{GaloisFieldError, Result};
pub use field::{GaloisField, PrimitivePolynomial, PrimitivePolynomials};
pub use polynomial::{
    CodewordConverter, Polynomial, PolynomialArithmetic, PolynomialImmutable, PolynomialView,
};
