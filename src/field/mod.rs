// src/field/mod.rs

pub mod binary_extension_field;
pub mod factory;
pub mod galois_field;
pub mod prime_field;
pub mod primitive_polynomials;

pub use binary_extension_field::BinaryExtensionField;
pub use galois_field::GaloisField;
pub use prime_field::PrimeField;
pub use primitive_polynomials::{
    PrimitivePolynomial, PrimitivePolynomials, DEFAULT_PRIMITIVE_POLYNOMIALS,
};
