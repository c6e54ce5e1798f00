// src/polynomial/converter.rs

use std::sync::Arc;

use bitvec::prelude::*;

use crate::error::{GaloisFieldError, Result};
use crate::field::GaloisField;
use crate::polynomial::{assert_same_field, PolynomialImmutable, PolynomialView};

/// Converts between fixed-width binary codewords and polynomials over a
/// binary extension field GF(2^n).
///
/// The codeword width is the field degree: GF(2^8) gives 8-bit codewords,
/// GF(2^16) 16-bit ones. Ordering follows the QR / Reed-Solomon convention:
/// the first codeword is the highest-degree coefficient.
///
/// Round-trip note: a polynomial built with leading zero coefficients
/// normalizes them away, so those leading zero codewords are not recovered
/// by `to_binary_string`. The asymmetry is part of the contract, not a bug.
#[derive(Debug)]
pub struct CodewordConverter {
    field: Arc<GaloisField>,
    bits_per_coefficient: u32,
}

impl CodewordConverter {
    /// Fails immediately when handed a prime field.
    pub fn new(field: Arc<GaloisField>) -> Result<Self> {
        if !field.is_binary() {
            return Err(GaloisFieldError::NotBinaryField {
                operation: "CodewordConverter",
            });
        }
        let bits_per_coefficient = field.degree();
        Ok(CodewordConverter {
            field,
            bits_per_coefficient,
        })
    }

    pub fn field(&self) -> &Arc<GaloisField> {
        &self.field
    }

    /// Bits per codeword, derived from the field degree.
    pub fn codeword_width(&self) -> u32 {
        self.bits_per_coefficient
    }

    /// Build a polynomial from a raw binary string such as
    /// "1011010100110010": the string splits into n-bit chunks, each parsed
    /// as an unsigned big-endian integer, first chunk = highest degree.
    pub fn from_binary_string(&self, binary: &str) -> Result<PolynomialImmutable> {
        let width = self.bits_per_coefficient as usize;
        if binary.len() % width != 0 {
            return Err(GaloisFieldError::InvalidCodewordLength {
                length: binary.len(),
                width: self.bits_per_coefficient,
            });
        }

        let mut coefficients = Vec::with_capacity(binary.len() / width);
        for chunk in binary.as_bytes().chunks(width) {
            let mut value = 0u64;
            for &bit in chunk {
                value = (value << 1)
                    | match bit {
                        b'0' => 0,
                        b'1' => 1,
                        other => {
                            return Err(GaloisFieldError::InvalidBinaryString {
                                character: other as char,
                            })
                        }
                    };
            }
            coefficients.push(value);
        }

        Ok(PolynomialImmutable::from_coefficients(
            Arc::clone(&self.field),
            coefficients,
        ))
    }

    /// Inverse mapping: each coefficient from the polynomial's degree down
    /// to 0 emitted as an n-bit zero-padded binary string, concatenated.
    /// The zero polynomial yields the empty string.
    pub fn to_binary_string(&self, polynomial: &dyn PolynomialView) -> Result<String> {
        assert_same_field(&self.field, polynomial.field())?;

        let width = self.bits_per_coefficient as usize;
        let mut out = String::with_capacity((polynomial.degree().max(0) as usize + 1) * width);

        let mut deg = polynomial.degree();
        while deg >= 0 {
            out.push_str(&format!(
                "{:0width$b}",
                polynomial.coefficient_at(deg),
                width = width
            ));
            deg -= 1;
        }

        Ok(out)
    }

    /// Same mapping as `from_binary_string`, over a bit slice.
    pub fn from_bits(&self, bits: &BitSlice<u8, Msb0>) -> Result<PolynomialImmutable> {
        let width = self.bits_per_coefficient as usize;
        if bits.len() % width != 0 {
            return Err(GaloisFieldError::InvalidCodewordLength {
                length: bits.len(),
                width: self.bits_per_coefficient,
            });
        }

        let coefficients = bits
            .chunks(width)
            .map(|chunk| {
                chunk
                    .iter()
                    .fold(0u64, |value, bit| (value << 1) | u64::from(*bit))
            })
            .collect();

        Ok(PolynomialImmutable::from_coefficients(
            Arc::clone(&self.field),
            coefficients,
        ))
    }

    /// Same mapping as `to_binary_string`, into a bit vector.
    pub fn to_bits(&self, polynomial: &dyn PolynomialView) -> Result<BitVec<u8, Msb0>> {
        assert_same_field(&self.field, polynomial.field())?;

        let width = self.bits_per_coefficient as usize;
        let mut bits =
            BitVec::with_capacity((polynomial.degree().max(0) as usize + 1) * width);

        let mut deg = polynomial.degree();
        while deg >= 0 {
            let coeff = polynomial.coefficient_at(deg);
            for position in (0..width).rev() {
                bits.push(coeff >> position & 1 == 1);
            }
            deg -= 1;
        }

        Ok(bits)
    }
}
