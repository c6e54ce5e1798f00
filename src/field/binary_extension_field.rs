// src/field/binary_extension_field.rs

use log::debug;

use crate::error::{GaloisFieldError, Result};

/// Binary extension field GF(2^n) backed by discrete-log and exponential
/// tables built from a primitive polynomial.
///
/// `exp[i] = α^i` for i in [0, order-1]; the extra slot `exp[order-1]`
/// duplicates `exp[0] = 1` (the multiplicative group is cyclic of order
/// order-1), which lets `inverse` index the table without a second modulo.
/// `log[e]` gives the unique i with `exp[i] == e` for every nonzero e;
/// `log[0]` is never read.
///
/// The tables are built once at construction and never mutated afterwards,
/// so a field instance can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct BinaryExtensionField {
    degree: u32,
    order: u64,
    primitive_polynomial: u64,
    exp: Vec<u64>,
    log: Vec<u64>,
}

impl BinaryExtensionField {
    /// Build GF(2^degree) from a primitive polynomial given as a bit pattern
    /// (bit k set iff the coefficient of x^k is 1).
    pub fn new(degree: u32, primitive_polynomial: u64) -> Self {
        let order = 1u64 << degree;
        let mut exp = vec![0u64; order as usize];
        let mut log = vec![0u64; order as usize];

        let mut cursor = 1u64;
        for rank in 0..order - 1 {
            exp[rank as usize] = cursor;
            log[cursor as usize] = rank;

            // Multiply by α; reduce by the primitive polynomial on
            // degree-n overflow.
            cursor <<= 1;
            if cursor & order != 0 {
                cursor ^= primitive_polynomial;
            }
        }

        // α^(order-1) = 1: close the cycle.
        exp[order as usize - 1] = exp[0];

        debug!(
            "Built exp/log tables for GF(2^{}) with primitive polynomial {:#x}",
            degree, primitive_polynomial
        );

        BinaryExtensionField {
            degree,
            order,
            primitive_polynomial,
            exp,
            log,
        }
    }

    pub fn order(&self) -> u64 {
        self.order
    }

    pub fn characteristic(&self) -> u64 {
        2
    }

    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// Addition in GF(2^n) is XOR.
    pub fn add(&self, a: u64, b: u64) -> u64 {
        a ^ b
    }

    /// In characteristic 2 subtraction is the same as addition.
    pub fn subtract(&self, a: u64, b: u64) -> u64 {
        a ^ b
    }

    /// `α^a * α^b = α^(a+b)`, exponents reduced modulo order-1.
    pub fn multiply(&self, a: u64, b: u64) -> u64 {
        if a == 0 || b == 0 {
            return 0;
        }
        let log_sum = (self.log[a as usize] + self.log[b as usize]) % (self.order - 1);
        self.exp[log_sum as usize]
    }

    /// `α^a / α^b = α^(a-b)`, wrapping a negative exponent difference.
    pub fn divide(&self, a: u64, b: u64) -> Result<u64> {
        if b == 0 {
            return Err(GaloisFieldError::DivisionByZero);
        }
        if a == 0 {
            return Ok(0);
        }

        let mut log_diff = self.log[a as usize] as i64 - self.log[b as usize] as i64;
        if log_diff < 0 {
            log_diff += (self.order - 1) as i64;
        }

        Ok(self.exp[log_diff as usize])
    }

    /// The inverse of α^i is α^(order-1-i).
    pub fn inverse(&self, element: u64) -> Result<u64> {
        if element == 0 {
            return Err(GaloisFieldError::DivisionByZero);
        }
        let log_inverse = (self.order - 1) - self.log[element as usize];
        Ok(self.exp[log_inverse as usize])
    }

    /// `(α^a)^k = α^(a*k)`. Negative exponents invert the base first.
    pub fn power(&self, element: u64, exponent: i64) -> Result<u64> {
        if element == 0 {
            return Ok(if exponent == 0 { 1 } else { 0 });
        }
        if exponent == 0 {
            return Ok(1);
        }

        let (element, exponent) = if exponent < 0 {
            (self.inverse(element)?, exponent.unsigned_abs())
        } else {
            (element, exponent as u64)
        };

        let group_order = (self.order - 1) as u128;
        let log_power = (self.log[element as usize] as u128 * exponent as u128) % group_order;

        Ok(self.exp[log_power as usize])
    }

    pub fn is_valid_element(&self, element: u64) -> bool {
        element < self.order
    }

    /// Discrete logarithm: the power i with α^i = element.
    pub fn log(&self, element: u64) -> Result<u64> {
        if element == 0 {
            return Err(GaloisFieldError::LogOfZero);
        }
        if element >= self.order {
            return Err(GaloisFieldError::InvalidElement {
                element,
                order: self.order,
            });
        }
        Ok(self.log[element as usize])
    }

    /// The element α^power, for any integer power (normalized into
    /// [0, order-1) first).
    pub fn exp(&self, power: i64) -> u64 {
        let group_order = (self.order - 1) as i64;
        let mut normalized = power % group_order;
        if normalized < 0 {
            normalized += group_order;
        }
        self.exp[normalized as usize]
    }

    /// Render an element in alpha-power notation: "0" for zero, otherwise
    /// "α^i" (the identity element renders as "α^0").
    pub fn to_alpha_power(&self, element: u64) -> Result<String> {
        if element >= self.order {
            return Err(GaloisFieldError::InvalidElement {
                element,
                order: self.order,
            });
        }
        if element == 0 {
            return Ok("0".to_string());
        }
        Ok(format!("α^{}", self.log[element as usize]))
    }

    /// Parse alpha-power notation back to an element. Accepts "0", "1" and
    /// "α^<integer>" (ASCII "a^<integer>" works too); the power may be
    /// negative or exceed order-2 and is normalized modulo order-1.
    pub fn from_alpha_power(&self, text: &str) -> Result<u64> {
        let trimmed = text.trim();
        match trimmed {
            "0" => Ok(0),
            "1" => Ok(1),
            _ => {
                let power = trimmed
                    .strip_prefix("α^")
                    .or_else(|| trimmed.strip_prefix("a^"))
                    .ok_or_else(|| GaloisFieldError::InvalidAlphaPower(text.to_string()))?;
                let power: i64 = power
                    .parse()
                    .map_err(|_| GaloisFieldError::InvalidAlphaPower(text.to_string()))?;
                Ok(self.exp(power))
            }
        }
    }

    /// The primitive polynomial this field was built from, as a bit pattern.
    pub fn primitive_polynomial(&self) -> u64 {
        self.primitive_polynomial
    }

    pub fn exp_table(&self) -> &[u64] {
        &self.exp
    }

    pub fn log_table(&self) -> &[u64] {
        &self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // x^8 + x^4 + x^3 + x^2 + 1, the GF(256) polynomial used by QR codes.
    const GF256_POLY: u64 = 0x11D;

    #[test]
    fn test_table_construction() {
        let gf256 = BinaryExtensionField::new(8, GF256_POLY);
        assert_eq!(gf256.order(), 256);
        assert_eq!(gf256.exp_table().len(), 256);
        assert_eq!(gf256.exp_table()[0], 1);
        assert_eq!(gf256.exp_table()[255], 1);
        assert_eq!(gf256.exp_table()[1], 2);

        // exp restricted to [0, 255) must hit every nonzero element once.
        let mut seen = vec![false; 256];
        for &value in &gf256.exp_table()[..255] {
            assert!(!seen[value as usize]);
            seen[value as usize] = true;
        }
        assert!(!seen[0]);
    }

    #[test]
    fn test_known_product() {
        let gf256 = BinaryExtensionField::new(8, GF256_POLY);
        assert_eq!(gf256.multiply(2, 3), 6);
        assert_eq!(gf256.multiply(0, 17), 0);
        assert_eq!(gf256.multiply(17, 0), 0);
    }

    #[test]
    fn test_divide_inverts_multiply() {
        let gf256 = BinaryExtensionField::new(8, GF256_POLY);
        let product = gf256.multiply(87, 131);
        assert_eq!(gf256.divide(product, 131).unwrap(), 87);
        assert_eq!(gf256.divide(0, 5).unwrap(), 0);
        assert_eq!(gf256.divide(5, 0), Err(GaloisFieldError::DivisionByZero));
    }

    #[test]
    fn test_inverse() {
        let gf256 = BinaryExtensionField::new(8, GF256_POLY);
        for element in 1..256u64 {
            let inverse = gf256.inverse(element).unwrap();
            assert_eq!(gf256.multiply(element, inverse), 1);
        }
        assert_eq!(gf256.inverse(0), Err(GaloisFieldError::DivisionByZero));
        assert_eq!(gf256.inverse(1).unwrap(), 1);
    }

    #[test]
    fn test_power_edge_cases() {
        let gf256 = BinaryExtensionField::new(8, GF256_POLY);
        assert_eq!(gf256.power(0, 0).unwrap(), 1);
        assert_eq!(gf256.power(0, 9).unwrap(), 0);
        assert_eq!(gf256.power(7, 0).unwrap(), 1);
        assert_eq!(gf256.power(2, 8).unwrap(), gf256.exp(8));
        // α^(-1) equals the inverse of α.
        assert_eq!(gf256.power(2, -1).unwrap(), gf256.inverse(2).unwrap());
    }

    #[test]
    fn test_exp_normalizes_any_power() {
        let gf256 = BinaryExtensionField::new(8, GF256_POLY);
        assert_eq!(gf256.exp(0), 1);
        assert_eq!(gf256.exp(255), 1);
        assert_eq!(gf256.exp(256), 2);
        assert_eq!(gf256.exp(-1), gf256.exp(254));
    }

    #[test]
    fn test_log_errors() {
        let gf256 = BinaryExtensionField::new(8, GF256_POLY);
        assert_eq!(gf256.log(2).unwrap(), 1);
        assert_eq!(gf256.log(0), Err(GaloisFieldError::LogOfZero));
        assert_eq!(
            gf256.log(256),
            Err(GaloisFieldError::InvalidElement {
                element: 256,
                order: 256
            })
        );
    }
}
