// src/field/primitive_polynomials.rs

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::error::{GaloisFieldError, Result};

/// A primitive polynomial as stored in the lookup table.
///
/// For GF(2^n) the polynomial is a bit pattern with bit k set iff the
/// coefficient of x^k is 1, e.g. x^8 + x^4 + x^3 + x^2 + 1 = 0x11D.
/// For odd-prime extension fields it is a coefficient list
/// [a_n, ..., a_1, a_0].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimitivePolynomial {
    BitPattern(u64),
    Coefficients(Vec<u64>),
}

/// One table row: the primitive polynomial for GF(prime^exponent).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimitivePolynomialEntry {
    pub prime: u64,
    pub exponent: u32,
    pub polynomial: PrimitivePolynomial,
}

/// Lookup table of primitive polynomials keyed by (prime, exponent).
///
/// The field factory takes this as an explicit dependency, so the field
/// engine carries no hidden process-wide state: tests can inject substitute
/// tables, and custom tables can be loaded from JSON. An absent entry is a
/// supported-but-missing condition reported by the factory, not a crash.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimitivePolynomials {
    entries: Vec<PrimitivePolynomialEntry>,
}

impl PrimitivePolynomials {
    /// An empty table. Fields requiring a primitive polynomial cannot be
    /// built from it until entries are inserted.
    pub fn empty() -> Self {
        PrimitivePolynomials {
            entries: Vec::new(),
        }
    }

    /// The built-in table: GF(2^n) for n = 2..=16 plus defining polynomials
    /// for small GF(3^n), GF(5^n) and GF(7^n) fields.
    pub fn builtin() -> Self {
        let mut table = PrimitivePolynomials::empty();

        let gf2: [(u32, u64); 15] = [
            (2, 0x7),      // x^2 + x + 1
            (3, 0xB),      // x^3 + x + 1
            (4, 0x13),     // x^4 + x + 1
            (5, 0x25),     // x^5 + x^2 + 1
            (6, 0x43),     // x^6 + x + 1
            (7, 0x89),     // x^7 + x^3 + 1
            (8, 0x11D),    // x^8 + x^4 + x^3 + x^2 + 1 (QR codes, AES)
            (9, 0x211),    // x^9 + x^4 + 1
            (10, 0x409),   // x^10 + x^3 + 1
            (11, 0x805),   // x^11 + x^2 + 1
            (12, 0x1053),  // x^12 + x^6 + x^4 + x + 1
            (13, 0x201B),  // x^13 + x^4 + x^3 + x + 1
            (14, 0x4443),  // x^14 + x^10 + x^6 + x + 1
            (15, 0x8003),  // x^15 + x + 1
            (16, 0x1002B), // x^16 + x^5 + x^3 + x + 1
        ];
        for (exponent, pattern) in gf2 {
            table.insert(2, exponent, PrimitivePolynomial::BitPattern(pattern));
        }

        let odd: [(u64, u32, &[u64]); 8] = [
            (3, 2, &[1, 0, 2]),          // x^2 + 2
            (3, 3, &[1, 2, 0, 1]),       // x^3 + 2x + 1
            (3, 4, &[1, 0, 0, 2, 2]),    // x^4 + 2x + 2
            (3, 5, &[1, 0, 2, 0, 0, 1]), // x^5 + 2x^2 + 1
            (5, 2, &[1, 0, 2]),          // x^2 + 2
            (5, 3, &[1, 0, 1, 2]),       // x^3 + x + 2
            (7, 2, &[1, 0, 3]),          // x^2 + 3
            (7, 3, &[1, 0, 1, 4]),       // x^3 + x + 4
        ];
        for (prime, exponent, coefficients) in odd {
            table.insert(
                prime,
                exponent,
                PrimitivePolynomial::Coefficients(coefficients.to_vec()),
            );
        }

        table
    }

    /// Insert or replace the entry for GF(prime^exponent).
    pub fn insert(&mut self, prime: u64, exponent: u32, polynomial: PrimitivePolynomial) {
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|entry| entry.prime == prime && entry.exponent == exponent)
        {
            entry.polynomial = polynomial;
            return;
        }
        self.entries.push(PrimitivePolynomialEntry {
            prime,
            exponent,
            polynomial,
        });
    }

    pub fn has(&self, prime: u64, exponent: u32) -> bool {
        self.get(prime, exponent).is_some()
    }

    pub fn get(&self, prime: u64, exponent: u32) -> Option<&PrimitivePolynomial> {
        self.entries
            .iter()
            .find(|entry| entry.prime == prime && entry.exponent == exponent)
            .map(|entry| &entry.polynomial)
    }

    /// Convenience accessor for the binary case.
    pub fn bit_pattern(&self, exponent: u32) -> Option<u64> {
        match self.get(2, exponent) {
            Some(PrimitivePolynomial::BitPattern(pattern)) => Some(*pattern),
            _ => None,
        }
    }

    /// Largest binary extension degree this table can build.
    pub fn max_binary_degree(&self) -> Option<u32> {
        self.entries
            .iter()
            .filter(|entry| {
                entry.prime == 2 && matches!(entry.polynomial, PrimitivePolynomial::BitPattern(_))
            })
            .map(|entry| entry.exponent)
            .max()
    }

    pub fn entries(&self) -> &[PrimitivePolynomialEntry] {
        &self.entries
    }

    /// Load a substitute table from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| GaloisFieldError::InvalidTable(e.to_string()))
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| GaloisFieldError::InvalidTable(e.to_string()))
    }
}

lazy_static! {
    /// The process-wide default table used by `factory::create`.
    pub static ref DEFAULT_PRIMITIVE_POLYNOMIALS: PrimitivePolynomials =
        PrimitivePolynomials::builtin();
}
