// src/error.rs

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GaloisFieldError>;

/// Every failure the field engine and polynomial layer can report.
///
/// None of these are transient: each error is deterministic given its inputs
/// and is surfaced immediately to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GaloisFieldError {
    /// Requested field order is below 2, the smallest possible field.
    #[error("field order {0} is too small, minimum order is 2")]
    OrderTooSmall(u64),

    /// Requested field order has more than one prime factor.
    /// GF(q) only exists when q = p^n for prime p.
    #[error("field order {0} is not a prime power")]
    NotPrimePower(u64),

    /// The (prime, exponent) combination has no registered primitive
    /// polynomial, or is an odd-prime extension field, which this crate
    /// does not construct.
    #[error("GF({prime}^{exponent}) is not currently supported")]
    Unsupported { prime: u64, exponent: u32 },

    /// Division by the zero element, or inverse of the zero element.
    #[error("division by zero in Galois field")]
    DivisionByZero,

    /// The discrete logarithm of zero does not exist.
    #[error("the discrete logarithm of zero is undefined")]
    LogOfZero,

    /// Two polynomials tied to different field instances were combined.
    #[error("cannot operate on polynomials over different fields")]
    FieldMismatch,

    /// Polynomial division by the zero polynomial.
    #[error("division by zero polynomial")]
    ZeroPolynomialDivisor,

    /// Interpolation inputs of different lengths.
    #[error("xs has {xs} entries but ys has {ys}")]
    LengthMismatch { xs: usize, ys: usize },

    /// Interpolation abscissas must be distinct.
    #[error("duplicate x-coordinate {0} in interpolation input")]
    DuplicateAbscissa(u64),

    /// Text that is not "0", "1" or an alpha-power of the form "α^<integer>".
    #[error("invalid alpha power notation: {0:?}")]
    InvalidAlphaPower(String),

    /// A binary-extension-field capability was requested on a prime field.
    #[error("{operation} is only available for binary extension fields GF(2^n)")]
    NotBinaryField { operation: &'static str },

    /// A value outside [0, order) was handed to an operation that requires
    /// a field element.
    #[error("{element} is not an element of a field of order {order}")]
    InvalidElement { element: u64, order: u64 },

    /// Codeword input whose bit length does not divide into whole codewords.
    #[error("bit string length {length} is not a multiple of codeword width {width}")]
    InvalidCodewordLength { length: usize, width: u32 },

    /// Codeword input containing a character other than '0' or '1'.
    #[error("invalid character {character:?} in binary string")]
    InvalidBinaryString { character: char },

    /// A primitive polynomial table failed to deserialize.
    #[error("failed to parse primitive polynomial table: {0}")]
    InvalidTable(String),
}
