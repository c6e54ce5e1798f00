// Discrete log/exp and alpha-power notation over GF(256).

use galois_fields::{GaloisField, GaloisFieldError};

#[test]
fn test_to_alpha_power_for_zero_and_identity() {
    let gf256 = GaloisField::new(256).unwrap();
    assert_eq!(gf256.to_alpha_power(0).unwrap(), "0");
    assert_eq!(gf256.to_alpha_power(1).unwrap(), "α^0");
}

#[test]
fn test_to_alpha_power_for_generator() {
    // In GF(256), 2 is the generator α.
    let gf256 = GaloisField::new(256).unwrap();
    assert_eq!(gf256.to_alpha_power(2).unwrap(), "α^1");
    assert_eq!(gf256.to_alpha_power(4).unwrap(), "α^2");
}

#[test]
fn test_to_alpha_power_rejects_out_of_range() {
    let gf256 = GaloisField::new(256).unwrap();
    assert_eq!(
        gf256.to_alpha_power(256).unwrap_err(),
        GaloisFieldError::InvalidElement {
            element: 256,
            order: 256
        }
    );
}

#[test]
fn test_round_trip_every_nonzero_element() {
    let gf256 = GaloisField::new(256).unwrap();
    for element in 1..256u64 {
        let notation = gf256.to_alpha_power(element).unwrap();
        assert_eq!(gf256.from_alpha_power(&notation).unwrap(), element);
    }
}

#[test]
fn test_from_alpha_power_literals() {
    let gf256 = GaloisField::new(256).unwrap();
    assert_eq!(gf256.from_alpha_power("0").unwrap(), 0);
    assert_eq!(gf256.from_alpha_power("1").unwrap(), 1);
    assert_eq!(gf256.from_alpha_power("α^0").unwrap(), 1);
    assert_eq!(gf256.from_alpha_power("α^1").unwrap(), 2);
}

#[test]
fn test_from_alpha_power_ascii_prefix() {
    let gf256 = GaloisField::new(256).unwrap();
    assert_eq!(
        gf256.from_alpha_power("a^-1").unwrap(),
        gf256.from_alpha_power("α^254").unwrap()
    );
}

#[test]
fn test_from_alpha_power_normalizes_large_and_negative_powers() {
    let gf256 = GaloisField::new(256).unwrap();
    // The multiplicative group is cyclic of order 255.
    assert_eq!(gf256.from_alpha_power("α^255").unwrap(), 1);
    assert_eq!(gf256.from_alpha_power("α^256").unwrap(), 2);
    assert_eq!(
        gf256.from_alpha_power("α^-48").unwrap(),
        gf256.inverse(gf256.from_alpha_power("α^48").unwrap()).unwrap()
    );
}

#[test]
fn test_from_alpha_power_rejects_garbage() {
    let gf256 = GaloisField::new(256).unwrap();
    for input in ["", "2", "alpha^3", "α^", "α^x", "^5", "α3"] {
        assert_eq!(
            gf256.from_alpha_power(input).unwrap_err(),
            GaloisFieldError::InvalidAlphaPower(input.to_string()),
            "input {:?}",
            input
        );
    }
}

#[test]
fn test_multiplication_in_alpha_powers() {
    let gf256 = GaloisField::new(256).unwrap();
    let a = gf256.from_alpha_power("α^10").unwrap();
    let b = gf256.from_alpha_power("α^20").unwrap();
    let expected = gf256.from_alpha_power("α^30").unwrap();
    assert_eq!(gf256.multiply(a, b), expected);
}

#[test]
fn test_log_and_exp() {
    let gf256 = GaloisField::new(256).unwrap();
    assert_eq!(gf256.log(2).unwrap(), 1);
    assert_eq!(gf256.exp(1).unwrap(), 2);
    assert_eq!(gf256.exp(255).unwrap(), 1);
    assert_eq!(gf256.exp(-1).unwrap(), gf256.exp(254).unwrap());
    assert_eq!(gf256.log(0).unwrap_err(), GaloisFieldError::LogOfZero);

    for element in 1..256u64 {
        assert_eq!(
            gf256.exp(gf256.log(element).unwrap() as i64).unwrap(),
            element
        );
    }
}

#[test]
fn test_alpha_capabilities_unavailable_on_prime_fields() {
    let gf7 = GaloisField::new(7).unwrap();
    assert!(matches!(
        gf7.to_alpha_power(3).unwrap_err(),
        GaloisFieldError::NotBinaryField { .. }
    ));
    assert!(matches!(
        gf7.from_alpha_power("α^3").unwrap_err(),
        GaloisFieldError::NotBinaryField { .. }
    ));
}
