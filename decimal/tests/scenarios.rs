//! End-to-end scenarios: strings in, strings out.

use bigdec_dec::{pi, BigDecimal, Error, RoundingMode};

fn dec(s: &str) -> BigDecimal {
    s.parse().unwrap()
}

#[test]
fn add_preserves_scale() {
    assert_eq!((dec("0.1") + dec("0.2")).to_string(), "0.3");
}

#[test]
fn mul_adds_scales() {
    assert_eq!((dec("1.23") * dec("4.56")).to_string(), "5.6088");
}

#[test]
fn true_divide_rounds_to_precision() {
    let q = dec("1").true_divide(&dec("3"), 10).unwrap();
    assert_eq!(q.to_string(), "0.3333333333");
}

#[test]
fn true_divide_exact_strips_scaling_zeros() {
    let q = dec("10").true_divide(&dec("4"), 28).unwrap();
    assert_eq!(q.to_string(), "2.5");
}

#[test]
fn sqrt_fifty_digits() {
    let r = dec("2").sqrt(50).unwrap();
    assert_eq!(
        r.to_string(),
        "1.4142135623730950488016887242096980785696718753769"
    );
}

#[test]
fn pi_fifty_digits() {
    assert_eq!(
        pi(50).to_string(),
        "3.1415926535897932384626433832795028841971693993751"
    );
}

#[test]
fn quantize_to_cents() {
    let q = dec("1.2345").quantize(&dec("0.01"), RoundingMode::HalfEven);
    assert_eq!(q.to_string(), "1.23");
}

#[test]
fn round_to_negative_digits() {
    let r = dec("123.456").round(-2, RoundingMode::HalfEven);
    assert_eq!(r.to_string(), "1E+2");
}

#[test]
fn unsigned_subtraction_underflows() {
    use bigdec_dec::BigUInt;
    let a: BigUInt = "100".parse().unwrap();
    let b: BigUInt = "101".parse().unwrap();
    assert_eq!(a.try_sub(&b), Err(Error::Underflow));
}

#[test]
fn division_errors() {
    assert_eq!(dec("1").true_divide(&dec("0"), 28), Err(Error::DivByZero));
    assert_eq!(dec("1").truncate_modulo(&dec("0")), Err(Error::DivByZero));
}

#[test]
fn domain_errors() {
    assert_eq!(dec("-1").sqrt(10), Err(Error::Domain));
    assert_eq!(dec("0").ln(10), Err(Error::Domain));
    assert_eq!(dec("-3").ln(10), Err(Error::Domain));
    assert_eq!(dec("0").power(&dec("0"), 10), Err(Error::Domain));
    assert_eq!(dec("0").power(&dec("-1"), 10), Err(Error::Domain));
    assert_eq!(dec("-2").power(&dec("0.5"), 10), Err(Error::Domain));
    assert_eq!(dec("-16").root(4, 10), Err(Error::Domain));
}

#[test]
fn exp_overflow_boundary() {
    assert_eq!(dec("1E+20").exp(10), Err(Error::Overflow));
    assert_eq!(dec("-1E+20").exp(10).unwrap(), BigDecimal::zero());
}

#[test]
fn pi_zero_precision_is_three() {
    assert_eq!(pi(0).to_string(), "3");
}

#[test]
fn negative_scale_multiplication() {
    let p = dec("2E+3") * dec("3E+4");
    assert_eq!(p.scale(), -7);
    assert_eq!(p.to_string(), "6E+7");
}

#[test]
fn subtraction_cancels_to_wider_scale() {
    let z = dec("2.50") - dec("2.5");
    assert!(z.is_zero());
    assert_eq!(z.to_string(), "0.00");
}

#[test]
fn round_widens_without_value_change() {
    let r = dec("3.14").round(5, RoundingMode::HalfEven);
    assert_eq!(r.to_string(), "3.14000");
    assert_eq!(r, dec("3.14"));
}

#[test]
fn operators_use_default_precision() {
    let q = dec("1") / dec("7");
    assert_eq!(q.digits(), 28);
    assert_eq!(q.to_string(), "0.1428571428571428571428571429");
    let m = dec("7.5") % dec("2");
    assert_eq!(m.to_string(), "1.5");
}
