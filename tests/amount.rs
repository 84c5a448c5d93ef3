// SPDX short identifier: Unlicense

use confidential_values::common::*;

#[test]
fn normalize_round_trip() {
    let amounts = [0u128, 1, 10, 142, 1_420_000_000_000_000_000, 420_000_000_000_000_000, 1001, u128::MAX];
    for amount in amounts {
        let (mantissa, exponent) = Amount(amount).normalize();
        assert!(amount == 0 || mantissa % 10 != 0);
        assert_eq!(Amount::from_parts(mantissa, exponent), Some(Amount(amount)));
    }
    assert_eq!(Amount(1_420_000_000_000_000_000).normalize(), (142, 16));
    assert_eq!(Amount(420_000_000_000_000_000).normalize(), (42, 16));
    assert_eq!(Amount(0).normalize(), (0, 0));
}

#[test]
fn from_parts_overflow() {
    assert_eq!(Amount::from_parts(1, 39), None);
    assert_eq!(Amount::from_parts(u128::MAX, 1), None);
    assert_eq!(Amount::from_parts(0, 38), Some(Amount(0)));
}

#[test]
fn parse_amounts() {
    let parsed = |s: &str| s.parse::<Amount>();

    assert_eq!(parsed("1420000000000000000"), Ok(Amount(1_420_000_000_000_000_000)));
    assert_eq!(parsed("1.42e18"), Ok(Amount(1_420_000_000_000_000_000)));
    assert_eq!(parsed("0.42E18"), Ok(Amount(420_000_000_000_000_000)));
    assert_eq!(parsed("1e18"), Ok(Amount(1_000_000_000_000_000_000)));
    assert_eq!(parsed("1.50"), Err(AmountError::Fractional));
    assert_eq!(parsed("3.000"), Ok(Amount(3)));
    assert_eq!(parsed("10e-1"), Ok(Amount(1)));
    assert_eq!(parsed("2.5e+1"), Ok(Amount(25)));
    assert_eq!(parsed(" 7 "), Ok(Amount(7)));
    assert_eq!(parsed("0.0e-5"), Ok(Amount(0)));

    assert_eq!(parsed("1.425e2"), Err(AmountError::Fractional));
    assert_eq!(parsed("1e-1"), Err(AmountError::Fractional));
    assert_eq!(parsed("1e39"), Err(AmountError::Overflow));
    assert_eq!(parsed("340282366920938463463374607431768211456"), Err(AmountError::Overflow));

    for malformed in ["", ".", "e5", "-1", "1.2.3", "abc", "1e", "1e1.5", "0x10"] {
        assert_eq!(parsed(malformed), Err(AmountError::Malformed), "{malformed}");
    }
}

#[test]
fn checked_sum() {
    assert_eq!(Amount::checked_sum(&[Amount(1), Amount(2)]), Some(Amount(3)));
    assert_eq!(Amount::checked_sum(&[Amount(u128::MAX), Amount(1)]), None);
    assert_eq!(Amount::checked_sum(&[]), Some(Amount(0)));
}
