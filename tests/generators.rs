// SPDX short identifier: Unlicense

use confidential_values::{
    common::*,
    hashes::h_bytes,
    pedersen::{Generators, GENERATORS, H_V_EVEN, H_V_ODD}
};

#[test]
fn derivation_is_deterministic() {
    let again = Generators::derive(&G_POINT).unwrap();
    assert_eq!(again, *GENERATORS);
    assert_eq!(GENERATORS.g, G_POINT);
}

#[test]
fn h_known_answer() {
    let (h_x, h_y) = coordinates(&GENERATORS.h).unwrap();
    assert_eq!(hex::encode(h_x), "c0a6c424ac7157ae408398df7e5f4552091a69125d5dfcb7b8c2659029395be1");
    assert_eq!(hex::encode(h_y), "d5d0d2a0b5998976d25ae7f9b2707eda4d7fd64bef9ffcaa0b86fa57faf44082");
    assert_eq!(GENERATORS.h_v, H_V_EVEN);

    //iaH[3] = -(8 * H)
    let (x, y) = coordinates(&GENERATORS.neg_pow2_h[3]).unwrap();
    assert_eq!(hex::encode(x), "2f03a1287611e735bab7fec2cd6492439a438306c1bff388b909581fa187e78b");
    assert_eq!(hex::encode(y), "a884ba58337ed8bced4d9493feccd867e3acb8814b0b585ba4fea77e4b8beba4");
}

#[test]
fn h_has_order_n() {
    let h = GENERATORS.h;
    assert!(h != ProjectivePoint::IDENTITY);
    assert!(h != G_POINT);
    assert!(has_order_n(&h));
    //n * H == (n - 1) * H + H
    assert_eq!(h * (-Scalar::ONE) + h, ProjectivePoint::IDENTITY);
}

#[test]
fn h_is_near_the_hash_of_g() {
    let seed = field_from_bytes(&FieldBytes::from(h_bytes(&encode_point(&G_POINT).unwrap())));
    let (h_x, h_y) = coordinates(&GENERATORS.h).unwrap();

    let mut x = seed;
    let mut found = false;
    for _ in 0..1000 {
        if x.to_bytes() == h_x {
            found = true;
            break
        }
        x = (x + FieldElement::ONE).normalize();
    }
    assert!(found);

    //and it really is on the curve
    assert_eq!(point_from_coordinates(&h_x, &h_y).unwrap(), GENERATORS.h);
}

#[test]
fn h_v_tags_parity() {
    let (_, h_y) = coordinates(&GENERATORS.h).unwrap();
    let expected = if h_y[31] & 1 == 1 { H_V_ODD } else { H_V_EVEN };
    assert_eq!(GENERATORS.h_v, expected);
}

#[test]
fn negated_powers_of_h() {
    for (i, point) in GENERATORS.neg_pow2_h.iter().enumerate() {
        let pow2_h = GENERATORS.h * Scalar::from(1u64 << i);
        assert_eq!(pow2_h + point, ProjectivePoint::IDENTITY);
    }
}

#[test]
fn identity_is_not_a_base_point() {
    assert_eq!(Generators::derive(&ProjectivePoint::IDENTITY), Err(GeneratorError::InvalidBasePoint));
}

#[test]
fn field_and_scalar_helpers() {
    let two = FieldElement::ONE + FieldElement::ONE;
    let four = (two * two).normalize();
    let root = sqrt_field(&four).unwrap();
    assert!(root.square().normalize() == four);

    //p = 3 mod 4, so -1 has no square root
    let minus_one = FieldElement::ONE.negate(1).normalize();
    assert!(sqrt_field(&minus_one).is_none());

    let half = invert_field(&two).unwrap();
    assert!((half * two).normalize() == FieldElement::ONE);
    assert!(invert_field(&FieldElement::ZERO).is_none());

    let s = random_scalar();
    assert_eq!(s * invert_scalar(&s).unwrap(), Scalar::ONE);
    assert!(invert_scalar(&Scalar::ZERO).is_none());

    assert!(!has_order_n(&ProjectivePoint::IDENTITY));
    assert!(encode_point(&ProjectivePoint::IDENTITY).is_err());
}
