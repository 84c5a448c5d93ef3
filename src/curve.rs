/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Elliptic curve functions and constants
//!
//! All arithmetic happens on secp256k1: `y^2 = x^3 + 7 (mod p)`, prime group order `n`.
//! Scalars are reduced mod `n`, coordinates mod `p`.

use crate::errors::SerializationError;
#[cfg(feature = "to_bytes")]
use crate::tobytes::*;

pub use k256::{
    AffinePoint,
    EncodedPoint,
    FieldBytes,
    FieldElement,
    NonZeroScalar,
    ProjectivePoint,
    Scalar,
    elliptic_curve::bigint::U256
};
use k256::elliptic_curve::{
    bigint::ArrayEncoding,
    group::Curve,
    ops::Reduce,
    sec1::{FromEncodedPoint, ToEncodedPoint},
    PrimeField
};
use rand::thread_rng;

///The basepoint of the elliptic curve.
pub const G_POINT: ProjectivePoint = ProjectivePoint::GENERATOR;

///The order `n` of the group generated by `G_POINT`.
pub const CURVE_ORDER: U256 = U256::from_be_hex(
    "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141");

///The prime `p` of the base field.
pub const FIELD_MODULUS: U256 = U256::from_be_hex(
    "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F");

///`a` in `y^2 = x^3 + a*x + b`
pub fn curve_a() -> FieldElement {
    return FieldElement::ZERO;
}

///`b` in `y^2 = x^3 + a*x + b`
pub fn curve_b() -> FieldElement {
    return FieldElement::from_u64(7);
}

///Return the affine coordinates of a point, big-endian.
///
///The identity has no affine coordinates and returns `SerializationError::EncodingError`.
pub fn coordinates(point: &ProjectivePoint) -> Result<(FieldBytes, FieldBytes), SerializationError> {
    let encoded = point.to_affine().to_encoded_point(false);
    return match (encoded.x(), encoded.y()) {
        (Some(x), Some(y)) => Ok((x.clone(), y.clone())),
        _ => Err(SerializationError::EncodingError)
    }
}

///Encode a point to the raw 64 byte `x || y` form used for hashing.
pub fn encode_point(point: &ProjectivePoint) -> Result<[u8; 64], SerializationError> {
    let (x, y) = coordinates(point)?;
    let mut encoded = [0u8; 64];
    encoded[..32].copy_from_slice(&x);
    encoded[32..].copy_from_slice(&y);
    return Ok(encoded)
}

///Build a point from its affine coordinates, checking that it is on the curve.
pub fn point_from_coordinates(x: &FieldBytes, y: &FieldBytes) -> Result<ProjectivePoint, SerializationError> {
    let encoded = EncodedPoint::from_affine_coordinates(x, y, false);
    return match Option::<AffinePoint>::from(AffinePoint::from_encoded_point(&encoded)) {
        Some(point) => Ok(ProjectivePoint::from(point)),
        None => Err(SerializationError::DecodingError)
    }
}

///Parity of the y coordinate, `true` if odd.
pub fn y_is_odd(point: &ProjectivePoint) -> Result<bool, SerializationError> {
    let (_, y) = coordinates(point)?;
    return Ok(y[31] & 1 == 1)
}

///Reduce 32 big-endian bytes to a scalar mod `n`.
pub fn scalar_from_bytes(bytes: &FieldBytes) -> Scalar {
    return <Scalar as Reduce<U256>>::reduce_bytes(bytes);
}

///Map an integer to a scalar mod `n`.
pub fn scalar_from_u128(value: u128) -> Scalar {
    return <Scalar as Reduce<U256>>::reduce(U256::from_u128(value));
}

///Reduce 32 big-endian bytes to a field element mod `p`.
pub fn field_from_bytes(bytes: &FieldBytes) -> FieldElement {
    let mut value = U256::from_be_slice(bytes);
    //2^256 < 2p, so one subtraction is enough
    if value >= FIELD_MODULUS {
        value = value.wrapping_sub(&FIELD_MODULUS);
    }
    return Option::<FieldElement>::from(FieldElement::from_bytes(&value.to_be_byte_array()))
        .expect("value was reduced below p");
}

///Modular inverse mod `n`, `None` for zero.
pub fn invert_scalar(scalar: &Scalar) -> Option<Scalar> {
    return scalar.invert().into();
}

///Modular inverse mod `p`, `None` for zero.
pub fn invert_field(element: &FieldElement) -> Option<FieldElement> {
    return element.normalize().invert().into();
}

///Modular square root mod `p`, `None` if `element` is not a quadratic residue.
pub fn sqrt_field(element: &FieldElement) -> Option<FieldElement> {
    return element.normalize().sqrt().into();
}

///Check that `point` generates a group of order exactly `n`:
///`point != 0` and `n * point == 0`.
pub fn has_order_n(point: &ProjectivePoint) -> bool {
    if *point == ProjectivePoint::IDENTITY {
        return false
    }
    //n * P == (n - 1) * P + P
    return (point * &(-Scalar::ONE)) + point == ProjectivePoint::IDENTITY
}

///return a random, non-zero scalar
pub fn random_scalar() -> Scalar {
    return *NonZeroScalar::random(&mut thread_rng());
}

#[cfg(feature = "to_bytes")]
impl ToBytes<'_> for Scalar {
    fn to_bytes(&self) -> Result<Vec<u8>, SerializationError> {
        return Ok(Scalar::to_bytes(self).to_vec())
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, SerializationError> {
        if bytes.len() != 32 {
            return Err(SerializationError::DecodingError)
        }
        return match Option::<Scalar>::from(Scalar::from_repr(FieldBytes::clone_from_slice(bytes))) {
            Some(scalar) => Ok(scalar),
            None => Err(SerializationError::DecodingError)
        }
    }
}
