/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::iter::Sum;

use serde::{Deserializer, Serializer};
use zeroize::Zeroize;

use crate::tobytes::*;
use crate::curve::*;
use crate::pedersen::*;
use crate::amount::Amount;

///A pedersen commitment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Commitment(
    pub ProjectivePoint

); impl Commitment {
    ///create a commitment to `amount` with blinding factor `blinding`
    pub fn commit(amount: Amount, blinding: Scalar) -> Self {
        //(r * G) + (a * H)
        return Self(
            (GENERATORS.g * blinding) + (GENERATORS.h * amount.to_scalar())
        )
    }

    ///Return the elliptic curve point which represents this commitment.
    ///To convert an elliptic curve point back into a commitment, use `Commitment(point)`.
    pub fn to_point(&self) -> ProjectivePoint {
        return self.0;
    }

    ///The affine coordinates `(x, y)` published to the verifier.
    pub fn coordinates(&self) -> Result<(FieldBytes, FieldBytes), SerializationError> {
        return coordinates(&self.0)
    }

    ///Rebuild a commitment from published coordinates.
    pub fn from_coordinates(x: &FieldBytes, y: &FieldBytes) -> Result<Self, SerializationError> {
        return Ok(Self(point_from_coordinates(x, y)?))
    }

    ///Given input commitments and output commitments, check if the equation is balanced.
    ///
    ///`sum(in) == sum(out)`
    pub fn is_balanced(in_commitments: &[Commitment], out_commitments: &[Commitment]) -> bool {
        return in_commitments.iter().copied().sum::<Commitment>()
            == out_commitments.iter().copied().sum::<Commitment>()
    }

} impl Sum for Commitment {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        return Commitment(iter.map(|com| com.to_point()).sum())
    }

} impl Serialize for Commitment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        return self.0.to_affine().serialize(serializer)
    }

} impl<'de> Deserialize<'de> for Commitment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        return AffinePoint::deserialize(deserializer).map(|point| Commitment(point.into()))
    }
}

#[cfg(feature = "to_bytes")] impl ToBytes<'_> for Commitment {
    fn to_bytes(&self) -> Result<Vec<u8>, SerializationError> {
        return Ok(encode_point(&self.0)?.to_vec())
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, SerializationError> {
        if bytes.len() != 64 {
            return Err(SerializationError::DecodingError)
        }
        return Self::from_coordinates(
            &FieldBytes::clone_from_slice(&bytes[..32]),
            &FieldBytes::clone_from_slice(&bytes[32..])
        )
    }
}

///The secret behind a commitment.
/// * `blinding`: The blinding factor of the commitment
/// * `amount`: The amount committed to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Zeroize)]
pub struct Opening {
    pub blinding: Scalar,
    pub amount: Amount

} impl Opening {
    ///Create an opening given a blinding factor and an amount
    pub fn new(blinding: Scalar, amount: Amount) -> Self {
        return Self{
            blinding, amount
        };
    }

    ///The commitment this opening opens
    pub fn to_commitment(&self) -> Commitment {
        return Commitment::commit(self.amount, self.blinding)
    }

} impl Drop for Opening {
    fn drop(&mut self) {
        //clear the keys from memory to improve security
        self.zeroize()
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for Opening {}

///An unspent confidential output: a published commitment and its (client-held) opening.
///
///The opening must never be published, except when withdrawing.
///Spending functions take `Utxo` by value, so a spent output can't be reused.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Utxo {
    pub commitment: Commitment,
    pub opening: Opening

} impl Utxo {
    ///Wrap an opening together with its commitment
    pub fn from_opening(opening: Opening) -> Self {
        return Self{
            commitment: opening.to_commitment(),
            opening
        }
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for Utxo {}
