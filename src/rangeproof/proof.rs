/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Range proofs for `mantissa * 10^exponent` amounts

use std::array;

use log::error;

use crate::internal_common::*;
use crate::abi::{point_columns, scalar_word, SolValue, Word};
use super::borromean::{bit_branches, BitRing, BorromeanSignature};
use super::{BIT_RANGE, BRANCHES, MAX_MANTISSA};

//10^exponent as a scalar
fn decimal_scale(exponent: u32) -> Result<Scalar, RangeProofError> {
    return match 10u128.checked_pow(exponent) {
        Some(scale) => Ok(scalar_from_u128(scale)),
        None => Err(RangeProofError::RangeOverflow)
    }
}

//split the mantissa into bits, most significant first: bits[i] is the bit worth 2^i
fn mantissa_bits(mantissa: u128) -> [bool; BIT_RANGE] {
    let mut remaining = mantissa;
    let mut bits = [false; BIT_RANGE];
    for i in (0..BIT_RANGE).rev() {
        let value = 1u128 << i;
        if remaining >= value {
            remaining -= value;
            bits[i] = true;
        }
    }
    return bits
}

///A range proof as ABI values:
///`(uint256[] x, uint256[] y, uint256 exponent, uint256 e0, uint256[][] s)`
pub type ProofWords = (Vec<Word>, Vec<Word>, Word, Word, Vec<Vec<Word>>);

//blinding factors for each bit, summing to `target`:
//random for every bit but the lowest, which closes the sum
fn bit_blindings(target: &Scalar) -> [Scalar; BIT_RANGE] {
    let mut blindings = [Scalar::ZERO; BIT_RANGE];
    let drawn: Vec<Scalar> = (1..BIT_RANGE).rev().map(|_| random_scalar()).collect();
    for (i, blinding) in (1..BIT_RANGE).rev().zip(drawn.iter()) {
        blindings[i] = *blinding;
    }
    blindings[0] = closing_blinding_factor(target, &drawn);
    return blindings
}

///Range proof for a commitment `C = r * G + a * H`.
///
///Proves that `a = m * 10^e` with `0 <= m < 2^BIT_RANGE`, without revealing `a`.
/// * `mantissa`: the bit commitments `C_i`, with `10^e * sum(C_i) == C`
/// * `exponent`: the public decimal exponent `e`
/// * `signature`: Borromean signature proving each `C_i` commits to `0` or `2^i`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RangeProof {
    pub mantissa: [Commitment; BIT_RANGE],
    pub exponent: u32,
    pub signature: BorromeanSignature

} impl RangeProof {
    ///Create a range proof for `commitment`, given its opening.
    ///
    ///Returns `RangeProofError::RangeOverflow` if the normalized mantissa doesn't fit into `BIT_RANGE` bits.
    pub fn prove(commitment: &Commitment, opening: &Opening) -> Result<Self, RangeProofError> {
        let (mantissa, exponent) = opening.amount.normalize();
        if mantissa > MAX_MANTISSA {
            return Err(RangeProofError::RangeOverflow);
        }

        //the bit blinding factors sum to r / 10^e
        let scale = decimal_scale(exponent)?;
        let target = opening.blinding
            * invert_scalar(&scale).ok_or(RangeProofError::ModularInverseUndefined)?;

        let bits = mantissa_bits(mantissa);
        let blindings = bit_blindings(&target);

        let sub_commitments: [ProjectivePoint; BIT_RANGE] = array::from_fn(|i| {
            let mut c = GENERATORS.g * blindings[i];
            if bits[i] {
                c += GENERATORS.h * Scalar::from(1u64 << i);
            }
            c
        });

        let blinding_sum: Scalar = blindings.iter().sum();
        if scale * blinding_sum != opening.blinding {
            error!("bit blinding factors do not sum to the commitment's blinding factor");
            return Err(RangeProofError::InvariantViolation(
                "bit blinding factors do not sum to the blinding factor".to_string()))
        }
        let commitment_sum: ProjectivePoint = sub_commitments.iter().sum();
        if commitment_sum * scale != commitment.0 {
            error!("bit commitments do not sum to the commitment");
            return Err(RangeProofError::InvariantViolation(
                "bit commitments do not sum to the commitment".to_string()))
        }

        let mut rings: Vec<BitRing> = Vec::with_capacity(BIT_RANGE);
        for i in 0..BIT_RANGE {
            rings.push(BitRing::for_bit(&sub_commitments[i], i, bits[i], blindings[i])?);
        }
        let rings: [BitRing; BIT_RANGE] = rings.try_into()
            .map_err(|_| RangeProofError::InvariantViolation("wrong number of bit rings".to_string()))?;
        let signature = BorromeanSignature::sign(commitment, &rings)?;

        return Ok(Self {
            mantissa: sub_commitments.map(Commitment),
            exponent,
            signature
        })
    }

    ///Verify a range proof given its associated commitment.
    ///
    ///Returns `Ok()` if the proof is valid,
    ///or `Err(RangeProofError)` if it's invalid.
    ///An exponent without a `u128` scale is `RangeProofError::Malformed`.
    pub fn verify(&self, commitment: &Commitment) -> Result<(), RangeProofError> {
        //check if the bit commitments equal the total commitment
        let scale = decimal_scale(self.exponent).map_err(|_| RangeProofError::Malformed)?;
        let total: Commitment = self.mantissa.iter().copied().sum();
        if total.0 * scale != commitment.0 {
            return Err(RangeProofError::Invalid)
        }

        let rings: [[ProjectivePoint; BRANCHES]; BIT_RANGE] = array::from_fn(|i|
            bit_branches(&self.mantissa[i].0, i));
        return self.signature.verify(commitment, &rings)
    }

    ///The proof as ABI values, `s` ordered ring-major.
    pub fn to_words(&self) -> Result<ProofWords, SerializationError> {
        let (x, y) = point_columns(self.mantissa.iter().map(|commitment| &commitment.0))?;
        let s = self.signature.s.iter()
            .map(|ring| ring.iter().map(scalar_word).collect())
            .collect();

        return Ok((x, y, Word::from(self.exponent), scalar_word(&self.signature.e0), s))
    }

    ///ABI-encode the proof the way the verifier decodes it.
    pub fn abi_encode(&self) -> Result<Vec<u8>, SerializationError> {
        return Ok(self.to_words()?.abi_encode())
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for RangeProof {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_are_little_endian() {
        let bits = mantissa_bits(142);
        //142 = 128 + 8 + 4 + 2
        assert_eq!(bits, [false, true, true, true, false, false, false, true]);
        assert_eq!(mantissa_bits(0), [false; BIT_RANGE]);
        assert_eq!(mantissa_bits(255), [true; BIT_RANGE]);
    }

    #[test]
    fn bit_blindings_close_on_target() {
        let target = random_scalar();
        let blindings = bit_blindings(&target);
        assert_eq!(blindings.iter().sum::<Scalar>(), target);
    }

    #[test]
    fn decimal_scale_bounds() {
        assert_eq!(decimal_scale(0).unwrap(), Scalar::ONE);
        assert_eq!(decimal_scale(3).unwrap(), Scalar::from(1000u64));
        assert!(decimal_scale(38).is_ok());
        assert_eq!(decimal_scale(39), Err(RangeProofError::RangeOverflow));
    }
}
