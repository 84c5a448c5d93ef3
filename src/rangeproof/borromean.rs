/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Borromean ring signatures over bit commitments

use std::array;

use log::error;
use zeroize::Zeroize;

use crate::internal_common::*;
use crate::abi::{point_columns, point_words, scalar_word, SolValue, Word};
use alloy_sol_types::{sol_data, SolType};
use super::{BIT_RANGE, BRANCHES};

///The two candidate points for mantissa bit `bit_index`:
///`[C_i, C_i - 2^i * H]`.
///
///Exactly one of them is a multiple of `G` with known discrete log:
///the first if the bit is 0, the second if it is 1.
pub fn bit_branches(sub_commitment: &ProjectivePoint, bit_index: usize) -> [ProjectivePoint; BRANCHES] {
    return [
        *sub_commitment,
        sub_commitment + &GENERATORS.neg_pow2_h[bit_index]
    ]
}

///One ring of a Borromean signature, together with the secret for one of its branches.
pub struct BitRing {
    branches: [ProjectivePoint; BRANCHES],
    signer: usize,
    secret: Scalar

} impl BitRing {
    ///Create a ring where `branches[signer] == secret * G`.
    ///
    ///Returns `RangeProofError::Malformed` if the secret doesn't open that branch.
    pub fn new(branches: [ProjectivePoint; BRANCHES], signer: usize, secret: Scalar
    ) -> Result<Self, RangeProofError> {
        if signer >= BRANCHES || branches[signer] != GENERATORS.g * secret {
            return Err(RangeProofError::Malformed)
        }
        return Ok(Self{
            branches, signer, secret
        })
    }

    ///Ring for bit `bit_index` with value `bit`, given `sub_commitment = blinding * G + bit * 2^i * H`.
    ///
    ///Returns `RangeProofError::InvariantViolation` if `blinding` doesn't open the branch for `bit`.
    pub(crate) fn for_bit(sub_commitment: &ProjectivePoint, bit_index: usize, bit: bool, blinding: Scalar
    ) -> Result<Self, RangeProofError> {
        return Self::new(bit_branches(sub_commitment, bit_index), bit as usize, blinding).map_err(|_| {
            error!("bit commitment {bit_index} is not opened by its blinding factor");
            RangeProofError::InvariantViolation(format!("bit commitment {bit_index} does not open"))
        })
    }

} impl Drop for BitRing {
    fn drop(&mut self) {
        self.secret.zeroize()
    }
}

//x coordinate of a ring member, inverted mod n
fn inverse_x(point: &ProjectivePoint) -> Result<Scalar, RangeProofError> {
    let (x, _) = coordinates(point)?;
    return invert_scalar(&scalar_from_bytes(&x)).ok_or(RangeProofError::ModularInverseUndefined)
}

//`u8` has no `SolValue` impl, so the `uint8` fields are encoded through `SolType`
type LinkParams = (sol_data::Uint<256>, sol_data::Address, sol_data::Uint<8>, sol_data::Uint<8>);

//the challenge for the member after (ring, branch), committing to point `r`
//H(uint256 m, address r, uint8 ring, uint8 branch)
fn link_h(m: &Scalar, r: &ProjectivePoint, ring: usize, branch: usize) -> Result<Scalar, RangeProofError> {
    let params = (scalar_word(m), point_address(r)?, ring as u8, branch as u8);
    return Ok(h_scalar(&LinkParams::abi_encode_params(&params)))
}

//hash that can be "tweaked" if we know the private key of p
//e' = H(m, address((e * P - s * G) * P.x^-1))
fn chameleon_h(m: &Scalar, e: &Scalar, s: &Scalar, p: &ProjectivePoint, ring: usize, branch: usize
) -> Result<Scalar, RangeProofError> {
    let r = ((p * e) - (GENERATORS.g * s)) * inverse_x(p)?;
    return link_h(m, &r, ring, branch)
}

//combine the ends of all rings: H(uint256[] ends)
fn ring_ends_h(ends: &[Scalar; BIT_RANGE]) -> Scalar {
    let ends: Vec<Word> = ends.iter().map(scalar_word).collect();
    return h_scalar(&ends.abi_encode())
}

//signed message: the commitment and the first member of every ring
fn create_m(commitment: &Commitment, firsts: &[ProjectivePoint; BIT_RANGE]) -> Result<Scalar, RangeProofError> {
    let (c_x, c_y) = point_words(&commitment.0)?;
    let (x, y) = point_columns(firsts)?;
    return Ok(h_scalar(&(c_x, c_y, x, y).abi_encode_params()))
}

///Borromean ring signature over `BIT_RANGE` rings of `BRANCHES` members.
///
///`s[i][j]` is the response of member `j` in ring `i`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BorromeanSignature {
    pub e0: Scalar,
    pub s: [[Scalar; BRANCHES]; BIT_RANGE]

} impl BorromeanSignature {
    ///Sign `commitment` with one known secret per ring.
    ///
    ///Every challenge except the one at each signer is derived from a freely chosen response,
    ///and the signer's response is solved for last, so all rings close on the shared `e0`.
    pub fn sign(commitment: &Commitment, rings: &[BitRing; BIT_RANGE]
    ) -> Result<Self, RangeProofError> {
        let firsts: [ProjectivePoint; BIT_RANGE] = array::from_fn(|i| rings[i].branches[0]);
        let m = create_m(commitment, &firsts)?;

        //e[i][j] is the challenge going into member j, e[i][BRANCHES] is the ring's end
        let mut e = [[Scalar::ZERO; BRANCHES + 1]; BIT_RANGE];
        let mut s = [[Scalar::ZERO; BRANCHES]; BIT_RANGE];
        let mut k = [Scalar::ZERO; BIT_RANGE];

        //start at each signer and go around each ring until reaching its end
        for (i, ring) in rings.iter().enumerate() {
            let j = ring.signer;
            k[i] = random_scalar();
            let r = (GENERATORS.g * k[i]) * inverse_x(&ring.branches[j])?;
            e[i][j + 1] = link_h(&m, &r, i, j)?;

            for j in (ring.signer + 1)..BRANCHES {
                s[i][j] = random_scalar();
                e[i][j + 1] = chameleon_h(&m, &e[i][j], &s[i][j], &ring.branches[j], i, j)?;
            }
        }

        //calculate e_0, the shared seed
        let ends: [Scalar; BIT_RANGE] = array::from_fn(|i| e[i][BRANCHES]);
        let e_0 = ring_ends_h(&ends);

        //finish constructing each ring, starting at e_0
        for (i, ring) in rings.iter().enumerate() {
            e[i][0] = e_0;
            for j in 0..ring.signer {
                s[i][j] = random_scalar();
                e[i][j + 1] = chameleon_h(&m, &e[i][j], &s[i][j], &ring.branches[j], i, j)?;
            }

            //"tie" the ring, proving we know one of the private keys
            let j = ring.signer;
            s[i][j] = (e[i][j] * ring.secret) - k[i];

            if chameleon_h(&m, &e[i][j], &s[i][j], &ring.branches[j], i, j)? != e[i][j + 1] {
                error!("borromean ring {i} does not close at member {j}");
                k.zeroize();
                return Err(RangeProofError::InvariantViolation(
                    format!("ring {i} does not close at member {j}")))
            }
        }
        k.zeroize();

        return Ok(Self{
            e0: e_0,
            s
        })
    }

    ///Verify the signature against `commitment` and the ring members.
    ///
    ///Returns `Ok()` if the signature is valid,
    ///or `Err(RangeProofError)` if it's invalid.
    pub fn verify(&self, commitment: &Commitment, rings: &[[ProjectivePoint; BRANCHES]; BIT_RANGE]
    ) -> Result<(), RangeProofError> {
        let firsts: [ProjectivePoint; BIT_RANGE] = array::from_fn(|i| rings[i][0]);
        let m = create_m(commitment, &firsts)?;

        //travel around each ring
        let mut ends = [Scalar::ZERO; BIT_RANGE];
        for (i, ring) in rings.iter().enumerate() {
            let mut eij = self.e0;
            for (j, member) in ring.iter().enumerate() {
                eij = chameleon_h(&m, &eij, &self.s[i][j], member, i, j)?;
            }
            ends[i] = eij;
        }

        //check if we end up back where we started
        return match ring_ends_h(&ends) == self.e0 {
            true => Ok(()),
            false => Err(RangeProofError::Invalid)
        };
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for BorromeanSignature {}
