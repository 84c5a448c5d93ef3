/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!Pedersen commitment generators
//!
//!`H` is derived from `G` by a public search, so nobody knows `k` with `H = k * G`.
//!The derivation is deterministic: any verifier can recompute the same `H`.

use log::{debug, trace};

use crate::curve::*;
use crate::hashes::*;
use crate::errors::GeneratorError;
use crate::rangeproof::BIT_RANGE;

lazy_static! {
    pub static ref GENERATORS: Generators = Generators::derive(&G_POINT)
        .expect("the secp256k1 base point is a valid generator");
}

///`H_v` for an `H` with even y coordinate.
pub const H_V_EVEN: u8 = 27;
///`H_v` for an `H` with odd y coordinate.
pub const H_V_ODD: u8 = 28;

///The commitment generators and their precomputed multiples.
///
/// * `g`: the curve basepoint
/// * `h`: the second generator
/// * `h_v`: parity tag of `h`'s y coordinate (`27` even, `28` odd)
/// * `neg_pow2_h`: `neg_pow2_h[i] = -(2^i * h)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generators {
    pub g: ProjectivePoint,
    pub h: ProjectivePoint,
    pub h_v: u8,
    pub neg_pow2_h: [ProjectivePoint; BIT_RANGE]

} impl Generators {
    ///Derive `H` (and everything depending on it) from the basepoint `g`.
    ///
    ///Starting at `x = keccak256(g.x || g.y) mod p`, walk `x` upwards until
    ///`x` is the coordinate of a point of order `n`.
    pub fn derive(g: &ProjectivePoint) -> Result<Self, GeneratorError> {
        let seed = encode_point(g).map_err(|_| GeneratorError::InvalidBasePoint)?;
        let mut x = field_from_bytes(&FieldBytes::from(h_bytes(&seed)));

        let h = loop {
            match h_candidate(&x) {
                Ok(h) => break h,
                Err(GeneratorError::InvalidGeneratorCandidate) => {
                    trace!("no generator at x = {}", hex::encode(x.to_bytes()));
                    x = (x + FieldElement::ONE).normalize();
                },
                Err(err) => return Err(err)
            }
        };

        let h_v = match y_is_odd(&h) {
            Ok(true) => H_V_ODD,
            Ok(false) => H_V_EVEN,
            Err(_) => return Err(GeneratorError::InvalidGeneratorCandidate)
        };

        let mut neg_pow2_h = [ProjectivePoint::IDENTITY; BIT_RANGE];
        for (i, point) in neg_pow2_h.iter_mut().enumerate() {
            *point = -(h * Scalar::from(1u64 << i));
        }

        debug!("derived generator H at x = {}", hex::encode(x.to_bytes()));
        return Ok(Self{
            g: *g, h, h_v, neg_pow2_h
        })
    }
}

//the point at `x` (with `y = p - sqrt(x^3 + ax + b)`), if it has order `n`
fn h_candidate(x: &FieldElement) -> Result<ProjectivePoint, GeneratorError> {
    let alpha = x.square().mul(x) + curve_a().mul(x) + curve_b();
    let beta = sqrt_field(&alpha).ok_or(GeneratorError::InvalidGeneratorCandidate)?;
    let y = beta.negate(1).normalize();

    let candidate = point_from_coordinates(&x.to_bytes(), &y.to_bytes())
        .map_err(|_| GeneratorError::InvalidGeneratorCandidate)?;
    if !has_order_n(&candidate) {
        return Err(GeneratorError::InvalidGeneratorCandidate)
    }
    return Ok(candidate)
}

///Close a blinding factor sum: return `target - sum(drawn) (mod n)`,
///so that `sum(drawn) + result == target (mod n)`.
pub fn closing_blinding_factor(target: &Scalar, drawn: &[Scalar]) -> Scalar {
    let drawn_sum: Scalar = drawn.iter().sum();
    return *target - drawn_sum
}
