/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Cryptographic proofs which demonstrate that the amount committed to in a pedersen commitment is in range
//!
//!An amount is proven as `mantissa * 10^exponent` with `0 <= mantissa < 2^BIT_RANGE`.
//!The mantissa is split into bit commitments and every bit is proven to be 0 or 1
//!with one ring of a Borromean ring signature.

mod borromean;
mod proof;

pub use borromean::{BitRing, BorromeanSignature};
pub use proof::{ProofWords, RangeProof};

///Mantissas are allowed to be between 0 and 2<sup>`BIT_RANGE`</sup> - 1.
///This is also the number of rings in a range proof.
pub const BIT_RANGE: usize = 8;

///Number of branches (candidate bit values) in each ring.
pub const BRANCHES: usize = 2;

///Maximum mantissa allowed for a rangeproof: 2<sup>`BIT_RANGE`</sup> - 1
pub const MAX_MANTISSA: u128 = (1u128 << BIT_RANGE) - 1;
