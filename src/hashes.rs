/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Hashes shared with the verifier
//!
//! The verifier recomputes every challenge, so these must not change.

use sha3::{
    Digest,
    Keccak256
};
use crate::abi::Address;
use crate::curve::*;
use crate::errors::SerializationError;

///Hash bytes to bytes (keccak256).
pub fn h_bytes(msg: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(msg);
    return hasher.finalize().into();
}

///Hash bytes to scalar, reducing the digest mod `n`.
///
///Applied to ABI-encoded parameters this is the Fiat-Shamir challenge hash,
///`keccak256(abi.encode(params)) mod n`.
pub fn h_scalar(msg: &[u8]) -> Scalar {
    return scalar_from_bytes(&FieldBytes::from(h_bytes(msg)));
}

///Fingerprint a point as the low 20 bytes of the hash of its raw `x || y` encoding.
///
///The identity can't be fingerprinted.
pub fn point_address(point: &ProjectivePoint) -> Result<Address, SerializationError> {
    let digest = h_bytes(&encode_point(point)?);
    return Ok(Address::from_slice(&digest[12..]))
}
