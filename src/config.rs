/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Constants for initializing the verifier
//!
//!The verifier stores `(G, H, H_v, n, -2^i * H)` as immutables;
//!computing them here saves it from deriving `H` itself.

use k256::elliptic_curve::bigint::ArrayEncoding;

use crate::internal_common::*;
use crate::abi::{point_words, word, SolValue, Word};
use crate::rangeproof::BIT_RANGE;

///Number of `uint256` constructor arguments.
pub const CONFIG_WORDS: usize = 6 + 2 * BIT_RANGE;

///The verifier's constructor arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifierConfig {
    pub generators: Generators

} impl VerifierConfig {
    ///The configuration for this process' generators.
    pub fn current() -> Self {
        return Self {
            generators: *GENERATORS
        }
    }

    ///`(G.x, G.y, H.x, H.y, H_v, n, iaH[0].x, iaH[0].y, ..., iaH[7].x, iaH[7].y)`
    pub fn to_words(&self) -> Result<[Word; CONFIG_WORDS], SerializationError> {
        let Generators { g, h, h_v, neg_pow2_h } = &self.generators;

        let mut words: Vec<Word> = Vec::with_capacity(CONFIG_WORDS);
        for point in [g, h] {
            let (x, y) = point_words(point)?;
            words.push(x);
            words.push(y);
        }
        words.push(Word::from(*h_v));
        words.push(word(&CURVE_ORDER.to_be_byte_array()));
        for point in neg_pow2_h {
            let (x, y) = point_words(point)?;
            words.push(x);
            words.push(y);
        }
        return words.try_into().map_err(|_| SerializationError::EncodingError)
    }

    ///ABI-encode the constructor arguments, one static word each.
    pub fn abi_encode(&self) -> Result<Vec<u8>, SerializationError> {
        return Ok(self.to_words()?.abi_encode())
    }

    ///The encoded constructor arguments as `0x`-prefixed hex.
    pub fn to_hex(&self) -> Result<String, SerializationError> {
        return Ok(format!("0x{}", hex::encode(self.abi_encode()?)))
    }
}
