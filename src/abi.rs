/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Contract ABI values
//!
//! Everything that the verifier hashes or decodes is encoded with `SolValue`,
//! so it matches the verifier's decoder byte for byte.
//! This module only maps curve values onto ABI words.

pub use alloy_primitives::{Address, U256 as Word};
pub use alloy_sol_types::SolValue;

use crate::curve::*;
use crate::errors::SerializationError;

///A coordinate or any other 32 big-endian bytes as `uint256`.
pub fn word(bytes: &FieldBytes) -> Word {
    return Word::from_be_slice(bytes.as_slice())
}

///A scalar as `uint256`.
pub fn scalar_word(scalar: &Scalar) -> Word {
    return word(&scalar.to_bytes())
}

///The affine coordinates of a point as `(uint256 x, uint256 y)`.
pub fn point_words(point: &ProjectivePoint) -> Result<(Word, Word), SerializationError> {
    let (x, y) = coordinates(point)?;
    return Ok((word(&x), word(&y)))
}

///The coordinates of several points as the columns `(uint256[] x, uint256[] y)`.
pub fn point_columns<'a, I>(points: I) -> Result<(Vec<Word>, Vec<Word>), SerializationError>
where I: IntoIterator<Item = &'a ProjectivePoint> {
    let mut xs: Vec<Word> = Vec::new();
    let mut ys: Vec<Word> = Vec::new();
    for point in points {
        let (x, y) = point_words(point)?;
        xs.push(x);
        ys.push(y);
    }
    return Ok((xs, ys))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_sol_types::{sol_data, SolType};

    fn padded(value: u8) -> Vec<u8> {
        let mut word = vec![0u8; 32];
        word[31] = value;
        return word
    }

    #[test]
    fn static_values_are_packed_in_words() {
        let encoded = <(sol_data::Uint<256>, sol_data::Address, sol_data::Uint<8>)>::abi_encode_params(
            &(Word::from(5u64), Address::repeat_byte(0xab), 7u8)
        );
        assert_eq!(encoded.len(), 96);
        assert_eq!(encoded[..32].to_vec(), padded(5));
        assert_eq!(encoded[32..44].to_vec(), vec![0u8; 12]);
        assert_eq!(encoded[44..64].to_vec(), vec![0xab; 20]);
        assert_eq!(encoded[64..].to_vec(), padded(7));
    }

    #[test]
    fn dynamic_array_uses_offset() {
        //abi.encode(uint256[]([1, 2]))
        let encoded = vec!(Word::from(1u64), Word::from(2u64)).abi_encode();
        let expected = [padded(0x20), padded(2), padded(1), padded(2)].concat();
        assert_eq!(encoded, expected);
    }

    #[test]
    fn mixed_head_and_tail() {
        //abi.encode(uint256 9, uint256[] [3], uint256[] [])
        let encoded = (Word::from(9u64), vec!(Word::from(3u64)), Vec::<Word>::new()).abi_encode_params();
        let expected = [
            padded(9), padded(0x60), padded(0xa0),
            padded(1), padded(3),
            padded(0)
        ].concat();
        assert_eq!(encoded, expected);
    }

    #[test]
    fn nested_arrays() {
        //abi.encode(uint256[][] [[1], [2, 3]])
        let encoded = vec!(
            vec!(Word::from(1u64)),
            vec!(Word::from(2u64), Word::from(3u64))
        ).abi_encode();
        let expected = [
            padded(0x20),
            padded(2), padded(0x40), padded(0x80),
            padded(1), padded(1),
            padded(2), padded(2), padded(3)
        ].concat();
        assert_eq!(encoded, expected);
    }

    #[test]
    fn dynamic_tuple_is_behind_offset() {
        //abi.encode((uint256[] [4], uint256 5))
        let encoded = (vec!(Word::from(4u64)), Word::from(5u64)).abi_encode();
        let expected = [
            padded(0x20),
            padded(0x40), padded(5),
            padded(1), padded(4)
        ].concat();
        assert_eq!(encoded, expected);
    }

    #[test]
    fn curve_values_are_big_endian_words() {
        let s = random_scalar();
        assert_eq!(scalar_word(&s).to_be_bytes::<32>().to_vec(), s.to_bytes().to_vec());

        let (x, y) = point_words(&G_POINT).unwrap();
        let (g_x, g_y) = coordinates(&G_POINT).unwrap();
        assert_eq!(x.to_be_bytes::<32>().to_vec(), g_x.to_vec());
        assert_eq!(y.to_be_bytes::<32>().to_vec(), g_y.to_vec());

        let (xs, ys) = point_columns([G_POINT, -G_POINT].iter()).unwrap();
        assert_eq!(xs, vec!(x, x));
        assert_ne!(ys[0], ys[1]);

        assert!(point_columns([ProjectivePoint::IDENTITY].iter()).is_err());
    }
}
