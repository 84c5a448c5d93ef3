/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Plaintext amounts

use std::{
    fmt::Display,
    str::FromStr
};

use zeroize::Zeroize;

use crate::tobytes::*;
use crate::curve::*;
use crate::errors::AmountError;

///Largest exponent `e` for which `10^e` fits in a `u128`.
pub const MAX_EXPONENT: u32 = 38;

///An amount in base units (for example wei).
///
///Amounts are always whole numbers of base units.
///Fixed-point values such as `1.42e18` are written as
///an integer mantissa and a non-negative decimal exponent, see `normalize`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Zeroize)]
pub struct Amount(pub u128);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    ///Split into `(mantissa, exponent)` with `mantissa * 10^exponent == self`,
    ///moving every trailing zero digit into the exponent.
    ///
    ///Zero normalizes to `(0, 0)`.
    pub fn normalize(&self) -> (u128, u32) {
        let mut mantissa = self.0;
        let mut exponent = 0;
        if mantissa == 0 {
            return (0, 0)
        }
        while mantissa % 10 == 0 {
            mantissa /= 10;
            exponent += 1;
        }
        return (mantissa, exponent)
    }

    ///`mantissa * 10^exponent`, or `None` on overflow.
    pub fn from_parts(mantissa: u128, exponent: u32) -> Option<Self> {
        return 10u128.checked_pow(exponent)
            .and_then(|scale| mantissa.checked_mul(scale))
            .map(Amount)
    }

    ///The amount as a scalar, for use in commitments.
    pub fn to_scalar(&self) -> Scalar {
        return scalar_from_u128(self.0)
    }

    ///Sum amounts, or `None` on overflow.
    pub fn checked_sum<'a, I: IntoIterator<Item = &'a Amount>>(amounts: I) -> Option<Self> {
        return amounts.into_iter()
            .try_fold(0u128, |sum, amount| sum.checked_add(amount.0))
            .map(Amount)
    }

} impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        return Self(value)
    }

} impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        return Self(value as u128)
    }

} impl Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }

} impl FromStr for Amount {
    type Err = AmountError;

    ///Parse a plain integer (`1420000000000000000`),
    ///a decimal (`1.5`, only if it is whole),
    ///or scientific notation (`1.42e18`, `42E16`).
    ///
    ///Anything that isn't a whole number of base units is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (coefficient, exponent) = match s.find(|c: char| c == 'e' || c == 'E') {
            Some(at) => (&s[..at], parse_exponent(&s[at + 1..])?),
            None => (s, 0)
        };

        let (integer, fraction) = match coefficient.split_once('.') {
            Some((integer, fraction)) => (integer, fraction),
            None => (coefficient, "")
        };
        if integer.is_empty() && fraction.is_empty() {
            return Err(AmountError::Malformed)
        }
        if !integer.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(AmountError::Malformed)
        }

        let mut digits: Vec<u8> = integer.bytes().chain(fraction.bytes()).collect();
        let mut scale = exponent - fraction.len() as i64;
        //trailing zeros can absorb a negative scale: "10e-1" == 1
        while scale < 0 && digits.last() == Some(&b'0') {
            digits.pop();
            scale += 1;
        }
        if scale < 0 && digits.iter().any(|&d| d != b'0') {
            return Err(AmountError::Fractional)
        }

        let mut mantissa: u128 = 0;
        for digit in digits {
            mantissa = mantissa.checked_mul(10)
                .and_then(|m| m.checked_add((digit - b'0') as u128))
                .ok_or(AmountError::Overflow)?;
        }
        if mantissa == 0 {
            return Ok(Amount::ZERO)
        }
        if scale > MAX_EXPONENT as i64 {
            return Err(AmountError::Overflow)
        }
        return Amount::from_parts(mantissa, scale as u32).ok_or(AmountError::Overflow)
    }
}

fn parse_exponent(s: &str) -> Result<i64, AmountError> {
    let digits = s.strip_prefix('+').unwrap_or(s);
    let (negative, digits) = match digits.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, digits)
    };
    if digits.is_empty() || digits.len() > 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AmountError::Malformed)
    }
    let value: i64 = digits.parse().map_err(|_| AmountError::Malformed)?;
    return Ok(if negative { -value } else { value })
}

#[cfg(feature = "to_bytes")] impl ToBytes<'_> for Amount {}
