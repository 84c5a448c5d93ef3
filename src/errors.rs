/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    error::Error,
    fmt::Display
};

///Encoding/serialization errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerializationError {
    ///Failure to serialize.
    ///This includes trying to encode the identity point, which has no affine coordinates.
    EncodingError,
    ///Failure to deserialize.
    DecodingError,

} impl Display for SerializationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self{
            Self::EncodingError => "Encoding error.",
            Self::DecodingError => "Decoding error."
        })
    }

} impl Error for SerializationError {}

///Second generator derivation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    ///The current x coordinate does not lead to a point of order `n`.
    ///The search recovers from this by trying the next x coordinate.
    InvalidGeneratorCandidate,
    ///The base point can not be encoded (it is the identity).
    InvalidBasePoint,

} impl Display for GeneratorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self{
            Self::InvalidGeneratorCandidate => "No generator of order n at this x coordinate.",
            Self::InvalidBasePoint => "The base point is not a valid generator."
        })
    }

} impl Error for GeneratorError {}

///Amount parsing errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    ///The amount is not a (decimal or scientific notation) number.
    Malformed,
    ///The amount is not a whole number of base units.
    Fractional,
    ///The amount does not fit into 128 bits.
    Overflow,

} impl Display for AmountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self{
            Self::Malformed => "Malformed amount.",
            Self::Fractional => "Amount is not a whole number of base units.",
            Self::Overflow => "Amount is too large."
        })
    }

} impl Error for AmountError {}

///Rangeproof errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeProofError {
    ///The normalized mantissa does not fit into `BIT_RANGE` bits.
    RangeOverflow,
    ///An internal consistency check failed.
    ///This means the implementation is broken, never that the input was bad.
    InvariantViolation(String),
    ///A modular inverse was requested for a value congruent to zero.
    ModularInverseUndefined,
    ///The rangeproof is invalid.
    Invalid,
    ///The given rangeproof is malformed in some way,
    ///or the parameters are incorrect/inconsistent.
    Malformed,

} impl Display for RangeProofError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self{
            Self::RangeOverflow => write!(f, "Mantissa is out of range."),
            Self::InvariantViolation(msg) => write!(f, "Invariant violated: {msg}"),
            Self::ModularInverseUndefined => write!(f, "Modular inverse of zero."),
            Self::Invalid => write!(f, "This rangeproof is invalid."),
            Self::Malformed => write!(f, "Malformed proof or parameters."),
        }
    }

} impl Error for RangeProofError {}

impl From<SerializationError> for RangeProofError {
    fn from(_: SerializationError) -> Self {
        return Self::Malformed
    }
}

///Transfer errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    ///A transfer needs at least one input.
    NoInputs,
    ///A transfer needs at least one receiver.
    NoReceivers,
    ///Input or output amounts overflow when summed.
    AmountOverflow,
    ///Inputs and outputs are not balanced, or a post-condition failed.
    InvariantViolation(String),
    ///Range proof construction failed for one of the outputs.
    RangeProof(RangeProofError),

} impl Display for TransferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self{
            Self::NoInputs => write!(f, "No inputs to spend."),
            Self::NoReceivers => write!(f, "No receivers."),
            Self::AmountOverflow => write!(f, "Amount sum overflows."),
            Self::InvariantViolation(msg) => write!(f, "Invariant violated: {msg}"),
            Self::RangeProof(err) => write!(f, "Range proof failed: {err}"),
        }
    }

} impl Error for TransferError {}

impl From<RangeProofError> for TransferError {
    fn from(err: RangeProofError) -> Self {
        return Self::RangeProof(err)
    }
}
