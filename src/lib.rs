/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Client-side engine for confidential transaction values on secp256k1.
//!
//! Amounts are hidden in Pedersen commitments `r * G + a * H`,
//! transfers keep `sum(inputs) == sum(outputs)` on the curve,
//! and Borromean ring signatures prove that hidden amounts are in range.

#[macro_use]
extern crate lazy_static;


//internal modules
mod types;
pub use types::*;
mod tobytes;
#[cfg(feature = "to_bytes")]
pub use tobytes::ToBytes;


//uncommon public modules
pub mod pedersen;
pub mod hashes;
pub mod abi;


//"normal" public modules
pub mod errors;
pub mod curve;
pub mod amount;

pub mod rangeproof;
pub mod transaction;
pub mod config;


pub mod common {
    //! A collection of commonly-used things in this crate.
    //! Errors, types, amounts, to/from bytes, and elliptic curve primitives/functions are all included.
    //!
    //! This is intended for situations where you don't want to bother with
    //! manually specifying everything you need.
    //!
    //! Use `common::*` if you wish to automatically import everything.

    pub use crate::{
        types::*, errors::*, tobytes::*, curve::*, amount::Amount
    };
}


mod internal_common {
    //! Similar to `common`, but for internal purposes only.
    //! This includes everything in `common`, as well as internal/less-common modules.

    pub use crate::{
        common::*, hashes::*, pedersen::*
    };
}
