// SPDX short identifier: Unlicense

use confidential_values::{
    common::*,
    rangeproof::RangeProof
};

fn main() {
    //See the transaction example for how commitments are usually created

    //Amounts are proven as mantissa * 10^exponent, with the mantissa between 0 and 255.
    //42000 = 42 * 10^3
    let opening = Opening::new(random_scalar(), Amount(42_000));
    let commitment = opening.to_commitment();

    let proof = RangeProof::prove(&commitment, &opening)
        .expect("Real software should have proper error handling.");
    println!("exponent: {}", proof.exponent);

    //Verify the rangeproof
    proof.verify(&commitment)
        .expect("Real software should have proper error handling.");

    //257 doesn't fit into 8 bits and can't be proven
    let opening = Opening::new(random_scalar(), Amount(257));
    assert!(RangeProof::prove(&opening.to_commitment(), &opening).is_err());
}
