// SPDX short identifier: Unlicense

use confidential_values::{
    common::*,
    transaction::{deposit, transfer, withdraw}
};

fn main() {
    //Deposit 1.42 units of an 18-decimals token.
    //The deposited amount is public, the resulting commitment hides it from now on.
    let amount: Amount = "1.42e18".parse()
        .expect("Real software should have proper error handling.");
    let utxo = deposit(amount);
    let (c_x, c_y) = utxo.commitment.coordinates()
        .expect("Real software should have proper error handling.");
    println!("deposit: C = ({}, {}), amount = {}", hex::encode(c_x), hex::encode(c_y), amount);

    //Split it between two receivers.
    //Every output gets a range proof, so nobody can hide a negative amount in one of them.
    let amounts: [Amount; 2] = ["1e18".parse().unwrap(), "0.42e18".parse().unwrap()];
    let result = transfer(vec!(utxo), &amounts)
        .expect("Real software should have proper error handling.");

    //Anyone can check that no value was created or destroyed...
    assert!(Commitment::is_balanced(&result.inputs, &result.output_commitments()));
    //...and that every output is in range.
    for (output, proof) in result.outputs.iter().zip(&result.range_proofs) {
        proof.verify(&output.commitment)
            .expect("Real software should have proper error handling.");
        let encoded = proof.abi_encode()
            .expect("Real software should have proper error handling.");
        println!("range proof: 0x{}", hex::encode(encoded));
    }

    //The first receiver withdraws their output, revealing its opening.
    let withdrawal = withdraw(result.outputs[0].clone());
    assert!(withdrawal.is_valid());
    println!("withdraw: amount = {}", withdrawal.amount);
}
