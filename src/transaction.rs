/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Deposits, transfers and withdrawals of confidential values
//!
//!A deposit turns a plaintext amount into a commitment,
//!a transfer splits and merges commitments without revealing amounts,
//!and a withdrawal opens a commitment again.

use log::{debug, error};

use crate::internal_common::*;
use crate::amount::Amount;
use crate::rangeproof::RangeProof;

///Create a new confidential output for a plaintext `amount`.
///
///The amount is public in the deposit itself; only the commitment is carried forward.
pub fn deposit(amount: Amount) -> Utxo {
    return Utxo::from_opening(Opening::new(random_scalar(), amount))
}

///What the verifier needs to release a withdrawn output:
///the commitment and its full opening.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Withdrawal {
    pub commitment: Commitment,
    pub blinding: Scalar,
    pub amount: Amount

} impl Withdrawal {
    ///Check that the revealed opening matches the commitment.
    pub fn is_valid(&self) -> bool {
        return Commitment::commit(self.amount, self.blinding) == self.commitment
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for Withdrawal {}

///Spend `utxo` by revealing its opening.
pub fn withdraw(utxo: Utxo) -> Withdrawal {
    return Withdrawal {
        commitment: utxo.commitment,
        blinding: utxo.opening.blinding,
        amount: utxo.opening.amount
    }
}

///A balanced transfer.
/// * `inputs`: commitments of the spent outputs
/// * `outputs`: the new outputs, one per receiver, in receiver order
/// * `range_proofs`: one per output when there is more than one receiver, otherwise empty
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transfer {
    pub inputs: Vec<Commitment>,
    pub outputs: Vec<Utxo>,
    pub range_proofs: Vec<RangeProof>

} impl Transfer {
    ///Output commitments, in receiver order.
    pub fn output_commitments(&self) -> Vec<Commitment> {
        return self.outputs.iter().map(|utxo| utxo.commitment).collect()
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for Transfer {}

///Blinding factors for the outputs of a transfer, summing to `target`:
///random for every output but the last, which closes the sum.
pub(crate) fn output_blindings(target: &Scalar, count: usize) -> Vec<Scalar> {
    if count == 0 {
        return Vec::new()
    }
    let mut blindings: Vec<Scalar> = (1..count).map(|_| random_scalar()).collect();
    let last = closing_blinding_factor(target, &blindings);
    blindings.push(last);
    return blindings
}

///Spend `inputs` into new outputs with the given `amounts`.
///
///The output blinding factors sum to the input blinding factors,
///so `sum(inputs) == sum(outputs)` holds on the curve without revealing any amount.
///When splitting into more than one output, every output gets a range proof.
pub fn transfer(inputs: Vec<Utxo>, amounts: &[Amount]) -> Result<Transfer, TransferError> {
    if inputs.is_empty() {
        return Err(TransferError::NoInputs)
    }
    if amounts.is_empty() {
        return Err(TransferError::NoReceivers)
    }

    //value conservation is checked before anything is created
    let amount_in = Amount::checked_sum(inputs.iter().map(|utxo| &utxo.opening.amount))
        .ok_or(TransferError::AmountOverflow)?;
    let amount_out = Amount::checked_sum(amounts)
        .ok_or(TransferError::AmountOverflow)?;
    if amount_in != amount_out {
        return Err(TransferError::InvariantViolation(
            format!("inputs hold {amount_in} but outputs hold {amount_out}")))
    }

    let blinding_in: Scalar = inputs.iter().map(|utxo| utxo.opening.blinding).sum();
    let blindings = output_blindings(&blinding_in, amounts.len());

    let outputs: Vec<Utxo> = blindings.iter().zip(amounts)
        .map(|(blinding, amount)| Utxo::from_opening(Opening::new(*blinding, *amount)))
        .collect();

    let mut range_proofs: Vec<RangeProof> = Vec::new();
    if outputs.len() > 1 {
        for output in &outputs {
            range_proofs.push(RangeProof::prove(&output.commitment, &output.opening)?);
        }
    }

    let blinding_out: Scalar = outputs.iter().map(|utxo| utxo.opening.blinding).sum();
    if blinding_in != blinding_out {
        error!("output blinding factors do not sum to the input blinding factors");
        return Err(TransferError::InvariantViolation(
            "output blinding factors do not sum to the input blinding factors".to_string()))
    }

    let transfer = Transfer {
        inputs: inputs.iter().map(|utxo| utxo.commitment).collect(),
        outputs,
        range_proofs
    };
    if !Commitment::is_balanced(&transfer.inputs, &transfer.output_commitments()) {
        error!("output commitments do not sum to the input commitments");
        return Err(TransferError::InvariantViolation(
            "output commitments do not sum to the input commitments".to_string()))
    }

    debug!("transfer of {} inputs into {} outputs with {} range proofs",
        transfer.inputs.len(), transfer.outputs.len(), transfer.range_proofs.len());
    return Ok(transfer)
}
