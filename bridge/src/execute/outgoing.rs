//! Outgoing transfer handler.
//!
//! Moves a token from its holder into custody and hands the transfer payload
//! to the messaging endpoint: held by sender -> in custody.

use cosmwasm_std::{coin, BankMsg, Binary, Coin, DepsMut, Env, MessageInfo, Response, Uint128};

use crate::asset::{AssetRegistry, StoredAssets};
use crate::error::ContractError;
use crate::events::SendEvent;
use crate::ledger;
use crate::payload::{receiver_from_slice, TransferPayload};
use crate::state::{load_config, TRUSTED_REMOTES};

/// Execute handler for sending a token to another chain
#[allow(clippy::too_many_arguments)]
pub fn execute_send(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    dst_chain_id: u64,
    dst_receiver: Binary,
    fee: Uint128,
    token_id: u32,
    adapter_params: Binary,
) -> Result<Response, ContractError> {
    let config = load_config(deps.storage)?;
    let mut registry = StoredAssets;

    // Check the sender holds the token
    let handle = ledger::lookup(deps.storage, token_id)?
        .ok_or(ContractError::TokenNotFound { token_id })?;
    let holder = registry.holder(deps.storage, handle)?;
    if holder != info.sender {
        return Err(ContractError::OwnershipMismatch {
            creation_num: handle.creation_num,
            claimed: info.sender.to_string(),
        });
    }

    // Validate attached fee
    let refund = split_fee(&info.funds, &config.fee_denom, fee)?;

    // Check destination
    let dst_address = TRUSTED_REMOTES
        .may_load(deps.storage, dst_chain_id)?
        .ok_or(ContractError::NoRemoteConfigured {
            chain_id: dst_chain_id,
        })?;
    let receiver = receiver_from_slice(&dst_receiver)?;
    let payload = TransferPayload::new(receiver, token_id).encode();

    // Take custody
    ledger::transfer_holder(
        deps.storage,
        &mut registry,
        handle,
        &info.sender,
        &config.custody,
    )?;

    let event = SendEvent {
        sender: info.sender.clone(),
        dst_chain_id,
        dst_address: dst_address.clone(),
        receiver: Binary::from(receiver.to_vec()),
        token_id,
        timestamp: env.block.time,
    };
    event.append(deps.storage)?;

    let send_msg = config.endpoint().send_msg(
        dst_chain_id,
        dst_address,
        Binary::from(payload.to_vec()),
        &info.sender,
        adapter_params,
        coin(fee.u128(), &config.fee_denom),
    )?;

    let mut response = Response::new()
        .add_message(send_msg)
        .add_event(event.to_event())
        .add_attribute("method", "send")
        .add_attribute("sender", info.sender.as_str())
        .add_attribute("dst_chain_id", dst_chain_id.to_string())
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("fee", fee.to_string());

    if !refund.is_empty() {
        response = response.add_message(BankMsg::Send {
            to_address: info.sender.to_string(),
            amount: refund,
        });
    }

    Ok(response)
}

/// Split attached funds into the endpoint fee and the surplus to refund.
///
/// Fails if less than `fee` of `denom` is attached. Coins of other denoms
/// are returned untouched.
fn split_fee(funds: &[Coin], denom: &str, fee: Uint128) -> Result<Vec<Coin>, ContractError> {
    let paid: Uint128 = funds
        .iter()
        .filter(|c| c.denom == denom)
        .map(|c| c.amount)
        .sum();

    if paid < fee {
        return Err(ContractError::InsufficientFee {
            expected: fee,
            got: paid,
            denom: denom.to_string(),
        });
    }

    let mut refund: Vec<Coin> = funds
        .iter()
        .filter(|c| c.denom != denom && !c.amount.is_zero())
        .cloned()
        .collect();
    let surplus = paid - fee;
    if !surplus.is_zero() {
        refund.push(coin(surplus.u128(), denom));
    }
    Ok(refund)
}
