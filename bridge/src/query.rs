//! Query handlers for the NFT Bridge contract.
//!
//! This module contains all query message handlers for retrieving contract state.

use cosmwasm_std::{Binary, Deps, Env, Order, StdError, StdResult};
use cw_storage_plus::{Bound, Map};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::address_codec::local_address_to_receiver;
use crate::allocator::ALLOCATOR;
use crate::asset::{AssetHandle, Collection, StoredAssets, COLLECTION};
use crate::events::{MINT_EVENTS, RECV_EVENTS, SEND_EVENTS};
use crate::ledger::LEDGER;
use crate::msg::{
    AllocatorResponse, ConfigResponse, MintEventEntry, MintEventsResponse, PayloadResponse,
    QuoteFeeResponse, ReceiverBytesResponse, RecvEventEntry, RecvEventsResponse, SendEventEntry,
    SendEventsResponse, TokenResponse, TokensResponse, TrustedRemoteResponse,
};
use crate::payload::{encode_payload, receiver_from_slice};
use crate::state::{CONFIG, TRUSTED_REMOTES};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 50;

// ============================================================================
// Core Queries
// ============================================================================

/// Query contract configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin,
        endpoint: config.endpoint,
        custody: config.custody,
        fee_denom: config.fee_denom,
        address_prefix: config.address_prefix,
    })
}

/// Query the token id allocation window.
pub fn query_allocator(deps: Deps) -> StdResult<AllocatorResponse> {
    let allocator = ALLOCATOR.load(deps.storage)?;
    Ok(AllocatorResponse {
        next_id: allocator.next_id,
        end_id: allocator.end_id,
        remaining: allocator.remaining(),
    })
}

pub fn query_collection(deps: Deps) -> StdResult<Collection> {
    COLLECTION.load(deps.storage)
}

// ============================================================================
// Token Queries
// ============================================================================

fn token_response(deps: Deps, token_id: u32, handle: AssetHandle) -> StdResult<TokenResponse> {
    let custody = CONFIG.load(deps.storage)?.custody;
    let record = StoredAssets::record(deps.storage, handle)
        .map_err(|e| StdError::generic_err(e.to_string()))?;
    Ok(TokenResponse {
        token_id,
        creation_num: handle.creation_num,
        name: record.name,
        uri: record.uri,
        in_custody: record.holder == custody,
        holder: record.holder,
        created_at: record.created_at,
    })
}

/// Query a single bridged token.
pub fn query_token(deps: Deps, token_id: u32) -> StdResult<TokenResponse> {
    let handle = LEDGER
        .may_load(deps.storage, token_id)?
        .ok_or_else(|| StdError::not_found(format!("token {}", token_id)))?;
    token_response(deps, token_id, handle)
}

/// Query paginated list of tokens, ordered by token id.
pub fn query_tokens(
    deps: Deps,
    start_after: Option<u32>,
    limit: Option<u32>,
) -> StdResult<TokensResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let tokens = LEDGER
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (token_id, handle) = item?;
            token_response(deps, token_id, handle)
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(TokensResponse { tokens })
}

// ============================================================================
// Remote & Fee Queries
// ============================================================================

pub fn query_trusted_remote(deps: Deps, chain_id: u64) -> StdResult<TrustedRemoteResponse> {
    Ok(TrustedRemoteResponse {
        chain_id,
        remote_address: TRUSTED_REMOTES.may_load(deps.storage, chain_id)?,
    })
}

/// Ask the messaging endpoint what a single token transfer costs.
pub fn query_quote_fee(
    deps: Deps,
    env: Env,
    dst_chain_id: u64,
    pay_in_alt_fee: bool,
    adapter_params: Binary,
    msg_lib_params: Binary,
) -> StdResult<QuoteFeeResponse> {
    let config = CONFIG.load(deps.storage)?;
    let estimate = config.endpoint().estimate_fees(
        &deps.querier,
        &env.contract.address,
        dst_chain_id,
        pay_in_alt_fee,
        adapter_params,
        msg_lib_params,
    )?;
    Ok(QuoteFeeResponse {
        native_fee: estimate.native_fee,
        alt_fee: estimate.alt_fee,
    })
}

// ============================================================================
// Event Log Queries
// ============================================================================

fn page<T>(
    deps: Deps,
    log: &Map<u64, T>,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Vec<(u64, T)>>
where
    T: Serialize + DeserializeOwned,
{
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);
    log.range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .collect()
}

pub fn query_mint_events(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<MintEventsResponse> {
    let events = page(deps, &MINT_EVENTS, start_after, limit)?
        .into_iter()
        .map(|(index, event)| MintEventEntry { index, event })
        .collect();
    Ok(MintEventsResponse { events })
}

pub fn query_send_events(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<SendEventsResponse> {
    let events = page(deps, &SEND_EVENTS, start_after, limit)?
        .into_iter()
        .map(|(index, event)| SendEventEntry { index, event })
        .collect();
    Ok(SendEventsResponse { events })
}

pub fn query_receive_events(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<RecvEventsResponse> {
    let events = page(deps, &RECV_EVENTS, start_after, limit)?
        .into_iter()
        .map(|(index, event)| RecvEventEntry { index, event })
        .collect();
    Ok(RecvEventsResponse { events })
}

// ============================================================================
// Encoding Helpers
// ============================================================================

/// Build the wire payload for a receiver and token id.
pub fn query_encode_payload(receiver: Binary, token_id: u32) -> StdResult<PayloadResponse> {
    let receiver =
        receiver_from_slice(&receiver).map_err(|e| StdError::generic_err(e.to_string()))?;
    Ok(PayloadResponse {
        payload: Binary::from(encode_payload(&receiver, token_id).to_vec()),
    })
}

/// Convert a local bech32 address into the 32-byte receiver used on the wire.
pub fn query_receiver_bytes(address: String) -> StdResult<ReceiverBytesResponse> {
    let receiver = local_address_to_receiver(&address)?;
    Ok(ReceiverBytesResponse {
        receiver: Binary::from(receiver.to_vec()),
    })
}
