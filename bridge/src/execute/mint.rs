//! Token minting.
//!
//! Shared by the `Mint` entry point and the receive-side fallback:
//! non-existent -> allocated, held by the target.

use cosmwasm_std::{to_json_binary, Addr, DepsMut, Env, MessageInfo, Response, Storage, Timestamp};

use crate::allocator::allocate_id;
use crate::asset::{AssetHandle, AssetMetadata, AssetRegistry, StoredAssets, COLLECTION};
use crate::error::ContractError;
use crate::events::MintEvent;
use crate::ledger;
use crate::msg::MintResponse;
use crate::state::load_config;

/// Result of a successful mint
#[derive(Debug, Clone, PartialEq)]
pub struct MintOutcome {
    pub token_id: u32,
    pub handle: AssetHandle,
    pub uri: String,
    pub event: MintEvent,
}

/// Mint a new token into the bridge collection and hand it to `target`.
///
/// The asset is created in custody, moved to `target`, then registered in
/// the ledger. The mint event is appended to the log.
pub fn mint_token<R: AssetRegistry>(
    storage: &mut dyn Storage,
    registry: &mut R,
    custody: &Addr,
    target: &Addr,
    collection_name: &str,
    nft_name: &str,
    now: Timestamp,
) -> Result<MintOutcome, ContractError> {
    let collection = COLLECTION
        .may_load(storage)?
        .ok_or(ContractError::NotInitialized)?;
    if collection.name != collection_name {
        return Err(ContractError::CollectionNotFound {
            name: collection_name.to_string(),
        });
    }

    let token_id = allocate_id(storage)?;
    let uri = format!("{}/{}", collection.uri.trim_end_matches('/'), token_id);

    let handle = registry.create(
        storage,
        AssetMetadata {
            name: format!("{} #{}", nft_name, token_id),
            uri: uri.clone(),
            token_id,
        },
        custody,
        now,
    )?;
    registry.transfer(storage, handle, custody, target)?;
    ledger::register(storage, token_id, handle)?;

    let event = MintEvent {
        owner: target.clone(),
        token_id,
        uri: uri.clone(),
        creation_num: handle.creation_num,
        timestamp: now,
    };
    event.append(storage)?;

    Ok(MintOutcome {
        token_id,
        handle,
        uri,
        event,
    })
}

/// Execute handler for minting a token to the caller
pub fn execute_mint(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    collection_name: String,
    nft_name: String,
) -> Result<Response, ContractError> {
    let config = load_config(deps.storage)?;

    let outcome = mint_token(
        deps.storage,
        &mut StoredAssets,
        &config.custody,
        &info.sender,
        &collection_name,
        &nft_name,
        env.block.time,
    )?;

    let data = MintResponse {
        token_id: outcome.token_id,
        creation_num: outcome.handle.creation_num,
        uri: outcome.uri.clone(),
    };

    Ok(Response::new()
        .add_event(outcome.event.to_event())
        .set_data(to_json_binary(&data)?)
        .add_attribute("method", "mint")
        .add_attribute("owner", info.sender)
        .add_attribute("token_id", outcome.token_id.to_string())
        .add_attribute("creation_num", outcome.handle.creation_num.to_string())
        .add_attribute("uri", outcome.uri))
}
