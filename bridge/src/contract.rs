//! NFT Bridge Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::address_codec::validate_prefix;
use crate::allocator::{IdAllocator, ALLOCATOR};
use crate::asset::{Collection, COLLECTION};
use crate::error::ContractError;
use crate::execute::{
    execute_mint, execute_receive_message, execute_send, execute_set_trusted_remote,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_allocator, query_collection, query_config, query_encode_payload, query_mint_events,
    query_quote_fee, query_receive_events, query_receiver_bytes, query_send_events, query_token,
    query_tokens, query_trusted_remote,
};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    // Validate addresses
    let admin = deps.api.addr_validate(&msg.admin)?;
    let endpoint = deps.api.addr_validate(&msg.endpoint)?;
    validate_prefix(&msg.address_prefix)?;

    if msg.fee_denom.is_empty() {
        return Err(ContractError::InvalidFeeDenom {
            denom: msg.fee_denom,
        });
    }

    // Token id window
    let allocator = IdAllocator::new(msg.start_id, msg.end_id)?;
    ALLOCATOR.save(deps.storage, &allocator)?;

    // Store config; the contract itself holds assets in flight
    let config = Config {
        admin,
        endpoint,
        custody: env.contract.address,
        fee_denom: msg.fee_denom,
        address_prefix: msg.address_prefix,
    };
    CONFIG.save(deps.storage, &config)?;

    // Create the bridge collection
    let collection = Collection::fixed(
        msg.collection.name,
        msg.collection.description,
        msg.collection.uri,
        config.admin.clone(),
    );
    COLLECTION.save(deps.storage, &collection)?;

    Ok(Response::new()
        .add_message(config.endpoint().register_msg()?)
        .add_attribute("method", "instantiate")
        .add_attribute("admin", config.admin)
        .add_attribute("endpoint", config.endpoint)
        .add_attribute("collection", collection.name)
        .add_attribute("start_id", msg.start_id.to_string())
        .add_attribute("end_id", msg.end_id.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Mint {
            collection_name,
            nft_name,
        } => execute_mint(deps, env, info, collection_name, nft_name),

        // Bridging
        ExecuteMsg::Send {
            dst_chain_id,
            dst_receiver,
            fee,
            token_id,
            adapter_params,
        } => execute_send(
            deps,
            env,
            info,
            dst_chain_id,
            dst_receiver,
            fee,
            token_id,
            adapter_params,
        ),
        ExecuteMsg::ReceiveMessage(msg) => execute_receive_message(deps, env, info, msg),

        // Admin operations
        ExecuteMsg::SetTrustedRemote {
            chain_id,
            remote_address,
        } => execute_set_trusted_remote(deps, info, chain_id, remote_address),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        // Core queries
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Allocator {} => to_json_binary(&query_allocator(deps)?),
        QueryMsg::Collection {} => to_json_binary(&query_collection(deps)?),

        // Token queries
        QueryMsg::Token { token_id } => to_json_binary(&query_token(deps, token_id)?),
        QueryMsg::Tokens { start_after, limit } => {
            to_json_binary(&query_tokens(deps, start_after, limit)?)
        }

        // Remote & fee queries
        QueryMsg::TrustedRemote { chain_id } => {
            to_json_binary(&query_trusted_remote(deps, chain_id)?)
        }
        QueryMsg::QuoteFee {
            dst_chain_id,
            pay_in_alt_fee,
            adapter_params,
            msg_lib_params,
        } => to_json_binary(&query_quote_fee(
            deps,
            env,
            dst_chain_id,
            pay_in_alt_fee,
            adapter_params,
            msg_lib_params,
        )?),

        // Event log queries
        QueryMsg::MintEvents { start_after, limit } => {
            to_json_binary(&query_mint_events(deps, start_after, limit)?)
        }
        QueryMsg::SendEvents { start_after, limit } => {
            to_json_binary(&query_send_events(deps, start_after, limit)?)
        }
        QueryMsg::ReceiveEvents { start_after, limit } => {
            to_json_binary(&query_receive_events(deps, start_after, limit)?)
        }

        // Encoding helpers
        QueryMsg::EncodePayload { receiver, token_id } => {
            to_json_binary(&query_encode_payload(receiver, token_id)?)
        }
        QueryMsg::ReceiverBytes { address } => to_json_binary(&query_receiver_bytes(address)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
