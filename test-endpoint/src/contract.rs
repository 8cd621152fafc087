use common::{EndpointReceiveMsg, FeeEstimateResponse};
use cosmwasm_std::{
    coins, entry_point, to_json_binary, BankMsg, Binary, Deps, DepsMut, Env, MessageInfo, Order,
    Response, StdResult, Uint128,
};
use cw2::set_contract_version;
use cw_storage_plus::Bound;

use crate::error::ContractError;
use crate::msg::{
    ExecuteMsg, InstantiateMsg, IsRegisteredResponse, OutboundMessageEntry,
    OutboundMessagesResponse, QueryMsg,
};
use crate::state::{
    Config, OutboundMessage, APPS, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, INBOUND_NONCE,
    OUTBOUND, OUTBOUND_NONCE, OUTBOUND_SEQ,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = deps.api.addr_validate(&msg.admin)?;
    let config = Config {
        admin,
        fee_denom: msg.fee_denom,
        base_fee: msg.base_fee,
        fee_per_byte: msg.fee_per_byte,
        alt_fee: msg.alt_fee,
        fail_sends: false,
    };
    CONFIG.save(deps.storage, &config)?;
    OUTBOUND_SEQ.save(deps.storage, &0)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", config.admin)
        .add_attribute("fee_denom", config.fee_denom))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::RegisterApp {} => execute_register_app(deps, info),
        ExecuteMsg::Send {
            dst_chain_id,
            destination,
            payload,
            refund_address,
            adapter_params: _,
        } => execute_send(
            deps,
            env,
            info,
            dst_chain_id,
            destination,
            payload,
            refund_address,
        ),
        ExecuteMsg::Deliver {
            app,
            src_chain_id,
            src_address,
            payload,
        } => execute_deliver(deps, info, app, src_chain_id, src_address, payload),
        ExecuteMsg::SetFailSends { fail } => execute_set_fail_sends(deps, info, fail),
    }
}

fn execute_register_app(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    APPS.save(deps.storage, &info.sender, &true)?;

    Ok(Response::new()
        .add_attribute("action", "register_app")
        .add_attribute("app", info.sender))
}

fn execute_send(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    dst_chain_id: u64,
    destination: Binary,
    payload: Binary,
    refund_address: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if config.fail_sends {
        return Err(ContractError::SendsDisabled);
    }
    if !APPS.has(deps.storage, &info.sender) {
        return Err(ContractError::AppNotRegistered {
            app: info.sender.to_string(),
        });
    }
    let refund_address = deps.api.addr_validate(&refund_address)?;

    let fee = config.native_fee(payload.len() as u64);
    let paid: Uint128 = info
        .funds
        .iter()
        .filter(|c| c.denom == config.fee_denom)
        .map(|c| c.amount)
        .sum();
    if paid < fee {
        return Err(ContractError::InsufficientFee {
            expected: fee,
            got: paid,
            denom: config.fee_denom,
        });
    }

    let nonce = OUTBOUND_NONCE
        .may_load(deps.storage, (&info.sender, dst_chain_id))?
        .unwrap_or(0)
        + 1;
    OUTBOUND_NONCE.save(deps.storage, (&info.sender, dst_chain_id), &nonce)?;

    let index = OUTBOUND_SEQ.load(deps.storage)?;
    OUTBOUND.save(
        deps.storage,
        index,
        &OutboundMessage {
            app: info.sender.clone(),
            dst_chain_id,
            destination,
            payload,
            nonce,
            fee,
        },
    )?;
    OUTBOUND_SEQ.save(deps.storage, &(index + 1))?;

    let mut response = Response::new()
        .add_attribute("action", "send")
        .add_attribute("app", info.sender)
        .add_attribute("dst_chain_id", dst_chain_id.to_string())
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("fee", fee);

    let surplus = paid - fee;
    if !surplus.is_zero() {
        response = response
            .add_message(BankMsg::Send {
                to_address: refund_address.to_string(),
                amount: coins(surplus.u128(), &config.fee_denom),
            })
            .add_attribute("refund", surplus);
    }

    Ok(response)
}

fn execute_deliver(
    deps: DepsMut,
    info: MessageInfo,
    app: String,
    src_chain_id: u64,
    src_address: Binary,
    payload: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    let app = deps.api.addr_validate(&app)?;
    if !APPS.has(deps.storage, &app) {
        return Err(ContractError::AppNotRegistered {
            app: app.to_string(),
        });
    }

    let nonce = INBOUND_NONCE
        .may_load(deps.storage, (&app, src_chain_id))?
        .unwrap_or(0)
        + 1;
    INBOUND_NONCE.save(deps.storage, (&app, src_chain_id), &nonce)?;

    let deliver_msg = EndpointReceiveMsg {
        src_chain_id,
        src_address,
        nonce,
        payload,
    }
    .into_cosmos_msg(app.as_str())?;

    Ok(Response::new()
        .add_message(deliver_msg)
        .add_attribute("action", "deliver")
        .add_attribute("app", app)
        .add_attribute("src_chain_id", src_chain_id.to_string())
        .add_attribute("nonce", nonce.to_string()))
}

fn execute_set_fail_sends(
    deps: DepsMut,
    info: MessageInfo,
    fail: bool,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    config.fail_sends = fail;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_fail_sends")
        .add_attribute("fail", fail.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::EstimateFees {
            payload_size,
            pay_in_alt_fee,
            ..
        } => to_json_binary(&query_estimate_fees(deps, payload_size, pay_in_alt_fee)?),
        QueryMsg::OutboundMessages { start_after, limit } => {
            to_json_binary(&query_outbound_messages(deps, start_after, limit)?)
        }
        QueryMsg::IsRegistered { app } => to_json_binary(&query_is_registered(deps, app)?),
    }
}

fn query_estimate_fees(
    deps: Deps,
    payload_size: u64,
    pay_in_alt_fee: bool,
) -> StdResult<FeeEstimateResponse> {
    let config = CONFIG.load(deps.storage)?;
    let alt_fee = if pay_in_alt_fee {
        config.alt_fee
    } else {
        Uint128::zero()
    };
    Ok(FeeEstimateResponse {
        native_fee: config.native_fee(payload_size),
        alt_fee,
    })
}

fn query_outbound_messages(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<OutboundMessagesResponse> {
    let limit = limit.unwrap_or(10).min(50) as usize;
    let start = start_after.map(Bound::exclusive);

    let messages = OUTBOUND
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (index, message) = item?;
            Ok(OutboundMessageEntry { index, message })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(OutboundMessagesResponse { messages })
}

fn query_is_registered(deps: Deps, app: String) -> StdResult<IsRegisteredResponse> {
    let app = deps.api.addr_validate(&app)?;
    Ok(IsRegisteredResponse {
        registered: APPS.has(deps.storage, &app),
    })
}
