use common::FeeEstimateResponse;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Uint128};

use crate::state::OutboundMessage;

#[cw_serde]
pub struct InstantiateMsg {
    /// Admin who may deliver payloads and toggle failures
    pub admin: String,
    /// Denom the native fee is charged in
    pub fee_denom: String,
    pub base_fee: Uint128,
    pub fee_per_byte: Uint128,
    pub alt_fee: Uint128,
}

/// Superset of `common::EndpointExecuteMsg`
#[cw_serde]
pub enum ExecuteMsg {
    /// Register the caller as an application
    RegisterApp {},
    /// Charge the fee, refund the surplus and record the payload
    Send {
        dst_chain_id: u64,
        destination: Binary,
        payload: Binary,
        refund_address: String,
        adapter_params: Binary,
    },
    /// Admin: deliver a payload to a registered application
    Deliver {
        app: String,
        src_chain_id: u64,
        src_address: Binary,
        payload: Binary,
    },
    /// Admin: make every following `Send` fail (or stop doing so)
    SetFailSends { fail: bool },
}

/// Superset of `common::EndpointQueryMsg`
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(FeeEstimateResponse)]
    EstimateFees {
        app: String,
        dst_chain_id: u64,
        payload_size: u64,
        pay_in_alt_fee: bool,
        adapter_params: Binary,
        msg_lib_params: Binary,
    },
    /// Recorded outbound payloads, oldest first
    #[returns(OutboundMessagesResponse)]
    OutboundMessages {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    #[returns(IsRegisteredResponse)]
    IsRegistered { app: String },
}

#[cw_serde]
pub struct OutboundMessageEntry {
    pub index: u64,
    pub message: OutboundMessage,
}

#[cw_serde]
pub struct OutboundMessagesResponse {
    pub messages: Vec<OutboundMessageEntry>,
}

#[cw_serde]
pub struct IsRegisteredResponse {
    pub registered: bool,
}
