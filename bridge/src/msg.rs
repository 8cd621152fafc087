//! Message types for the NFT Bridge contract
//!
//! This module defines all messages for instantiation, execution, and queries.

use common::EndpointReceiveMsg;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Timestamp, Uint128};

use crate::asset::Collection;
use crate::events::{MintEvent, RecvEvent, SendEvent};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Display data for the bridge's collection
#[cw_serde]
pub struct CollectionMsg {
    pub name: String,
    pub description: String,
    /// Base uri; token uris are `{uri}/{token_id}`
    pub uri: String,
}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Admin address for trusted-remote management
    pub admin: String,
    /// Messaging endpoint contract the bridge registers with
    pub endpoint: String,
    /// Denom the endpoint fee is paid in (e.g. "uluna")
    pub fee_denom: String,
    /// Bech32 prefix of this chain's accounts (e.g. "terra")
    pub address_prefix: String,
    /// First token id this bridge may allocate
    pub start_id: u32,
    /// Last token id this bridge may allocate (inclusive)
    pub end_id: u32,
    /// Collection created at instantiation
    pub collection: CollectionMsg,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    /// Mint a new token to the caller
    ///
    /// Authorization: Anyone
    Mint {
        /// Must be the bridge's collection
        collection_name: String,
        /// Display name; the token id is appended
        nft_name: String,
    },

    /// Send a token to another chain. The caller must hold it and attach
    /// at least `fee` of the fee denom; the token is held in custody until
    /// it comes back.
    ///
    /// Authorization: Token holder
    Send {
        /// Destination chain id
        dst_chain_id: u64,
        /// Receiver on the destination chain (32 bytes)
        dst_receiver: Binary,
        /// Fee forwarded to the messaging endpoint
        fee: Uint128,
        /// Token to send
        token_id: u32,
        /// Transport options forwarded to the endpoint
        #[serde(default)]
        adapter_params: Binary,
    },

    /// Inbound payload delivered by the messaging endpoint
    ///
    /// Authorization: Messaging endpoint only
    ReceiveMessage(EndpointReceiveMsg),

    /// Set the trusted remote bridge for a chain
    ///
    /// Authorization: Admin only
    SetTrustedRemote {
        chain_id: u64,
        remote_address: Binary,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Contract configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Token id allocation window
    #[returns(AllocatorResponse)]
    Allocator {},

    /// The bridge's collection
    #[returns(Collection)]
    Collection {},

    /// A bridged token and its current holder
    #[returns(TokenResponse)]
    Token { token_id: u32 },

    /// Paginated list of tokens
    #[returns(TokensResponse)]
    Tokens {
        start_after: Option<u32>,
        limit: Option<u32>,
    },

    /// Trusted remote for a chain
    #[returns(TrustedRemoteResponse)]
    TrustedRemote { chain_id: u64 },

    /// Endpoint fee for sending one token to `dst_chain_id`
    #[returns(QuoteFeeResponse)]
    QuoteFee {
        dst_chain_id: u64,
        pay_in_alt_fee: bool,
        adapter_params: Binary,
        msg_lib_params: Binary,
    },

    /// Mint audit log
    #[returns(MintEventsResponse)]
    MintEvents {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    /// Send audit log
    #[returns(SendEventsResponse)]
    SendEvents {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    /// Receive audit log
    #[returns(RecvEventsResponse)]
    ReceiveEvents {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    /// Wire payload for a (receiver, token id) pair
    #[returns(PayloadResponse)]
    EncodePayload { receiver: Binary, token_id: u32 },

    /// 32-byte receiver form of a local bech32 address
    #[returns(ReceiverBytesResponse)]
    ReceiverBytes { address: String },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub endpoint: Addr,
    pub custody: Addr,
    pub fee_denom: String,
    pub address_prefix: String,
}

#[cw_serde]
pub struct AllocatorResponse {
    pub next_id: u64,
    pub end_id: u32,
    pub remaining: u64,
}

#[cw_serde]
pub struct TokenResponse {
    pub token_id: u32,
    pub creation_num: u64,
    pub name: String,
    pub uri: String,
    pub holder: Addr,
    /// True while the token is held in custody (in flight)
    pub in_custody: bool,
    pub created_at: Timestamp,
}

#[cw_serde]
pub struct TokensResponse {
    pub tokens: Vec<TokenResponse>,
}

#[cw_serde]
pub struct TrustedRemoteResponse {
    pub chain_id: u64,
    pub remote_address: Option<Binary>,
}

#[cw_serde]
pub struct QuoteFeeResponse {
    pub native_fee: Uint128,
    pub alt_fee: Uint128,
}

#[cw_serde]
pub struct MintEventEntry {
    pub index: u64,
    pub event: MintEvent,
}

#[cw_serde]
pub struct MintEventsResponse {
    pub events: Vec<MintEventEntry>,
}

#[cw_serde]
pub struct SendEventEntry {
    pub index: u64,
    pub event: SendEvent,
}

#[cw_serde]
pub struct SendEventsResponse {
    pub events: Vec<SendEventEntry>,
}

#[cw_serde]
pub struct RecvEventEntry {
    pub index: u64,
    pub event: RecvEvent,
}

#[cw_serde]
pub struct RecvEventsResponse {
    pub events: Vec<RecvEventEntry>,
}

#[cw_serde]
pub struct PayloadResponse {
    pub payload: Binary,
}

#[cw_serde]
pub struct ReceiverBytesResponse {
    pub receiver: Binary,
}

// ============================================================================
// Execute Response Data
// ============================================================================

/// Data returned by `Mint`
#[cw_serde]
pub struct MintResponse {
    pub token_id: u32,
    pub creation_num: u64,
    pub uri: String,
}

/// Data returned by `ReceiveMessage`
#[cw_serde]
pub struct ReceiveResponse {
    /// Local token id now held by the receiver
    pub token_id: u32,
    /// Whether a new token was minted because the id was unknown locally
    pub minted: bool,
}
