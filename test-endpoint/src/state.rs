use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:test-endpoint";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cw_serde]
pub struct Config {
    pub admin: Addr,
    pub fee_denom: String,
    /// Flat part of the native fee
    pub base_fee: Uint128,
    /// Per payload byte part of the native fee
    pub fee_per_byte: Uint128,
    /// Quoted alternative-token fee (never charged)
    pub alt_fee: Uint128,
    /// When set every `Send` fails
    pub fail_sends: bool,
}

impl Config {
    pub fn native_fee(&self, payload_size: u64) -> Uint128 {
        self.base_fee + self.fee_per_byte * Uint128::from(payload_size)
    }
}

/// A payload accepted by `Send`
#[cw_serde]
pub struct OutboundMessage {
    pub app: Addr,
    pub dst_chain_id: u64,
    pub destination: Binary,
    pub payload: Binary,
    pub nonce: u64,
    pub fee: Uint128,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Registered applications
pub const APPS: Map<&Addr, bool> = Map::new("apps");

/// Outbound log, by sequence
pub const OUTBOUND: Map<u64, OutboundMessage> = Map::new("outbound");
pub const OUTBOUND_SEQ: Item<u64> = Item::new("outbound_seq");

/// (app, dst_chain_id) => last outbound nonce
pub const OUTBOUND_NONCE: Map<(&Addr, u64), u64> = Map::new("outbound_nonce");

/// (app, src_chain_id) => last delivered nonce
pub const INBOUND_NONCE: Map<(&Addr, u64), u64> = Map::new("inbound_nonce");
