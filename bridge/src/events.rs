//! Append-only audit logs for mint, send and receive.
//!
//! Each record is persisted under its own sequence number and also emitted as
//! a typed wasm event on the response.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Event, StdResult, Storage, Timestamp};
use cw_storage_plus::{Item, Map};
use serde::de::DeserializeOwned;
use serde::Serialize;

#[cw_serde]
pub struct MintEvent {
    pub owner: Addr,
    pub token_id: u32,
    pub uri: String,
    pub creation_num: u64,
    pub timestamp: Timestamp,
}

#[cw_serde]
pub struct SendEvent {
    pub sender: Addr,
    pub dst_chain_id: u64,
    /// Trusted remote the payload was addressed to
    pub dst_address: Binary,
    /// 32-byte receiver on the destination chain
    pub receiver: Binary,
    pub token_id: u32,
    pub timestamp: Timestamp,
}

#[cw_serde]
pub struct RecvEvent {
    pub src_chain_id: u64,
    pub src_address: Binary,
    /// Local receiver decoded from the payload
    pub receiver: Addr,
    /// Token id carried by the payload (remote id space)
    pub token_id: u32,
    pub timestamp: Timestamp,
}

pub const MINT_EVENTS: Map<u64, MintEvent> = Map::new("mint_events");
pub const MINT_EVENT_SEQ: Item<u64> = Item::new("mint_event_seq");

pub const SEND_EVENTS: Map<u64, SendEvent> = Map::new("send_events");
pub const SEND_EVENT_SEQ: Item<u64> = Item::new("send_event_seq");

pub const RECV_EVENTS: Map<u64, RecvEvent> = Map::new("recv_events");
pub const RECV_EVENT_SEQ: Item<u64> = Item::new("recv_event_seq");

fn append<T>(
    storage: &mut dyn Storage,
    log: &Map<u64, T>,
    seq: &Item<u64>,
    record: &T,
) -> StdResult<u64>
where
    T: Serialize + DeserializeOwned,
{
    let index = seq.may_load(storage)?.unwrap_or_default();
    log.save(storage, index, record)?;
    seq.save(storage, &(index + 1))?;
    Ok(index)
}

impl MintEvent {
    pub fn append(&self, storage: &mut dyn Storage) -> StdResult<u64> {
        append(storage, &MINT_EVENTS, &MINT_EVENT_SEQ, self)
    }

    pub fn to_event(&self) -> Event {
        Event::new("nft_mint")
            .add_attribute("owner", self.owner.as_str())
            .add_attribute("token_id", self.token_id.to_string())
            .add_attribute("uri", &self.uri)
            .add_attribute("creation_num", self.creation_num.to_string())
            .add_attribute("timestamp", self.timestamp.seconds().to_string())
    }
}

impl SendEvent {
    pub fn append(&self, storage: &mut dyn Storage) -> StdResult<u64> {
        append(storage, &SEND_EVENTS, &SEND_EVENT_SEQ, self)
    }

    pub fn to_event(&self) -> Event {
        Event::new("nft_send")
            .add_attribute("sender", self.sender.as_str())
            .add_attribute("dst_chain_id", self.dst_chain_id.to_string())
            .add_attribute("dst_address", format!("0x{}", hex::encode(&self.dst_address)))
            .add_attribute("receiver", format!("0x{}", hex::encode(&self.receiver)))
            .add_attribute("token_id", self.token_id.to_string())
            .add_attribute("timestamp", self.timestamp.seconds().to_string())
    }
}

impl RecvEvent {
    pub fn append(&self, storage: &mut dyn Storage) -> StdResult<u64> {
        append(storage, &RECV_EVENTS, &RECV_EVENT_SEQ, self)
    }

    pub fn to_event(&self) -> Event {
        Event::new("nft_receive")
            .add_attribute("src_chain_id", self.src_chain_id.to_string())
            .add_attribute("src_address", format!("0x{}", hex::encode(&self.src_address)))
            .add_attribute("receiver", self.receiver.as_str())
            .add_attribute("token_id", self.token_id.to_string())
            .add_attribute("timestamp", self.timestamp.seconds().to_string())
    }
}
