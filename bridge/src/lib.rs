//! NFT Bridge Contract - Cross-Chain NFT Transfers over a Messaging Endpoint
//!
//! Moves NFTs between chains by custody and release. A token leaving this
//! chain is held by the bridge contract; a token arriving is released from
//! custody when this bridge knows its id, or minted fresh otherwise.
//!
//! # Outgoing Flow (Send)
//! 1. Holder calls `Send` with the endpoint fee attached
//! 2. Bridge moves the token into custody and encodes a 36-byte payload
//! 3. Messaging endpoint carries the payload to the trusted remote bridge
//!
//! # Incoming Flow (ReceiveMessage)
//! 1. Endpoint delivers a payload from a remote bridge
//! 2. Source is checked against the trusted remote for its chain
//! 3. Known id: released from custody. Unknown id: minted under a local id
//!
//! # Security
//! - Only the configured endpoint may deliver payloads
//! - Only the admin may change trusted remotes
//! - Every holder change goes through the asset registry's ownership check

pub mod address_codec;
pub mod allocator;
pub mod asset;
pub mod contract;
pub mod endpoint;
pub mod error;
pub mod events;
mod execute;
pub mod ledger;
pub mod msg;
pub mod payload;
mod query;
pub mod state;

pub use crate::asset::{AssetHandle, AssetRegistry, StoredAssets};
pub use crate::error::ContractError;
pub use crate::execute::AdminCap;
pub use crate::payload::{decode_payload, encode_payload, TransferPayload};
