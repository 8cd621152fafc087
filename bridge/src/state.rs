//! State definitions for the NFT Bridge contract
//!
//! Allocator, ledger, registry and event log storage live next to the code
//! that owns them (`allocator`, `ledger`, `asset`, `events`); this module
//! holds the contract configuration and the trusted-remote registry.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Storage};
use cw_storage_plus::{Item, Map};

use crate::endpoint::EndpointContract;
use crate::error::ContractError;

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Admin address, the only holder of the admin capability
    pub admin: Addr,
    /// Messaging endpoint contract
    pub endpoint: Addr,
    /// Address holding assets while they are in flight (this contract)
    pub custody: Addr,
    /// Denom the endpoint fee is paid in
    pub fee_denom: String,
    /// Bech32 prefix for local receivers decoded from payloads
    pub address_prefix: String,
}

impl Config {
    pub fn endpoint(&self) -> EndpointContract {
        EndpointContract(self.endpoint.clone())
    }
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:nft-bridge";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Display name given to tokens minted on receipt of an unknown id
pub const DEFAULT_NFT_NAME: &str = "Bridged NFT";

// ============================================================================
// Storage
// ============================================================================

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Trusted remote bridge per chain
/// Key: chain id, Value: remote contract address bytes
pub const TRUSTED_REMOTES: Map<u64, Binary> = Map::new("trusted_remotes");

/// Load the config, failing with `NotInitialized` before instantiation
pub fn load_config(storage: &dyn Storage) -> Result<Config, ContractError> {
    CONFIG
        .may_load(storage)?
        .ok_or(ContractError::NotInitialized)
}
