//! Admin capability and trusted-remote management.

use cosmwasm_std::{Addr, Binary, DepsMut, MessageInfo, Response, Storage};

use crate::error::ContractError;
use crate::state::{load_config, TRUSTED_REMOTES};

// ============================================================================
// Admin Capability
// ============================================================================

/// Proof that the caller of the current execution is the bridge admin.
///
/// Only [`AdminCap::verify`] constructs it; privileged handlers take it as an
/// argument instead of re-reading the sender.
#[derive(Debug)]
pub struct AdminCap {
    admin: Addr,
}

impl AdminCap {
    pub fn verify(storage: &dyn Storage, sender: &Addr) -> Result<Self, ContractError> {
        let config = load_config(storage)?;
        if *sender != config.admin {
            return Err(ContractError::Unauthorized);
        }
        Ok(Self {
            admin: config.admin,
        })
    }

    pub fn admin(&self) -> &Addr {
        &self.admin
    }
}

// ============================================================================
// Trusted Remotes
// ============================================================================

/// Set (or replace) the trusted remote bridge for `chain_id`.
pub fn execute_set_trusted_remote(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u64,
    remote_address: Binary,
) -> Result<Response, ContractError> {
    let cap = AdminCap::verify(deps.storage, &info.sender)?;
    set_trusted_remote(deps.storage, &cap, chain_id, remote_address)
}

pub fn set_trusted_remote(
    storage: &mut dyn Storage,
    cap: &AdminCap,
    chain_id: u64,
    remote_address: Binary,
) -> Result<Response, ContractError> {
    if remote_address.is_empty() {
        return Err(ContractError::InvalidAddress {
            reason: "remote address must not be empty".to_string(),
        });
    }

    TRUSTED_REMOTES.save(storage, chain_id, &remote_address)?;

    Ok(Response::new()
        .add_attribute("method", "set_trusted_remote")
        .add_attribute("admin", cap.admin().as_str())
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("remote_address", format!("0x{}", hex::encode(&remote_address))))
}
