//! Error types for the NFT Bridge contract

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only admin can perform this action")]
    Unauthorized,

    #[error("Unauthorized: only the messaging endpoint can deliver messages")]
    UnauthorizedEndpoint,

    // ========================================================================
    // Bridge State Errors
    // ========================================================================

    #[error("Bridge state not initialized")]
    NotInitialized,

    #[error("Invalid token id range: start {start_id} is greater than end {end_id}")]
    InvalidIdRange { start_id: u32, end_id: u32 },

    #[error("Token id range exhausted: next id {next_id}, end id {end_id}")]
    RangeExhausted { next_id: u64, end_id: u32 },

    #[error("Token id already registered: {token_id}")]
    DuplicateId { token_id: u32 },

    #[error("Token not found: {token_id}")]
    TokenNotFound { token_id: u32 },

    #[error("Collection not found: {name}")]
    CollectionNotFound { name: String },

    // ========================================================================
    // Custody Errors
    // ========================================================================

    #[error("Ownership mismatch: {claimed} does not hold asset #{creation_num}")]
    OwnershipMismatch { creation_num: u64, claimed: String },

    // ========================================================================
    // Remote & Payload Errors
    // ========================================================================

    #[error("Untrusted remote for chain {chain_id}")]
    UntrustedRemote { chain_id: u64 },

    #[error("No trusted remote configured for chain {chain_id}")]
    NoRemoteConfigured { chain_id: u64 },

    #[error("Invalid payload length: expected 36 bytes, got {got}")]
    InvalidPayloadLength { got: usize },

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },

    // ========================================================================
    // Fee Errors
    // ========================================================================

    #[error("Invalid fee denom: {denom:?}")]
    InvalidFeeDenom { denom: String },

    #[error("Insufficient fee: expected {expected} {denom}, got {got} {denom}")]
    InsufficientFee {
        expected: Uint128,
        got: Uint128,
        denom: String,
    },
}
