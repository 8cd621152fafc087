use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: only admin can perform this action")]
    Unauthorized,

    #[error("Application not registered: {app}")]
    AppNotRegistered { app: String },

    #[error("Sends are disabled")]
    SendsDisabled,

    #[error("Insufficient fee: expected {expected} {denom}, got {got} {denom}")]
    InsufficientFee {
        expected: Uint128,
        got: Uint128,
        denom: String,
    },
}
