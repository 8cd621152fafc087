//! Loopback messaging endpoint.
//!
//! Implements the endpoint wire interface from `common` on a single chain:
//! outbound payloads are charged and recorded instead of relayed, and the
//! admin replays them into any registered application with `Deliver`.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
