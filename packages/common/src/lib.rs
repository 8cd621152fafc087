//! Common - Messaging Endpoint Interface for the NFT Bridge
//!
//! This package provides the message types exchanged between the NFT bridge
//! contract and the messaging endpoint that carries its payloads between chains.

pub mod endpoint;

pub use endpoint::{
    EndpointExecuteMsg, EndpointQueryMsg, EndpointReceiveMsg, FeeEstimateResponse,
};
