//! Execute handlers for the NFT Bridge contract.
//!
//! This module contains all execute message handlers, organized by category:
//! - `mint` - Token creation, shared by `Mint` and the receive-side fallback
//! - `outgoing` - Send (custody + dispatch)
//! - `incoming` - ReceiveMessage (release or fallback mint)
//! - `admin` - Admin capability and trusted-remote management

mod admin;
mod incoming;
mod mint;
mod outgoing;

pub use admin::*;
pub use incoming::*;
pub use mint::*;
pub use outgoing::*;
