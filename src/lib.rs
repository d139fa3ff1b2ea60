//! # Plasma client
//!
//! Client side of a plasma cash chain: builds, signs and canonically encodes child chain
//! transactions and blocks, stores blocks by number and talks to the root and child chains
//! through the [`client::RootChain`] and [`client::ChildChain`] interfaces.

#[macro_use]
extern crate serde;
#[macro_use]
extern crate tracing;

pub mod blockchain;
pub mod bridge;
pub mod client;
pub mod codec;
pub mod config;
pub mod hash;
pub mod signer;
