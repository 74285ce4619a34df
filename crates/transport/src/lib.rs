//! Transport Crate - Generic JSON Transport
//!
//! Shared technical foundation for talking to HTTP services that speak JSON:
//! - [`NetworkClient`] - the transport capability consumed by feature crates
//! - [`HttpNetworkClient`] - reqwest-backed implementation
//! - [`TransportError`] - transport-level failures
//!
//! Feature crates depend on the trait, not the implementation, so tests can
//! script responses without touching the network.

pub mod client;

pub use client::{HttpNetworkClient, LocalNetworkClient, NetworkClient, TransportError};
