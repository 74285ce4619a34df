//! PowBox Crate - Remote Proof of Work Delegate
//!
//! Delegates proof-of-work for ledger transactions to a remote "PoW box"
//! service instead of computing it locally:
//! - `config` - delegate configuration
//! - `provider` - the pluggable [`ProofOfWork`] capability
//! - `delegate` - [`PowBox`], the remote implementation
//! - `dto` - wire shapes for the attach/job endpoints
//! - `error` - the error taxonomy
//!
//! ## Protocol
//! One `attachToTangle` job per call: POST the job, then poll
//! `jobs/{jobId}` on a fixed cadence until the service reports completion
//! or failure. No retries at any layer; a failed attach or poll
//! permanently fails that call and the caller owns any retry policy.

pub mod config;
pub mod delegate;
pub mod dto;
pub mod error;
pub mod provider;

// Re-exports for convenience
pub use config::PowBoxConfig;
pub use delegate::PowBox;
pub use error::{PowBoxError, PowBoxResult};
pub use provider::{LocalProofOfWork, ProofOfWork};
