//! Proof of Work Provider Trait
//!
//! The pluggable capability shared by all proof-of-work providers,
//! remote or local-compute. Consumers depend on this trait so the
//! backing implementation can be swapped without touching the
//! submission pipeline.

use trinary::{Hash, Trytes};

use crate::error::PowBoxResult;

/// Proof-of-work provider capability
#[trait_variant::make(ProofOfWork: Send)]
pub trait LocalProofOfWork {
    /// Perform any provider setup; must be called once before `pow`
    async fn initialize(&self) -> PowBoxResult<()>;

    /// Whether the provider computes all trytes chunks in a single
    /// round-trip. Callers must not assume batching behavior beyond
    /// the cardinality guarantee of `pow`.
    fn performs_single(&self) -> bool;

    /// Perform proof of work on the given trytes chunks
    ///
    /// Returns one result chunk per input chunk, in input order.
    async fn pow(
        &self,
        trunk_transaction: &Hash,
        branch_transaction: &Hash,
        trytes: &[Trytes],
        min_weight_magnitude: u32,
    ) -> PowBoxResult<Vec<Trytes>>;
}
