//! PowBox Error Types
//!
//! One error enum tagged by failure domain. Transport failures pass
//! through transparently; the delegate never wraps or inspects them.

use transport::TransportError;

/// PowBox-specific result type alias
pub type PowBoxResult<T> = Result<T, PowBoxError>;

/// Failures of the remote proof-of-work delegate
#[derive(Debug, thiserror::Error)]
pub enum PowBoxError {
    /// Invalid constructor arguments (empty API key, zero poll interval).
    /// Fatal to construction, never retried.
    #[error("{0}")]
    Configuration(String),

    /// Invalid call-time arguments, raised before any network call
    #[error("{0}")]
    Validation(String),

    /// The service responded but violated the expected contract
    /// (missing jobId, wrong result cardinality, unparseable trytes)
    #[error("{0}")]
    Protocol(String),

    /// The service explicitly reported job failure; carries the
    /// service-provided message verbatim
    #[error("{0}")]
    RemoteJob(String),

    /// Network-level failure, propagated unmodified
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl PowBoxError {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol(message.into())
    }
}
