//! Remote PoW Box Delegate
//!
//! [`PowBox`] implements [`ProofOfWork`] by submitting an
//! `attachToTangle` job to the remote service and polling the job
//! endpoint until it reports completion or failure.
//!
//! ## Lifecycle
//! Each `pow` call owns its own poll interval; concurrent calls on one
//! delegate share nothing but the read-only configuration. Dropping the
//! in-flight future drops the interval, so the recurring timer is torn
//! down on every exit path, including caller-side cancellation.

use std::sync::Arc;
use std::time::Duration;

use http::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use tokio::time::MissedTickBehavior;
use transport::NetworkClient;
use trinary::{Hash, Trytes};

use crate::config::PowBoxConfig;
use crate::dto::{AttachToTangleRequest, AttachToTangleResponse, JobResponse, PROGRESS_COMPLETE};
use crate::error::{PowBoxError, PowBoxResult};
use crate::provider::ProofOfWork;

/// Remote proof-of-work delegate
#[derive(Debug, Clone)]
pub struct PowBox<N> {
    network: Arc<N>,
    authorization: HeaderValue,
    poll_interval: Duration,
    performs_single: bool,
}

impl<N> PowBox<N>
where
    N: NetworkClient + Send + Sync,
{
    /// Create a delegate over the given transport
    ///
    /// Fails with [`PowBoxError::Configuration`] when the API key is
    /// empty or unusable as a header value, or the poll interval is
    /// zero.
    pub fn new(network: Arc<N>, config: PowBoxConfig) -> PowBoxResult<Self> {
        if config.api_key.is_empty() {
            return Err(PowBoxError::configuration("The apiKey must not be empty"));
        }
        let authorization = HeaderValue::from_str(&config.api_key).map_err(|_| {
            PowBoxError::configuration("The apiKey must be a valid header value")
        })?;
        if config.poll_interval.is_zero() {
            return Err(PowBoxError::configuration("The pollIntervalMs must be > 0"));
        }

        Ok(Self {
            network,
            authorization,
            poll_interval: config.poll_interval,
            performs_single: config.performs_single,
        })
    }

    /// Poll `jobs/{job_id}` until the job reaches a terminal state
    ///
    /// `source_count` is the number of trytes chunks submitted; a
    /// completed job must return exactly that many.
    async fn wait_for_job_completion(
        &self,
        job_id: &str,
        source_count: usize,
    ) -> PowBoxResult<Vec<Trytes>> {
        let path = format!("jobs/{job_id}");
        let mut ticker = tokio::time::interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The interval yields immediately on its first tick; consume it
        // so the first poll happens one interval after submission.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let job: JobResponse = self.network.get_json(&path).await?;

            if job.error {
                tracing::warn!(job_id, message = %job.error_message, "PoW job failed remotely");
                return Err(PowBoxError::RemoteJob(job.error_message));
            }

            if job.progress == PROGRESS_COMPLETE {
                let trytes = job.response.map(|r| r.trytes).unwrap_or_default();
                if trytes.len() != source_count {
                    return Err(PowBoxError::protocol(
                        "The response did not contain enough trytes",
                    ));
                }
                tracing::info!(job_id, chunks = trytes.len(), "PoW job completed");
                return trytes
                    .into_iter()
                    .map(|t| {
                        Trytes::new(t).map_err(|e| {
                            PowBoxError::protocol(format!(
                                "The response contained invalid trytes: {e}"
                            ))
                        })
                    })
                    .collect();
            }

            tracing::debug!(job_id, progress = %job.progress, "PoW job in progress");
        }
    }
}

impl<N> ProofOfWork for PowBox<N>
where
    N: NetworkClient + Send + Sync,
{
    async fn initialize(&self) -> PowBoxResult<()> {
        // No setup required for the remote delegate.
        Ok(())
    }

    fn performs_single(&self) -> bool {
        self.performs_single
    }

    async fn pow(
        &self,
        trunk_transaction: &Hash,
        branch_transaction: &Hash,
        trytes: &[Trytes],
        min_weight_magnitude: u32,
    ) -> PowBoxResult<Vec<Trytes>> {
        if trytes.is_empty() {
            return Err(PowBoxError::validation("The trytes must not be empty"));
        }
        if min_weight_magnitude == 0 {
            return Err(PowBoxError::validation("The minWeightMagnitude must be > 0"));
        }

        let request = AttachToTangleRequest::new(
            trunk_transaction,
            branch_transaction,
            trytes,
            min_weight_magnitude,
        );

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, self.authorization.clone());

        let response: AttachToTangleResponse =
            self.network.post_json(&request, "commands", &headers).await?;

        if response.job_id.is_empty() {
            return Err(PowBoxError::protocol(
                "The attachToTangleRequest did not return a jobId",
            ));
        }

        tracing::info!(
            job_id = %response.job_id,
            chunks = trytes.len(),
            min_weight_magnitude,
            "Submitted attachToTangle job"
        );

        self.wait_for_job_completion(&response.job_id, trytes.len())
            .await
    }
}
