//! Wire Shapes
//!
//! Request and response bodies for the PoW box service. Field names are
//! camelCase on the wire; unknown service fields are ignored and absent
//! response fields default, since the job endpoint returns sparse bodies
//! while a job is still running.

use serde::{Deserialize, Serialize};

use trinary::{Hash, Trytes};

/// Progress value the service reports when a job has finished
pub const PROGRESS_COMPLETE: &str = "100";

/// Body for `POST commands`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachToTangleRequest {
    pub command: &'static str,
    pub trunk_transaction: String,
    pub branch_transaction: String,
    pub min_weight_magnitude: u32,
    pub trytes: Vec<String>,
}

impl AttachToTangleRequest {
    pub const COMMAND: &'static str = "attachToTangle";

    /// Build a request from the validated domain values
    pub fn new(
        trunk_transaction: &Hash,
        branch_transaction: &Hash,
        trytes: &[Trytes],
        min_weight_magnitude: u32,
    ) -> Self {
        Self {
            command: Self::COMMAND,
            trunk_transaction: trunk_transaction.to_string(),
            branch_transaction: branch_transaction.to_string(),
            min_weight_magnitude,
            trytes: trytes.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Response for `POST commands`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttachToTangleResponse {
    /// Id of the job to poll for progress; empty when the service
    /// failed to queue the job
    pub job_id: String,
}

/// Response for `GET jobs/{jobId}`
///
/// Each poll yields an independent snapshot of the job.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobResponse {
    pub job_id: String,
    pub created_at: String,
    pub updated_at: String,
    /// Whether the job failed remotely
    pub error: bool,
    /// Service-provided failure message, meaningful only when `error`
    pub error_message: String,
    /// Percentage as a decimal string, e.g. "100"
    pub progress: String,
    /// Present once the job has completed
    pub response: Option<JobResult>,
}

/// Completed-job payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct JobResult {
    pub trytes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use trinary::hash::HASH_LENGTH;

    #[test]
    fn test_attach_request_serializes_camel_case() {
        let trunk = Hash::new("T".repeat(HASH_LENGTH)).unwrap();
        let branch = Hash::new("B".repeat(HASH_LENGTH)).unwrap();
        let trytes = vec![Trytes::new("AAA").unwrap(), Trytes::new("BBB").unwrap()];
        let request = AttachToTangleRequest::new(&trunk, &branch, &trytes, 14);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["command"], "attachToTangle");
        assert_eq!(json["trunkTransaction"], "T".repeat(HASH_LENGTH));
        assert_eq!(json["branchTransaction"], "B".repeat(HASH_LENGTH));
        assert_eq!(json["minWeightMagnitude"], 14);
        assert_eq!(json["trytes"][0], "AAA");
        assert_eq!(json["trytes"][1], "BBB");
    }

    #[test]
    fn test_attach_response_defaults_job_id() {
        let response: AttachToTangleResponse = serde_json::from_str("{}").unwrap();
        assert!(response.job_id.is_empty());
    }

    #[test]
    fn test_job_response_sparse_body() {
        let response: JobResponse =
            serde_json::from_str(r#"{"error":false,"progress":"50"}"#).unwrap();
        assert!(!response.error);
        assert_eq!(response.progress, "50");
        assert!(response.response.is_none());
    }

    #[test]
    fn test_job_response_complete_body() {
        let body = r#"{
            "jobId": "abc",
            "createdAt": "2018-01-01T00:00:00Z",
            "updatedAt": "2018-01-01T00:00:05Z",
            "error": false,
            "errorMessage": "",
            "progress": "100",
            "response": {"trytes": ["AAA"]}
        }"#;
        let response: JobResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.progress, PROGRESS_COMPLETE);
        assert_eq!(response.response.unwrap().trytes, vec!["AAA"]);
    }

    #[test]
    fn test_job_response_ignores_unknown_fields() {
        let response: JobResponse =
            serde_json::from_str(r#"{"error":true,"errorMessage":"overloaded","queuePosition":3}"#)
                .unwrap();
        assert!(response.error);
        assert_eq!(response.error_message, "overloaded");
    }
}
