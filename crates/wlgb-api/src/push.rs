//! Push a candidate snapshot to the server.

use crate::error::{ApiError, ApiResult};
use crate::{ApiRequest, RequestMethod};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use wlgb_snapshot::PostbackDescriptor;

const API_CALL: &str = "/snapshots";

/// Request that pushes a postback descriptor as a new snapshot.
#[derive(Debug, Clone)]
pub struct PushSnapshotRequest {
    project_name: String,
    body: Value,
}

impl PushSnapshotRequest {
    /// Create a push request for `project_name` carrying `descriptor`.
    pub fn new(
        project_name: impl Into<String>,
        descriptor: &PostbackDescriptor,
    ) -> ApiResult<Self> {
        Ok(Self {
            project_name: project_name.into(),
            body: serde_json::to_value(descriptor)?,
        })
    }
}

impl ApiRequest for PushSnapshotRequest {
    type Response = PushOutcome;

    fn project_name(&self) -> &str {
        &self.project_name
    }

    fn endpoint_path(&self) -> String {
        API_CALL.to_string()
    }

    fn method(&self) -> RequestMethod {
        RequestMethod::Post
    }

    fn body(&self) -> Option<&Value> {
        Some(&self.body)
    }

    fn parse_response(&self, json: Value) -> ApiResult<PushOutcome> {
        serde_json::from_value(json).map_err(|e| ApiError::decode(self.endpoint_path(), e))
    }
}

/// Server verdict on a pushed snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushOutcome {
    /// Result code.
    pub code: PushCode,

    /// Optional human-readable detail, mostly present on rejection.
    #[serde(default)]
    pub message: Option<String>,
}

impl PushOutcome {
    /// Whether the push was accepted for processing.
    pub fn is_accepted(&self) -> bool {
        matches!(self.code, PushCode::Accepted)
    }
}

/// Push result codes the server may answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PushCode {
    /// The snapshot was accepted and will be applied.
    Accepted,
    /// The snapshot was based on a version that is no longer the latest.
    OutOfDate,
}
