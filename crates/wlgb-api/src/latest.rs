//! Fetch a project's latest version metadata.

use crate::error::{ApiError, ApiResult};
use crate::ApiRequest;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const API_CALL: &str = "/latest/verid";

/// Request for the latest version of a project.
#[derive(Debug, Clone)]
pub struct LatestVersionRequest {
    project_name: String,
}

impl LatestVersionRequest {
    /// Create a request for `project_name`.
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
        }
    }
}

impl ApiRequest for LatestVersionRequest {
    type Response = LatestVersion;

    fn project_name(&self) -> &str {
        &self.project_name
    }

    fn endpoint_path(&self) -> String {
        API_CALL.to_string()
    }

    fn parse_response(&self, json: Value) -> ApiResult<LatestVersion> {
        serde_json::from_value(json).map_err(|e| ApiError::decode(self.endpoint_path(), e))
    }
}

/// The most recent accepted version of a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestVersion {
    /// Version ID of the most recent accepted snapshot.
    pub latest_ver_id: u64,

    /// When that version was created.
    #[serde(default)]
    pub latest_ver_at: Option<DateTime<Utc>>,

    /// Who created it.
    #[serde(default)]
    pub latest_ver_by: Option<VersionAuthor>,
}

/// Author attribution on a version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionAuthor {
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,

    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
}
