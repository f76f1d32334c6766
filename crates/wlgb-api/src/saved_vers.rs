//! List a project's saved versions.

use crate::error::{ApiError, ApiResult};
use crate::latest::VersionAuthor;
use crate::ApiRequest;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const API_CALL: &str = "/saved_vers";

/// Request for the list of saved versions of a project.
#[derive(Debug, Clone)]
pub struct SavedVersionsRequest {
    project_name: String,
}

impl SavedVersionsRequest {
    /// Create a request for `project_name`.
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
        }
    }
}

impl ApiRequest for SavedVersionsRequest {
    type Response = Vec<SavedVersion>;

    fn project_name(&self) -> &str {
        &self.project_name
    }

    fn endpoint_path(&self) -> String {
        API_CALL.to_string()
    }

    /// The response is a bare JSON array, newest first.
    fn parse_response(&self, json: Value) -> ApiResult<Vec<SavedVersion>> {
        serde_json::from_value(json).map_err(|e| ApiError::decode(self.endpoint_path(), e))
    }
}

/// One saved version of a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedVersion {
    /// Version ID.
    pub version_id: u64,

    /// Comment attached when the version was saved.
    #[serde(default)]
    pub comment: Option<String>,

    /// Who saved it.
    #[serde(default)]
    pub user: Option<VersionAuthor>,

    /// When it was saved.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_endpoint_path() {
        let request = SavedVersionsRequest::new("proj1");
        assert_eq!(request.endpoint_path(), "/saved_vers");
    }

    #[test]
    fn test_parse_version_list() {
        let request = SavedVersionsRequest::new("proj1");
        let versions = request
            .parse_response(json!([
                {
                    "versionId": 39,
                    "comment": "added results section",
                    "user": { "name": "J. Lees-Miller", "email": "jdlm@example.com" },
                    "createdAt": "2014-11-30T18:47:01Z"
                },
                {
                    "versionId": 24,
                    "createdAt": "2014-11-10T09:12:30Z"
                }
            ]))
            .unwrap();

        assert_eq!(versions.len(), 2);
        assert_eq!(versions[0].version_id, 39);
        assert_eq!(versions[0].comment.as_deref(), Some("added results section"));
        assert_eq!(versions[1].version_id, 24);
        assert!(versions[1].user.is_none());
    }

    #[test]
    fn test_parse_empty_list() {
        let request = SavedVersionsRequest::new("proj1");
        let versions = request.parse_response(json!([])).unwrap();
        assert!(versions.is_empty());
    }

    #[test]
    fn test_parse_rejects_missing_created_at() {
        let request = SavedVersionsRequest::new("proj1");
        let result = request.parse_response(json!([ { "versionId": 39 } ]));
        assert!(matches!(result, Err(ApiError::Decode { .. })));
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let request = SavedVersionsRequest::new("proj1");
        let result = request.parse_response(json!({ "versions": [] }));
        assert!(matches!(result, Err(ApiError::Decode { .. })));
    }
}
