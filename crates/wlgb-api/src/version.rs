//! Fetch one historical snapshot by version number.

use crate::error::{ApiError, ApiResult};
use crate::ApiRequest;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const API_CALL: &str = "/snapshots";

/// Request for a project's snapshot at a specific version.
#[derive(Debug, Clone)]
pub struct SnapshotVersionRequest {
    project_name: String,
    version_id: u64,
}

impl SnapshotVersionRequest {
    /// Create a request for `project_name` at `version_id`.
    pub fn new(project_name: impl Into<String>, version_id: u64) -> Self {
        Self {
            project_name: project_name.into(),
            version_id,
        }
    }

    /// The version being fetched.
    pub fn version_id(&self) -> u64 {
        self.version_id
    }
}

impl ApiRequest for SnapshotVersionRequest {
    type Response = VersionedSnapshot;

    fn project_name(&self) -> &str {
        &self.project_name
    }

    fn endpoint_path(&self) -> String {
        format!("{API_CALL}/{}", self.version_id)
    }

    fn parse_response(&self, json: Value) -> ApiResult<VersionedSnapshot> {
        serde_json::from_value(json).map_err(|e| ApiError::decode(self.endpoint_path(), e))
    }
}

/// A project's file manifest at one version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionedSnapshot {
    /// All files of the tree at that version.
    pub files: Vec<SnapshotEntry>,
}

/// One file of a versioned snapshot.
///
/// Source files arrive inline; binary attachments arrive as a URL the
/// caller fetches bytes through.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SnapshotEntry {
    /// Source file with its content carried inline.
    Inline {
        /// Path of the file, relative to the project root.
        name: String,
        /// The file's text content.
        content: String,
    },
    /// Attachment stored elsewhere.
    External {
        /// Path of the file, relative to the project root.
        name: String,
        /// Where to fetch the bytes from.
        url: String,
    },
}

impl SnapshotEntry {
    /// Path of the file, relative to the project root.
    pub fn name(&self) -> &str {
        match self {
            SnapshotEntry::Inline { name, .. } | SnapshotEntry::External { name, .. } => name,
        }
    }
}
