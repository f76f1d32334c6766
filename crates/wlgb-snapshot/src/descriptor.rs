//! Postback descriptor construction.
//!
//! After a push is accepted, the backend is handed a JSON descriptor naming
//! every file of the candidate snapshot, a pull URL for each changed file,
//! and the postback URL it reports final acceptance or rejection to.

use crate::candidate::CandidateSnapshot;
use serde::{Deserialize, Serialize};

/// Builds postback descriptors from candidate snapshots.
///
/// Holds the postback base URL, configured once at process start and
/// threaded in explicitly. The base is normalized to exactly one trailing
/// slash so the project URL is always `<base><project_name>`.
#[derive(Debug, Clone)]
pub struct DescriptorBuilder {
    postback_base: String,
}

impl DescriptorBuilder {
    /// Create a builder for the given postback base URL.
    pub fn new(postback_base: impl Into<String>) -> Self {
        let postback_base = format!("{}/", postback_base.into().trim_end_matches('/'));
        Self { postback_base }
    }

    /// Build the descriptor for a candidate snapshot.
    ///
    /// Pure and deterministic: the same candidate and key always produce the
    /// same descriptor. The `files` list enumerates the full current
    /// manifest; only changed entries carry a pull URL.
    pub fn build(&self, candidate: &CandidateSnapshot, postback_key: &str) -> PostbackDescriptor {
        let project_url = format!("{}{}", self.postback_base, candidate.project_name());

        let files = candidate
            .files()
            .iter()
            .map(|record| DescriptorFile {
                name: record.path().to_string(),
                url: record
                    .is_changed()
                    .then(|| format!("{}/{}?key={}", project_url, record.path(), postback_key)),
            })
            .collect();

        PostbackDescriptor {
            latest_ver_id: candidate.current_version(),
            files,
            postback_url: format!("{}/{}/postback", project_url, postback_key),
        }
    }
}

/// The JSON manifest returned to the backend for an accepted push.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostbackDescriptor {
    /// Version ID of the candidate snapshot.
    pub latest_ver_id: u64,

    /// Full manifest of the current tree, one entry per file.
    pub files: Vec<DescriptorFile>,

    /// Where the backend posts final acceptance or rejection.
    pub postback_url: String,
}

/// One manifest entry of a postback descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescriptorFile {
    /// Path of the file, relative to the project root.
    pub name: String,

    /// Pull URL for the file's new bytes; present only for changed files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
