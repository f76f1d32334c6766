//! Typed request family for the wlgb bridge's document-versioning backend.
//!
//! Every backend call is a small request value implementing [`ApiRequest`]:
//! it knows the endpoint path it resolves to, relative to the project's
//! resource root, and how to decode the backend's JSON response into a
//! typed result. Concrete variants:
//! - [`SnapshotVersionRequest`] — one historical snapshot by version number
//! - [`LatestVersionRequest`] — the latest version ID plus author metadata
//! - [`SavedVersionsRequest`] — the list of saved versions
//! - [`PushSnapshotRequest`] — propose a candidate snapshot, carrying its
//!   postback descriptor
//!
//! [`SnapshotApi`] executes a request value against a configured base URL.
//! Retry, timeout and authentication policy belong to the outer service.

pub mod client;
pub mod error;
pub mod latest;
pub mod push;
pub mod saved_vers;
pub mod version;

pub use client::SnapshotApi;
pub use error::{ApiError, ApiResult};
pub use latest::{LatestVersion, LatestVersionRequest, VersionAuthor};
pub use push::{PushCode, PushOutcome, PushSnapshotRequest};
pub use saved_vers::{SavedVersion, SavedVersionsRequest};
pub use version::{SnapshotEntry, SnapshotVersionRequest, VersionedSnapshot};

use serde_json::Value;

/// HTTP method a backend request is issued with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestMethod {
    /// Plain resource read.
    #[default]
    Get,
    /// Resource creation with a JSON body.
    Post,
}

/// One call against the document-versioning backend.
///
/// Implementations are plain request values; constructing one performs no
/// IO. The transport resolves [`ApiRequest::endpoint_path`] against the
/// project's resource root, performs the HTTP exchange and hands the
/// response JSON to [`ApiRequest::parse_response`].
///
/// Decoding is strict: a malformed or incomplete response fails whole, and
/// no partial result is ever produced.
pub trait ApiRequest {
    /// The typed result this request decodes to.
    type Response;

    /// The project whose resource root the request is scoped to.
    fn project_name(&self) -> &str;

    /// Endpoint path relative to the project's resource root.
    fn endpoint_path(&self) -> String;

    /// HTTP method to issue the request with.
    fn method(&self) -> RequestMethod {
        RequestMethod::Get
    }

    /// JSON body for [`RequestMethod::Post`] requests.
    fn body(&self) -> Option<&Value> {
        None
    }

    /// Decode the backend's JSON response into the typed result.
    fn parse_response(&self, json: Value) -> ApiResult<Self::Response>;
}
