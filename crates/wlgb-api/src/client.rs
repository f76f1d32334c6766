//! HTTP executor for snapshot API requests.
//!
//! [`SnapshotApi`] resolves any [`ApiRequest`] against a configured base URL,
//! sends it, and hands the decoded JSON body back to the request for parsing.

use crate::error::{ApiError, ApiResult};
use crate::{ApiRequest, RequestMethod};
use serde_json::Value;
use tracing::debug;
use url::Url;

/// User agent for requests
const USER_AGENT: &str = concat!("wlgb/", env!("CARGO_PKG_VERSION"));

/// Client for a snapshot push/pull API server.
#[derive(Debug, Clone)]
pub struct SnapshotApi {
    client: reqwest::Client,
    base_url: String,
}

impl SnapshotApi {
    /// Create a client for the API rooted at `base_url`.
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();
        Self::with_client(base_url, client)
    }

    /// Create a client reusing an existing `reqwest::Client`.
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> ApiResult<Self> {
        let base_url = base_url.into();
        Url::parse(&base_url)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL this client resolves requests against, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL a request resolves to: `<base>/<project><endpoint>`.
    fn request_url<R: ApiRequest>(&self, request: &R) -> String {
        format!(
            "{}/{}{}",
            self.base_url,
            request.project_name(),
            request.endpoint_path()
        )
    }

    /// Execute `request` and parse the response it defines.
    ///
    /// Non-2xx statuses and bodies that are not JSON fail before the request
    /// gets to see the response.
    pub async fn perform<R: ApiRequest>(&self, request: &R) -> ApiResult<R::Response> {
        let url = self.request_url(request);
        debug!(
            url = %url,
            method = ?request.method(),
            "sending snapshot API request"
        );

        let mut builder = match request.method() {
            RequestMethod::Get => self.client.get(&url),
            RequestMethod::Post => self.client.post(&url),
        };
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::unexpected_status(
                status.as_u16(),
                request.endpoint_path(),
            ));
        }

        let text = response.text().await?;
        let json: Value = serde_json::from_str(&text)
            .map_err(|e| ApiError::decode(request.endpoint_path(), e))?;
        request.parse_response(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::push::PushSnapshotRequest;
    use crate::version::{SnapshotEntry, SnapshotVersionRequest};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};
    use wlgb_snapshot::{CandidateSnapshot, DescriptorBuilder, DirectorySnapshot, SnapshotFile};

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let result = SnapshotApi::new("not a url");
        assert!(matches!(result, Err(ApiError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let api = SnapshotApi::new("http://wlgb.example.com/").unwrap();
        assert_eq!(api.base_url(), "http://wlgb.example.com");
    }

    #[tokio::test]
    async fn test_get_versioned_snapshot() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/proj1/snapshots/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "files": [
                    { "name": "main.tex", "content": "\\documentclass{article}" },
                    { "name": "fig.png", "url": "http://assets.example.com/fig.png" }
                ]
            })))
            .mount(&server)
            .await;

        let api = SnapshotApi::new(server.uri()).unwrap();
        let snapshot = api
            .perform(&SnapshotVersionRequest::new("proj1", 7))
            .await
            .unwrap();

        assert_eq!(snapshot.files.len(), 2);
        assert!(matches!(
            &snapshot.files[0],
            SnapshotEntry::Inline { name, .. } if name == "main.tex"
        ));
        assert!(matches!(
            &snapshot.files[1],
            SnapshotEntry::External { name, .. } if name == "fig.png"
        ));
    }

    #[tokio::test]
    async fn test_push_snapshot_round_trip() {
        let current = DirectorySnapshot::from_files(vec![
            SnapshotFile::new("a.tex", "v2"),
            SnapshotFile::new("b.tex", "v1"),
        ]);
        let previous = DirectorySnapshot::from_files(vec![
            SnapshotFile::new("a.tex", "v1"),
            SnapshotFile::new("b.tex", "v1"),
        ]);
        let candidate = CandidateSnapshot::new("proj1", 5, current, &previous);
        let descriptor =
            DescriptorBuilder::new("http://postback.example.com").build(&candidate, "K42");
        let request = PushSnapshotRequest::new("proj1", &descriptor).unwrap();

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/proj1/snapshots"))
            .and(body_json(json!({
                "latestVerId": 5,
                "files": [
                    {
                        "name": "a.tex",
                        "url": "http://postback.example.com/proj1/a.tex?key=K42"
                    },
                    { "name": "b.tex" }
                ],
                "postbackUrl": "http://postback.example.com/proj1/K42/postback"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "code": "accepted" })))
            .mount(&server)
            .await;

        let api = SnapshotApi::new(server.uri()).unwrap();
        let outcome = api.perform(&request).await.unwrap();
        assert!(outcome.is_accepted());
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/proj1/snapshots/7"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let api = SnapshotApi::new(server.uri()).unwrap();
        let result = api.perform(&SnapshotVersionRequest::new("proj1", 7)).await;

        assert!(matches!(
            result,
            Err(ApiError::UnexpectedStatus { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn test_non_json_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/proj1/latest/verid"))
            .respond_with(ResponseTemplate::new(200).set_body_string("oops"))
            .mount(&server)
            .await;

        let api = SnapshotApi::new(server.uri()).unwrap();
        let result = api
            .perform(&crate::latest::LatestVersionRequest::new("proj1"))
            .await;

        assert!(matches!(result, Err(ApiError::Decode { .. })));
    }
}
