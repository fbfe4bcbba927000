// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster API client for namespaces.

use crate::config::Config;
use crate::error::{Result, VigilError};
use crate::types::Namespace;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Failure modes of a namespace fetch.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The cluster has no namespace with the requested id.
    #[error("Namespace not found")]
    NotFound,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid resource URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("API returned {status}: {message}")]
    Api { status: u16, message: String },
}

/// Read access to the namespaces of one cluster.
///
/// Fetches must be idempotent; the wait loop repeats them freely.
#[async_trait]
pub trait NamespaceClient {
    /// Fetch a namespace by id, `FetchError::NotFound` when the cluster
    /// does not know the id.
    async fn namespace_by_id(&self, id: &str) -> std::result::Result<Namespace, FetchError>;
}

/// `NamespaceClient` backed by the Rancher v3 cluster API.
pub struct HttpNamespaceClient {
    http: reqwest::Client,
    base: Url,
    token: String,
}

impl HttpNamespaceClient {
    /// Build a client scoped to one cluster.
    pub fn new(config: &Config, cluster_id: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(config.insecure)
            .build()?;
        let base = cluster_base_url(&config.api_url, cluster_id)?;

        Ok(Self {
            http,
            base,
            token: config.token.clone(),
        })
    }
}

#[async_trait]
impl NamespaceClient for HttpNamespaceClient {
    async fn namespace_by_id(&self, id: &str) -> std::result::Result<Namespace, FetchError> {
        let url = self.base.join(&format!("namespaces/{id}"))?;
        let response = self.http.get(url).bearer_auth(&self.token).send().await?;

        match response.status() {
            status if status == StatusCode::NOT_FOUND => Err(FetchError::NotFound),
            status if status.is_success() => Ok(response.json::<Namespace>().await?),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(FetchError::Api {
                    status: status.as_u16(),
                    message: api_error_message(&body),
                })
            }
        }
    }
}

/// Cluster-scoped API root, e.g. "https://rancher.example/v3/cluster/c-abc/".
/// The trailing slash keeps later joins relative to the cluster.
fn cluster_base_url(api_url: &Url, cluster_id: &str) -> Result<Url> {
    let base = format!(
        "{}/v3/cluster/{}/",
        api_url.as_str().trim_end_matches('/'),
        cluster_id
    );
    Url::parse(&base).map_err(|e| VigilError::Endpoint(format!("{base}: {e}")))
}

/// Error body shape the API returns alongside non-2xx statuses.
#[derive(Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

/// Pull the message out of an API error body, falling back to the raw text.
fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(ApiErrorBody { message: Some(m) }) if !m.is_empty() => m,
        _ => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cluster_base_url() {
        let api = Url::parse("https://rancher.example").unwrap();
        let base = cluster_base_url(&api, "c-abc").unwrap();
        assert_eq!(base.as_str(), "https://rancher.example/v3/cluster/c-abc/");
    }

    #[test]
    fn test_cluster_base_url_tolerates_trailing_slash() {
        let api = Url::parse("https://rancher.example/").unwrap();
        let base = cluster_base_url(&api, "c-abc").unwrap();
        assert_eq!(base.as_str(), "https://rancher.example/v3/cluster/c-abc/");
    }

    #[test]
    fn test_namespace_url_join() {
        let api = Url::parse("https://rancher.example").unwrap();
        let base = cluster_base_url(&api, "c-abc").unwrap();
        let url = base.join("namespaces/ns-test").unwrap();
        assert_eq!(
            url.as_str(),
            "https://rancher.example/v3/cluster/c-abc/namespaces/ns-test"
        );
    }

    #[test]
    fn test_api_error_message_from_json_body() {
        let body = r#"{"type":"error","status":"500","message":"cluster unavailable"}"#;
        assert_eq!(api_error_message(body), "cluster unavailable");
    }

    #[test]
    fn test_api_error_message_falls_back_to_raw_body() {
        assert_eq!(api_error_message("upstream exploded"), "upstream exploded");
        assert_eq!(api_error_message(r#"{"message":""}"#), r#"{"message":""}"#);
    }
}
