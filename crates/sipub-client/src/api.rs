//! HTTP client for the resource API's create endpoints.
//!
//! Each resource is created with `POST <base>/<resource>` and a JSON body.
//! Any 2xx status counts as success; everything else is surfaced as
//! [`ClientError::UnexpectedStatus`] carrying the server's error text.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use sipub_core::Resource;

use crate::error::ClientError;

/// Result of a successful create-request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedResource {
    pub resource: Resource,
    pub status: u16,
    /// Identifier assigned by the server, when the response body carries one.
    pub id: Option<String>,
}

/// Echo of the created record. Only the id is of interest.
#[derive(Debug, Deserialize)]
struct CreatedBody {
    #[serde(rename = "Id", alias = "id", default)]
    id: Option<String>,
}

/// Client for the resource API.
pub struct ResourceApiClient {
    client: Client,
    base_url: Url,
}

impl ResourceApiClient {
    /// Creates a client for the API rooted at `base_url`
    /// (e.g. `http://localhost:8080`).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: a single trailing slash so `join` appends the resource
        // path instead of replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| ClientError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Full create endpoint for `resource`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] if the path cannot be joined.
    pub fn endpoint(&self, resource: Resource) -> Result<Url, ClientError> {
        self.base_url
            .join(resource.path())
            .map_err(|e| ClientError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }

    /// Sends one create-request for `resource` with `payload` as the body.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure or timeout.
    /// - [`ClientError::UnexpectedStatus`] on a non-2xx status; `body` holds
    ///   the trimmed response text when the server sent any.
    pub async fn create<T>(
        &self,
        resource: Resource,
        payload: &T,
    ) -> Result<CreatedResource, ClientError>
    where
        T: Serialize + ?Sized,
    {
        let url = self.endpoint(resource)?;
        tracing::debug!(%resource, %url, "sending create-request");

        // `.json()` sets `Content-Type: application/json`.
        let response = self.client.post(url.clone()).json(payload).send().await?;
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            let trimmed = body.trim();
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
                body: (!trimmed.is_empty()).then(|| trimmed.to_owned()),
            });
        }

        let id = serde_json::from_str::<CreatedBody>(&body)
            .ok()
            .and_then(|b| b.id);

        Ok(CreatedResource {
            resource,
            status: status.as_u16(),
            id,
        })
    }
}
