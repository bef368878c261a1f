use sipub_core::{CoreError, Resource};
use thiserror::Error;

/// Errors returned by the HTTP clients.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from {url}{}", body_suffix(.body.as_deref()))]
    UnexpectedStatus {
        status: u16,
        url: String,
        body: Option<String>,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

fn body_suffix(body: Option<&str>) -> String {
    body.map(|b| format!(": {b}")).unwrap_or_default()
}

/// Errors from the map-click enrichment flow.
#[derive(Debug, Error)]
pub enum EnrichError {
    /// The reverse-geocode call failed, timed out, or returned non-JSON.
    #[error("reverse geocoding failed: {0}")]
    GeocodeService(#[from] ClientError),

    /// The confirm action ran before any map click.
    #[error("no location selected; click on the map first")]
    NoLocationSelected,
}

/// Validation failures that stop a submission before any request is sent.
///
/// Wraps [`CoreError::MalformedCoordinateInput`] or
/// [`CoreError::InvalidNumber`].
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Invalid(#[from] CoreError),
}

/// Failure of a single create-request. Other resources are unaffected.
#[derive(Debug, Error)]
#[error("{resource} submission failed: {detail}")]
pub struct SubmissionFailed {
    pub resource: Resource,
    pub detail: String,
}
