//! HTTP client for a Nominatim-compatible reverse-geocoding endpoint.
//!
//! Wraps `reqwest` with typed response deserialization. Requests are keyed by
//! latitude/longitude and always ask for structured address details.

use std::time::Duration;

use reqwest::{Client, Url};
use sipub_core::GeocodeResult;

use crate::error::ClientError;

/// Client for the reverse-geocode endpoint.
///
/// Use [`ReverseGeocoder::new`] with the configured endpoint URL, pointing it
/// at a mock server in tests.
pub struct ReverseGeocoder {
    client: Client,
    base_url: Url,
}

impl ReverseGeocoder {
    /// Creates a client for the endpoint at `base_url`
    /// (e.g. `https://nominatim.openstreetmap.org/reverse`).
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

        let base_url = Url::parse(base_url).map_err(|e| ClientError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Looks up the address at `(lat, lng)`.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure or timeout.
    /// - [`ClientError::UnexpectedStatus`] on a non-2xx status.
    /// - [`ClientError::Deserialize`] if the body is not the expected JSON.
    pub async fn reverse(&self, lat: f64, lng: f64) -> Result<GeocodeResult, ClientError> {
        let url = self.build_url(lat, lng);
        tracing::debug!(%url, "reverse geocoding");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.ok().filter(|b| !b.trim().is_empty());
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
                body: body.map(|b| b.trim().to_owned()),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Deserialize {
            context: format!("reverse(lat={lat}, lon={lng})"),
            source: e,
        })
    }

    /// Builds the lookup URL with percent-encoded query parameters.
    fn build_url(&self, lat: f64, lng: f64) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("lat", &lat.to_string())
            .append_pair("lon", &lng.to_string())
            .append_pair("format", "json")
            .append_pair("addressdetails", "1");
        url
    }
}
