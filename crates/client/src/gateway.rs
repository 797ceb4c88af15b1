//! Rental API client.
//!
//! The rental data lives in a spreadsheet exposed through a small read-only
//! web API. Every call is a `GET` with an `action` name, the spreadsheet id
//! and action-specific parameters, answered by a JSON envelope:
//!
//! ```json
//! { "status": "ok", "data": [ ... ] }
//! { "status": "error", "message": "..." }
//! ```
//!
//! Failures are returned as [`GatewayError`] and logged here, so callers can
//! tell "nothing found" apart from "could not ask".

use std::time::Duration;

use container_portal_core::{ContainerRecord, Phone, RecordSet};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::instrument;
use url::Url;

use crate::config::PortalConfig;

/// Action returning every rental registered to a phone number.
pub const ACTION_CONTAINERS_BY_PHONE: &str = "getContainersByPhone";

/// Status value of a failed envelope.
const ENVELOPE_ERROR: &str = "error";

/// Errors that can occur when calling the rental API.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// HTTP request failed (connection, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API answered with a non-success HTTP status.
    #[error("API error: {status} - {message}")]
    Status { status: u16, message: String },

    /// API answered with an error envelope.
    #[error("API reported an error: {0}")]
    Api(String),

    /// Response body was not a valid envelope.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Outcome of looking up a customer's rentals.
#[derive(Debug)]
pub enum Lookup {
    /// At least one rental is registered to the phone number.
    Found(RecordSet),
    /// The API answered, but nothing is registered to the phone number.
    NotFound,
    /// The API could not be reached or answered with an error.
    Unavailable(GatewayError),
}

/// Source of customer rental records.
///
/// Implemented by [`ApiGateway`]; the login flow only depends on this trait.
pub trait RecordSource {
    /// Look up all rentals registered to `phone`.
    fn containers_by_phone(&self, phone: &Phone) -> impl Future<Output = Lookup> + Send;
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    status: String,
    data: Option<T>,
    #[serde(default)]
    message: Option<String>,
}

/// Client for the rental spreadsheet API.
#[derive(Debug, Clone)]
pub struct ApiGateway {
    client: reqwest::Client,
    endpoint: Url,
    sheet_id: String,
}

impl ApiGateway {
    /// Create a gateway from the portal configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &PortalConfig) -> Result<Self, GatewayError> {
        Self::with_endpoint(
            config.api_url.clone(),
            config.sheet_id.clone(),
            config.request_timeout,
        )
    }

    /// Create a gateway for an explicit endpoint and spreadsheet.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn with_endpoint(
        endpoint: Url,
        sheet_id: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint,
            sheet_id: sheet_id.into(),
        })
    }

    /// Build the request URL for an action.
    ///
    /// `action` and `sheetId` always come first; `params` follow in order.
    #[must_use]
    pub fn request_url(&self, action: &str, params: &[(&str, &str)]) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("action", action)
            .append_pair("sheetId", &self.sheet_id)
            .extend_pairs(params);
        url
    }

    /// Call an action and return the envelope's `data` payload.
    ///
    /// A success envelope without `data` yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Http` on network failures.
    /// Returns `GatewayError::Status` if the API answers with a non-success status.
    /// Returns `GatewayError::Api` if the envelope is flagged as an error.
    /// Returns `GatewayError::Parse` if the body is not a valid envelope.
    #[instrument(skip(self, params))]
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        action: &str,
        params: &[(&str, &str)],
    ) -> Result<Option<T>, GatewayError> {
        let result = self.send(action, params).await;
        if let Err(ref e) = result {
            tracing::error!(error = %e, "Failed to fetch data");
        }
        result
    }

    /// Call an action whose payload is a list of container records.
    ///
    /// # Errors
    ///
    /// See [`ApiGateway::fetch`].
    pub async fn fetch_records(
        &self,
        action: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<ContainerRecord>, GatewayError> {
        self.fetch::<Vec<ContainerRecord>>(action, params)
            .await
            .map(Option::unwrap_or_default)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        action: &str,
        params: &[(&str, &str)],
    ) -> Result<Option<T>, GatewayError> {
        let url = self.request_url(action, params);
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let envelope: Envelope<T> = serde_json::from_str(&body)?;

        if envelope.status == ENVELOPE_ERROR {
            return Err(GatewayError::Api(envelope.message.unwrap_or_default()));
        }

        tracing::debug!(status = %envelope.status, "Envelope received");
        Ok(envelope.data)
    }
}

impl RecordSource for ApiGateway {
    async fn containers_by_phone(&self, phone: &Phone) -> Lookup {
        match self
            .fetch_records(ACTION_CONTAINERS_BY_PHONE, &[("phone", phone.as_str())])
            .await
        {
            Ok(records) if records.is_empty() => Lookup::NotFound,
            Ok(records) => Lookup::Found(RecordSet::new(records)),
            Err(e) => Lookup::Unavailable(e),
        }
    }
}
