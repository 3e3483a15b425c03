//! Reqwest-backed REST adapter.
//!
//! [`ApiClient`] owns transport details only: the base URL, default JSON
//! headers, the fixed 10 second timeout, the cookie jar, and HTTP error
//! classification. The resource clients ([`HttpTripClient`] and friends)
//! are thin request builders over it, one per domain port.
//!
//! Before the first request the client performs a one-time, best-effort
//! session bootstrap against the configured auth endpoint to obtain the
//! CSRF-style session cookie. Bootstrap failures are logged, never raised;
//! a later 419 response triggers a fresh bootstrap and surfaces
//! [`ApiError::SessionExpired`] without retrying the original request.

mod error;

mod destinations;
mod pois;
mod routes;
mod trips;

pub use self::destinations::HttpDestinationClient;
pub use self::pois::HttpPoiClient;
pub use self::routes::HttpRouteClient;
pub use self::trips::HttpTripClient;

use std::sync::Arc;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::OnceCell;
use tracing::{debug, warn};
use url::Url;

use self::error::{classify_status, map_transport_error};
use crate::config::ClientConfig;
use crate::domain::ports::ApiError;

/// Shared HTTP client for every resource adapter.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    auth_bootstrap_url: Url,
    bootstrapped: OnceCell<()>,
}

impl ApiClient {
    /// Build a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns the underlying error when the reqwest client cannot be
    /// constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .cookie_store(true)
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
            auth_bootstrap_url: config.auth_bootstrap_url.clone(),
            bootstrapped: OnceCell::new(),
        })
    }

    /// Convenience constructor wrapping the client in an [`Arc`] for the
    /// resource adapters to share.
    ///
    /// # Errors
    ///
    /// Returns the underlying error when the reqwest client cannot be
    /// constructed.
    pub fn shared(config: &ClientConfig) -> Result<Arc<Self>, reqwest::Error> {
        Self::new(config).map(Arc::new)
    }

    /// Absolute URL for an API path such as `/trips/3`.
    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.as_str().trim_end_matches('/'))
    }

    /// One-time session bootstrap; later calls are no-ops.
    async fn ensure_session(&self) {
        self.bootstrapped
            .get_or_init(|| async {
                self.refresh_session().await;
            })
            .await;
    }

    /// Best-effort fetch of the session cookie. Failures are logged only:
    /// the next resource call will surface its own error if the session
    /// really is unusable.
    async fn refresh_session(&self) {
        match self.http.get(self.auth_bootstrap_url.clone()).send().await {
            Ok(response) if response.status().is_success() => {
                debug!(url = %self.auth_bootstrap_url, "session bootstrap complete");
            }
            Ok(response) => {
                warn!(
                    url = %self.auth_bootstrap_url,
                    status = response.status().as_u16(),
                    "session bootstrap rejected",
                );
            }
            Err(error) => {
                warn!(url = %self.auth_bootstrap_url, error = %error, "session bootstrap failed");
            }
        }
    }

    /// Send a request and decode the JSON body.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let body = self.execute_raw(request).await?;
        serde_json::from_slice(&body).map_err(|error| ApiError::decode(error.to_string()))
    }

    /// Send a request and discard the response body.
    async fn execute_unit(&self, request: reqwest::RequestBuilder) -> Result<(), ApiError> {
        self.execute_raw(request).await.map(drop)
    }

    async fn execute_raw(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<Vec<u8>, ApiError> {
        self.ensure_session().await;
        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            let error = classify_status(status, body.as_ref());
            if matches!(error, ApiError::SessionExpired { .. }) {
                // Out-of-band refresh; the caller must resubmit.
                self.refresh_session().await;
            }
            return Err(error);
        }
        Ok(body.to_vec())
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.http.get(self.endpoint(path))).await
    }

    pub(crate) async fn get_with_query<T: DeserializeOwned, Q: Serialize + Sync>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, ApiError> {
        self.execute(self.http.get(self.endpoint(path)).query(query))
            .await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(self.http.post(self.endpoint(path)).json(body))
            .await
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ApiError> {
        self.execute(self.http.post(self.endpoint(path))).await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(self.http.put(self.endpoint(path)).json(body))
            .await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute_unit(self.http.delete(self.endpoint(path)))
            .await
    }
}
