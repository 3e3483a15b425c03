//! Client configuration.
//!
//! Configuration is read from the environment with working defaults, so an
//! embedding application can run against a local backend without any setup.
//! Invalid overrides fall back to the default with a warning rather than
//! aborting start-up.

use std::env;
use std::time::Duration;

use tracing::warn;
use url::Url;

/// Environment variable overriding the REST base URL.
pub const API_URL_VAR: &str = "ROADTRIP_API_URL";
/// Environment variable overriding the session bootstrap endpoint.
pub const AUTH_URL_VAR: &str = "ROADTRIP_AUTH_URL";

const DEFAULT_API_URL: &str = "http://localhost:8000/api";
const DEFAULT_AUTH_URL: &str = "http://localhost:8000/sanctum/csrf-cookie";

/// Fixed per-request timeout applied to every backend call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for the outbound HTTP adapter.
///
/// # Examples
/// ```
/// use roadtrip_client::ClientConfig;
///
/// let config = ClientConfig::from_env();
/// assert!(config.api_base_url.as_str().starts_with("http"));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the REST resources (`/trips`, `/destinations`, ...).
    pub api_base_url: Url,
    /// Cross-origin endpoint fetched once to obtain the session cookie.
    pub auth_bootstrap_url: Url,
    /// Per-request timeout.
    pub request_timeout: Duration,
}

impl ClientConfig {
    /// Build a configuration from explicit endpoints.
    #[must_use]
    pub fn new(api_base_url: Url, auth_bootstrap_url: Url) -> Self {
        Self {
            api_base_url,
            auth_bootstrap_url,
            request_timeout: REQUEST_TIMEOUT,
        }
    }

    /// Read the configuration from the environment.
    ///
    /// `ROADTRIP_API_URL` and `ROADTRIP_AUTH_URL` override the defaults;
    /// unparsable values are ignored with a warning.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(
            url_from_env(API_URL_VAR, DEFAULT_API_URL),
            url_from_env(AUTH_URL_VAR, DEFAULT_AUTH_URL),
        )
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn url_from_env(var: &str, default: &str) -> Url {
    let fallback = || {
        Url::parse(default).unwrap_or_else(|error| {
            // The defaults are compile-time constants; reaching this means
            // the constant itself is malformed.
            unreachable!("default URL {default} must parse: {error}")
        })
    };
    match env::var(var) {
        Ok(raw) => Url::parse(&raw).unwrap_or_else(|error| {
            warn!(var, value = %raw, error = %error, "ignoring unparsable URL override");
            fallback()
        }),
        Err(_) => fallback(),
    }
}
