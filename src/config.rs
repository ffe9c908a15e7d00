//! Client configuration.

use std::time::Duration;

use crate::throttle::ThrottlePolicy;

/// Root of the LiquidPlanner API.
pub const DEFAULT_API_URL: &str = "https://app.liquidplanner.com/api";

/// Per-request timeout when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Settings for a [`LiquidPlannerClient`](crate::LiquidPlannerClient).
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use liquidplanner::{ClientConfig, ThrottlePolicy};
///
/// let config = ClientConfig::default()
///     .api_url("https://app.liquidplanner.com/api")
///     .throttle(ThrottlePolicy::fixed(Duration::from_secs(15), 4))
///     .debug(true);
/// assert!(!config.accepts_invalid_certs());
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub(crate) api_url: String,
    pub(crate) throttle: ThrottlePolicy,
    pub(crate) timeout: Duration,
    pub(crate) accept_invalid_certs: bool,
    pub(crate) debug: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            throttle: ThrottlePolicy::default(),
            timeout: DEFAULT_TIMEOUT,
            accept_invalid_certs: false,
            debug: false,
        }
    }
}

impl ClientConfig {
    /// API root; workspace URLs are derived as `<root>/workspaces/<id>`.
    #[must_use]
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Backoff applied when the service reports throttling.
    #[must_use]
    pub fn throttle(mut self, policy: ThrottlePolicy) -> Self {
        self.throttle = policy;
        self
    }

    /// Timeout for each individual request.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Disable TLS certificate verification.
    ///
    /// This exposes every request, credentials included, to interception.
    /// Only use it against test servers with self-signed certificates.
    #[must_use]
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Log request diagnostics at `info` instead of `debug`.
    #[must_use]
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn throttle_policy(&self) -> &ThrottlePolicy {
        &self.throttle
    }

    pub fn accepts_invalid_certs(&self) -> bool {
        self.accept_invalid_certs
    }
}
