//! LiquidPlanner API client.
//!
//! Low-level HTTP client that handles authentication, URL composition and
//! the throttle-aware request executors. The per-route methods live in
//! `resources`; typed operations are implemented via traits on model types.

use std::env;
use std::fmt::Display;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use reqwest::{header::RETRY_AFTER, Client, Method, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::config::{ClientConfig, DEFAULT_API_URL};
use crate::error::{LiquidPlannerError, Result};
use crate::throttle::{is_throttled, ThrottlePolicy};

const USER_AGENT: &str = concat!("liquidplanner-rs/", env!("CARGO_PKG_VERSION"));

/// Low-level LiquidPlanner API client.
///
/// Holds the workspace URL and credentials and exposes one method per REST
/// route (see the crate docs for the full list). Every request carries
/// basic-auth credentials and is retried according to the configured
/// [`ThrottlePolicy`] when the service reports throttling.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool and share the debug flag.
///
/// # Example
///
/// ```no_run
/// use liquidplanner::LiquidPlannerClient;
///
/// # fn example() -> liquidplanner::Result<()> {
/// // Create from environment variables
/// let client = LiquidPlannerClient::from_env()?;
///
/// // Or configure manually
/// let client = LiquidPlannerClient::new(12345, "you@example.com", "secret")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct LiquidPlannerClient {
    http: Client,
    api_url: Arc<Url>,
    workspace_url: Arc<Url>,
    email: String,
    password: String,
    throttle: ThrottlePolicy,
    debug: Arc<AtomicBool>,
}

impl std::fmt::Debug for LiquidPlannerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiquidPlannerClient")
            .field("workspace_url", &self.workspace_url.as_str())
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl LiquidPlannerClient {
    /// Create a client from environment variables.
    ///
    /// Reads `LIQUIDPLANNER_WORKSPACE_ID`, `LIQUIDPLANNER_EMAIL` and
    /// `LIQUIDPLANNER_PASSWORD`, plus optionally `LIQUIDPLANNER_API_URL`
    /// (defaults to `https://app.liquidplanner.com/api`).
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is not set.
    pub fn from_env() -> Result<Self> {
        let workspace_id = required_var("LIQUIDPLANNER_WORKSPACE_ID")?;
        let email = required_var("LIQUIDPLANNER_EMAIL")?;
        let password = required_var("LIQUIDPLANNER_PASSWORD")?;

        let api_url =
            env::var("LIQUIDPLANNER_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self::with_config(
            workspace_id,
            &email,
            &password,
            ClientConfig::default().api_url(api_url),
        )
    }

    /// Create a client for a workspace with the default configuration.
    ///
    /// No network call is made.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(workspace_id: impl Display, email: &str, password: &str) -> Result<Self> {
        Self::with_config(workspace_id, email, password, ClientConfig::default())
    }

    /// Create a client with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the API URL is invalid or the HTTP client cannot
    /// be built.
    pub fn with_config(
        workspace_id: impl Display,
        email: &str,
        password: &str,
        config: ClientConfig,
    ) -> Result<Self> {
        let api_url = Url::parse(&config.api_url)?;
        let workspace_url = join_segments(
            &api_url,
            ["workspaces".to_string(), workspace_id.to_string()],
        )?;

        if config.accept_invalid_certs {
            tracing::warn!(
                api_url = %api_url,
                "TLS certificate verification is DISABLED; credentials can be intercepted"
            );
        }

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(LiquidPlannerError::HttpError)?;

        Ok(Self {
            http,
            api_url: Arc::new(api_url),
            workspace_url: Arc::new(workspace_url),
            email: email.to_string(),
            password: password.to_string(),
            throttle: config.throttle,
            debug: Arc::new(AtomicBool::new(config.debug)),
        })
    }

    /// The API root (`.../api`).
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// The workspace root (`.../api/workspaces/<id>`).
    pub fn workspace_url(&self) -> &Url {
        &self.workspace_url
    }

    pub fn throttle_policy(&self) -> &ThrottlePolicy {
        &self.throttle
    }

    /// Toggle debug diagnostics for this client and its clones.
    pub fn set_debug(&self, debug: bool) {
        self.debug.store(debug, Ordering::Relaxed);
    }

    pub fn is_debug(&self) -> bool {
        self.debug.load(Ordering::Relaxed)
    }

    /// URL of a route under the API root, such as `["account"]`.
    pub fn api_endpoint<I, S>(&self, segments: I) -> Result<Url>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        join_segments(&self.api_url, segments)
    }

    /// URL of a route under the workspace root, with an optional query.
    pub fn workspace_endpoint<I, S>(&self, segments: I, query: &crate::Query) -> Result<Url>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut url = join_segments(&self.workspace_url, segments)?;
        query.apply_to(&mut url);
        Ok(url)
    }

    /// Make a GET request and decode the JSON body.
    #[tracing::instrument(skip(self, url), fields(url = %url))]
    pub async fn get(&self, url: Url) -> Result<Value> {
        self.execute(Method::GET, url, None).await?.decode()
    }

    /// Make a POST request with a JSON body and decode the JSON response.
    #[tracing::instrument(skip(self, url, body), fields(url = %url))]
    pub async fn post<B: Serialize + ?Sized>(&self, url: Url, body: &B) -> Result<Value> {
        let body = serde_json::to_value(body)?;
        self.execute(Method::POST, url, Some(&body)).await?.decode()
    }

    /// Make a DELETE request and return the raw response body.
    #[tracing::instrument(skip(self, url), fields(url = %url))]
    pub async fn delete(&self, url: Url) -> Result<String> {
        Ok(self.execute(Method::DELETE, url, None).await?.body)
    }

    /// Send a request, retrying while the service reports throttling.
    async fn execute(&self, method: Method, url: Url, body: Option<&Value>) -> Result<RawResponse> {
        let mut throttled = 0u32;

        loop {
            let mut request = self
                .http
                .request(method.clone(), url.clone())
                .basic_auth(&self.email, Some(&self.password));
            if let Some(body) = body {
                request = request.json(body);
            }

            let response = request.send().await.map_err(LiquidPlannerError::HttpError)?;
            let status = response.status();
            let retry_after = retry_after(&response);
            let text = response.text().await.map_err(LiquidPlannerError::HttpError)?;

            if !is_throttled(status, &text) {
                self.trace_response(&method, &url, status);
                return Ok(RawResponse { status, body: text });
            }

            throttled += 1;
            if throttled > self.throttle.max_retries {
                tracing::warn!(
                    %method,
                    %url,
                    attempts = throttled,
                    "still throttled after exhausting retry budget"
                );
                return Err(LiquidPlannerError::Throttled {
                    attempts: throttled,
                });
            }

            let delay = self.throttle.delay_with_hint(throttled, retry_after);
            self.trace_throttle(&method, &url, throttled, delay);
            tokio::time::sleep(delay).await;
        }
    }

    fn trace_response(&self, method: &Method, url: &Url, status: StatusCode) {
        if self.is_debug() {
            tracing::info!(%method, %url, status = status.as_u16(), "LiquidPlanner response");
        } else {
            tracing::debug!(%method, %url, status = status.as_u16(), "LiquidPlanner response");
        }
    }

    fn trace_throttle(&self, method: &Method, url: &Url, attempt: u32, delay: Duration) {
        let delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        if self.is_debug() {
            tracing::info!(%method, %url, attempt, delay_ms, "throttled, backing off");
        } else {
            tracing::debug!(%method, %url, attempt, delay_ms, "throttled, backing off");
        }
    }
}

/// Status and body of a completed, non-throttled request.
struct RawResponse {
    status: StatusCode,
    body: String,
}

impl RawResponse {
    /// Empty bodies decode to `Null`; anything else must be JSON.
    fn decode(self) -> Result<Value> {
        if self.body.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&self.body).map_err(|source| LiquidPlannerError::DecodeError {
            status: self.status.as_u16(),
            body: self.body,
            source,
        })
    }
}

fn required_var(name: &str) -> Result<String> {
    env::var(name).map_err(|_| {
        LiquidPlannerError::ConfigMissing(format!("{name} environment variable not set"))
    })
}

/// Append percent-encoded path segments to `base`.
fn join_segments<I, S>(base: &Url, segments: I) -> Result<Url>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| {
            LiquidPlannerError::UrlError(url::ParseError::RelativeUrlWithCannotBeABaseBase)
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

fn retry_after(response: &Response) -> Option<Duration> {
    response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
        .map(Duration::from_secs)
}
