//! Throttle detection and backoff policy.
//!
//! LiquidPlanner signals rate limiting with a structured body
//! (`{"type": "Error", "error": "Throttled"}`) rather than relying on the
//! status code alone. Every executor checks each response with
//! [`is_throttled`] and waits according to a [`ThrottlePolicy`] before
//! reissuing the request.

use std::time::Duration;

use rand::Rng;
use reqwest::StatusCode;
use serde_json::Value;

/// Delay LiquidPlanner asks clients to observe after a throttled request.
pub const DEFAULT_THROTTLE_DELAY: Duration = Duration::from_secs(15);

/// Bounded exponential backoff applied to throttled requests.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use liquidplanner::ThrottlePolicy;
///
/// let policy = ThrottlePolicy::fixed(Duration::from_secs(15), 3);
/// assert_eq!(policy.delay_for(1), Duration::from_secs(15));
/// assert_eq!(policy.delay_for(3), Duration::from_secs(15));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ThrottlePolicy {
    /// Wait before the first retry.
    pub initial_delay: Duration,
    /// Growth factor applied per additional retry.
    pub multiplier: f64,
    /// Upper bound on any single wait.
    pub max_delay: Duration,
    /// Retries allowed after the first throttled response.
    pub max_retries: u32,
    /// Random spread as a fraction of the delay (0.1 = ±10%).
    pub jitter: f64,
}

impl Default for ThrottlePolicy {
    fn default() -> Self {
        Self {
            initial_delay: DEFAULT_THROTTLE_DELAY,
            multiplier: 2.0,
            max_delay: Duration::from_secs(120),
            max_retries: 8,
            jitter: 0.1,
        }
    }
}

impl ThrottlePolicy {
    /// Constant delay between retries, no jitter.
    #[must_use]
    pub fn fixed(delay: Duration, max_retries: u32) -> Self {
        Self {
            initial_delay: delay,
            multiplier: 1.0,
            max_delay: delay,
            max_retries,
            jitter: 0.0,
        }
    }

    /// Never retry; the first throttled response fails the call.
    #[must_use]
    pub fn disabled() -> Self {
        Self::fixed(Duration::ZERO, 0)
    }

    /// Set the retry budget.
    #[must_use]
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Set the jitter fraction, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn with_jitter(mut self, jitter: f64) -> Self {
        self.jitter = jitter.clamp(0.0, 1.0);
        self
    }

    /// Wait before retry number `attempt` (1-based).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(i32::MAX as u32) as i32;
        let base = self.initial_delay.as_secs_f64() * self.multiplier.max(1.0).powi(exponent);
        let capped = base.min(self.max_delay.as_secs_f64());

        let spread = self.jitter.clamp(0.0, 1.0);
        let scaled = if spread > 0.0 {
            capped * rand::thread_rng().gen_range(1.0 - spread..=1.0 + spread)
        } else {
            capped
        };

        // `as_secs_f64` rounds large durations up past what `Duration` can hold.
        Duration::try_from_secs_f64(scaled)
            .unwrap_or(self.max_delay)
            .min(self.max_delay)
    }

    /// Wait before retry number `attempt`, honoring a server-sent
    /// `Retry-After` hint as a minimum. The result never exceeds
    /// `max_delay`.
    pub fn delay_with_hint(&self, attempt: u32, hint: Option<Duration>) -> Duration {
        let delay = self.delay_for(attempt);
        match hint {
            Some(hint) => delay.max(hint).min(self.max_delay),
            None => delay,
        }
    }
}

/// Check a response for LiquidPlanner's throttling signal.
pub fn is_throttled(status: StatusCode, body: &str) -> bool {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return true;
    }

    match serde_json::from_str::<Value>(body) {
        Ok(value) => is_throttle_body(&value),
        Err(_) => false,
    }
}

/// Check a decoded body for `type == "Error"` and `error == "Throttled"`.
pub fn is_throttle_body(value: &Value) -> bool {
    value.get("type").and_then(Value::as_str) == Some("Error")
        && value.get("error").and_then(Value::as_str) == Some("Throttled")
}
