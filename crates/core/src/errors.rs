//! Error types and retry classification for the refresh pipeline.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TickerError>;

/// Errors that can occur while refreshing or rendering the price.
///
/// Each variant is classified into a [`RetryClass`] via
/// [`retry_class`](Self::retry_class), which determines how the refresh
/// state machine responds to the failure.
#[derive(Error, Debug)]
pub enum TickerError {
    /// The selected provider requires an API key and none is configured.
    /// Terminal until the user saves a key in settings.
    #[error("No API key configured")]
    MissingCredential,

    /// A network-level failure: the request never produced an HTTP response.
    /// Schedules exactly one deferred retry.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status. Not retried.
    #[error("HTTP {status} from {provider}")]
    Http {
        /// HTTP status code returned by the endpoint
        status: u16,
        /// The provider that returned the status
        provider: String,
    },

    /// The response body could not be parsed into a price. Not retried.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The key-value store failed to read or write.
    #[error("Store error: {0}")]
    Store(String),

    /// Icon or badge composition failed. Always resolves to the fixed
    /// red fallback icon at the render boundary.
    #[error("Render error: {0}")]
    Render(String),
}

/// Classification for retry policy.
///
/// | Class | Behavior |
/// |-------|----------|
/// | `Never` | Render the matching display state, do not retry |
/// | `ScheduleRetry` | Schedule one deferred re-entry into the fetch decision |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetryClass {
    /// Don't retry - the error is terminal for this refresh cycle.
    Never,

    /// Schedule a single one-shot retry after the fixed delay.
    ///
    /// Used for network-level failures where the request never reached the
    /// endpoint. Each failure independently schedules one retry; there is no
    /// backoff and no retry counter.
    ScheduleRetry,
}

impl TickerError {
    /// Returns the retry classification for this error.
    ///
    /// Only network-level failures are retried; HTTP-level failures, parse
    /// failures and configuration problems render a sentinel state instead.
    pub fn retry_class(&self) -> RetryClass {
        match self {
            Self::Network(_) => RetryClass::ScheduleRetry,

            Self::MissingCredential
            | Self::Http { .. }
            | Self::Parse(_)
            | Self::Store(_)
            | Self::Render(_) => RetryClass::Never,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_never_retries() {
        let error = TickerError::MissingCredential;
        assert_eq!(error.retry_class(), RetryClass::Never);
    }

    #[test]
    fn test_http_failure_never_retries() {
        let error = TickerError::Http {
            status: 500,
            provider: "GOLDAPI".to_string(),
        };
        assert_eq!(error.retry_class(), RetryClass::Never);
    }

    #[test]
    fn test_parse_failure_never_retries() {
        let error = TickerError::Parse("missing price field".to_string());
        assert_eq!(error.retry_class(), RetryClass::Never);
    }

    #[test]
    fn test_store_failure_never_retries() {
        let error = TickerError::Store("disk full".to_string());
        assert_eq!(error.retry_class(), RetryClass::Never);
    }

    #[test]
    fn test_error_display() {
        let error = TickerError::Http {
            status: 429,
            provider: "GOLDAPI".to_string(),
        };
        assert_eq!(format!("{}", error), "HTTP 429 from GOLDAPI");

        let error = TickerError::MissingCredential;
        assert_eq!(format!("{}", error), "No API key configured");
    }
}
