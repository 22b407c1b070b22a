//! Model gateway error taxonomy.
//!
//! The gateway is a single synchronous text-in/text-out call; what it does
//! have is a typed failure classification so callers can distinguish
//! transport problems from provider rejections instead of catching one
//! opaque exception.

use thiserror::Error;

/// Errors from the external text-generation call.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The HTTP request never completed (DNS, connect, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The provider throttled the request.
    #[error("rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    /// The API key was rejected.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// The provider answered 2xx but the body was not the expected shape.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Any other non-success status from the provider.
    #[error("provider error (HTTP {status}): {message}")]
    Provider { status: u16, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_error_display() {
        let err = GatewayError::Provider {
            status: 503,
            message: "overloaded".to_string(),
        };
        assert_eq!(err.to_string(), "provider error (HTTP 503): overloaded");
    }

    #[test]
    fn test_rate_limited_display() {
        let err = GatewayError::RateLimited {
            retry_after_ms: Some(1500),
        };
        assert!(err.to_string().contains("1500"));
    }
}
