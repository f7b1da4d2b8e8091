// ── Core error types ──
//
// User-facing errors from shopfront-core. Consumers never see raw
// reqwest errors or JSON parse failures directly; the
// `From<shopfront_api::Error>` impl translates them.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach catalog at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Catalog request timed out")]
    Timeout,

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Not found: {identifier}")]
    NotFound { identifier: String },

    #[error("Catalog returned an unreadable response: {message}")]
    MalformedResponse { message: String },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<shopfront_api::Error> for CoreError {
    fn from(err: shopfront_api::Error) -> Self {
        let status = err.status();
        match err {
            shopfront_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status,
                    }
                }
            }
            shopfront_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            shopfront_api::Error::Tls(msg) => CoreError::Config {
                message: format!("TLS error: {msg}"),
            },
            shopfront_api::Error::Http { status: 404, message } => {
                CoreError::NotFound { identifier: message }
            }
            shopfront_api::Error::Http { message, .. } => CoreError::Api { message, status },
            shopfront_api::Error::Deserialization { message, body: _ } => {
                CoreError::MalformedResponse { message }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_404_maps_to_not_found() {
        let err: CoreError = shopfront_api::Error::Http {
            status: 404,
            message: "products/9".into(),
        }
        .into();
        assert!(matches!(err, CoreError::NotFound { ref identifier } if identifier == "products/9"));
    }

    #[test]
    fn other_statuses_keep_their_code() {
        let err: CoreError = shopfront_api::Error::Http {
            status: 502,
            message: "bad gateway".into(),
        }
        .into();
        assert!(matches!(err, CoreError::Api { status: Some(502), .. }));
    }

    #[test]
    fn deserialization_becomes_malformed_response() {
        let err: CoreError = shopfront_api::Error::Deserialization {
            message: "expected value".into(),
            body: "<html>".into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Catalog returned an unreadable response: expected value"
        );
    }
}
