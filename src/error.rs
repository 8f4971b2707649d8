//! Error types for the Maccas API client.

use std::fmt;

use http::StatusCode;
use thiserror::Error;

/// Which token an operation required.
///
/// The API uses two bearer tokens: a short-lived login token from the
/// security auth exchange, and a customer auth token from login or refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Token from [`security_auth_token`](crate::MaccasClient::security_auth_token).
    Login,
    /// Access token from customer login or refresh.
    Auth,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Login => f.write_str("login"),
            TokenKind::Auth => f.write_str("auth"),
        }
    }
}

/// Errors that can occur when talking to the API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request failed inside the middleware stack or on the wire.
    #[error(transparent)]
    Middleware(#[from] reqwest_middleware::Error),

    /// The request failed at the HTTP layer, including JSON decoding of the
    /// response body.
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// An operation needed a token that has not been set on the client.
    #[error("no {kind} token set")]
    MissingToken {
        /// The token the operation required.
        kind: TokenKind,
    },
}

impl ClientError {
    /// HTTP status attached to the underlying error, if any.
    ///
    /// Middleware-originated errors and missing tokens carry no status.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Middleware(reqwest_middleware::Error::Reqwest(e)) => e.status(),
            ClientError::Middleware(reqwest_middleware::Error::Middleware(_)) => None,
            ClientError::Request(e) => e.status(),
            ClientError::MissingToken { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_message() {
        let err = ClientError::MissingToken { kind: TokenKind::Auth };
        assert_eq!(err.to_string(), "no auth token set");

        let err = ClientError::MissingToken { kind: TokenKind::Login };
        assert_eq!(err.to_string(), "no login token set");
    }

    #[test]
    fn test_missing_token_has_no_status() {
        let err = ClientError::MissingToken { kind: TokenKind::Auth };
        assert!(err.status().is_none());
    }
}
