use std::fmt::Debug;

use crate::files::{CreateFolderError, ListFolderError};

/// Errors that can occur when calling the API.
///
/// Three families are distinguished: usage errors are raised locally before
/// any request is sent; domain errors are decoded from the remote service's
/// error envelope; transport errors pass through from the HTTP layer
/// unchanged. All variants implement `std::error::Error`.
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum Error {
    /// HTTP client error from the underlying reqwest library.
    ///
    /// Occurs when the request fails at the network level; never retried or
    /// reinterpreted by this crate.
    Reqwest(reqwest::Error),

    /// URL parsing error when constructing the request URL.
    Url(url::ParseError),

    /// HTTP protocol error from the http crate.
    Http(http::Error),

    /// Invalid HTTP header value.
    ///
    /// Occurs when the configured access token contains characters that
    /// cannot appear in an `Authorization` header.
    InvalidHeaderValue(http::header::InvalidHeaderValue),

    /// JSON serialization error for a request payload.
    JsonValue(serde_json::Error),

    /// No access token was configured on the builder.
    #[display("No access token configured; call `ClientBuilder::with_access_token`")]
    MissingAccessToken,

    /// Caller supplied an option key the endpoint does not declare.
    ///
    /// Raised before any request is sent.
    #[display("Unrecognized option: {option}")]
    #[from(skip)]
    UnrecognizedOption {
        /// The offending option key.
        option: String,
    },

    /// Caller supplied a structurally invalid value for an option.
    ///
    /// Raised before any request is sent.
    #[display("Invalid value for option `{option}`: {value}")]
    #[from(skip)]
    InvalidOption {
        /// The option the value was supplied for.
        option: &'static str,
        /// The rejected value.
        value: serde_json::Value,
    },

    /// Response body decoding failure.
    ///
    /// Occurs when a response (success body or error envelope) cannot be
    /// parsed as the expected structure; distinct from a domain error.
    #[display("Failed to decode JSON at '{path}': {error}\n{body}")]
    #[from(skip)]
    Json {
        /// Path inside the document where decoding failed.
        path: String,
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The response body that failed to parse.
        body: String,
    },

    /// The server returned a status code this crate does not recognize.
    #[display("Unexpected status code {status_code}: {body}")]
    #[from(skip)]
    UnexpectedStatusCode {
        /// The HTTP status code received.
        status_code: u16,
        /// The response body, truncated for debugging.
        body: String,
    },

    /// The remote service rejected a `list_folder` call.
    #[display("list_folder failed: {_0}")]
    ListFolder(ListFolderError),

    /// The remote service rejected a `create_folder` call.
    #[display("create_folder failed: {_0}")]
    CreateFolder(CreateFolderError),
}

impl Error {
    /// Whether this is a usage error the caller can fix locally, without any
    /// request having been sent.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Self::MissingAccessToken | Self::UnrecognizedOption { .. } | Self::InvalidOption { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }

    #[test]
    fn usage_errors_are_classified() {
        let unrecognized = Error::UnrecognizedOption {
            option: "bogus_option".to_string(),
        };
        assert!(unrecognized.is_usage());
        assert_eq!(unrecognized.to_string(), "Unrecognized option: bogus_option");

        let invalid = Error::InvalidOption {
            option: "shared_link",
            value: serde_json::json!(42),
        };
        assert!(invalid.is_usage());
        assert_eq!(
            invalid.to_string(),
            "Invalid value for option `shared_link`: 42"
        );

        let status = Error::UnexpectedStatusCode {
            status_code: 500,
            body: "boom".to_string(),
        };
        assert!(!status.is_usage());
    }
}
