use std::fmt;

use http::HeaderValue;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::Error;

/// Secure wrapper for the access token that zeroes its memory on drop.
///
/// `Debug` output is redacted so the token cannot leak through logs.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecureString(String);

impl SecureString {
    /// Creates a new secure string from the provided value.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Returns a reference to the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecureString {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SecureString")
            .field("value", &"[REDACTED]")
            .finish()
    }
}

impl From<String> for SecureString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for SecureString {
    fn from(value: &str) -> Self {
        Self::new(value.to_string())
    }
}

/// Builds the bearer `Authorization` header value for a request.
///
/// The value is marked sensitive so it is excluded from `Debug` output of
/// the request headers.
pub(crate) fn bearer_header(token: &SecureString) -> Result<HeaderValue, Error> {
    let mut value = HeaderValue::from_str(&format!("Bearer {}", token.as_str()))?;
    value.set_sensitive(true);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_is_redacted() {
        let token = SecureString::from("sl.very-secret-token");
        let debug = format!("{token:?}");
        assert!(!debug.contains("very-secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn bearer_header_is_sensitive() {
        let token = SecureString::from("sl.token");
        let header = bearer_header(&token).expect("valid header value");
        assert!(header.is_sensitive());
        assert_eq!(header.to_str().expect("ascii"), "Bearer sl.token");
    }

    #[test]
    fn bearer_header_rejects_control_characters() {
        let token = SecureString::from("bad\ntoken");
        let error = bearer_header(&token).expect_err("newline is not a valid header byte");
        assert!(matches!(error, Error::InvalidHeaderValue(_)));
    }
}
