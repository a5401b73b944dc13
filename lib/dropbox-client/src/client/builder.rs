use http::Uri;

use super::auth::SecureString;
use super::{Client, Error};

/// Default base URI for RPC endpoints.
const DEFAULT_BASE_URI: &str = "https://api.dropboxapi.com";

/// Builder for [`Client`] instances.
///
/// # Default Configuration
///
/// - **Base URI**: `https://api.dropboxapi.com`
/// - **HTTP client**: a fresh `reqwest::Client` with its defaults
/// - **Access token**: none — [`with_access_token`](Self::with_access_token)
///   must be called before [`build`](Self::build)
///
/// # Example
///
/// ```rust,no_run
/// use dropbox_client::Client;
///
/// # fn example() -> Result<(), dropbox_client::Error> {
/// let client = Client::builder()
///     .with_access_token(std::env::var("DROPBOX_ACCESS_TOKEN").unwrap_or_default())
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClientBuilder {
    http: Option<reqwest::Client>,
    base_uri: Option<Uri>,
    access_token: Option<SecureString>,
}

impl ClientBuilder {
    /// Sets the OAuth 2 access token sent as a bearer `Authorization` header.
    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<SecureString>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Overrides the base URI; useful for pointing at a mock server in tests.
    #[must_use]
    pub fn with_base_uri(mut self, base_uri: Uri) -> Self {
        self.base_uri = Some(base_uri);
        self
    }

    /// Supplies a pre-configured `reqwest::Client` (custom timeouts, proxy,
    /// connection pooling).
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Builds the final [`Client`] with all configured settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingAccessToken`] if no access token was
    /// configured.
    pub fn build(self) -> Result<Client, Error> {
        let access_token = self.access_token.ok_or(Error::MissingAccessToken)?;
        let base_uri = self
            .base_uri
            .unwrap_or_else(|| Uri::from_static(DEFAULT_BASE_URI));

        Ok(Client {
            http: self.http.unwrap_or_default(),
            base_uri,
            access_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_requires_an_access_token() {
        let error = ClientBuilder::default()
            .build()
            .expect_err("token is mandatory");
        assert!(matches!(error, Error::MissingAccessToken));
    }

    #[test]
    fn build_defaults_to_the_public_api_host() {
        let client = ClientBuilder::default()
            .with_access_token("sl.token")
            .build()
            .expect("valid configuration");
        assert_eq!(client.base_uri.to_string(), "https://api.dropboxapi.com/");
    }

    #[test]
    fn build_accepts_a_base_uri_override() {
        let client = ClientBuilder::default()
            .with_access_token("sl.token")
            .with_base_uri(Uri::from_static("http://127.0.0.1:8080"))
            .build()
            .expect("valid configuration");
        assert_eq!(client.base_uri.to_string(), "http://127.0.0.1:8080/");
    }
}
