//! HTTP client and RPC dispatch.

use headers::{ContentType, HeaderMapExt};
use http::Uri;
use http::header::AUTHORIZATION;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::endpoint::Endpoint;

mod auth;
pub use self::auth::SecureString;

mod builder;
pub use self::builder::ClientBuilder;

mod error;
pub use self::error::Error;

/// Maximum number of body bytes kept when reporting an unexpected status.
const BODY_MAX_LENGTH: usize = 1024;

/// Client for the Dropbox HTTP RPC API v2.
///
/// Holds the HTTP transport, the API base URI, and the access token. Cloning
/// is cheap; the underlying connection pool is shared. Use
/// [`Client::builder`] to create instances.
///
/// # Example
///
/// ```rust,no_run
/// use dropbox_client::{Client, ListFolderOptions};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::builder()
///     .with_access_token("my-access-token")
///     .build()?;
///
/// let folder = client
///     .list_folder("/photos", ListFolderOptions::default())
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) http: reqwest::Client,
    pub(crate) base_uri: Uri,
    pub(crate) access_token: SecureString,
}

impl Client {
    /// Starts building a new client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }
}

/// Error envelope the service returns with a 409 status.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope<E> {
    #[serde(default)]
    error_summary: String,
    error: E,
}

impl Client {
    /// Issues one RPC request against `endpoint` and decodes the outcome.
    ///
    /// Exactly one request is sent per invocation; there is no retry at this
    /// layer. A 200 body decodes into the endpoint's result type; a 409 body
    /// decodes the error envelope into its domain error type; any other
    /// status is reported as [`Error::UnexpectedStatusCode`].
    pub(crate) async fn rpc<R, E>(
        &self,
        endpoint: &Endpoint<R, E>,
        payload: Value,
    ) -> Result<R, Error>
    where
        R: DeserializeOwned,
        E: DeserializeOwned + Into<Error>,
    {
        let url = self.endpoint_url(endpoint.path)?;
        let body = serde_json::to_vec(&payload)?;

        let mut request = reqwest::Request::new(endpoint.method.clone(), url);
        request
            .headers_mut()
            .insert(AUTHORIZATION, auth::bearer_header(&self.access_token)?);
        request.headers_mut().typed_insert(ContentType::json());
        *request.body_mut() = Some(reqwest::Body::from(body));

        debug!(method = %endpoint.method, path = endpoint.path, "sending...");
        let response = self.http.execute(request).await?;
        debug!(status = %response.status(), "...receiving");

        let status_code = response.status().as_u16();
        let body = response.text().await?;
        match status_code {
            200 => decode_json(&body),
            409 => {
                let envelope: ErrorEnvelope<E> = decode_json(&body)?;
                debug!(summary = %envelope.error_summary, "rpc returned a domain error");
                Err(envelope.error.into())
            }
            status_code => Err(Error::UnexpectedStatusCode {
                status_code,
                body: truncated(body),
            }),
        }
    }

    fn endpoint_url(&self, path: &str) -> Result<Url, Error> {
        let base_uri = self.base_uri.to_string();
        let url = format!(
            "{}/{}",
            base_uri.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Ok(url.parse::<Url>()?)
    }
}

/// Decodes a response body, reporting the JSON path on failure.
fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
    let mut deserializer = serde_json::Deserializer::from_str(body);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|err| Error::Json {
        path: err.path().to_string(),
        error: err.into_inner(),
        body: body.to_string(),
    })
}

fn truncated(text: String) -> String {
    if text.len() > BODY_MAX_LENGTH {
        // Clamp to a char boundary; the body is remote-controlled and may
        // put a multibyte character across the cut.
        let mut end = BODY_MAX_LENGTH;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... (truncated)", &text[..end])
    } else {
        text
    }
}
