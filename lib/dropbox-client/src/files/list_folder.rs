use http::Method;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value, json};

use crate::client::{Client, Error};
use crate::endpoint::{Endpoint, merge_payload};
use crate::metadata::{Metadata, SharedLinkMetadata};

pub(crate) static LIST_FOLDER: Endpoint<ListFolderResult, ListFolderError> = Endpoint::new(
    Method::POST,
    "/2/files/list_folder",
    &[
        "recursive",
        "include_media_info",
        "include_deleted",
        "shared_link",
        "include_has_explicit_shared_members",
        "include_non_downloadable_files",
        "limit",
    ],
);

/// Boolean options that default to `false` when absent from the wire bag.
///
/// Defaulting checks key presence, not truthiness: a present `false` is left
/// alone. Keep it that way if this list ever grows an option whose default
/// is not itself `false`.
const FLAG_OPTIONS: &[&str] = &[
    "recursive",
    "include_media_info",
    "include_deleted",
    "include_non_downloadable_files",
];

/// Options for [`Client::list_folder`].
///
/// Every recognized option, its type, and its default in one place. Unset
/// optional fields never reach the request payload.
///
/// # Example
///
/// ```rust
/// use dropbox_client::ListFolderOptions;
///
/// let options = ListFolderOptions::default()
///     .with_recursive(true)
///     .with_limit(50);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListFolderOptions {
    /// Apply the listing recursively to all subfolders. Defaults to `false`.
    pub recursive: bool,
    /// Set `media_info` for photo and video entries. Defaults to `false`.
    pub include_media_info: bool,
    /// Return [`DeletedMetadata`](crate::DeletedMetadata) for deleted
    /// entries instead of failing the lookup. Defaults to `false`.
    pub include_deleted: bool,
    /// Include files that cannot be downloaded directly. Defaults to `false`.
    pub include_non_downloadable_files: bool,
    /// Include a flag for files with explicit shared members. No default;
    /// absent from the payload when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_has_explicit_shared_members: Option<bool>,
    /// Approximate maximum number of results per request. No default and no
    /// local bound; the service is the authority on validity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// List the contents of a shared link instead of a path inside the
    /// user's Dropbox.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_link: Option<SharedLink>,
}

impl ListFolderOptions {
    /// Applies the listing recursively to all subfolders.
    #[must_use]
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Requests `media_info` for photo and video entries.
    #[must_use]
    pub fn with_include_media_info(mut self, include: bool) -> Self {
        self.include_media_info = include;
        self
    }

    /// Requests deleted entries instead of a lookup failure.
    #[must_use]
    pub fn with_include_deleted(mut self, include: bool) -> Self {
        self.include_deleted = include;
        self
    }

    /// Includes files that cannot be downloaded directly.
    #[must_use]
    pub fn with_include_non_downloadable_files(mut self, include: bool) -> Self {
        self.include_non_downloadable_files = include;
        self
    }

    /// Requests the explicit-shared-members flag on file entries.
    #[must_use]
    pub fn with_include_has_explicit_shared_members(mut self, include: bool) -> Self {
        self.include_has_explicit_shared_members = Some(include);
        self
    }

    /// Caps the number of results per request.
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Lists the contents of a shared link instead of a Dropbox path.
    #[must_use]
    pub fn with_shared_link(mut self, shared_link: impl Into<SharedLink>) -> Self {
        self.shared_link = Some(shared_link.into());
        self
    }
}

/// Shared-link parameter, a closed set of accepted shapes.
///
/// Either shape serializes to the one canonical wire mapping
/// `{"url": ..., "password"?: ...}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SharedLink {
    /// A raw shared-link URL.
    Url(String),
    /// An already-canonical shared-link value.
    Metadata(SharedLinkMetadata),
}

impl SharedLink {
    fn to_wire(&self) -> SharedLinkMetadata {
        match self {
            Self::Url(url) => SharedLinkMetadata::new(url.clone()),
            Self::Metadata(metadata) => metadata.clone(),
        }
    }
}

impl Serialize for SharedLink {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_wire().serialize(serializer)
    }
}

impl From<&str> for SharedLink {
    fn from(url: &str) -> Self {
        Self::Url(url.to_string())
    }
}

impl From<String> for SharedLink {
    fn from(url: String) -> Self {
        Self::Url(url)
    }
}

impl From<SharedLinkMetadata> for SharedLink {
    fn from(metadata: SharedLinkMetadata) -> Self {
        Self::Metadata(metadata)
    }
}

/// Result of a successful `list_folder` call.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListFolderResult {
    /// The entries of the folder.
    pub entries: Vec<Metadata>,
    /// Opaque cursor for continuing the listing.
    pub cursor: String,
    /// Whether more entries are available beyond this page.
    pub has_more: bool,
}

/// Domain error for `list_folder`, decoded from the service's 409 envelope.
#[derive(
    Debug, Clone, PartialEq, Eq, Deserialize, derive_more::Display, derive_more::Error,
)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum ListFolderError {
    /// The folder path could not be resolved.
    #[display("path lookup failed: {path}")]
    Path {
        /// What went wrong while resolving the path.
        path: LookupError,
    },
    /// An error this client does not recognize.
    #[display("unrecognized list_folder error")]
    #[serde(other)]
    Other,
}

/// Why a path lookup failed.
#[derive(
    Debug, Clone, PartialEq, Eq, Deserialize, derive_more::Display, derive_more::Error,
)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum LookupError {
    /// There is nothing at the given path.
    #[display("not found")]
    NotFound,
    /// The path refers to a file, not a folder.
    #[display("not a folder")]
    NotFolder,
    /// The path is not syntactically valid.
    #[display("malformed path")]
    MalformedPath,
    /// The content is not available to this account.
    #[display("restricted content")]
    RestrictedContent,
    /// A lookup error this client does not recognize.
    #[display("unrecognized lookup error")]
    #[serde(other)]
    Other,
}

/// Applies per-option defaults and coerces `shared_link` into its canonical
/// wire mapping.
fn normalize_options(options: &mut Map<String, Value>) -> Result<(), Error> {
    for flag in FLAG_OPTIONS {
        if !options.contains_key(*flag) {
            options.insert((*flag).to_string(), Value::Bool(false));
        }
    }

    // `limit` and `include_has_explicit_shared_members` pass through
    // unchanged and are never defaulted.

    if let Some(value) = options.get("shared_link") {
        let canonical = match value {
            Value::String(url) => json!({ "url": url }),
            // Only the canonical mapping passes through; an arbitrary
            // object is as invalid as a number.
            Value::Object(link) if link.contains_key("url") => value.clone(),
            other => {
                return Err(Error::InvalidOption {
                    option: "shared_link",
                    value: other.clone(),
                });
            }
        };
        options.insert("shared_link".to_string(), canonical);
    }

    Ok(())
}

/// Serializes, validates, normalizes, and merges into the request payload.
fn build_payload(path: &str, options: &ListFolderOptions) -> Result<Value, Error> {
    let mut bag = serde_json::to_value(options)?
        .as_object()
        .cloned()
        .unwrap_or_default();

    LIST_FOLDER.validate_options(&bag)?;
    normalize_options(&mut bag)?;

    Ok(merge_payload([("path", json!(path))], bag))
}

impl Client {
    /// Returns the contents of a folder.
    ///
    /// Issues exactly one `POST /2/files/list_folder` request. Pagination
    /// continuation is not covered by this binding; the returned
    /// [`cursor`](ListFolderResult::cursor) is handed back opaque.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use dropbox_client::{Client, ListFolderOptions};
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = Client::builder().with_access_token("token").build()?;
    /// let folder = client
    ///     .list_folder("/photos", ListFolderOptions::default().with_limit(50))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Usage errors are raised before any request is sent; a service-side
    /// rejection decodes into [`Error::ListFolder`]; transport failures pass
    /// through as [`Error::Reqwest`].
    pub async fn list_folder(
        &self,
        path: &str,
        options: ListFolderOptions,
    ) -> Result<ListFolderResult, Error> {
        let payload = build_payload(path, &options)?;
        self.rpc(&LIST_FOLDER, payload).await
    }
}
