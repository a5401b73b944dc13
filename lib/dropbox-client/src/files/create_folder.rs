use http::Method;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::client::{Client, Error};
use crate::endpoint::{Endpoint, merge_payload};
use crate::metadata::FolderMetadata;

pub(crate) static CREATE_FOLDER: Endpoint<CreateFolderResult, CreateFolderError> =
    Endpoint::new(Method::POST, "/2/files/create_folder_v2", &["autorename"]);

/// Options for [`Client::create_folder`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateFolderOptions {
    /// Rename the folder on a name conflict instead of failing.
    /// Defaults to `false`.
    pub autorename: bool,
}

impl CreateFolderOptions {
    /// Renames the folder on a name conflict instead of failing.
    #[must_use]
    pub fn with_autorename(mut self, autorename: bool) -> Self {
        self.autorename = autorename;
        self
    }
}

/// Result of a successful `create_folder` call.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateFolderResult {
    /// Metadata of the folder that was created.
    pub metadata: FolderMetadata,
}

/// Domain error for `create_folder`, decoded from the service's 409 envelope.
#[derive(
    Debug, Clone, PartialEq, Eq, Deserialize, derive_more::Display, derive_more::Error,
)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum CreateFolderError {
    /// The folder could not be written at the given path.
    #[display("write failed: {path}")]
    Path {
        /// What went wrong while writing.
        path: WriteError,
    },
    /// An error this client does not recognize.
    #[display("unrecognized create_folder error")]
    #[serde(other)]
    Other,
}

/// Why a write failed.
#[derive(
    Debug, Clone, PartialEq, Eq, Deserialize, derive_more::Display, derive_more::Error,
)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum WriteError {
    /// Something already exists at the given path.
    #[display("conflict")]
    Conflict,
    /// The account has no write permission at the given path.
    #[display("no write permission")]
    NoWritePermission,
    /// The account has run out of space.
    #[display("insufficient space")]
    InsufficientSpace,
    /// The path is not syntactically valid.
    #[display("malformed path")]
    MalformedPath,
    /// The name is disallowed by the service.
    #[display("disallowed name")]
    DisallowedName,
    /// A write error this client does not recognize.
    #[display("unrecognized write error")]
    #[serde(other)]
    Other,
}

/// Serializes, validates, and merges into the request payload.
///
/// All of this endpoint's options are plain booleans with their defaults
/// carried by the struct, so no wire-level normalization is needed beyond
/// the allow-list check.
fn build_payload(path: &str, options: &CreateFolderOptions) -> Result<serde_json::Value, Error> {
    let bag = serde_json::to_value(options)?
        .as_object()
        .cloned()
        .unwrap_or_default();

    CREATE_FOLDER.validate_options(&bag)?;

    Ok(merge_payload([("path", json!(path))], bag))
}

impl Client {
    /// Creates a folder at the given path.
    ///
    /// Issues exactly one `POST /2/files/create_folder_v2` request.
    ///
    /// # Errors
    ///
    /// A service-side rejection decodes into [`Error::CreateFolder`];
    /// transport failures pass through as [`Error::Reqwest`].
    pub async fn create_folder(
        &self,
        path: &str,
        options: CreateFolderOptions,
    ) -> Result<CreateFolderResult, Error> {
        let payload = build_payload(path, &options)?;
        self.rpc(&CREATE_FOLDER, payload).await
    }
}
