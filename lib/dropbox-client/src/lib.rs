//! # Dropbox Client
//!
//! Typed bindings for the Dropbox HTTP RPC API v2.
//!
//! Every remote operation is declared as an [`endpoint`](endpoints) with a
//! fixed HTTP method, URL path, and option allow-list. Calls go through a
//! typed options struct, are validated and normalized into the wire payload,
//! and come back as a typed result or a typed domain error.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dropbox_client::{Client, ListFolderOptions};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::builder()
//!     .with_access_token("my-access-token")
//!     .build()?;
//!
//! let folder = client
//!     .list_folder("/photos", ListFolderOptions::default().with_recursive(true))
//!     .await?;
//!
//! for entry in &folder.entries {
//!     println!("{}", entry.name());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All calls return [`Error`]. Usage errors (unrecognized or malformed
//! options) are raised before any request is sent; domain errors returned by
//! the remote service are decoded into per-endpoint error types such as
//! [`files::ListFolderError`]; transport failures from the underlying HTTP
//! client pass through unchanged.

mod client;
mod endpoint;
pub mod files;
mod metadata;

pub use self::client::{Client, ClientBuilder, Error, SecureString};
pub use self::endpoint::{EndpointInfo, endpoint, endpoints};
pub use self::files::{
    CreateFolderOptions, CreateFolderResult, ListFolderOptions, ListFolderResult, SharedLink,
};
pub use self::metadata::{
    DeletedMetadata, FileMetadata, FolderMetadata, Metadata, SharedLinkMetadata,
};
