//! Bindings for the `files` endpoint family.
//!
//! Each operation lives in its own module: the endpoint descriptor, the
//! typed options struct, the payload pipeline (validate, normalize, merge),
//! and the result and error types its responses decode into.

mod create_folder;
pub use self::create_folder::{
    CreateFolderError, CreateFolderOptions, CreateFolderResult, WriteError,
};
pub(crate) use self::create_folder::CREATE_FOLDER;

mod list_folder;
pub use self::list_folder::{
    ListFolderError, ListFolderOptions, ListFolderResult, LookupError, SharedLink,
};
pub(crate) use self::list_folder::LIST_FOLDER;
