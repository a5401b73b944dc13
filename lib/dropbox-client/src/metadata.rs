//! Wire types shared by the `files` endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata for one entry in a folder listing.
///
/// The wire representation is a union tagged by the `.tag` field, one of
/// `file`, `folder`, or `deleted`. A deleted entry is only returned when the
/// call asked for deleted entries to be included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum Metadata {
    /// A file.
    File(FileMetadata),
    /// A folder.
    Folder(FolderMetadata),
    /// A deleted file or folder.
    Deleted(DeletedMetadata),
}

impl Metadata {
    /// The last path component of the entry.
    pub fn name(&self) -> &str {
        match self {
            Self::File(file) => &file.name,
            Self::Folder(folder) => &folder.name,
            Self::Deleted(deleted) => &deleted.name,
        }
    }

    /// Lowercased full path, when the entry is inside the user's Dropbox.
    pub fn path_lower(&self) -> Option<&str> {
        match self {
            Self::File(file) => file.path_lower.as_deref(),
            Self::Folder(folder) => folder.path_lower.as_deref(),
            Self::Deleted(deleted) => deleted.path_lower.as_deref(),
        }
    }
}

/// Metadata for a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileMetadata {
    /// The last path component of the file.
    pub name: String,
    /// Unique identifier of the file.
    pub id: String,
    /// Lowercased full path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_lower: Option<String>,
    /// Cased path as it should be displayed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_display: Option<String>,
    /// Modification time reported by the client that uploaded the file.
    pub client_modified: DateTime<Utc>,
    /// Modification time recorded by the server.
    pub server_modified: DateTime<Utc>,
    /// Revision identifier; unique within the file's history.
    pub rev: String,
    /// File size in bytes.
    pub size: u64,
    /// Hash of the file content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_hash: Option<String>,
}

/// Metadata for a folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderMetadata {
    /// The last path component of the folder.
    pub name: String,
    /// Unique identifier of the folder.
    pub id: String,
    /// Lowercased full path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_lower: Option<String>,
    /// Cased path as it should be displayed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_display: Option<String>,
}

/// Metadata for a deleted file or folder.
///
/// Deleted entries carry no identifier; only the path survives deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletedMetadata {
    /// The last path component of the deleted entry.
    pub name: String,
    /// Lowercased full path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_lower: Option<String>,
    /// Cased path as it should be displayed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_display: Option<String>,
}

/// Canonical wire form of a shared-link parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedLinkMetadata {
    /// URL of the shared link.
    pub url: String,
    /// Password for the shared link, when it is protected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl SharedLinkMetadata {
    /// Builds the canonical value for an unprotected shared link.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            password: None,
        }
    }

    /// Sets the password for a protected shared link.
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn metadata_decodes_tagged_file_entry() {
        let value = json!({
            ".tag": "file",
            "name": "hello.txt",
            "id": "id:a4ayc_80_OEAAAAAAAAAXw",
            "path_lower": "/homework/hello.txt",
            "path_display": "/Homework/hello.txt",
            "client_modified": "2015-05-12T15:50:38Z",
            "server_modified": "2015-05-12T15:50:38Z",
            "rev": "a1c10ce0dd78",
            "size": 7212
        });

        let metadata: Metadata = serde_json::from_value(value).expect("valid file metadata");
        let Metadata::File(file) = metadata else {
            panic!("expected a file entry");
        };
        assert_eq!(file.name, "hello.txt");
        assert_eq!(file.size, 7212);
        assert_eq!(file.path_lower.as_deref(), Some("/homework/hello.txt"));
        assert!(file.content_hash.is_none());
    }

    #[test]
    fn metadata_decodes_tagged_folder_and_deleted_entries() {
        let folder: Metadata = serde_json::from_value(json!({
            ".tag": "folder",
            "name": "math",
            "id": "id:a4ayc_80_OEAAAAAAAAAXz",
            "path_lower": "/homework/math"
        }))
        .expect("valid folder metadata");
        assert_eq!(folder.name(), "math");
        assert_eq!(folder.path_lower(), Some("/homework/math"));

        let deleted: Metadata = serde_json::from_value(json!({
            ".tag": "deleted",
            "name": "old.txt",
            "path_lower": "/homework/old.txt"
        }))
        .expect("valid deleted metadata");
        assert_eq!(deleted.name(), "old.txt");
    }

    #[test]
    fn shared_link_metadata_omits_missing_password() {
        let link = SharedLinkMetadata::new("https://www.dropbox.com/s/abc123");
        let value = serde_json::to_value(&link).expect("serializable");
        assert_eq!(value, json!({ "url": "https://www.dropbox.com/s/abc123" }));

        let protected = link.with_password("hunter2");
        let value = serde_json::to_value(&protected).expect("serializable");
        assert_eq!(
            value,
            json!({ "url": "https://www.dropbox.com/s/abc123", "password": "hunter2" })
        );
    }
}
