//! Endpoint descriptors and the static endpoint registry.
//!
//! Each remote operation is described once, at compile time, by an
//! [`Endpoint`]: its HTTP method, URL path, the option keys it accepts, and
//! (as type parameters) the result and error types its responses decode into.
//! Descriptors are `'static` and never mutated, so they are safe to share
//! across concurrent calls.

use std::marker::PhantomData;
use std::sync::LazyLock;

use http::Method;
use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::client::Error;
use crate::files;

/// Immutable metadata describing one remote RPC operation.
///
/// The `R` and `E` type parameters tag the success and error types the
/// endpoint's responses decode into; they carry no data.
pub(crate) struct Endpoint<R, E> {
    pub(crate) method: Method,
    pub(crate) path: &'static str,
    pub(crate) allowed_options: &'static [&'static str],
    marker: PhantomData<fn() -> (R, E)>,
}

impl<R, E> Endpoint<R, E> {
    pub(crate) const fn new(
        method: Method,
        path: &'static str,
        allowed_options: &'static [&'static str],
    ) -> Self {
        Self {
            method,
            path,
            allowed_options,
            marker: PhantomData,
        }
    }

    /// Checks that every caller-supplied option key is in the allow-list.
    ///
    /// The first unknown key fails the whole call with
    /// [`Error::UnrecognizedOption`]; valid input is left untouched.
    pub(crate) fn validate_options(&self, options: &Map<String, Value>) -> Result<(), Error> {
        for key in options.keys() {
            if !self.allowed_options.contains(&key.as_str()) {
                return Err(Error::UnrecognizedOption {
                    option: key.clone(),
                });
            }
        }
        Ok(())
    }

    pub(crate) fn info(&self) -> EndpointInfo {
        EndpointInfo {
            method: self.method.clone(),
            path: self.path,
            allowed_options: self.allowed_options,
        }
    }
}

/// Merges required positional fields with the validated options into the
/// final request payload.
///
/// Positional fields are inserted last, so an option can never shadow one.
pub(crate) fn merge_payload(
    positional: impl IntoIterator<Item = (&'static str, Value)>,
    options: Map<String, Value>,
) -> Value {
    let mut merged = options;
    for (key, value) in positional {
        merged.insert(key.to_string(), value);
    }
    Value::Object(merged)
}

/// Read-only metadata for one registered endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointInfo {
    /// HTTP method used for the call.
    pub method: Method,
    /// URL path, relative to the API base URI.
    pub path: &'static str,
    /// Option keys the endpoint accepts.
    pub allowed_options: &'static [&'static str],
}

/// Catalog of every endpoint this crate binds, keyed by operation name.
/// Materialized on first access and immutable afterwards.
static REGISTRY: LazyLock<IndexMap<&'static str, EndpointInfo>> = LazyLock::new(|| {
    IndexMap::from([
        ("list_folder", files::LIST_FOLDER.info()),
        ("create_folder", files::CREATE_FOLDER.info()),
    ])
});

/// Looks up a registered endpoint by operation name.
pub fn endpoint(name: &str) -> Option<&'static EndpointInfo> {
    REGISTRY.get(name)
}

/// Iterates over the registered endpoints in declaration order.
pub fn endpoints() -> impl Iterator<Item = (&'static str, &'static EndpointInfo)> {
    REGISTRY.iter().map(|(name, info)| (*name, info))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sample() -> Endpoint<(), ()> {
        Endpoint::new(Method::POST, "/2/files/sample", &["recursive", "limit"])
    }

    #[test]
    fn validate_options_accepts_subset_of_allow_list() {
        let mut options = Map::new();
        options.insert("recursive".to_string(), json!(true));

        assert!(sample().validate_options(&options).is_ok());
        assert!(sample().validate_options(&Map::new()).is_ok());
    }

    #[test]
    fn validate_options_rejects_unknown_key_by_name() {
        let mut options = Map::new();
        options.insert("recursive".to_string(), json!(true));
        options.insert("bogus_option".to_string(), json!(1));

        let error = sample()
            .validate_options(&options)
            .expect_err("unknown key must be rejected");
        match error {
            Error::UnrecognizedOption { option } => assert_eq!(option, "bogus_option"),
            other => panic!("expected UnrecognizedOption, got {other}"),
        }
    }

    #[test]
    fn validate_options_does_not_mutate_the_bag() {
        let mut options = Map::new();
        options.insert("limit".to_string(), json!(50));
        let before = options.clone();

        sample().validate_options(&options).expect("valid options");
        assert_eq!(options, before);
    }

    #[test]
    fn merge_payload_inserts_positional_fields_last() {
        let mut options = Map::new();
        options.insert("recursive".to_string(), json!(true));
        // A malformed bag carrying the positional key must not win.
        options.insert("path".to_string(), json!("/evil"));

        let payload = merge_payload([("path", json!("/photos"))], options);
        assert_eq!(payload, json!({ "path": "/photos", "recursive": true }));
    }

    #[test]
    fn registry_lists_every_bound_endpoint() {
        let names: Vec<_> = endpoints().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["list_folder", "create_folder"]);
    }

    #[test]
    fn registry_exposes_descriptor_metadata() {
        let info = endpoint("list_folder").expect("list_folder is registered");
        assert_eq!(info.method, Method::POST);
        assert_eq!(info.path, "/2/files/list_folder");
        assert_eq!(
            info.allowed_options,
            [
                "recursive",
                "include_media_info",
                "include_deleted",
                "shared_link",
                "include_has_explicit_shared_members",
                "include_non_downloadable_files",
                "limit",
            ]
        );

        let info = endpoint("create_folder").expect("create_folder is registered");
        assert_eq!(info.method, Method::POST);
        assert_eq!(info.path, "/2/files/create_folder_v2");

        assert!(endpoint("move_folder").is_none());
    }
}
