//! Logic behind the `json-flatten`, `json-merge` and `json-get` binaries.
//!
//! Each function takes document text and returns the text to print, so the
//! binaries only deal with stdin, stdout and exit codes.

use std::io;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use json_conf_path::{navigate_to, parse_path};
use json_conf_value::Error as ValueError;

use crate::codec::Codec;
use crate::flatten::flatten_with_report;
use crate::merge::Merger;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Json(#[from] ValueError),
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("no value at '{0}'")]
    NotFound(String),
    #[error("{0}")]
    Usage(String),
}

impl CliError {
    pub fn io(path: impl Into<String>, source: io::Error) -> Self {
        CliError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Installs a stderr `tracing` subscriber filtered by `RUST_LOG`
/// (default `warn`). Does nothing if one is already installed.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

/// Flattens a document and pretty-prints the result.
pub fn flatten_document(doc_json: &str) -> Result<String, CliError> {
    let codec = Codec::default();
    let doc = codec.deserialize(doc_json)?;
    let flattened = flatten_with_report(&doc)?;
    Ok(codec.to_pretty_string(&flattened.value))
}

/// Merges `defaults_json` into `doc_json`, optionally masking every default
/// with the JSON value in `mask_json`.
pub fn merge_documents(
    doc_json: &str,
    defaults_json: &str,
    mask_json: Option<&str>,
) -> Result<String, CliError> {
    let codec = Codec::default();
    let mut doc = codec.deserialize(doc_json)?;
    let defaults = codec.deserialize(defaults_json)?;
    let mut merger = Merger::new();
    if let Some(mask) = mask_json {
        merger = merger.with_mask(codec.deserialize(mask)?);
    }
    let (Some(destination), Some(source)) = (doc.as_object_mut(), defaults.as_object()) else {
        return Err(CliError::Json(ValueError::InvalidArgument(
            "both the document and the defaults must be JSON objects".to_owned(),
        )));
    };
    merger.merge(destination, source)?;
    Ok(codec.to_pretty_string(&doc))
}

/// Looks up a `/`-separated key path and pretty-prints the value found.
pub fn lookup_path(doc_json: &str, pointer: &str) -> Result<String, CliError> {
    let codec = Codec::default();
    let doc = codec.deserialize(doc_json)?;
    let path = parse_path(pointer);
    navigate_to(&doc, &path)
        .map(|value| codec.to_pretty_string(value))
        .ok_or_else(|| CliError::NotFound(pointer.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_document() {
        let out = flatten_document(r#"{"a": {"b": 1}, "c": [1]}"#).unwrap();
        assert_eq!(out, "{\n  \"b\": 1,\n  \"c\": [\n    1\n  ]\n}\n");
    }

    #[test]
    fn test_flatten_document_errors() {
        assert!(matches!(flatten_document("{"), Err(CliError::Json(e)) if e.is_parse()));
        let err = flatten_document("[1]").unwrap_err();
        assert!(matches!(err, CliError::Json(e) if e.is_invalid_argument()));
    }

    #[test]
    fn test_merge_documents() {
        let out = merge_documents(r#"{"a": 1}"#, r#"{"a": 2, "b": 3}"#, None).unwrap();
        assert_eq!(out, "{\n  \"a\": 1,\n  \"b\": 3\n}\n");
    }

    #[test]
    fn test_merge_documents_masked() {
        let out = merge_documents(r#"{}"#, r#"{"token": "t"}"#, Some(r#""******""#)).unwrap();
        assert_eq!(out, "{\n  \"token\": \"******\"\n}\n");
    }

    #[test]
    fn test_merge_documents_conflict() {
        let err = merge_documents(r#"{"a": 1}"#, r#"{"a": {"b": 1}}"#, None).unwrap_err();
        assert!(matches!(err, CliError::Json(e) if e.is_type_mismatch()));
    }

    #[test]
    fn test_merge_documents_non_objects() {
        let err = merge_documents("[]", "{}", None).unwrap_err();
        assert!(matches!(err, CliError::Json(e) if e.is_invalid_argument()));
        let err = merge_documents("{}", "\"x\"", None).unwrap_err();
        assert!(matches!(err, CliError::Json(e) if e.is_invalid_argument()));
    }

    #[test]
    fn test_lookup_path() {
        let doc = r#"{"a": {"b": "x"}}"#;
        assert_eq!(lookup_path(doc, "/a/b").unwrap(), "\"x\"\n");
        assert_eq!(lookup_path(doc, "a").unwrap(), "{\n  \"b\": \"x\"\n}\n");
        assert!(matches!(lookup_path(doc, "/a/c"), Err(CliError::NotFound(p)) if p == "/a/c"));
    }
}
