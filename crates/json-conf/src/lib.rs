//! json-conf - JSON as a dynamic configuration format.
//!
//! Parse a config with [`codec`], read or patch it by key path, fill it with
//! instance-wide defaults using [`merge`], or collapse it with [`flatten`].
//!
//! # Example
//!
//! ```
//! use json_conf::{codec, flatten::flatten, merge::merge_jsons, navigate_to, secret_mask};
//!
//! let mut config = codec::deserialize(r#"{"db": {"password": "******"}}"#).unwrap();
//! let defaults = codec::deserialize(r#"{"db": {"password": "s3cret", "port": 5432}}"#).unwrap();
//!
//! // Show what would be injected without leaking the secrets.
//! let mut preview = config.clone();
//! merge_jsons(&mut preview, &defaults, Some(&secret_mask())).unwrap();
//! assert_eq!(codec::serialize(&preview), r#"{"db":{"password":"******","port":"******"}}"#);
//!
//! merge_jsons(&mut config, &defaults, None).unwrap();
//! assert_eq!(navigate_to(&config, &["db", "port"]).map(|v| v.as_int()), Some(5432));
//!
//! let flat = flatten(&config).unwrap();
//! assert_eq!(codec::serialize(&flat), r#"{"password":"s3cret","port":5432}"#);
//! ```

pub mod cli;
pub mod codec;
pub mod flatten;
pub mod merge;

pub use codec::{Codec, CodecConfig};
pub use flatten::{flatten, flatten_with_report, Collision, Flattened};
pub use merge::{merge_jsons, MergeEvent, MergeReport, Merger};

pub use json_conf_path::{
    format_path, get_i64, get_int_or_zero, get_mut, get_optional, get_str, get_string_or_null,
    navigate_to, parse_path, replace_nested, replace_nested_int, replace_nested_string, Path,
};
pub use json_conf_value::{
    children, empty_object, is_secret_mask, keys, secret_mask, Error, Map, Number, Result, Value,
    DEFAULT_MASK_CHAR, SECRET_MASK,
};
