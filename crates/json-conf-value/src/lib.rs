//! json-conf-value - the JSON tree used by json-conf.
//!
//! [`Value`] is a closed tagged union over the six JSON shapes. Objects keep
//! insertion order for rendering but compare structurally.
//!
//! # Example
//!
//! ```
//! use json_conf_value::{keys, Value};
//! use serde_json::json;
//!
//! let value = Value::from(json!({"db": {"host": "localhost"}, "port": 5432}));
//! assert_eq!(keys(&value), vec!["db", "port"]);
//! assert_eq!(value.get("port").map(Value::as_int), Some(5432));
//! ```

mod convert;
pub mod error;
pub mod mask;
mod value;

pub use error::{Error, Result};
pub use mask::{is_masked_value, is_secret_mask, secret_mask, DEFAULT_MASK_CHAR, SECRET_MASK};
pub use value::{children, empty_object, keys, Map, Value};

pub use serde_json::Number;
