//! Collapse nested objects into a single-level object.
//!
//! Keys are not prefixed: every leaf keeps its local name. When two leaves
//! share a name, the later one in depth-first insertion order wins and a
//! [`Collision`] is recorded. Arrays are leaves and are never descended into.

use json_conf_value::{Error, Map, Result, Value};
use tracing::warn;

/// A leaf that overwrote an earlier leaf with the same key.
#[derive(Debug, Clone, PartialEq)]
pub struct Collision {
    pub key: String,
    pub previous: Value,
    pub replacement: Value,
}

/// Flattened object plus the collisions seen while building it.
#[derive(Debug, Clone, PartialEq)]
pub struct Flattened {
    pub value: Value,
    pub collisions: Vec<Collision>,
}

impl Flattened {
    pub fn has_collisions(&self) -> bool {
        !self.collisions.is_empty()
    }
}

/// Flattens `config` into a new object; the input is left untouched.
///
/// # Errors
///
/// [`Error::InvalidArgument`] if `config` is not an object.
///
/// # Example
///
/// ```
/// use json_conf::flatten::flatten;
/// use json_conf::Value;
/// use serde_json::json;
///
/// let nested = Value::from(json!({"db": {"host": "h", "tls": {"on": true}}, "port": 1}));
/// let flat = flatten(&nested).unwrap();
/// assert_eq!(flat, Value::from(json!({"host": "h", "on": true, "port": 1})));
/// ```
pub fn flatten(config: &Value) -> Result<Value> {
    flatten_with_report(config).map(|flattened| flattened.value)
}

/// Like [`flatten`], also returning every key collision.
pub fn flatten_with_report(config: &Value) -> Result<Flattened> {
    let Value::Object(source) = config else {
        return Err(Error::InvalidArgument(format!(
            "only objects can be flattened, got {}",
            config.type_name()
        )));
    };
    let mut flat = Map::new();
    let mut collisions = Vec::new();
    flatten_into(&mut flat, source, &mut collisions);
    Ok(Flattened {
        value: Value::Object(flat),
        collisions,
    })
}

fn flatten_into(flat: &mut Map, source: &Map, collisions: &mut Vec<Collision>) {
    for (key, val) in source {
        if let Value::Object(nested) = val {
            flatten_into(flat, nested, collisions);
            continue;
        }
        if let Some(previous) = flat.insert(key.clone(), val.clone()) {
            warn!(key = %key, "config key already exists, overwriting");
            collisions.push(Collision {
                key: key.clone(),
                previous,
                replacement: val.clone(),
            });
        }
    }
}
