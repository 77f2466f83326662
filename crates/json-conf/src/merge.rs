//! Deep merge of instance-wide defaults into a config object.
//!
//! Nested objects merge field by field. For scalars and arrays the
//! destination wins: a source value is only written where the destination has
//! no value yet, or where it holds a secret-mask placeholder. With a mask
//! configured, every source scalar is written as the mask instead, whatever the
//! destination held.

use json_conf_path::format_path;
use json_conf_value::{is_masked_value, Error, Map, Result, Value, DEFAULT_MASK_CHAR};
use tracing::debug;

/// One change the merge made to the destination. `path` is a pointer string.
#[derive(Debug, Clone, PartialEq)]
pub enum MergeEvent {
    /// A key missing from the destination was copied over.
    Injected { path: String },
    /// The key was set to the mask value.
    Masked { path: String },
    /// A masked placeholder was replaced with the real source value.
    Unmasked { path: String, placeholder: Value },
}

impl MergeEvent {
    pub fn path(&self) -> &str {
        match self {
            MergeEvent::Injected { path }
            | MergeEvent::Masked { path }
            | MergeEvent::Unmasked { path, .. } => path,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergeReport {
    pub events: Vec<MergeEvent>,
}

impl MergeReport {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Paths whose masked placeholder was overwritten.
    pub fn unmasked_paths(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(|event| match event {
            MergeEvent::Unmasked { path, .. } => Some(path.as_str()),
            _ => None,
        })
    }
}

/// Merge policy.
///
/// A `Null` mask behaves like no mask at all.
#[derive(Debug, Clone, PartialEq)]
pub struct Merger {
    mask: Option<Value>,
    mask_char: char,
}

impl Default for Merger {
    fn default() -> Self {
        Self {
            mask: None,
            mask_char: DEFAULT_MASK_CHAR,
        }
    }
}

impl Merger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write `mask` instead of every source scalar.
    pub fn with_mask(mut self, mask: impl Into<Value>) -> Self {
        self.mask = Some(mask.into());
        self
    }

    /// Character that placeholder strings are made of. Defaults to `*`.
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    pub fn mask(&self) -> Option<&Value> {
        self.mask.as_ref().filter(|mask| !mask.is_null())
    }

    pub fn mask_char(&self) -> char {
        self.mask_char
    }

    /// Merges `source` into `destination` in place.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] when a source object meets a destination value
    /// that is not an object. Keys merged before the conflict stay merged.
    pub fn merge(&self, destination: &mut Map, source: &Map) -> Result<MergeReport> {
        let mut report = MergeReport::default();
        let mut path = Vec::new();
        self.merge_level(destination, source, &mut path, &mut report)?;
        Ok(report)
    }

    fn merge_level(
        &self,
        destination: &mut Map,
        source: &Map,
        path: &mut Vec<String>,
        report: &mut MergeReport,
    ) -> Result<()> {
        for (key, incoming) in source {
            path.push(key.clone());
            if let Value::Object(nested) = incoming {
                match destination.entry(key.clone()).or_insert_with(Value::object) {
                    Value::Object(existing) => self.merge_level(existing, nested, path, report)?,
                    other => {
                        return Err(Error::TypeMismatch(format!(
                            "cannot merge an object into {} at '{}'",
                            other.type_name(),
                            format_path(path.as_slice())
                        )))
                    }
                }
            } else {
                self.merge_leaf(destination, key, incoming, path, report);
            }
            path.pop();
        }
        Ok(())
    }

    fn merge_leaf(
        &self,
        destination: &mut Map,
        key: &str,
        incoming: &Value,
        path: &[String],
        report: &mut MergeReport,
    ) {
        if let Some(mask) = self.mask() {
            let pointer = format_path(path);
            debug!(path = %pointer, "masking instance wide parameter");
            destination.insert(key.to_owned(), mask.clone());
            report.events.push(MergeEvent::Masked { path: pointer });
            return;
        }

        let placeholder = match destination.get(key) {
            None => None,
            Some(existing) if is_masked_value(existing, self.mask_char) => Some(existing.clone()),
            Some(_) => return,
        };
        destination.insert(key.to_owned(), incoming.clone());
        let pointer = format_path(path);
        match placeholder {
            None => {
                debug!(path = %pointer, "injecting instance wide parameter");
                report.events.push(MergeEvent::Injected { path: pointer });
            }
            Some(placeholder) => {
                debug!(
                    path = %pointer,
                    "replacing masked placeholder with instance wide parameter"
                );
                report.events.push(MergeEvent::Unmasked {
                    path: pointer,
                    placeholder,
                });
            }
        }
    }
}

/// Merges `source` into `destination` in place and hands `destination` back.
///
/// `mask`, when given and not `Null`, replaces every source scalar.
///
/// # Errors
///
/// - [`Error::InvalidArgument`] if either root is not an object.
/// - [`Error::TypeMismatch`] on an object / non-object conflict.
///
/// # Example
///
/// ```
/// use json_conf::merge::merge_jsons;
/// use json_conf::Value;
/// use serde_json::json;
///
/// let mut config = Value::from(json!({"host": "db", "password": "******"}));
/// let defaults = Value::from(json!({"host": "localhost", "password": "s3cret", "port": 5432}));
/// merge_jsons(&mut config, &defaults, None).unwrap();
/// assert_eq!(
///     config,
///     Value::from(json!({"host": "db", "password": "s3cret", "port": 5432}))
/// );
/// ```
pub fn merge_jsons<'a>(
    destination: &'a mut Value,
    source: &Value,
    mask: Option<&Value>,
) -> Result<&'a mut Value> {
    let source_map = source
        .as_object()
        .ok_or_else(|| non_object_root("source", source))?;
    let merger = match mask {
        Some(mask) => Merger::new().with_mask(mask.clone()),
        None => Merger::new(),
    };
    match &mut *destination {
        Value::Object(destination_map) => {
            merger.merge(destination_map, source_map)?;
        }
        other => return Err(non_object_root("destination", other)),
    }
    Ok(destination)
}

fn non_object_root(role: &str, value: &Value) -> Error {
    Error::InvalidArgument(format!("merge {role} must be an object, got {}", value.type_name()))
}
