//! Text and typed-value bridges, backed by `serde_json`.
//!
//! The free functions use [`Codec::default`]; build a [`Codec`] with a custom
//! [`CodecConfig`] to change pretty-printing.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::error::Category;
use serde_json::ser::PrettyFormatter;

use json_conf_value::{Error, Result, Value};

/// Rendering policy for [`Codec::to_pretty_string`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Spaces per nesting level.
    pub indent: usize,
    /// Append `\n` after the document.
    pub trailing_newline: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            indent: 2,
            trailing_newline: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Compact JSON text.
    pub fn serialize(&self, value: &Value) -> String {
        // Keys are strings and numbers are finite, so this cannot fail.
        serde_json::to_string(value).expect("Value serialization is infallible")
    }

    /// Pretty JSON text with `": "` between keys and values.
    pub fn to_pretty_string(&self, value: &Value) -> String {
        let indent = " ".repeat(self.config.indent);
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        value
            .serialize(&mut serializer)
            .expect("Value serialization is infallible");
        let mut out = String::from_utf8(buf).expect("serde_json writes UTF-8");
        if self.config.trailing_newline {
            out.push('\n');
        }
        out
    }

    /// UTF-8 bytes of [`Codec::serialize`].
    pub fn to_bytes(&self, value: &Value) -> Vec<u8> {
        self.serialize(value).into_bytes()
    }

    /// # Errors
    ///
    /// [`Error::Parse`] on malformed input.
    pub fn deserialize(&self, text: &str) -> Result<Value> {
        serde_json::from_str(text).map_err(Error::Parse)
    }

    pub fn try_deserialize(&self, text: &str) -> Option<Value> {
        self.deserialize(text).ok()
    }

    /// Parses text straight into a typed value.
    ///
    /// # Errors
    ///
    /// [`Error::Parse`] on malformed input, [`Error::Convert`] when well-formed
    /// JSON does not fit `T`.
    pub fn deserialize_as<T: DeserializeOwned>(&self, text: &str) -> Result<T> {
        serde_json::from_str(text).map_err(classify_text_error)
    }

    pub fn try_deserialize_as<T: DeserializeOwned>(&self, text: &str) -> Option<T> {
        self.deserialize_as(text).ok()
    }

    /// Converts any serializable value into a tree.
    pub fn json_node<T: Serialize + ?Sized>(&self, object: &T) -> Result<Value> {
        serde_json::to_value(object)
            .map(Value::from)
            .map_err(Error::Convert)
    }

    /// Converts a tree into a typed value.
    pub fn object<T: DeserializeOwned>(&self, value: &Value) -> Result<T> {
        serde_json::from_value(serde_json::Value::from(value.clone())).map_err(Error::Convert)
    }

    pub fn try_object<T: DeserializeOwned>(&self, value: &Value) -> Option<T> {
        self.object(value).ok()
    }

    /// Deep copy of a typed value through its JSON form.
    pub fn clone_through_json<T: Serialize + DeserializeOwned>(&self, object: &T) -> Result<T> {
        let value = self.json_node(object)?;
        self.object(&value)
    }
}

fn classify_text_error(err: serde_json::Error) -> Error {
    match err.classify() {
        Category::Data => Error::Convert(err),
        Category::Io | Category::Syntax | Category::Eof => Error::Parse(err),
    }
}

pub fn serialize(value: &Value) -> String {
    Codec::default().serialize(value)
}

pub fn deserialize(text: &str) -> Result<Value> {
    Codec::default().deserialize(text)
}

pub fn try_deserialize(text: &str) -> Option<Value> {
    Codec::default().try_deserialize(text)
}

pub fn deserialize_as<T: DeserializeOwned>(text: &str) -> Result<T> {
    Codec::default().deserialize_as(text)
}

pub fn try_deserialize_as<T: DeserializeOwned>(text: &str) -> Option<T> {
    Codec::default().try_deserialize_as(text)
}

pub fn to_pretty_string(value: &Value) -> String {
    Codec::default().to_pretty_string(value)
}

pub fn to_bytes(value: &Value) -> Vec<u8> {
    Codec::default().to_bytes(value)
}

pub fn json_node<T: Serialize + ?Sized>(object: &T) -> Result<Value> {
    Codec::default().json_node(object)
}

pub fn object<T: DeserializeOwned>(value: &Value) -> Result<T> {
    Codec::default().object(value)
}

pub fn try_object<T: DeserializeOwned>(value: &Value) -> Option<T> {
    Codec::default().try_object(value)
}
