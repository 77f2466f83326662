use json_conf_value::{Error, Result, Value};

use crate::format_path;

/// Follows `path` through nested objects.
///
/// Returns `None` as soon as a step lands on a non-object or a missing key.
/// Arrays are not indexed into. The empty path returns `root`.
pub fn navigate_to<'a, S: AsRef<str>>(root: &'a Value, path: &[S]) -> Option<&'a Value> {
    let mut current = root;
    for key in path {
        current = current.get(key.as_ref())?;
    }
    Some(current)
}

/// Same contract as [`navigate_to`], for callers that read it as an optional
/// lookup.
pub fn get_optional<'a, S: AsRef<str>>(root: &'a Value, path: &[S]) -> Option<&'a Value> {
    navigate_to(root, path)
}

/// Mutable counterpart of [`navigate_to`].
pub fn get_mut<'a, S: AsRef<str>>(root: &'a mut Value, path: &[S]) -> Option<&'a mut Value> {
    let mut current = root;
    for key in path {
        current = match current {
            Value::Object(map) => map.get_mut(key.as_ref())?,
            _ => return None,
        };
    }
    Some(current)
}

/// Textual form of the value at `path`, or `None` when absent.
///
/// Non-string scalars are rendered (`1` → `"1"`, `null` → `"null"`); objects
/// and arrays give `""`.
pub fn get_string_or_null<S: AsRef<str>>(root: &Value, path: &[S]) -> Option<String> {
    get_optional(root, path).map(Value::as_text)
}

/// Integer reading of the value at `path`; `0` when absent or non-numeric.
pub fn get_int_or_zero<S: AsRef<str>>(root: &Value, path: &[S]) -> i64 {
    get_optional(root, path).map_or(0, Value::as_int)
}

/// Strict string lookup.
///
/// `Ok(None)` when the path is absent or holds `null`; a
/// [`Error::TypeMismatch`] when it holds anything other than a string.
pub fn get_str<'a, S: AsRef<str>>(root: &'a Value, path: &[S]) -> Result<Option<&'a str>> {
    match navigate_to(root, path) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(wrong_type("string", other, path)),
    }
}

/// Strict integer lookup; see [`get_str`] for the absent / mismatch split.
pub fn get_i64<S: AsRef<str>>(root: &Value, path: &[S]) -> Result<Option<i64>> {
    match navigate_to(root, path) {
        None | Some(Value::Null) => Ok(None),
        Some(value) if value.is_number() => value
            .as_i64()
            .map(Some)
            .ok_or_else(|| wrong_type("integer", value, path)),
        Some(other) => Err(wrong_type("integer", other, path)),
    }
}

fn wrong_type<S: AsRef<str>>(expected: &str, found: &Value, path: &[S]) -> Error {
    Error::TypeMismatch(format!(
        "expected {expected} at '{}', found {}",
        format_path(path),
        found.type_name()
    ))
}

/// Sets the last key of `path` on its parent object, in place.
///
/// The parent is located with [`get_mut`] on `path[..len - 1]`. Returns the
/// value that was replaced, if any.
///
/// # Errors
///
/// - [`Error::InvalidArgument`] if `path` is empty.
/// - [`Error::TypeMismatch`] if the parent is missing or is not an object.
pub fn replace_nested<S: AsRef<str>>(
    root: &mut Value,
    path: &[S],
    new_value: Value,
) -> Result<Option<Value>> {
    let Some((last, parent_path)) = path.split_last() else {
        return Err(Error::InvalidArgument("must pass at least one key".to_owned()));
    };
    match get_mut(root, parent_path) {
        Some(Value::Object(map)) => Ok(map.insert(last.as_ref().to_owned(), new_value)),
        Some(other) => Err(Error::TypeMismatch(format!(
            "cannot set '{}' on {} at '{}'",
            last.as_ref(),
            other.type_name(),
            format_path(parent_path)
        ))),
        None => Err(Error::TypeMismatch(format!(
            "no object at '{}' to set '{}' on",
            format_path(parent_path),
            last.as_ref()
        ))),
    }
}

pub fn replace_nested_string<S: AsRef<str>>(
    root: &mut Value,
    path: &[S],
    replacement: impl Into<String>,
) -> Result<Option<Value>> {
    replace_nested(root, path, Value::String(replacement.into()))
}

pub fn replace_nested_int<S: AsRef<str>>(
    root: &mut Value,
    path: &[S],
    replacement: i64,
) -> Result<Option<Value>> {
    replace_nested(root, path, Value::from(replacement))
}
