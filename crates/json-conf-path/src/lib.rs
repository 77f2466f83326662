//! Key-path navigation over json-conf values.
//!
//! A path is an ordered list of object keys. Lookups never fail: a missing
//! key or a non-object on the way yields `None`. Only [`replace_nested`] and
//! the strict getters report errors.
//!
//! # Example
//!
//! ```
//! use json_conf_path::{navigate_to, parse_path, replace_nested};
//! use json_conf_value::Value;
//! use serde_json::json;
//!
//! let mut doc = Value::from(json!({"db": {"port": 5432}}));
//! assert_eq!(navigate_to(&doc, &["db", "port"]), Some(&Value::from(5432)));
//! assert_eq!(navigate_to(&doc, &["db", "host"]), None);
//!
//! replace_nested(&mut doc, &parse_path("/db/port"), Value::from(6543)).unwrap();
//! assert_eq!(doc, Value::from(json!({"db": {"port": 6543}})));
//! ```

mod navigate;
pub mod types;

pub use navigate::{
    get_i64, get_int_or_zero, get_mut, get_optional, get_str, get_string_or_null, navigate_to,
    replace_nested, replace_nested_int, replace_nested_string,
};
pub use types::{Path, PathStep};

/// Unescapes a pointer path component: `~1` becomes `/`, `~0` becomes `~`.
///
/// ```
/// use json_conf_path::unescape_key;
///
/// assert_eq!(unescape_key("a~0b"), "a~b");
/// assert_eq!(unescape_key("c~1d"), "c/d");
/// ```
pub fn unescape_key(component: &str) -> String {
    if !component.contains('~') {
        return component.to_owned();
    }
    // ~1 first, otherwise "~01" would decode to "/"
    component.replace("~1", "/").replace("~0", "~")
}

/// Escapes a key for use as a pointer path component.
///
/// ```
/// use json_conf_path::escape_key;
///
/// assert_eq!(escape_key("a~b"), "a~0b");
/// assert_eq!(escape_key("c/d"), "c~1d");
/// ```
pub fn escape_key(key: &str) -> String {
    if !key.contains(['/', '~']) {
        return key.to_owned();
    }
    key.replace('~', "~0").replace('/', "~1")
}

/// Parses a `/`-separated pointer string into a key path.
///
/// The empty string is the root path. A missing leading `/` is tolerated, so
/// `"a/b"` and `"/a/b"` name the same location.
///
/// ```
/// use json_conf_path::parse_path;
///
/// assert_eq!(parse_path(""), Vec::<String>::new());
/// assert_eq!(parse_path("/a/b"), vec!["a", "b"]);
/// assert_eq!(parse_path("a/b"), vec!["a", "b"]);
/// assert_eq!(parse_path("/"), vec![""]);
/// ```
pub fn parse_path(pointer: &str) -> Path {
    if pointer.is_empty() {
        return Path::new();
    }
    let body = pointer.strip_prefix('/').unwrap_or(pointer);
    body.split('/').map(unescape_key).collect()
}

/// Formats a key path as a pointer string; the root path is `""`.
///
/// ```
/// use json_conf_path::format_path;
///
/// assert_eq!(format_path::<&str>(&[]), "");
/// assert_eq!(format_path(&["a", "b/c"]), "/a/b~1c");
/// ```
pub fn format_path<S: AsRef<str>>(path: &[S]) -> String {
    let mut out = String::new();
    for key in path {
        out.push('/');
        out.push_str(&escape_key(key.as_ref()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_round_trip() {
        for key in ["plain", "a~b", "c/d", "~/~/", "", "~01"] {
            assert_eq!(unescape_key(&escape_key(key)), key);
        }
    }

    #[test]
    fn test_parse_path() {
        assert_eq!(parse_path(""), Path::new());
        assert_eq!(parse_path("/foo///"), vec!["foo", "", "", ""]);
        assert_eq!(parse_path("/a~0b/c~1d"), vec!["a~b", "c/d"]);
    }

    #[test]
    fn test_format_parse_round_trip() {
        for pointer in ["", "/", "/foo", "/foo/bar", "/a~0b/c~1d", "/foo///"] {
            assert_eq!(format_path(&parse_path(pointer)), pointer);
        }
    }
}
