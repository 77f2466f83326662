//! Secret-mask sentinel.
//!
//! A secret that has been redacted is stored as a string made only of the mask
//! character. Such a value is a placeholder, not real configuration, and may
//! be overwritten by a defaulting merge.

use crate::value::Value;

pub const DEFAULT_MASK_CHAR: char = '*';

pub const SECRET_MASK: &str = "******";

/// The mask as a JSON string value.
// TODO: mask with a value of the secret's own type once non-string secrets exist.
pub fn secret_mask() -> Value {
    Value::String(SECRET_MASK.to_owned())
}

/// True when `text` consists only of `mask_char`. The empty string counts.
pub fn is_secret_mask(text: &str, mask_char: char) -> bool {
    text.chars().all(|c| c == mask_char)
}

/// True when the textual form of `value` is a mask (see [`Value::as_text`]).
pub fn is_masked_value(value: &Value, mask_char: char) -> bool {
    match value {
        Value::String(s) => is_secret_mask(s, mask_char),
        other => is_secret_mask(&other.as_text(), mask_char),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_secret_mask() {
        assert!(is_secret_mask("******", '*'));
        assert!(is_secret_mask("*", '*'));
        assert!(is_secret_mask("", '*'));
        assert!(!is_secret_mask("**a**", '*'));
        assert!(!is_secret_mask("real", '*'));
        assert!(is_secret_mask("###", '#'));
        assert!(!is_secret_mask("***", '#'));
    }

    #[test]
    fn test_is_masked_value() {
        assert!(is_masked_value(&secret_mask(), DEFAULT_MASK_CHAR));
        assert!(!is_masked_value(&Value::from(1), DEFAULT_MASK_CHAR));
        assert!(!is_masked_value(&Value::Null, DEFAULT_MASK_CHAR));
        // Containers have an empty textual form.
        assert!(is_masked_value(&Value::object(), DEFAULT_MASK_CHAR));
        assert!(is_masked_value(&Value::Array(vec![]), DEFAULT_MASK_CHAR));
    }
}
