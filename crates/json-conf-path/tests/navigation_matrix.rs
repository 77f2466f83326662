use json_conf_path::{
    format_path, get_int_or_zero, get_string_or_null, navigate_to, parse_path, replace_nested,
};
use json_conf_value::Value;
use serde_json::json;

fn config() -> Value {
    Value::from(json!({
        "source": {
            "credentials": {"user": "admin", "password": "******"},
            "port": "5432",
            "ssl": false
        },
        "a/b": {"~tilde": 7}
    }))
}

#[test]
fn pointer_paths_resolve_like_key_lists() {
    let doc = config();
    let cases = [
        ("/source/credentials/user", Some(Value::from("admin"))),
        ("source/port", Some(Value::from("5432"))),
        ("/a~1b/~0tilde", Some(Value::from(7))),
        ("/source/missing", None),
        ("/source/ssl/deeper", None),
        ("", Some(doc.clone())),
    ];
    for (pointer, expected) in cases {
        let path = parse_path(pointer);
        assert_eq!(navigate_to(&doc, &path).cloned(), expected, "pointer {pointer:?}");
    }
}

#[test]
fn lenient_getters_over_sparse_config() {
    let doc = config();
    assert_eq!(get_int_or_zero(&doc, &["source", "port"]), 5432);
    assert_eq!(get_int_or_zero(&doc, &["sink", "port"]), 0);
    assert_eq!(get_string_or_null(&doc, &["source", "ssl"]), Some("false".to_string()));
    assert_eq!(get_string_or_null(&doc, &["sink"]), None);
}

#[test]
fn replace_then_read_back() {
    let mut doc = config();
    let path = parse_path("/source/credentials/password");
    let old = replace_nested(&mut doc, &path, Value::from("hunter2")).expect("parent is an object");
    assert_eq!(old, Some(Value::from("******")));
    assert_eq!(get_string_or_null(&doc, &path), Some("hunter2".to_string()));
    assert_eq!(format_path(&path), "/source/credentials/password");
}

#[test]
fn replace_leaves_siblings_alone() {
    let mut doc = config();
    replace_nested(&mut doc, &["source", "port"], Value::from(6543)).expect("replace");
    let expected = Value::from(json!({
        "source": {
            "credentials": {"user": "admin", "password": "******"},
            "port": 6543,
            "ssl": false
        },
        "a/b": {"~tilde": 7}
    }));
    assert_eq!(doc, expected);
}
