use json_conf::{codec, flatten, flatten_with_report, merge_jsons, Map, Value};
use proptest::prelude::*;

fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        any::<f64>()
            .prop_filter("finite", |f| f.is_finite())
            .prop_map(Value::from),
        "[a-z*]{0,6}".prop_map(Value::String),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_leaf().prop_recursive(4, 32, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec(("[a-d]{1,2}", inner), 0..4)
                .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map>())),
        ]
    })
}

fn arb_object() -> impl Strategy<Value = Value> {
    prop::collection::vec(("[a-d]{1,2}", arb_value()), 0..5)
        .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map>()))
}

fn arb_flat_object() -> impl Strategy<Value = Value> {
    let non_object = prop_oneof![
        arb_leaf(),
        prop::collection::vec(arb_leaf(), 0..3).prop_map(Value::Array),
    ];
    prop::collection::vec(("[a-f]{1,2}", non_object), 0..6)
        .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map>()))
}

fn contains_object(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|map| map.values().any(Value::is_object))
}

proptest! {
    #[test]
    fn finite_float_text_round_trip(f in any::<f64>().prop_filter("finite", |f| f.is_finite())) {
        let value = Value::from(f);
        let text = codec::serialize(&value);
        prop_assert_eq!(codec::deserialize(&text).unwrap(), value, "text {}", text);
    }

    #[test]
    fn text_round_trip(value in arb_value()) {
        let text = codec::serialize(&value);
        prop_assert_eq!(codec::deserialize(&text).unwrap(), value.clone());
        let pretty = codec::to_pretty_string(&value);
        prop_assert_eq!(codec::deserialize(&pretty).unwrap(), value);
    }

    #[test]
    fn flat_objects_flatten_to_themselves(value in arb_flat_object()) {
        let report = flatten_with_report(&value).unwrap();
        prop_assert!(report.collisions.is_empty());
        prop_assert_eq!(report.value, value);
    }

    #[test]
    fn flatten_is_idempotent(value in arb_object()) {
        let once = flatten(&value).unwrap();
        prop_assert!(!contains_object(&once));
        prop_assert_eq!(flatten(&once).unwrap(), once);
    }

    #[test]
    fn merge_into_empty_copies_source(source in arb_object()) {
        let mut destination = Value::object();
        merge_jsons(&mut destination, &source, None).unwrap();
        prop_assert_eq!(destination, source);
    }

    #[test]
    fn merge_with_self_is_identity(value in arb_object()) {
        // Masked placeholders would be overwritten by themselves, so no change either way.
        let mut destination = value.clone();
        merge_jsons(&mut destination, &value, None).unwrap();
        prop_assert_eq!(destination, value);
    }
}
