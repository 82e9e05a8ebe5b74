use knapbench_utils::*;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
struct Record {
    zeta: Vec<u32>,
    alpha: String,
}

#[test]
fn test_jsonify_sorts_keys() {
    let value = json!({"b": 1, "a": {"d": 2, "c": 3}});
    assert_eq!(jsonify(&value), r#"{"a":{"c":3,"d":2},"b":1}"#);
}

#[test]
fn test_jsonify_sorts_keys_inside_arrays() {
    let value = json!([{"b": 1, "a": 2}]);
    assert_eq!(jsonify(&value), r#"[{"a":2,"b":1}]"#);
}

#[test]
fn test_jsonify_is_field_order_independent() {
    let a: serde_json::Value = dejsonify(r#"{"x": 1, "y": 2}"#).unwrap();
    let b: serde_json::Value = dejsonify(r#"{"y": 2, "x": 1}"#).unwrap();
    assert_eq!(jsonify(&a), jsonify(&b));
}

#[test]
fn test_compress_decompress_roundtrip() {
    let record = Record {
        zeta: vec![1, 2, 3],
        alpha: "knapsack".to_string(),
    };
    let compressed = compress_obj(&record);
    let decompressed: Record = decompress_obj(&compressed).unwrap();
    assert_eq!(record, decompressed);
}

#[test]
fn test_u8s_from_str_is_deterministic() {
    assert_eq!(u8s_from_str("seed"), u8s_from_str("seed"));
    assert_ne!(u8s_from_str("seed"), u8s_from_str("seed2"));
}
