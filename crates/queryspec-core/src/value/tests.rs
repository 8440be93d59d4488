use super::*;
use std::cmp::Ordering;

#[test]
fn canonical_cmp_orders_by_rank_first() {
    assert_eq!(
        canonical_cmp(&Value::None, &Value::Bool(false)),
        Ordering::Less
    );
    assert_eq!(
        canonical_cmp(&Value::Int(i64::MAX), &Value::Text(String::new())),
        Ordering::Less
    );
    assert_eq!(
        canonical_cmp(&Value::Unit, &Value::List(vec![])),
        Ordering::Greater
    );
}

#[test]
fn canonical_cmp_same_variant_uses_value_order() {
    assert_eq!(canonical_cmp(&Value::Int(1), &Value::Int(2)), Ordering::Less);
    assert_eq!(
        canonical_cmp(&Value::Text("b".into()), &Value::Text("a".into())),
        Ordering::Greater
    );
}

#[test]
fn canonical_cmp_lists_compare_elementwise_then_length() {
    let short = Value::from(vec![1i64, 2]);
    let long = Value::from(vec![1i64, 2, 3]);
    assert_eq!(canonical_cmp(&short, &long), Ordering::Less);
    assert_eq!(
        canonical_cmp(&Value::from(vec![2i64]), &Value::from(vec![1i64, 9])),
        Ordering::Greater
    );
}

#[test]
fn strict_order_cmp_rejects_mixed_variants() {
    assert_eq!(strict_order_cmp(&Value::Int(1), &Value::Uint(1)), None);
    assert_eq!(
        strict_order_cmp(&Value::Int(1), &Value::Int(3)),
        Some(Ordering::Less)
    );
}

#[test]
fn strict_eq_null_is_its_own_class() {
    assert_eq!(strict_eq(&Value::None, &Value::None), Some(true));
    assert_eq!(strict_eq(&Value::Int(0), &Value::None), Some(false));
    assert_eq!(strict_eq(&Value::None, &Value::Text("x".into())), Some(false));
}

#[test]
fn strict_eq_rejects_non_null_variant_mismatch() {
    assert_eq!(strict_eq(&Value::Int(1), &Value::Uint(1)), None);
    assert_eq!(strict_eq(&Value::Bool(true), &Value::Int(1)), None);
}

#[test]
fn strict_eq_lists_require_matching_elements() {
    let a = Value::from(vec!["x", "y"]);
    let b = Value::from(vec!["x", "y"]);
    let c = Value::from(vec!["x"]);
    assert_eq!(strict_eq(&a, &b), Some(true));
    assert_eq!(strict_eq(&a, &c), Some(false));
    assert_eq!(
        strict_eq(&Value::from(vec![1i64]), &Value::from(vec![1u64])),
        None
    );
}

#[test]
fn float64_normalizes_negative_zero() {
    let zero = Float64::try_new(0.0).unwrap();
    let neg_zero = Float64::try_new(-0.0).unwrap();
    assert_eq!(zero, neg_zero);
    assert_eq!(neg_zero.get().to_bits(), 0.0f64.to_bits());
}

#[test]
fn float64_rejects_non_finite() {
    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(Float64::try_new(value).is_none());
    }
}

#[test]
fn value_serde_round_trip() {
    let value = Value::List(vec![
        Value::Int(-3),
        Value::Text("x".to_string()),
        Value::None,
        Value::Bool(true),
    ]);

    let json = serde_json::to_string(&value).expect("serialize");
    let decoded: Value = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, value);
}

#[test]
fn float64_deserializes_finite_values_only() {
    assert!(serde_json::from_str::<Float64>("1.5").is_ok());
    assert!(serde_json::from_str::<Float64>("1e999").is_err());
}
