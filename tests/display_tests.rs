//! Tests for `Display` and `Debug` output.

use rstest::rstest;
use setops::prelude::*;

#[rstest]
#[case(Value::Null, "null")]
#[case(Value::from(false), "false")]
#[case(Value::from(-3), "-3")]
#[case(Value::from(1.5), "1.5")]
#[case(Value::from(2.0), "2")]
#[case(Value::from(f64::NEG_INFINITY), "-Infinity")]
#[case(Value::from(f64::NAN), "NaN")]
#[case(Value::from("3"), "\"3\"")]
#[case(Value::sequence([1, 1]), "[1, 1]")]
#[case(Value::set([1, 1]), "{1}")]
#[case(Value::sequence(Vec::<Value>::new()), "[]")]
fn test_value_display(#[case] value: Value, #[case] expected: &str) {
    assert_eq!(value.to_string(), expected);
}

#[rstest]
fn test_set_display_follows_insertion_order() {
    assert_eq!(set![3, 1, 2].to_string(), "{3, 1, 2}");
}

#[rstest]
fn test_operation_result_display() {
    let result = symmetric_difference(&values![11, "abc", 4], &values!["def", 4, "ghi"]).unwrap();
    assert_eq!(result.to_string(), r#"{11, "abc", "def", "ghi"}"#);
}

#[rstest]
fn test_set_debug() {
    assert_eq!(format!("{:?}", set![1, 2]), "{1, 2}");
}

#[rstest]
fn test_error_display() {
    let error = union(&Value::Null, &values![]).unwrap_err();
    assert_eq!(
        error.to_string(),
        "the argument must be a set or a sequence, found null"
    );
}
