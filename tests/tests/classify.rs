// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use classifier::*;
use rstest::rstest;
use tests::init_logger;

#[test]
fn demo_inputs_classify_in_call_order() {
    init_logger();

    let labels: Vec<String> = demo_inputs().iter()
        .map(|input| classify_by_type(&input.value).to_string())
        .collect();

    assert_eq!(labels, ["even int", "a long: 42", "a double: 3.14", "other", "null"]);
}

#[rstest]
#[case(-3)]
#[case(-1)]
#[case(1)]
#[case(7)]
#[case(i32::MAX)]
fn odd_ints(#[case] i: i32) {
    assert_eq!(classify_by_type(&ClassifiableValue::Int32(i)), Label::OddInt);
}

#[rstest]
#[case(-4)]
#[case(0)]
#[case(2)]
#[case(42)]
#[case(i32::MIN)]
fn even_ints(#[case] i: i32) {
    assert_eq!(classify_by_type(&ClassifiableValue::Int32(i)), Label::EvenInt);
}

#[rstest]
#[case(10, "positive")]
#[case(0, "zero")]
#[case(-5, "negative")]
fn int_signs(#[case] i: i32, #[case] expected: &str) {
    assert_eq!(classify_int(i).to_string(), expected);
    assert_eq!(classify_int_manual(i).to_string(), expected);
}

#[rstest]
#[case(42, "large int=42")]
#[case(5, "int=5")]
fn guarded_arm_comes_first(#[case] i: i32, #[case] expected: &str) {
    assert_eq!(classify_by_type_with_threshold(&ClassifiableValue::Int32(i)).to_string(), expected);
}

#[rstest]
#[case("42", "even int")]
#[case("42L", "a long: 42")]
#[case("3.14", "a double: 3.14")]
#[case("\"hi\"", "other")]
#[case("null", "null")]
#[case("'x'", "other")]
fn literals_classify_like_values(#[case] literal: &str, #[case] expected: &str) {
    let value = parse_literal(literal).unwrap();

    for dispatch in [Dispatch::Manual, Dispatch::Pattern] {
        assert_eq!(dispatch.classify(&value).to_string(), expected, "{dispatch}");
    }
}

#[test]
fn every_kind_has_a_label() {
    let values = [
        ClassifiableValue::Absent,
        ClassifiableValue::Int32(1),
        ClassifiableValue::Int64(1),
        ClassifiableValue::Float64(1.0),
        ClassifiableValue::Text("1".into()),
        ClassifiableValue::Other("1".into()),
    ];

    let kinds: Vec<ValueKind> = values.iter().map(ClassifiableValue::kind).collect();
    assert_eq!(kinds, [
        ValueKind::Absent,
        ValueKind::Int32,
        ValueKind::Int64,
        ValueKind::Float64,
        ValueKind::Text,
        ValueKind::Other,
    ]);

    for value in &values {
        assert!(!classify_by_type(value).to_string().is_empty());
    }
}
