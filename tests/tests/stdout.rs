// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use classifier::Section;
use pretty_assertions::assert_eq;
use rstest::rstest;
use tests::{run_demo_and_return_stdout, run_demo_and_return_text};

const FULL_OUTPUT: &str = "\
=== instanceof: Before vs Java 25 ===
[before] int=42
[before] long=42
[before] double=3.14
[before] other=hi
[before] null
[J25] large int=42
[J25] long=42
[J25] double=3.14
[J25] other=hi
[J25] null

=== switch(Object): Before vs Java 25 ===
beforeSwitch(a): even int
beforeSwitch(b): a long: 42
beforeSwitch(c): a double: 3.14
beforeSwitch(d): other
beforeSwitch(e): null
afterSwitch(a):  even int
afterSwitch(b):  a long: 42
afterSwitch(c):  a double: 3.14
afterSwitch(d):  other
afterSwitch(e):  null

=== switch(int) with guards (patterns) vs pre-J25 ===
primitiveSwitchGuards(10): positive
primitiveSwitchGuards(0):  zero
primitiveSwitchGuards(-5): negative
beforePrimitiveSwitch(10): positive
beforePrimitiveSwitch(0):  zero
beforePrimitiveSwitch(-5): negative
";

#[test]
fn full_demo_output() {
    assert_eq!(run_demo_and_return_text(&Section::all()), FULL_OUTPUT);
}

#[test]
fn demo_is_repeatable() {
    assert_eq!(run_demo_and_return_stdout(&Section::all()), run_demo_and_return_stdout(&Section::all()));
}

#[rstest]
#[case(
    &[Section::ObjectSwitch],
    &[
        "",
        "=== switch(Object): Before vs Java 25 ===",
        "beforeSwitch(a): even int",
        "beforeSwitch(b): a long: 42",
        "beforeSwitch(c): a double: 3.14",
        "beforeSwitch(d): other",
        "beforeSwitch(e): null",
        "afterSwitch(a):  even int",
        "afterSwitch(b):  a long: 42",
        "afterSwitch(c):  a double: 3.14",
        "afterSwitch(d):  other",
        "afterSwitch(e):  null",
    ],
)]
#[case(
    &[Section::PrimitiveSwitch, Section::Instanceof],
    &[
        "=== instanceof: Before vs Java 25 ===",
        "[before] int=42",
        "[before] long=42",
        "[before] double=3.14",
        "[before] other=hi",
        "[before] null",
        "[J25] large int=42",
        "[J25] long=42",
        "[J25] double=3.14",
        "[J25] other=hi",
        "[J25] null",
        "",
        "=== switch(int) with guards (patterns) vs pre-J25 ===",
        "primitiveSwitchGuards(10): positive",
        "primitiveSwitchGuards(0):  zero",
        "primitiveSwitchGuards(-5): negative",
        "beforePrimitiveSwitch(10): positive",
        "beforePrimitiveSwitch(0):  zero",
        "beforePrimitiveSwitch(-5): negative",
    ],
)]
#[case(&[], &[])]
fn selected_sections(#[case] sections: &[Section], #[case] expected: &[&str]) {
    let expected: Vec<String> = expected.iter().map(|x| x.to_string()).collect();
    assert_eq!(run_demo_and_return_stdout(sections), expected);
}
