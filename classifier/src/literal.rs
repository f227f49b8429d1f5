// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use thiserror::Error;

use crate::ClassifiableValue;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    #[error("empty literal")]
    Empty,

    #[error("unterminated text literal: {literal}")]
    UnterminatedText { literal: String },

    #[error("integer literal out of range: {literal}")]
    IntegerTooLarge { literal: String },

    #[error("not a valid literal: {literal}")]
    Invalid { literal: String },
}

/// Parses a single literal, as typed on the command line, into a value.
///
/// Integers without a suffix are `Int32`, with an `L` suffix `Int64`. A
/// decimal point, an exponent or a `d` suffix makes a `Float64`. Quoted
/// literals are texts, `null` is absent and booleans or char literals end up
/// as [`ClassifiableValue::Other`].
pub fn parse_literal(input: &str) -> Result<ClassifiableValue, LiteralError> {
    let literal = input.trim();

    if literal.is_empty() {
        return Err(LiteralError::Empty);
    }

    if literal == "null" {
        return Ok(ClassifiableValue::Absent);
    }

    if literal == "true" || literal == "false" {
        return Ok(ClassifiableValue::Other(literal.to_string()));
    }

    if let Some(rest) = literal.strip_prefix('"') {
        return match rest.strip_suffix('"') {
            Some(text) => Ok(ClassifiableValue::Text(text.to_string())),
            None => Err(LiteralError::UnterminatedText { literal: literal.to_string() }),
        };
    }

    if let Some(rest) = literal.strip_prefix('\'') {
        return match rest.strip_suffix('\'') {
            Some(c) if c.chars().count() == 1 => Ok(ClassifiableValue::Other(c.to_string())),
            _ => Err(LiteralError::Invalid { literal: literal.to_string() }),
        };
    }

    parse_number(literal)
}

fn parse_number(literal: &str) -> Result<ClassifiableValue, LiteralError> {
    let invalid = || LiteralError::Invalid { literal: literal.to_string() };
    let too_large = || LiteralError::IntegerTooLarge { literal: literal.to_string() };

    match literal {
        "NaN" => return Ok(ClassifiableValue::Float64(f64::NAN)),
        "Infinity" | "+Infinity" => return Ok(ClassifiableValue::Float64(f64::INFINITY)),
        "-Infinity" => return Ok(ClassifiableValue::Float64(f64::NEG_INFINITY)),
        _ => (),
    }

    let (sign, unsigned) = match literal.as_bytes()[0] {
        b'-' => ("-", &literal[1..]),
        b'+' => ("", &literal[1..]),
        _ => ("", literal),
    };

    if let Some(digits) = unsigned.strip_suffix(&['L', 'l'][..]) {
        let digits = strip_underscores(digits).ok_or_else(invalid)?;
        if !is_integer(&digits) {
            return Err(invalid());
        }

        return format!("{sign}{digits}")
            .parse()
            .map(ClassifiableValue::Int64)
            .map_err(|_| too_large());
    }

    if let Some(digits) = unsigned.strip_suffix(&['D', 'd'][..]) {
        return parse_double(sign, digits).ok_or_else(invalid);
    }

    let digits = strip_underscores(unsigned).ok_or_else(invalid)?;
    if is_integer(&digits) {
        return format!("{sign}{digits}")
            .parse()
            .map(ClassifiableValue::Int32)
            .map_err(|_| too_large());
    }

    parse_double(sign, unsigned).ok_or_else(invalid)
}

fn parse_double(sign: &str, digits: &str) -> Option<ClassifiableValue> {
    let digits = strip_underscores(digits)?;

    let starts_like_a_number = digits.starts_with(|c: char| c.is_ascii_digit() || c == '.');
    let only_number_chars = digits.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !starts_like_a_number || !only_number_chars {
        return None;
    }

    format!("{sign}{digits}").parse().ok().map(ClassifiableValue::Float64)
}

/// Underscores, alone or in runs, are only allowed between two digits.
fn strip_underscores(digits: &str) -> Option<String> {
    let bytes = digits.as_bytes();

    for (index, byte) in bytes.iter().enumerate() {
        if *byte != b'_' {
            continue;
        }

        let before = bytes[..index].iter().rev().find(|b| **b != b'_');
        let after = bytes[index + 1..].iter().find(|b| **b != b'_');
        if !before.is_some_and(u8::is_ascii_digit) || !after.is_some_and(u8::is_ascii_digit) {
            return None;
        }
    }

    Some(digits.replace('_', ""))
}

fn is_integer(digits: &str) -> bool {
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
