// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::Display;

use crate::{value::Double, ClassifiableValue};

/// The outcome of classifying a value by its type.
#[derive(Debug, Clone, PartialEq)]
pub enum Label {
    Null,
    EvenInt,
    OddInt,
    Long(i64),
    Double(f64),
    Other,
}

impl Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::EvenInt => f.write_str("even int"),
            Self::OddInt => f.write_str("odd int"),
            Self::Long(l) => write!(f, "a long: {l}"),
            Self::Double(d) => write!(f, "a double: {}", Double(*d)),
            Self::Other => f.write_str("other"),
        }
    }
}

/// The sign of a 32-bit integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(strum::AsRefStr, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Sign {
    Positive,
    Zero,
    Negative,
}

impl Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// A one-line description of a value, as printed by the `instanceof` part of
/// the demo.
#[derive(Debug, Clone, PartialEq)]
pub enum Description<'value> {
    LargeInt(i32),
    Int(i32),
    Long(i64),
    Double(f64),
    Null,
    Other(&'value ClassifiableValue),
}

impl Display for Description<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LargeInt(i) => write!(f, "large int={i}"),
            Self::Int(i) => write!(f, "int={i}"),
            Self::Long(l) => write!(f, "long={l}"),
            Self::Double(d) => write!(f, "double={}", Double(*d)),
            Self::Null => f.write_str("null"),
            Self::Other(value) => write!(f, "other={value}"),
        }
    }
}
