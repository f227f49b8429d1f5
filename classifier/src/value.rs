// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Write};

use crate::ValueKind;

/// A dynamically-typed value. Exactly one variant is active.
#[derive(Clone, Debug, PartialEq)]
pub enum ClassifiableValue {
    /// `null`
    Absent,

    Int32(i32),
    Int64(i64),
    Float64(f64),
    Text(String),

    /// Any value none of the classifiers know about, kept only as its
    /// printed form.
    Other(String),
}

impl ClassifiableValue {
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Absent => ValueKind::Absent,
            Self::Int32(..) => ValueKind::Int32,
            Self::Int64(..) => ValueKind::Int64,
            Self::Float64(..) => ValueKind::Float64,
            Self::Text(..) => ValueKind::Text,
            Self::Other(..) => ValueKind::Other,
        }
    }

    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    #[must_use]
    pub fn as_int32(&self) -> Option<i32> {
        match self {
            Self::Int32(i) => Some(*i),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_int64(&self) -> Option<i64> {
        match self {
            Self::Int64(l) => Some(*l),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_float64(&self) -> Option<f64> {
        match self {
            Self::Float64(d) => Some(*d),
            _ => None,
        }
    }
}

impl Display for ClassifiableValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Absent => f.write_str("null"),
            Self::Int32(i) => i.fmt(f),
            Self::Int64(l) => l.fmt(f),
            Self::Float64(d) => Double(*d).fmt(f),
            Self::Text(str) => f.write_str(str),
            Self::Other(rendered) => f.write_str(rendered),
        }
    }
}

impl From<i32> for ClassifiableValue {
    fn from(value: i32) -> Self {
        Self::Int32(value)
    }
}

impl From<i64> for ClassifiableValue {
    fn from(value: i64) -> Self {
        Self::Int64(value)
    }
}

impl From<f64> for ClassifiableValue {
    fn from(value: f64) -> Self {
        Self::Float64(value)
    }
}

impl From<&str> for ClassifiableValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ClassifiableValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<ClassifiableValue>> From<Option<T>> for ClassifiableValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

/// Prints a double the way the demo output expects it: shortest round-trip
/// digits, always with a fraction or an exponent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Double(pub f64);

impl Display for Double {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let d = self.0;

        if d.is_nan() {
            return f.write_str("NaN");
        }

        if d.is_infinite() {
            return f.write_str(if d > 0.0 { "Infinity" } else { "-Infinity" });
        }

        let magnitude = d.abs();
        if magnitude >= 1e7 || (magnitude != 0.0 && magnitude < 1e-3) {
            let scientific = format!("{d:e}");
            let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));

            f.write_str(mantissa)?;
            if !mantissa.contains('.') {
                f.write_str(".0")?;
            }
            f.write_char('E')?;
            return f.write_str(exponent);
        }

        let plain = d.to_string();
        f.write_str(&plain)?;
        if !plain.contains('.') {
            f.write_str(".0")?;
        }

        Ok(())
    }
}
