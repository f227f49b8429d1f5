// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

//! Every classification comes in two flavours: one that matches on the value
//! with guarded arms, and one that asks the value for each payload in turn.
//! Both flavours must agree on every input.

use log::trace;
use serde::Deserialize;

use crate::{ClassifiableValue, Description, Label, Sign};

/// Integers above this are described as "large".
pub const LARGE_INT_THRESHOLD: i32 = 10;

/// Classifies a value by its type, splitting integers on parity.
#[must_use]
pub fn classify_by_type(value: &ClassifiableValue) -> Label {
    let label = match value {
        ClassifiableValue::Absent => Label::Null,
        ClassifiableValue::Int32(i) if i % 2 == 0 => Label::EvenInt,
        ClassifiableValue::Int32(..) => Label::OddInt,
        ClassifiableValue::Int64(l) => Label::Long(*l),
        ClassifiableValue::Float64(d) => Label::Double(*d),
        ClassifiableValue::Text(..) | ClassifiableValue::Other(..) => Label::Other,
    };

    trace!("classify_by_type({} {value}) = {label}", value.kind().name());
    label
}

/// Same as [`classify_by_type`], but tests for each type separately and
/// extracts the payload afterwards.
#[must_use]
pub fn classify_by_type_manual(value: &ClassifiableValue) -> Label {
    if value.is_absent() {
        return Label::Null;
    }

    if let Some(i) = value.as_int32() {
        return if i % 2 == 0 { Label::EvenInt } else { Label::OddInt };
    }

    if let Some(l) = value.as_int64() {
        return Label::Long(l);
    }

    if let Some(d) = value.as_float64() {
        return Label::Double(d);
    }

    Label::Other
}

/// Describes a value, calling integers above [`LARGE_INT_THRESHOLD`] large.
///
/// The guarded `Int32` arm has to come before the unguarded one, otherwise it
/// would never be reached.
#[must_use]
pub fn classify_by_type_with_threshold(value: &ClassifiableValue) -> Description<'_> {
    let description = match value {
        ClassifiableValue::Int32(i) if *i > LARGE_INT_THRESHOLD => Description::LargeInt(*i),
        ClassifiableValue::Int32(i) => Description::Int(*i),
        ClassifiableValue::Int64(l) => Description::Long(*l),
        ClassifiableValue::Float64(d) => Description::Double(*d),
        ClassifiableValue::Absent => Description::Null,
        ClassifiableValue::Text(..) | ClassifiableValue::Other(..) => Description::Other(value),
    };

    trace!("classify_by_type_with_threshold({} {value}) = {description}", value.kind().name());
    description
}

/// Describes a value without any guards.
#[must_use]
pub fn describe(value: &ClassifiableValue) -> Description<'_> {
    if let Some(i) = value.as_int32() {
        Description::Int(i)
    } else if let Some(l) = value.as_int64() {
        Description::Long(l)
    } else if let Some(d) = value.as_float64() {
        Description::Double(d)
    } else if value.is_absent() {
        Description::Null
    } else {
        Description::Other(value)
    }
}

/// The guards partition every `i32`, the last arm has none.
#[must_use]
pub fn classify_int(value: i32) -> Sign {
    let sign = match value {
        i if i > 0 => Sign::Positive,
        0 => Sign::Zero,
        _ => Sign::Negative,
    };

    trace!("classify_int({value}) = {sign}");
    sign
}

#[must_use]
pub fn classify_int_manual(value: i32) -> Sign {
    if value > 0 {
        return Sign::Positive;
    }

    if value == 0 {
        return Sign::Zero;
    }

    Sign::Negative
}

/// Selects which flavour of classifier to run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[derive(strum::AsRefStr, strum::Display, strum::EnumIter, strum::EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Dispatch {
    /// Test each type in turn and extract the payload by hand.
    Manual,

    /// Match once, with guards on the arms.
    #[default]
    Pattern,
}

impl Dispatch {
    #[must_use]
    pub fn classify(&self, value: &ClassifiableValue) -> Label {
        match self {
            Self::Manual => classify_by_type_manual(value),
            Self::Pattern => classify_by_type(value),
        }
    }

    /// The manual flavour has no threshold.
    #[must_use]
    pub fn describe<'value>(&self, value: &'value ClassifiableValue) -> Description<'value> {
        match self {
            Self::Manual => describe(value),
            Self::Pattern => classify_by_type_with_threshold(value),
        }
    }

    #[must_use]
    pub fn classify_int(&self, value: i32) -> Sign {
        match self {
            Self::Manual => classify_int_manual(value),
            Self::Pattern => classify_int(value),
        }
    }
}
