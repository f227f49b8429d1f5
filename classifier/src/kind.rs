// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

/// The tag of a [`ClassifiableValue`](crate::ClassifiableValue), without its payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(strum::AsRefStr, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ValueKind {
    Absent,
    Int32,
    Int64,
    Float64,
    Text,
    Other,
}

impl ValueKind {
    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}
