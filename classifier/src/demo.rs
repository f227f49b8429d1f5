// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use log::debug;
use serde::Deserialize;
use strum::IntoEnumIterator;

use crate::{ClassifiableValue, Dispatch, Reporter};

/// The integers the primitive switch section is run with.
pub const DEMO_INTEGERS: [i32; 3] = [10, 0, -5];

#[derive(Debug, Clone, PartialEq)]
pub struct DemoInput {
    pub name: &'static str,
    pub value: ClassifiableValue,
}

/// The values every object section is run with, in order.
#[must_use]
pub fn demo_inputs() -> [DemoInput; 5] {
    [
        DemoInput { name: "a", value: ClassifiableValue::Int32(42) },
        DemoInput { name: "b", value: ClassifiableValue::Int64(42) },
        DemoInput { name: "c", value: ClassifiableValue::Float64(3.14) },
        DemoInput { name: "d", value: ClassifiableValue::Text("hi".into()) },
        DemoInput { name: "e", value: ClassifiableValue::Absent },
    ]
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[derive(strum::AsRefStr, strum::Display, strum::EnumIter, strum::EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Section {
    Instanceof,
    ObjectSwitch,
    PrimitiveSwitch,
}

impl Section {
    #[must_use]
    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }

    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Instanceof => "=== instanceof: Before vs Java 25 ===",
            Self::ObjectSwitch => "=== switch(Object): Before vs Java 25 ===",
            Self::PrimitiveSwitch => "=== switch(int) with guards (patterns) vs pre-J25 ===",
        }
    }

    /// Every section but the first is separated from the previous one by an
    /// empty line, even when the previous one wasn't printed.
    #[must_use]
    pub const fn has_leading_blank_line(&self) -> bool {
        !matches!(self, Self::Instanceof)
    }

    /// Whether the results of a section line up in one column.
    #[must_use]
    pub const fn aligns_results(&self) -> bool {
        !matches!(self, Self::Instanceof)
    }

    fn rows(&self, inputs: &[DemoInput]) -> Vec<(String, String)> {
        match self {
            Self::Instanceof => {
                [(Dispatch::Manual, "[before]"), (Dispatch::Pattern, "[J25]")]
                    .into_iter()
                    .flat_map(|(dispatch, tag)| {
                        inputs.iter().map(move |input| (tag.to_string(), dispatch.describe(&input.value).to_string()))
                    })
                    .collect()
            }

            Self::ObjectSwitch => {
                [(Dispatch::Manual, "beforeSwitch"), (Dispatch::Pattern, "afterSwitch")]
                    .into_iter()
                    .flat_map(|(dispatch, function)| {
                        inputs.iter().map(move |input| {
                            (format!("{function}({}):", input.name), dispatch.classify(&input.value).to_string())
                        })
                    })
                    .collect()
            }

            Self::PrimitiveSwitch => {
                [(Dispatch::Pattern, "primitiveSwitchGuards"), (Dispatch::Manual, "beforePrimitiveSwitch")]
                    .into_iter()
                    .flat_map(|(dispatch, function)| {
                        DEMO_INTEGERS.into_iter().map(move |value| {
                            (format!("{function}({value}):"), dispatch.classify_int(value).to_string())
                        })
                    })
                    .collect()
            }
        }
    }
}

/// Runs the given sections of the demo, always in their fixed order.
pub fn run_demo(mut reporter: impl Reporter, sections: &[Section]) {
    let inputs = demo_inputs();

    for section in Section::iter().filter(|x| sections.contains(x)) {
        debug!("Running section {section}");

        if section.has_leading_blank_line() {
            reporter.line("");
        }
        reporter.header(section, section.title());

        let rows = section.rows(&inputs);
        let width = section.aligns_results().then(|| {
            rows.iter().map(|(prefix, _)| prefix.len() + 1).max().unwrap_or_default()
        });

        for (prefix, result) in rows {
            let line = match width {
                Some(width) => format!("{prefix:<width$}{result}"),
                None => format!("{prefix} {result}"),
            };
            reporter.line(&line);
        }
    }

    reporter.finish();
}
