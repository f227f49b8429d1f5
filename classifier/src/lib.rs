// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod classify;
mod config;
mod demo;
mod kind;
mod label;
mod literal;
mod reporter;
mod value;

pub use self::{
    classify::{
        classify_by_type,
        classify_by_type_manual,
        classify_by_type_with_threshold,
        classify_int,
        classify_int_manual,
        describe,
        Dispatch,
        LARGE_INT_THRESHOLD,
    },
    config::{
        ConfigError,
        ConfigRoot,
        ConfigSectionClassify,
        ConfigSectionLog,
        ConfigSectionOutput,
        DEFAULT_CONFIG_FILE_NAME,
    },
    demo::{demo_inputs, run_demo, DemoInput, Section, DEMO_INTEGERS},
    kind::ValueKind,
    label::{Description, Label, Sign},
    literal::{parse_literal, LiteralError},
    reporter::Reporter,
    value::{ClassifiableValue, Double},
};
