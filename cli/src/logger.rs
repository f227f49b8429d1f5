// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use log::{LevelFilter, Log, Metadata, Record};

pub(crate) struct Logger;

impl Logger {
    pub fn initialize(verbose: bool) {
        let logger = Box::leak(Box::new(Logger));

        if log::set_logger(logger).is_err() {
            return;
        }

        log::set_max_level(Self::level(verbose));
        log::debug!("Logger is set up");
    }

    /// Raises the level after the configuration has been read.
    pub fn set_verbose(verbose: bool) {
        log::set_max_level(Self::level(verbose));
    }

    const fn level(verbose: bool) -> LevelFilter {
        if verbose {
            LevelFilter::Trace
        } else {
            LevelFilter::Info
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        eprintln!("[{}] {}: {}", record.level(), record.file().unwrap_or_default(), record.args());
    }

    fn flush(&self) {}
}
