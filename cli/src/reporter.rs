// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::io::{StdoutLock, Write};

use classifier::{Reporter, Section};
use colored::Colorize;

/// Writes the demo to standard output, with bold headers when asked to.
pub(crate) struct StdoutReporter {
    out: StdoutLock<'static>,
    color: bool,
}

impl StdoutReporter {
    pub fn new(color: bool) -> Self {
        Self {
            out: std::io::stdout().lock(),
            color,
        }
    }
}

impl Reporter for StdoutReporter {
    fn line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{line}") {
            log::error!("Failed to write to stdout: {e}");
        }
    }

    fn header(&mut self, section: Section, title: &str) {
        if !self.color {
            self.line(title);
            return;
        }

        let title = match section {
            Section::Instanceof => title.cyan(),
            Section::ObjectSwitch => title.magenta(),
            Section::PrimitiveSwitch => title.yellow(),
        };
        self.line(&title.bold().to_string());
    }

    fn finish(&mut self) {
        _ = self.out.flush();
    }
}
