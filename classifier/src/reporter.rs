// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use crate::Section;

/// Receives the demo output, one line at a time.
pub trait Reporter {
    fn line(&mut self, line: &str);

    fn header(&mut self, section: Section, title: &str) {
        _ = section;
        self.line(title);
    }

    fn finish(&mut self) {}
}

impl Reporter for Vec<String> {
    fn line(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn line(&mut self, line: &str) {
        (**self).line(line);
    }

    fn header(&mut self, section: Section, title: &str) {
        (**self).header(section, title);
    }

    fn finish(&mut self) {
        (**self).finish();
    }
}
