// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::sync::{Arc, Mutex};

use classifier::{run_demo, Reporter, Section};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).filter(None, log::LevelFilter::max()).try_init();
}

/// Runs the demo and returns what it would have printed, line by line.
pub fn run_demo_and_return_stdout(sections: &[Section]) -> Vec<String> {
    init_logger();

    let buffer = Arc::new(Mutex::new(Vec::new()));

    run_demo(TestReporter {
        buffer: Arc::clone(&buffer),
        finished: false,
    }, sections);

    Arc::try_unwrap(buffer).unwrap().into_inner().unwrap()
}

/// Same as [`run_demo_and_return_stdout`], joined the way a terminal shows it.
pub fn run_demo_and_return_text(sections: &[Section]) -> String {
    let mut text = run_demo_and_return_stdout(sections).join("\n");
    text.push('\n');
    text
}

struct TestReporter {
    buffer: Arc<Mutex<Vec<String>>>,
    finished: bool,
}

impl Reporter for TestReporter {
    fn line(&mut self, line: &str) {
        assert!(!self.finished, "line written after the demo finished: {line}");
        self.buffer.lock().unwrap().push(line.to_string());
    }

    fn finish(&mut self) {
        assert!(!self.finished, "demo finished twice");
        self.finished = true;
    }
}
