// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod logger;
mod reporter;

use std::{io::{IsTerminal, Write}, path::PathBuf, process::exit};

use anyhow::Context;
use classifier::{parse_literal, run_demo, ClassifiableValue, ConfigRoot, Dispatch, Section};
use clap::Subcommand;
use colored::Colorize;
use logger::Logger;
use reporter::StdoutReporter;

#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file, `classifier.toml` in the working directory by default
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        use clap::Parser;
        Self::parse()
    }
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Runs the fixed demonstration
    Demo {
        /// Only run these sections
        #[arg(short, long = "section")]
        sections: Vec<Section>,
    },

    /// Classifies the given literals, e.g. `42`, `42L`, `3.14`, `"hi"` or `null`
    Classify {
        #[arg(short, long)]
        dispatch: Option<Dispatch>,

        #[arg(required = true, allow_hyphen_values = true, allow_negative_numbers = true)]
        literals: Vec<String>,
    },
}

fn main() {
    let args = Args::parse_args();
    Logger::initialize(args.verbose);

    if let Err(e) = run(args) {
        print_error(&e);
        exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = ConfigRoot::load_or_default(args.config.as_deref())
        .context("could not load the configuration")?;

    Logger::set_verbose(args.verbose || config.log.debug);
    log::debug!("Configuration: {config:?}");

    match args.command.unwrap_or(Commands::Demo { sections: Vec::new() }) {
        Commands::Demo { sections } => {
            let sections = pick_sections(sections, &config);
            let color = config.output.color && std::io::stdout().is_terminal();

            run_demo(StdoutReporter::new(color), &sections);
        }

        Commands::Classify { dispatch, literals } => {
            let dispatch = pick_dispatch(dispatch, &config);
            classify_literals(dispatch, &literals, &mut std::io::stdout().lock())?;
        }
    }

    Ok(())
}

/// Sections given on the command line replace the configured ones.
fn pick_sections(from_args: Vec<Section>, config: &ConfigRoot) -> Vec<Section> {
    if from_args.is_empty() {
        config.output.sections.clone()
    } else {
        from_args
    }
}

fn pick_dispatch(from_args: Option<Dispatch>, config: &ConfigRoot) -> Dispatch {
    from_args.unwrap_or(config.classify.dispatch)
}

/// Stops at the first literal that doesn't parse.
fn classify_literals(dispatch: Dispatch, literals: &[String], out: &mut impl Write) -> anyhow::Result<()> {
    for literal in literals {
        let value = parse_literal(literal)
            .with_context(|| format!("could not classify {literal}"))?;

        for line in classification_lines(dispatch, literal.trim(), &value) {
            writeln!(out, "{line}").context("could not write to stdout")?;
        }
    }

    out.flush().context("could not write to stdout")?;
    Ok(())
}

fn classification_lines(dispatch: Dispatch, literal: &str, value: &ClassifiableValue) -> Vec<String> {
    let mut lines = vec![
        format!("{literal}: {}", dispatch.classify(value)),
        format!("  describe: {}", dispatch.describe(value)),
    ];

    if let Some(i) = value.as_int32() {
        lines.push(format!("  sign: {}", dispatch.classify_int(i)));
    }

    lines
}

fn print_error(error: &anyhow::Error) {
    eprintln!("{}: {}", "error".red().bold(), format!("{error:#}").bold());
}
