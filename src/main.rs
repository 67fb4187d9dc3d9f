//! Command-line entry point: REPL and file runner.
//!
//! ```text
//! wisp [path.wisp]
//! ```
//!
//! With no arguments, starts a REPL that evaluates one statement per line
//! and never aborts on a bad line. With one argument ending in `.wisp`,
//! reads and runs that file, exiting non-zero if any compile-time or
//! runtime error was recorded. Anything else — the wrong extension, a
//! file that doesn't exist — prints a usage message and exits zero; this
//! mirrors the driver this interpreter was modeled on, which treats a
//! misuse of the CLI itself as distinct from a program that failed to run.

use std::cell::RefCell;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;

use clap::Parser as ClapParser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use wisp::diagnostics::Diagnostics;

const EXTENSION: &str = "wisp";

/// Command-line interface, parsed with `clap`'s derive API.
#[derive(ClapParser)]
#[command(name = "wisp")]
#[command(about = "A small, dynamically typed, C-family scripting language", long_about = None)]
struct Cli {
    /// Source file to run, plus anything else the caller tacked on. Only a
    /// single path is accepted; extra positionals route to `usage()` rather
    /// than clap's own argument-count error.
    paths: Vec<PathBuf>,

    /// Disable ANSI colouring of diagnostics.
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity; repeat for more detail (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let use_color = !cli.no_color && io::stderr().is_terminal();
    let mut paths = cli.paths.into_iter();
    match (paths.next(), paths.next()) {
        (None, _) => {
            repl(use_color);
            ExitCode::SUCCESS
        }
        (Some(_), Some(_)) => {
            usage();
            ExitCode::SUCCESS
        }
        (Some(path), None) => run_file(&path, use_color),
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn run_file(path: &PathBuf, use_color: bool) -> ExitCode {
    let has_right_extension = path.extension().and_then(|ext| ext.to_str()) == Some(EXTENSION);
    if !has_right_extension {
        usage();
        return ExitCode::SUCCESS;
    }

    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "could not read source file");
            usage();
            return ExitCode::SUCCESS;
        }
    };

    let diagnostics = Rc::new(RefCell::new(Diagnostics::new(use_color)));
    let span = tracing::info_span!("run_file", path = %path.display());
    let _enter = span.enter();
    wisp::run(&source, diagnostics.clone());

    let failed = diagnostics.borrow().had_error() || diagnostics.borrow().had_runtime_error();
    tracing::info!(failed, "file run complete");
    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

fn usage() {
    eprintln!("usage: wisp [path.{EXTENSION}]");
}

fn repl(use_color: bool) {
    tracing::info!("repl session starting");
    let diagnostics = Rc::new(RefCell::new(Diagnostics::new(use_color)));
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF (Ctrl-D)
            Ok(_) => {}
            Err(err) => {
                eprintln!("{}", format!("error reading line: {err}").red());
                break;
            }
        }

        diagnostics.borrow_mut().reset_compile_error();
        wisp::run(&line, diagnostics.clone());
    }
    tracing::info!("repl session ending");
}
