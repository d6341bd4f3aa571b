//! Terminal output formatting for the swatch CLI.
//!
//! Status lines go to stderr with right-aligned coloured verbs, Cargo style.
//! Stdout is reserved for the table itself, so it can be piped.

use std::io::{self, IsTerminal, Write};

use crate::types::{Colour, ColourEntry};

/// ANSI escape codes.
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// How much status output to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

/// Terminal-aware status printer.
///
/// Colour is enabled when stderr is a terminal.
pub struct Printer {
    color: bool,
    verbosity: Verbosity,
}

impl Printer {
    pub fn with_verbosity(verbosity: Verbosity) -> Self {
        Self {
            color: io::stderr().is_terminal(),
            verbosity,
        }
    }

    /// A printer that never emits ANSI codes (for tests and pipes).
    pub fn plain(verbosity: Verbosity) -> Self {
        Self {
            color: false,
            verbosity,
        }
    }

    /// Print a status line with a green bold verb.
    /// e.g. "     Loading photo.png (1600x1200)"
    pub fn status(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    /// Print a success/completion line with a green bold verb.
    pub fn success(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    /// Print an informational line with a cyan bold verb.
    pub fn info(&self, verb: &str, message: &str) {
        self.print_line(CYAN, verb, message);
    }

    /// Print a dim line, only with `--verbose`.
    pub fn verbose(&self, verb: &str, message: &str) {
        if self.verbosity == Verbosity::Verbose {
            self.print_line(DIM, verb, message);
        }
    }

    /// Print a warning line with a yellow bold verb.
    pub fn warning(&self, verb: &str, message: &str) {
        self.print_line(YELLOW, verb, message);
    }

    /// Format a string as dim/grey.
    pub fn dim(&self, text: &str) -> String {
        if self.color {
            format!("{DIM}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    /// Format a string as bold.
    pub fn bold(&self, text: &str) -> String {
        if self.color {
            format!("{BOLD}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    /// A two-cell truecolor block, or nothing without colour.
    pub fn swatch(&self, colour: Colour) -> String {
        if self.color {
            format!("\x1b[48;2;{};{};{}m  {RESET} ", colour.r, colour.g, colour.b)
        } else {
            String::new()
        }
    }

    /// One display row: swatch, hex, percentage and pixel count.
    /// e.g. "#FF0000 • 50.00% • 2 px"
    pub fn table_row(&self, entry: &ColourEntry) -> String {
        format!(
            "{}{} {}",
            self.swatch(entry.colour()),
            self.bold(&entry.hex),
            self.dim(&format!(
                "• {:.2}% • {} px",
                entry.ratio * 100.0,
                entry.count
            ))
        )
    }

    /// Write display rows for `entries` to stdout.
    pub fn print_rows(&self, entries: &[ColourEntry]) {
        let mut stdout = io::stdout().lock();
        for entry in entries {
            let _ = writeln!(stdout, "{}", self.table_row(entry));
        }
    }

    fn print_line(&self, color: &str, verb: &str, message: &str) {
        if self.verbosity == Verbosity::Quiet {
            return;
        }

        let mut stderr = io::stderr().lock();
        if self.color {
            let _ = writeln!(stderr, "{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}");
        } else {
            let _ = writeln!(stderr, "{verb:>VERB_WIDTH$} {message}");
        }
    }
}

/// Pluralize a count: `plural(1, "colour", "colours")` → "1 colour".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// Return a relative display path when possible, absolute otherwise.
pub fn display_path(path: &std::path::Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(relative) = path.strip_prefix(&cwd) {
            let s = relative.display().to_string();
            if s.is_empty() {
                return ".".to_string();
            }
            return s;
        }
    }
    path.display().to_string()
}
