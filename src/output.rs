//! Terminal output formatting for the hub CLI.
//!
//! Provides Cargo-style status output with right-aligned coloured verbs.
//! All status output goes to stderr; stdout is reserved for palette output.

use std::io::{self, IsTerminal, Write};

use crate::types::Colour;

/// ANSI escape codes.
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Terminal-aware status printer.
///
/// Prints Cargo-style status lines to stderr with optional ANSI colours.
/// Colour is enabled when stderr is a terminal; swatches are coloured when
/// stdout is.
pub struct Printer {
    color: bool,
    swatch_color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
            swatch_color: io::stdout().is_terminal(),
        }
    }

    /// A printer that never emits ANSI escapes.
    pub fn plain() -> Self {
        Self {
            color: false,
            swatch_color: false,
        }
    }

    /// Print a status line with a green bold verb.
    /// e.g. "   Generated monochromatic palette from #3498DB"
    pub fn status(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    /// Print a warning line with a yellow bold verb.
    pub fn warning(&self, verb: &str, message: &str) {
        self.print_line(YELLOW, verb, message);
    }

    /// Format one palette entry for stdout.
    ///
    /// With colour on, the hex code sits on a block of its own colour in
    /// black or white text, whichever contrasts.
    pub fn swatch(&self, index: usize, colour: Colour) -> String {
        let label = format!(" {} ", colour);
        let hsl = colour.to_hsl();
        if self.swatch_color {
            let fg = colour.contrast();
            format!(
                "{index:>2} \x1b[48;2;{};{};{}m\x1b[38;2;{};{};{}m{label}{RESET} {DIM}{hsl}{RESET}",
                colour.r, colour.g, colour.b, fg.r, fg.g, fg.b
            )
        } else {
            format!("{index:>2} {label} {hsl}")
        }
    }

    /// Format a string as cyan (for paths).
    pub fn cyan(&self, text: &str) -> String {
        if self.color {
            format!("{CYAN}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn print_line(&self, color: &str, verb: &str, message: &str) {
        let mut stderr = io::stderr().lock();
        if self.color {
            let _ = writeln!(
                stderr,
                "{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}"
            );
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
