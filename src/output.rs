//! Status lines for the chili CLI.
//!
//! Every command reports what it did as a right-aligned verb followed by a
//! message, on stderr. Stdout carries exports and `show` output only.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use crate::editor::Change;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const VERB_WIDTH: usize = 12;

/// How a status line is coloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Something was written or changed.
    Done,
    /// Nothing changed, or a side note.
    Note,
    Warn,
}

impl Tone {
    fn ansi(self) -> &'static str {
        match self {
            Tone::Done => "\x1b[32m",
            Tone::Note => "\x1b[36m",
            Tone::Warn => "\x1b[33m",
        }
    }
}

/// Writes status lines to stderr, coloured when stderr is a terminal.
pub struct Printer {
    color: bool,
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
        }
    }

    /// e.g. "    Exported dist/roomMap.h"
    pub fn success(&self, verb: &str, message: &str) {
        self.emit(Tone::Done, verb, message);
    }

    pub fn info(&self, verb: &str, message: &str) {
        self.emit(Tone::Note, verb, message);
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.emit(Tone::Warn, verb, message);
    }

    /// Report the outcome of an editor command: `verb` when the session
    /// changed, "Unchanged" otherwise.
    pub fn change(&self, verb: &str, change: &Change, what: &str) {
        if *change == Change::Unchanged {
            self.info("Unchanged", what);
        } else {
            self.success(verb, what);
        }
    }

    fn emit(&self, tone: Tone, verb: &str, message: &str) {
        let line = status_line(self.color.then_some(tone), verb, message);
        let _ = writeln!(io::stderr().lock(), "{}", line);
    }
}

/// Format one status line. `None` means plain text.
pub fn status_line(tone: Option<Tone>, verb: &str, message: &str) -> String {
    match tone {
        Some(tone) => format!(
            "{BOLD}{}{verb:>VERB_WIDTH$}{RESET} {message}",
            tone.ansi()
        ),
        None => format!("{verb:>VERB_WIDTH$} {message}"),
    }
}

/// `plural(1, "tile", "tiles")` is "1 tile".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    format!("{} {}", n, if n == 1 { singular } else { pluralized })
}

/// Path relative to the working directory when it lies inside it.
pub fn display_path(path: &Path) -> String {
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf));

    match relative {
        Some(p) if p.as_os_str().is_empty() => ".".to_string(),
        Some(p) => p.display().to_string(),
        None => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "tile", "tiles"), "1 tile");
        assert_eq!(plural(0, "layer", "layers"), "0 layers");
        assert_eq!(plural(256, "cell", "cells"), "256 cells");
    }

    #[test]
    fn test_status_line_plain_is_right_aligned() {
        assert_eq!(
            status_line(None, "Exported", "dist/roomMap.h"),
            "    Exported dist/roomMap.h"
        );
    }

    #[test]
    fn test_status_line_coloured() {
        let line = status_line(Some(Tone::Warn), "Warning", "odd file");
        assert!(line.starts_with("\x1b[1m\x1b[33m"));
        assert!(line.ends_with("\x1b[0m odd file"));
    }

    #[test]
    fn test_display_path_outside_cwd() {
        let p = Path::new("/nonexistent/path/to/file");
        assert_eq!(display_path(p), "/nonexistent/path/to/file");
    }
}
