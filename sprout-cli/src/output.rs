//! Terminal output helpers.
//!
//! Progress lines go to stdout, errors to stderr. Styling is
//! applied by `console`, which drops colors automatically when the stream is
//! not a terminal, so piped output stays plain text.

use console::{Emoji, style};
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

/// Global quiet mode flag - when true, suppresses all output except errors.
static QUIET_MODE: AtomicBool = AtomicBool::new(false);

/// Global verbosity level (0 = normal, 1+ = verbose).
static VERBOSITY: AtomicU8 = AtomicU8::new(0);

pub static ERROR: Emoji<'_, '_> = Emoji("❌ ", "ERR ");

/// Set quiet mode globally.
///
/// When quiet mode is enabled, all output functions except `error()` will be suppressed.
pub fn set_quiet(quiet: bool) {
    QUIET_MODE.store(quiet, Ordering::SeqCst);
}

/// Check if quiet mode is enabled.
pub fn is_quiet() -> bool {
    QUIET_MODE.load(Ordering::SeqCst)
}

/// Set verbosity level globally.
pub fn set_verbosity(level: u8) {
    VERBOSITY.store(level, Ordering::SeqCst);
}

/// Check if verbose mode is enabled (verbosity level >= 1).
pub fn is_verbose() -> bool {
    VERBOSITY.load(Ordering::SeqCst) >= 1
}

/// Format the confirmation line for one written file.
pub fn created_line(relative_path: &str) -> String {
    format!("{} {}", style("Created:").green(), relative_path)
}

/// Print the confirmation for one written file (suppressed in quiet mode).
pub fn created(relative_path: &str) {
    if !is_quiet() {
        println!("{}", created_line(relative_path));
    }
}

/// Print one dry-run line (suppressed in quiet mode).
pub fn planned(relative_path: &str, note: &str) {
    if !is_quiet() {
        println!("{} {} {}", style("Would write:").cyan(), relative_path, style(note).dim());
    }
}

/// Print a summary line (suppressed in quiet mode).
pub fn summary(msg: &str) {
    if !is_quiet() {
        println!("{}", style(msg).bold());
    }
}

/// Print raw text such as JSON (suppressed in quiet mode).
pub fn raw(text: &str) {
    if !is_quiet() {
        println!("{}", text);
    }
}

/// Print an error message (NEVER suppressed, even in quiet mode).
pub fn error(msg: &str) {
    eprintln!("{} {}", ERROR, style(msg).red().bold());
}

/// Print a verbose message (only shown when verbosity >= 1 and not in quiet mode).
pub fn verbose(msg: &str) {
    if is_verbose() && !is_quiet() {
        println!("{}", style(msg).dim());
    }
}
