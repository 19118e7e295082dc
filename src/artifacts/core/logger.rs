//! Status log and non-fatal error channel
//!
//! Analysis jobs run on a background worker while the caller polls progress,
//! so the logger is shared between threads and serializes writes behind a
//! lock. Nothing in the analysis depends on what was logged; write failures
//! are traced and otherwise ignored.
//!
//! Errors reported through [`Logger::report_error`] are also kept, so the
//! caller can surface them to the user after the run without stopping it.

use colored::Colorize;
use is_terminal::IsTerminal;
use std::io::Write;
use std::sync::{Mutex, MutexGuard, PoisonError};

const SECTION_SEPARATOR_WIDTH: usize = 72;

pub struct Logger {
    writer: Mutex<Box<dyn Write + Send>>,
    errors: Mutex<Vec<String>>,
    colored: bool,
}

impl Logger {
    pub fn new(writer: Box<dyn Write + Send>) -> Self {
        Logger {
            writer: Mutex::new(writer),
            errors: Mutex::new(Vec::new()),
            colored: false,
        }
    }

    /// Logger writing to stdout, colored when stdout is a terminal
    pub fn stdout() -> Self {
        Logger {
            colored: std::io::stdout().is_terminal(),
            ..Self::new(Box::new(std::io::stdout()))
        }
    }

    /// Logger that discards status output but still collects reported errors
    pub fn sink() -> Self {
        Self::new(Box::new(std::io::sink()))
    }

    pub fn write_line(&self, line: impl AsRef<str>) {
        self.emit(line.as_ref());
    }

    pub fn write_section_separator(&self) {
        let separator = "-".repeat(SECTION_SEPARATOR_WIDTH);
        if self.colored {
            self.emit(&separator.dimmed().to_string());
        } else {
            self.emit(&separator);
        }
    }

    /// Report an error that the run recovers from
    pub fn report_error(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(%message, "non-fatal error");

        let prefix = if self.colored {
            "ERROR:".red().bold().to_string()
        } else {
            "ERROR:".to_string()
        };
        self.emit(&format!("{prefix} {message}"));

        lock(&self.errors).push(message);
    }

    pub fn reported_errors(&self) -> Vec<String> {
        lock(&self.errors).clone()
    }

    pub fn error_count(&self) -> usize {
        lock(&self.errors).len()
    }

    fn emit(&self, line: &str) {
        let mut writer = lock(&self.writer);
        if let Err(err) = writeln!(writer, "{line}").and_then(|_| writer.flush()) {
            tracing::debug!(error = %err, "unable to write status line");
        }
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("colored", &self.colored)
            .field("errors", &self.error_count())
            .finish_non_exhaustive()
    }
}

// Every write leaves the guarded data whole, so a poisoned lock is still usable.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
