use std::fmt::Display;

use colored::{ColoredString, Colorize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Verbose,
    Info,
    Warning,
    Error,
}

impl Severity {
    fn label(self) -> ColoredString {
        match self {
            Severity::Error => "ERROR".red(),
            Severity::Warning => "WARNING".yellow(),
            Severity::Info => "INFO".blue(),
            Severity::Verbose => "VERBOSE".dimmed(),
        }
        .bold()
    }
}

/// Prints `[SEVERITY][SOURCE]:message` lines at or above a minimum severity.
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    level: Severity,
}

impl Logger {
    pub fn new(level: Severity) -> Self {
        Self { level }
    }

    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= self.level
    }

    pub fn format(&self, severity: Severity, source: &str, message: impl Display) -> String {
        format!("[{}][{}]:{}", severity.label(), source.bold(), message)
    }

    pub fn log(&self, severity: Severity, source: &str, message: impl Display) {
        if self.enabled(severity) {
            println!("{}", self.format(severity, source, message));
        }
    }

    pub fn verbose(&self, source: &str, message: impl Display) {
        self.log(Severity::Verbose, source, message)
    }

    pub fn info(&self, source: &str, message: impl Display) {
        self.log(Severity::Info, source, message)
    }

    pub fn warning(&self, source: &str, message: impl Display) {
        self.log(Severity::Warning, source, message)
    }

    pub fn error(&self, source: &str, message: impl Display) {
        self.log(Severity::Error, source, message)
    }
}
