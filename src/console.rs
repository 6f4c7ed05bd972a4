//! Console output for log records

use crate::core::{LogRecord, LogSettings, Severity};
use colored::Colorize;

/// Renders records to stdout under the per-level print flags.
///
/// Every colored fragment carries its own reset sequence, so the terminal is
/// back to its prior color after each record regardless of what ran in
/// between.
#[derive(Debug, Clone)]
pub struct ConsolePrinter {
    print_ok: bool,
    print_debug: bool,
    print_error: bool,
}

impl ConsolePrinter {
    pub fn new(settings: &LogSettings) -> Self {
        Self {
            print_ok: settings.print_ok,
            print_debug: settings.print_debug,
            print_error: settings.print_error,
        }
    }

    /// Whether records at `severity` reach the console at all.
    #[must_use]
    pub fn enabled(&self, severity: Severity) -> bool {
        match severity {
            Severity::Ok => self.print_ok,
            Severity::Debug => self.print_debug,
            Severity::Error => self.print_error,
        }
    }

    /// Print one record, or nothing when its level is filtered out.
    pub fn print(&self, record: &LogRecord) {
        if !self.enabled(record.severity) {
            return;
        }
        println!("{}", self.render(record));
    }

    /// Render one record: severity in its level color, identifier in cyan,
    /// message, dimmed trigger descriptor, and the stack (if any) in red on
    /// its own line.
    #[must_use]
    pub fn render(&self, record: &LogRecord) -> String {
        let mut line = format!(
            "{}, {}, Message: {}, {}",
            record.severity.to_str().color(record.severity.color()),
            format!("Id: {}", record.id).cyan(),
            record.message,
            format!("Trigger: {}", record.trigger).dimmed(),
        );
        if let Some(stack) = &record.stack {
            line.push('\n');
            line.push_str(&format!(" Stack: {}", stack).red().to_string());
        }
        line
    }
}
