//! Call-site metadata and trigger descriptors

use super::severity::Severity;

/// Where a logging call happened: caller name, source line, source file.
///
/// The logger never inspects the call stack to recover this; it is captured
/// at the call site by [`call_site!`](crate::call_site) or supplied by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub caller: &'static str,
    pub line: u32,
    pub file: &'static str,
}

impl CallSite {
    pub const fn new(caller: &'static str, line: u32, file: &'static str) -> Self {
        Self { caller, line, file }
    }

    /// `(Name: <caller>)`
    pub fn short_descriptor(&self) -> String {
        format!("(Name: {})", self.caller)
    }

    /// `(Name: <caller>, Line: <n>, filePath: <path>)`
    pub fn full_descriptor(&self) -> String {
        format!(
            "(Name: {}, Line: {}, filePath: {})",
            self.caller, self.line, self.file
        )
    }

    /// Descriptor for a regular entry at `severity`: Ok keeps the short form,
    /// Debug and Error carry line and file.
    pub fn descriptor_for(&self, severity: Severity) -> String {
        match severity {
            Severity::Ok => self.short_descriptor(),
            Severity::Debug | Severity::Error => self.full_descriptor(),
        }
    }
}
