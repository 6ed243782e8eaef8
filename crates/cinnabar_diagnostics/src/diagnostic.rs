//! Structured diagnostic messages with severity, codes, and notes.

use crate::code::DiagnosticCode;
use crate::severity::Severity;
use serde::{Deserialize, Serialize};

/// A structured diagnostic message.
///
/// Diagnostics are the primary mechanism for reporting degraded outcomes
/// and errors to the user. Each diagnostic includes:
/// - A severity level and unique code
/// - A primary message
/// - An optional subject naming the gate, net, or coordinate concerned
/// - Optional explanatory notes and actionable help text
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The unique code identifying the type of diagnostic.
    pub code: DiagnosticCode,
    /// The main diagnostic message.
    pub message: String,
    /// The entity this diagnostic is about (gate name, net bit, coordinate).
    pub subject: Option<String>,
    /// Explanatory footnotes (e.g., "note: ...").
    pub notes: Vec<String>,
    /// Actionable suggestions (e.g., "help: ...").
    pub help: Vec<String>,
}

impl Diagnostic {
    /// Creates a new error diagnostic with the given code and message.
    pub fn error(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
            subject: None,
            notes: Vec::new(),
            help: Vec::new(),
        }
    }

    /// Creates a new warning diagnostic with the given code and message.
    pub fn warning(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
            subject: None,
            notes: Vec::new(),
            help: Vec::new(),
        }
    }

    /// Sets the subject of this diagnostic.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Adds a note to this diagnostic.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Adds a help message to this diagnostic.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help.push(help.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::{codes, Category};

    #[test]
    fn create_error() {
        let diag = Diagnostic::error(codes::EMPTY_CIRCUIT, "netlist contains no gates");
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.message, "netlist contains no gates");
        assert_eq!(format!("{}", diag.code), "E101");
    }

    #[test]
    fn create_warning() {
        let diag = Diagnostic::warning(codes::UNSUPPORTED_GATE, "no template for gate type");
        assert_eq!(diag.severity, Severity::Warning);
        assert!(diag.subject.is_none());
    }

    #[test]
    fn builder_methods() {
        let diag = Diagnostic::warning(codes::MISSING_SOURCE, "source anchor missing")
            .with_subject("bit 7")
            .with_note("the driving gate was skipped")
            .with_help("check the gate types against the template table");
        assert_eq!(diag.subject.as_deref(), Some("bit 7"));
        assert_eq!(diag.notes.len(), 1);
        assert_eq!(diag.help.len(), 1);
    }

    #[test]
    fn serde_roundtrip() {
        let diag = Diagnostic::error(
            DiagnosticCode::new(Category::Error, 101),
            "netlist contains no gates",
        );
        let json = serde_json::to_string(&diag).unwrap();
        let back: Diagnostic = serde_json::from_str(&json).unwrap();
        assert_eq!(back.message, diag.message);
        assert_eq!(back.code, diag.code);
    }
}
