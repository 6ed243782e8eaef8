//! Diagnostic rendering for terminal output.

use crate::diagnostic::Diagnostic;

/// Trait for rendering diagnostics into formatted output strings.
pub trait DiagnosticRenderer {
    /// Renders a single diagnostic into a formatted string.
    fn render(&self, diag: &Diagnostic) -> String;
}

/// Renders diagnostics in a rustc-style terminal format.
///
/// Produces output like:
/// ```text
/// warning[W201]: no template for gate type '$_LUT4_'
///   --> gate 'core.mux_7'
///    = note: the gate's blocks were not emitted
///    = help: map the type in the template table
/// ```
pub struct TerminalRenderer {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
}

impl TerminalRenderer {
    /// Creates a new terminal renderer.
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl DiagnosticRenderer for TerminalRenderer {
    fn render(&self, diag: &Diagnostic) -> String {
        let mut out = String::new();

        // Header line: severity[CODE]: message
        if self.color {
            let color_code = if diag.severity.is_error() {
                "\x1b[31m"
            } else {
                "\x1b[33m"
            };
            out.push_str(&format!(
                "{color_code}{}[{}]\x1b[0m: {}\n",
                diag.severity, diag.code, diag.message
            ));
        } else {
            out.push_str(&format!(
                "{}[{}]: {}\n",
                diag.severity, diag.code, diag.message
            ));
        }

        if let Some(subject) = &diag.subject {
            out.push_str(&format!("  --> {subject}\n"));
        }

        for note in &diag.notes {
            out.push_str(&format!("   = note: {note}\n"));
        }

        for help in &diag.help {
            out.push_str(&format!("   = help: {help}\n"));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::codes;

    #[test]
    fn renders_header() {
        let renderer = TerminalRenderer::new(false);
        let diag = Diagnostic::warning(codes::UNSUPPORTED_GATE, "no template for gate type");
        let out = renderer.render(&diag);
        assert!(out.starts_with("warning[W201]: no template for gate type"));
    }

    #[test]
    fn renders_subject_and_notes() {
        let renderer = TerminalRenderer::new(false);
        let diag = Diagnostic::warning(codes::MISSING_SOURCE, "source anchor missing")
            .with_subject("bit 3")
            .with_note("connection omitted");
        let out = renderer.render(&diag);
        assert!(out.contains("  --> bit 3"));
        assert!(out.contains("= note: connection omitted"));
    }

    #[test]
    fn color_wraps_header() {
        let renderer = TerminalRenderer::new(true);
        let diag = Diagnostic::error(codes::EMPTY_CIRCUIT, "netlist contains no gates");
        let out = renderer.render(&diag);
        assert!(out.contains("\x1b[31m"));
        assert!(out.contains("\x1b[0m"));
    }
}
