//! Diagnostic codes with category prefixes for structured identification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The category of a diagnostic code, determining its prefix letter.
///
/// Each category maps to a single-character prefix used in diagnostic code
/// display (e.g., `E101` for an error, `W201` for a warning).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Category {
    /// Error diagnostics, prefixed with `E`.
    Error,
    /// Warning diagnostics, prefixed with `W`.
    Warning,
}

impl Category {
    /// Returns the single-character prefix for this category.
    pub fn prefix(self) -> char {
        match self {
            Category::Error => 'E',
            Category::Warning => 'W',
        }
    }
}

/// A structured diagnostic code combining a category prefix and a numeric identifier.
///
/// Displayed as the category prefix followed by a zero-padded 3-digit number,
/// e.g., `E101`, `W203`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct DiagnosticCode {
    /// The category of this diagnostic.
    pub category: Category,
    /// The numeric identifier within the category.
    pub number: u16,
}

impl DiagnosticCode {
    /// Creates a new diagnostic code.
    pub fn new(category: Category, number: u16) -> Self {
        Self { category, number }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:03}", self.category.prefix(), self.number)
    }
}

/// Well-known codes emitted by the layout pipeline.
pub mod codes {
    use super::{Category, DiagnosticCode};

    /// The netlist contains no gates.
    pub const EMPTY_CIRCUIT: DiagnosticCode = DiagnosticCode {
        category: Category::Error,
        number: 101,
    };
    /// A gate type has no template mapping and was skipped.
    pub const UNSUPPORTED_GATE: DiagnosticCode = DiagnosticCode {
        category: Category::Warning,
        number: 201,
    };
    /// A routing source anchor was never recorded; the connection is omitted.
    pub const MISSING_SOURCE: DiagnosticCode = DiagnosticCode {
        category: Category::Warning,
        number: 202,
    };
    /// The routing elevation probe exhausted its search; a cell was overlapped.
    pub const ELEVATION_EXHAUSTED: DiagnosticCode = DiagnosticCode {
        category: Category::Warning,
        number: 203,
    };
    /// Gates form a dependency cycle; feedback gates were appended in input order.
    pub const FEEDBACK_LOOP: DiagnosticCode = DiagnosticCode {
        category: Category::Warning,
        number: 204,
    };
}
