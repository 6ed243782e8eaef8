//! Error types for netlist document parsing.

/// Errors that can occur when parsing a netlist document.
#[derive(Debug, thiserror::Error)]
pub enum NetlistError {
    /// The document is not valid JSON.
    #[error("failed to parse netlist document: {0}")]
    Json(#[from] serde_json::Error),

    /// The document contains no modules.
    #[error("no modules found in netlist document")]
    NoModules,
}
