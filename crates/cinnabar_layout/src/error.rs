//! Error types for the layout compiler.

/// Errors surfaced as hard failures by [`compile`](crate::compile).
///
/// This is deliberately small: every other anomaly (unsupported gate
/// types, missing route sources, elevation exhaustion, feedback loops)
/// degrades gracefully and is reported through the diagnostic sink
/// instead of failing the compilation.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// The netlist contains no gates; refusing to emit a degenerate design.
    #[error("no gates in netlist; circuit may be trivially simple or invalid")]
    EmptyCircuit,
}
