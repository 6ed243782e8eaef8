//! Structured diagnostics for the Cinnabar toolchain.
//!
//! Compilation anomalies that do not stop the pipeline — skipped gates,
//! omitted routes, degraded placements — are reported as [`Diagnostic`]
//! values through a [`DiagnosticSink`] rather than being swallowed or
//! raised as errors. The sink is threaded through every pipeline stage so
//! callers can inspect exactly how a layout degraded.

#![warn(missing_docs)]

pub mod code;
pub mod diagnostic;
pub mod renderer;
pub mod severity;
pub mod sink;

pub use code::{Category, DiagnosticCode};
pub use diagnostic::Diagnostic;
pub use renderer::{DiagnosticRenderer, TerminalRenderer};
pub use severity::Severity;
pub use sink::DiagnosticSink;
