//! Gate templates for the Cinnabar layout compiler.
//!
//! Each supported gate type maps to a small proven redstone layout with
//! defined input and output connection points — a [`GateTemplate`]. The
//! [`TemplateTable`] bundles the templates with the fallback aliases that
//! collapse unsupported cell types onto supported ones, and is passed to
//! the layout compiler as an injected, immutable lookup resource so
//! alternate template sets are substitutable without touching the
//! algorithm.

#![warn(missing_docs)]

mod builtin;
pub mod kinds;
pub mod table;

pub use table::{GateTemplate, TemplateBlock, TemplateTable};
