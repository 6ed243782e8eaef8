//! The gate template table: geometry lookup with fallback aliases.

use cinnabar_common::{Coord, Extent};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One block of a template, at a local offset from the template origin.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TemplateBlock {
    /// The block kind string (may carry bracketed state).
    pub kind: String,
    /// Local offset from the template origin. `y = 0` is the ground layer.
    pub offset: Coord,
}

/// A fixed geometric pattern implementing one logic primitive.
///
/// Shared by all placements of the same gate type; the placement engine
/// translates the local offsets by the chosen grid origin.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GateTemplate {
    /// The bounding footprint of the template.
    pub footprint: Extent,
    /// Local offsets where each gate input connects, by input position.
    pub input_anchors: Vec<Coord>,
    /// Local offset where the gate output leaves the template.
    pub output_anchor: Coord,
    /// All blocks of the template.
    pub blocks: Vec<TemplateBlock>,
}

/// An immutable mapping from gate type identifier to [`GateTemplate`].
///
/// Unknown types are resolved through a fallback alias table before giving
/// up: edge-triggered storage collapses to its nearest level-sensitive
/// latch, and certain composite gates alias to an algebraically equivalent
/// primitive. A type with no mapping resolves to `None` and is skipped by
/// placement.
#[derive(Clone, Debug, Default)]
pub struct TemplateTable {
    templates: BTreeMap<String, GateTemplate>,
    aliases: BTreeMap<String, String>,
}

impl TemplateTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the built-in table of proven gate layouts.
    pub fn builtin() -> Self {
        crate::builtin::builtin_table()
    }

    /// Inserts a template under the given gate type.
    pub fn insert(&mut self, kind: impl Into<String>, template: GateTemplate) {
        self.templates.insert(kind.into(), template);
    }

    /// Registers `from` as an alias resolving to the template of `to`.
    pub fn alias(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.aliases.insert(from.into(), to.into());
    }

    /// Resolves a gate type to its template, following one alias hop.
    pub fn resolve(&self, kind: &str) -> Option<&GateTemplate> {
        if let Some(t) = self.templates.get(kind) {
            return Some(t);
        }
        self.aliases
            .get(kind)
            .and_then(|target| self.templates.get(target))
    }

    /// Returns `true` if the type resolves to a template (directly or via alias).
    pub fn supports(&self, kind: &str) -> bool {
        self.resolve(kind).is_some()
    }

    /// Returns the directly registered gate types, in name order.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }
}
