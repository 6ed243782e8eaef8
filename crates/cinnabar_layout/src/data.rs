//! Core layout data structures.
//!
//! Defines the artifact produced by the compiler — the [`Design`] — and
//! the working state threaded through placement and routing: the
//! [`NetPositions`] map recording where each signal is available, and the
//! [`Occupancy`] set guarding against overlapping placements. Both are
//! created empty per compilation run and owned by the [`Canvas`], never
//! shared between runs, so independent compilations can proceed in
//! parallel without interference.

use cinnabar_common::{ContentHash, Coord, Extent};
use cinnabar_netlist::SignalBit;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A single placed block.
///
/// The kind string may carry bracketed orientation/parameter metadata
/// (e.g. `repeater[facing=east,delay=1]`); the compiler passes it through
/// verbatim for the consuming environment to interpret.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Block {
    /// The block kind string.
    pub kind: String,
    /// Absolute grid position.
    pub pos: Coord,
}

impl Block {
    /// Creates a block from a kind and position.
    pub fn new(kind: impl Into<String>, pos: Coord) -> Self {
        Self {
            kind: kind.into(),
            pos,
        }
    }
}

/// A labeled connection point of the finished design.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Anchor {
    /// The declared port name this anchor belongs to.
    pub label: String,
    /// Absolute grid position.
    pub pos: Coord,
}

/// The finished block layout: the sole externally visible artifact.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Design {
    /// All placed blocks. After the repair pass, coordinates are unique
    /// (the later occurrence won during deduplication).
    pub blocks: Vec<Block>,
    /// Axis-aligned bounding-box size of the block list.
    pub size: Extent,
    /// Labeled positions of the declared inputs.
    pub inputs: Vec<Anchor>,
    /// Labeled positions of the declared outputs.
    pub outputs: Vec<Anchor>,
}

impl Design {
    /// Returns the number of blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Fingerprints the block list for determinism checks.
    ///
    /// Two compilations of the same netlist with the same options produce
    /// the same hash.
    pub fn content_hash(&self) -> ContentHash {
        let mut bytes = Vec::with_capacity(self.blocks.len() * 24);
        for block in &self.blocks {
            bytes.extend_from_slice(block.kind.as_bytes());
            for v in [block.pos.x, block.pos.y, block.pos.z] {
                bytes.extend_from_slice(&v.to_le_bytes());
            }
        }
        ContentHash::from_bytes(&bytes)
    }
}

/// Map from signal bit to the absolute anchor where it is available.
///
/// Populated as gates are placed; a bit may be overwritten if a later
/// gate redrives it (last writer wins, mirroring the single-driver
/// assumption of the source netlist).
#[derive(Debug, Default)]
pub struct NetPositions {
    positions: HashMap<SignalBit, Coord>,
}

impl NetPositions {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the anchor for a bit, replacing any earlier record.
    pub fn record(&mut self, bit: SignalBit, pos: Coord) {
        self.positions.insert(bit, pos);
    }

    /// Returns the recorded anchor for a bit, if any.
    pub fn get(&self, bit: &SignalBit) -> Option<Coord> {
        self.positions.get(bit).copied()
    }
}

/// The set of grid cells already claimed by some block.
///
/// Every block placement and every routing step checks and updates this
/// set so later work treats earlier work as an obstacle.
#[derive(Debug, Default)]
pub struct Occupancy {
    cells: HashSet<Coord>,
}

impl Occupancy {
    /// Creates an empty occupancy set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims a cell.
    pub fn claim(&mut self, pos: Coord) {
        self.cells.insert(pos);
    }

    /// Returns `true` if the cell is unclaimed.
    pub fn is_free(&self, pos: Coord) -> bool {
        !self.cells.contains(&pos)
    }
}

/// The mutable working surface shared by placement and routing.
///
/// Owns the growing block list, the occupancy set, and the net-position
/// map for one compilation run.
#[derive(Debug, Default)]
pub struct Canvas {
    /// Blocks emitted so far, in emission order.
    pub blocks: Vec<Block>,
    /// Cells claimed so far.
    pub occupancy: Occupancy,
    /// Signal anchors recorded so far.
    pub nets: NetPositions,
}

impl Canvas {
    /// Creates an empty canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits a block and claims its cell.
    pub fn place(&mut self, kind: impl Into<String>, pos: Coord) {
        self.blocks.push(Block::new(kind, pos));
        self.occupancy.claim(pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_place_claims_cell() {
        let mut canvas = Canvas::new();
        let pos = Coord::new(1, 1, 0);
        assert!(canvas.occupancy.is_free(pos));
        canvas.place("stone", pos);
        assert!(!canvas.occupancy.is_free(pos));
        assert_eq!(canvas.blocks.len(), 1);
        assert_eq!(canvas.blocks[0].kind, "stone");
    }

    #[test]
    fn net_positions_last_writer_wins() {
        let mut nets = NetPositions::new();
        let bit = SignalBit::Num(5);
        nets.record(bit.clone(), Coord::new(0, 1, 0));
        nets.record(bit.clone(), Coord::new(9, 1, 2));
        assert_eq!(nets.get(&bit), Some(Coord::new(9, 1, 2)));
        assert_eq!(nets.get(&SignalBit::Num(6)), None);
    }

    #[test]
    fn occupancy_claims() {
        let mut occ = Occupancy::new();
        let pos = Coord::new(3, 1, 3);
        assert!(occ.is_free(pos));
        occ.claim(pos);
        assert!(!occ.is_free(pos));
        // Claiming twice is fine
        occ.claim(pos);
        assert!(!occ.is_free(pos));
    }

    #[test]
    fn content_hash_tracks_blocks() {
        let design_a = Design {
            blocks: vec![Block::new("stone", Coord::new(0, 0, 0))],
            size: Extent::new(1, 1, 1),
            inputs: vec![],
            outputs: vec![],
        };
        let mut design_b = design_a.clone();
        assert_eq!(design_a.content_hash(), design_b.content_hash());

        design_b.blocks.push(Block::new("redstone_wire", Coord::new(0, 1, 0)));
        assert_ne!(design_a.content_hash(), design_b.content_hash());
    }

    #[test]
    fn design_serde_roundtrip() {
        let design = Design {
            blocks: vec![Block::new(
                "repeater[facing=east,delay=1]",
                Coord::new(4, 1, 0),
            )],
            size: Extent::new(1, 1, 1),
            inputs: vec![Anchor {
                label: "a".into(),
                pos: Coord::new(0, 2, 0),
            }],
            outputs: vec![],
        };
        let json = serde_json::to_string(&design).unwrap();
        let back: Design = serde_json::from_str(&json).unwrap();
        assert_eq!(back.blocks, design.blocks);
        assert_eq!(back.inputs[0].label, "a");
        // Block state metadata passes through verbatim
        assert_eq!(back.blocks[0].kind, "repeater[facing=east,delay=1]");
    }
}
