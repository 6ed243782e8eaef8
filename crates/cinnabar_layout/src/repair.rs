//! Post-placement repair and normalization.
//!
//! Synthesizes missing support blocks, deduplicates coordinates, and
//! recomputes the bounding box. Synthesized supports are prepended so a
//! later (intentional) block at the same coordinate wins during the
//! last-occurrence dedup. The pass is idempotent: repairing an already
//! repaired design changes nothing.

use crate::data::{Block, Design};
use cinnabar_common::{Coord, Extent};
use cinnabar_templates::kinds::{needs_support, STONE};
use std::collections::{HashMap, HashSet};

/// Repairs and normalizes a finished design in place.
pub fn repair(design: &mut Design) {
    add_missing_supports(design);
    dedup_last_wins(design);
    recompute_size(design);
}

/// Prepends a stone support beneath every block whose kind requires one
/// and whose underlying cell is empty.
fn add_missing_supports(design: &mut Design) {
    let mut cells: HashSet<Coord> = design.blocks.iter().map(|b| b.pos).collect();
    let mut additions = Vec::new();
    for block in &design.blocks {
        if needs_support(&block.kind) {
            let below = block.pos.below();
            if cells.insert(below) {
                additions.push(Block::new(STONE, below));
            }
        }
    }
    if !additions.is_empty() {
        additions.append(&mut design.blocks);
        design.blocks = additions;
    }
}

/// Deduplicates by coordinate, keeping the last occurrence in list order.
fn dedup_last_wins(design: &mut Design) {
    let mut last_index: HashMap<Coord, usize> = HashMap::new();
    for (i, block) in design.blocks.iter().enumerate() {
        last_index.insert(block.pos, i);
    }
    let mut i = 0;
    design.blocks.retain(|block| {
        let keep = last_index[&block.pos] == i;
        i += 1;
        keep
    });
}

/// Recomputes the axis-aligned bounding box. An empty block list leaves
/// the size untouched.
fn recompute_size(design: &mut Design) {
    let mut blocks = design.blocks.iter();
    let Some(first) = blocks.next() else {
        return;
    };
    let (mut min, mut max) = (first.pos, first.pos);
    for block in blocks {
        min.x = min.x.min(block.pos.x);
        min.y = min.y.min(block.pos.y);
        min.z = min.z.min(block.pos.z);
        max.x = max.x.max(block.pos.x);
        max.y = max.y.max(block.pos.y);
        max.z = max.z.max(block.pos.z);
    }
    design.size = Extent::new(
        (max.x - min.x + 1) as u32,
        (max.y - min.y + 1) as u32,
        (max.z - min.z + 1) as u32,
    );
}
