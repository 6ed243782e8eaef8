//! The built-in gate template set.
//!
//! Each template is a small proven redstone layout. Inverting gates build
//! on the torch (NOT); AND is De Morgan over two inverted inputs; XOR/XNOR
//! use a two-level crossing. All wire and torch cells sit on a stone base
//! at `y = 0`, signal runs at `y = 1`, torches at `y = 2`.

use crate::kinds::{self, STONE, TORCH, WIRE};
use crate::table::{GateTemplate, TemplateBlock, TemplateTable};
use cinnabar_common::{Coord, Extent, Facing};

struct Builder {
    blocks: Vec<TemplateBlock>,
}

impl Builder {
    fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    fn push(&mut self, kind: impl Into<String>, x: i32, y: i32, z: i32) {
        self.blocks.push(TemplateBlock {
            kind: kind.into(),
            offset: Coord::new(x, y, z),
        });
    }

    /// Stone strip at the ground layer, `x` in `0..len` at the given `z`.
    fn base_strip(&mut self, len: i32, z: i32) {
        for x in 0..len {
            self.push(STONE, x, 0, z);
        }
    }

    /// Full stone floor at the ground layer, `size_x` by `size_z`.
    fn floor(&mut self, size_x: i32, size_z: i32) {
        for z in 0..size_z {
            self.base_strip(size_x, z);
        }
    }

    fn wire(&mut self, x: i32, z: i32) {
        self.push(WIRE, x, 1, z);
    }

    /// Stone pillar at the signal layer with a torch on top.
    fn torch_pillar(&mut self, x: i32, z: i32) {
        self.push(STONE, x, 1, z);
        self.push(TORCH, x, 2, z);
    }

    fn repeater(&mut self, facing: Facing, x: i32, z: i32) {
        self.push(kinds::repeater(facing, 1), x, 1, z);
    }

    fn finish(
        self,
        footprint: Extent,
        input_anchors: Vec<Coord>,
        output_anchor: Coord,
    ) -> GateTemplate {
        GateTemplate {
            footprint,
            input_anchors,
            output_anchor,
            blocks: self.blocks,
        }
    }
}

/// NOT: wire into a torch pillar, inverted signal out the far side.
fn not_gate() -> GateTemplate {
    let mut b = Builder::new();
    b.floor(4, 1);
    b.wire(0, 0);
    b.torch_pillar(1, 0);
    b.wire(2, 0);
    b.wire(3, 0);
    b.finish(
        Extent::new(4, 3, 1),
        vec![Coord::new(0, 1, 0)],
        Coord::new(3, 1, 0),
    )
}

/// BUF: a repeater, which also refreshes signal strength.
fn buf_gate() -> GateTemplate {
    let mut b = Builder::new();
    b.floor(3, 1);
    b.wire(0, 0);
    b.repeater(Facing::East, 1, 0);
    b.wire(2, 0);
    b.finish(
        Extent::new(3, 2, 1),
        vec![Coord::new(0, 1, 0)],
        Coord::new(2, 1, 0),
    )
}

/// AND via De Morgan: NOT(NOT(A) OR NOT(B)).
fn and_gate() -> GateTemplate {
    let mut b = Builder::new();
    b.floor(5, 3);
    b.wire(0, 0);
    b.torch_pillar(1, 0);
    b.wire(0, 2);
    b.torch_pillar(1, 2);
    b.wire(2, 0);
    b.wire(2, 1);
    b.wire(2, 2);
    b.torch_pillar(3, 1);
    b.wire(4, 1);
    b.finish(
        Extent::new(5, 3, 3),
        vec![Coord::new(0, 1, 0), Coord::new(0, 1, 2)],
        Coord::new(4, 1, 1),
    )
}

/// OR: the two input wires simply merge.
fn or_gate() -> GateTemplate {
    let mut b = Builder::new();
    b.floor(3, 3);
    b.wire(0, 0);
    b.wire(1, 0);
    b.wire(0, 2);
    b.wire(1, 2);
    b.wire(1, 1);
    b.wire(2, 1);
    b.finish(
        Extent::new(3, 2, 3),
        vec![Coord::new(0, 1, 0), Coord::new(0, 1, 2)],
        Coord::new(2, 1, 1),
    )
}

/// NAND: the AND front end without the final inversion stage.
fn nand_gate() -> GateTemplate {
    let mut b = Builder::new();
    b.floor(4, 3);
    b.wire(0, 0);
    b.torch_pillar(1, 0);
    b.wire(0, 2);
    b.torch_pillar(1, 2);
    b.wire(2, 0);
    b.wire(2, 1);
    b.wire(2, 2);
    b.wire(3, 1);
    b.finish(
        Extent::new(4, 3, 3),
        vec![Coord::new(0, 1, 0), Coord::new(0, 1, 2)],
        Coord::new(3, 1, 1),
    )
}

/// NOR: OR into a torch.
fn nor_gate() -> GateTemplate {
    let mut b = Builder::new();
    b.floor(5, 3);
    b.wire(0, 0);
    b.wire(1, 0);
    b.wire(0, 2);
    b.wire(1, 2);
    b.wire(1, 1);
    b.wire(2, 1);
    b.torch_pillar(3, 1);
    b.wire(4, 1);
    b.finish(
        Extent::new(5, 3, 3),
        vec![Coord::new(0, 1, 0), Coord::new(0, 1, 2)],
        Coord::new(4, 1, 1),
    )
}

/// The two-level crossing core shared by XOR and XNOR: both inputs bridge
/// over a center lane at `y = 2` and also feed side torches; the three
/// branches recombine at `x = 3`.
fn xor_core(b: &mut Builder) {
    b.wire(0, 0);
    b.wire(1, 0);
    b.wire(0, 2);
    b.wire(1, 2);
    b.push(STONE, 1, 1, 1);
    b.push(STONE, 2, 1, 1);
    b.push(WIRE, 1, 2, 1);
    b.push(WIRE, 2, 2, 1);
    b.torch_pillar(2, 0);
    b.torch_pillar(2, 2);
    b.wire(3, 0);
    b.wire(3, 1);
    b.wire(3, 2);
}

fn xor_gate() -> GateTemplate {
    let mut b = Builder::new();
    b.floor(7, 3);
    xor_core(&mut b);
    b.wire(4, 1);
    b.wire(5, 1);
    b.wire(6, 1);
    b.finish(
        Extent::new(7, 3, 3),
        vec![Coord::new(0, 1, 0), Coord::new(0, 1, 2)],
        Coord::new(6, 1, 1),
    )
}

fn xnor_gate() -> GateTemplate {
    let mut b = Builder::new();
    b.floor(9, 3);
    xor_core(&mut b);
    b.wire(4, 1);
    b.wire(5, 1);
    b.wire(6, 1);
    b.torch_pillar(7, 1);
    b.wire(8, 1);
    b.finish(
        Extent::new(9, 3, 3),
        vec![Coord::new(0, 1, 0), Coord::new(0, 1, 2)],
        Coord::new(8, 1, 1),
    )
}

/// Level-sensitive D latch, positive enable. Data runs through two
/// repeaters on the `z = 0` lane; the inverted enable on `z = 2` gates
/// the hold loop through the sideways repeater.
fn dlatch_p_gate() -> GateTemplate {
    let mut b = Builder::new();
    b.base_strip(5, 0);
    b.base_strip(3, 1);
    b.base_strip(3, 2);
    b.wire(0, 0);
    b.wire(1, 0);
    b.repeater(Facing::East, 2, 0);
    b.wire(3, 0);
    b.wire(4, 0);
    b.repeater(Facing::North, 2, 1);
    b.wire(0, 2);
    b.torch_pillar(1, 2);
    b.wire(2, 2);
    b.finish(
        Extent::new(5, 3, 3),
        vec![Coord::new(0, 1, 0), Coord::new(0, 1, 2)],
        Coord::new(4, 1, 0),
    )
}

/// Level-sensitive D latch, negative enable: same as the positive latch
/// with the enable inverter dropped.
fn dlatch_n_gate() -> GateTemplate {
    let mut b = Builder::new();
    b.base_strip(5, 0);
    b.base_strip(3, 1);
    b.base_strip(3, 2);
    b.wire(0, 0);
    b.wire(1, 0);
    b.repeater(Facing::East, 2, 0);
    b.wire(3, 0);
    b.wire(4, 0);
    b.repeater(Facing::North, 2, 1);
    b.wire(0, 2);
    b.wire(1, 2);
    b.wire(2, 2);
    b.finish(
        Extent::new(5, 2, 3),
        vec![Coord::new(0, 1, 0), Coord::new(0, 1, 2)],
        Coord::new(4, 1, 0),
    )
}

/// 2:1 MUX built from inverters: inputs on the outer lanes, select on the
/// center lane, the two AND legs recombining at the output.
fn mux_gate() -> GateTemplate {
    let mut b = Builder::new();
    b.floor(6, 5);
    b.wire(0, 0);
    b.torch_pillar(1, 0);
    b.wire(2, 0);
    b.wire(0, 2);
    b.torch_pillar(1, 2);
    b.wire(2, 2);
    b.wire(0, 4);
    b.torch_pillar(1, 4);
    b.wire(2, 4);
    b.wire(1, 1);
    b.wire(2, 1);
    b.torch_pillar(3, 1);
    b.wire(4, 1);
    b.wire(2, 3);
    b.torch_pillar(3, 3);
    b.wire(4, 3);
    b.wire(4, 2);
    b.wire(5, 2);
    b.finish(
        Extent::new(6, 3, 5),
        vec![Coord::new(0, 1, 0), Coord::new(0, 1, 4), Coord::new(0, 1, 2)],
        Coord::new(5, 1, 2),
    )
}

/// Builds the built-in table with all templates and fallback aliases.
pub(crate) fn builtin_table() -> TemplateTable {
    let mut table = TemplateTable::new();
    table.insert("$_NOT_", not_gate());
    table.insert("$_BUF_", buf_gate());
    table.insert("$_AND_", and_gate());
    table.insert("$_OR_", or_gate());
    table.insert("$_NAND_", nand_gate());
    table.insert("$_NOR_", nor_gate());
    table.insert("$_XOR_", xor_gate());
    table.insert("$_XNOR_", xnor_gate());
    table.insert("$_DLATCH_P_", dlatch_p_gate());
    table.insert("$_DLATCH_N_", dlatch_n_gate());
    table.insert("$_MUX_", mux_gate());

    // Edge-triggered flops collapse to the nearest level-sensitive latch;
    // clocking subtlety is delegated to the clock-source structure.
    for kind in ["$_DFF_P_", "$_DFF_PP0_", "$_DFF_PP1_", "$_SDFF_PP0_"] {
        table.alias(kind, "$_DLATCH_P_");
    }
    for kind in ["$_DFF_N_", "$_DFF_PN0_", "$_DFF_PN1_"] {
        table.alias(kind, "$_DLATCH_N_");
    }

    // Composite gates alias to an algebraically equivalent primitive.
    table.alias("$_ANDNOT_", "$_AND_");
    table.alias("$_ORNOT_", "$_OR_");
    table.alias("$_AOI3_", "$_NAND_");
    table.alias("$_OAI3_", "$_NOR_");

    table
}
