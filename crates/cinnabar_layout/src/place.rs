//! Spatial placement of inputs, gates, and outputs.
//!
//! Declared inputs occupy a fixed lane at `x = 0`, one per lane step
//! along z (clock ports get a self-oscillating source instead of a
//! toggle). Gates are placed left-to-right in schedule order at a running
//! x cursor, vertically centered on the average z of their already-placed
//! input anchors, with their input connections routed as soon as the gate
//! is down. Declared outputs are placed last at the final cursor column.

use crate::data::{Anchor, Canvas};
use crate::options::{LayoutOptions, OutputKind};
use crate::route::route_wire;
use crate::schedule::Schedule;
use cinnabar_common::{Coord, Facing};
use cinnabar_diagnostics::code::codes;
use cinnabar_diagnostics::{Diagnostic, DiagnosticSink};
use cinnabar_netlist::{Gate, Port, SignalBit};
use cinnabar_templates::kinds::{self, LAMP, LEVER, STONE, WIRE};
use cinnabar_templates::TemplateTable;

/// Places the input lane and records each input bit's live anchor.
///
/// Returns the labeled input anchors of the finished design (at the
/// toggle position, one lane step apart).
pub(crate) fn place_inputs(
    canvas: &mut Canvas,
    inputs: &[Port],
    options: &LayoutOptions,
) -> Vec<Anchor> {
    let mut anchors = Vec::with_capacity(inputs.len());
    for (i, port) in inputs.iter().enumerate() {
        let lane_z = i as i32 * options.lane_spacing;
        if options.is_clock(&port.name) {
            place_clock_source(canvas, lane_z);
            // The live anchor is the ring's inner wire, not a toggle cell.
            canvas
                .nets
                .record(port.bit.clone(), Coord::new(0, 1, lane_z + 1));
        } else {
            canvas.place(STONE, Coord::new(0, 0, lane_z));
            canvas.place(WIRE, Coord::new(0, 1, lane_z));
            canvas.place(LEVER, Coord::new(0, 2, lane_z));
            canvas
                .nets
                .record(port.bit.clone(), Coord::new(0, 1, lane_z));
        }
        anchors.push(Anchor {
            label: port.name.clone(),
            pos: Coord::new(0, 2, lane_z),
        });
    }
    anchors
}

/// A free-running repeater ring with a lever kill switch on a side
/// pillar. The ring period is set by the four repeater delays.
fn place_clock_source(canvas: &mut Canvas, base_z: i32) {
    for x in 0..3 {
        for z in 0..3 {
            canvas.place(STONE, Coord::new(x, 0, base_z + z));
        }
    }
    canvas.place(kinds::repeater(Facing::East, 2), Coord::new(0, 1, base_z));
    canvas.place(WIRE, Coord::new(1, 1, base_z));
    canvas.place(kinds::repeater(Facing::South, 2), Coord::new(2, 1, base_z));
    canvas.place(WIRE, Coord::new(2, 1, base_z + 1));
    canvas.place(
        kinds::repeater(Facing::West, 2),
        Coord::new(2, 1, base_z + 2),
    );
    canvas.place(WIRE, Coord::new(1, 1, base_z + 2));
    canvas.place(
        kinds::repeater(Facing::North, 2),
        Coord::new(0, 1, base_z + 2),
    );
    canvas.place(WIRE, Coord::new(0, 1, base_z + 1));
    canvas.place(STONE, Coord::new(-1, 0, base_z + 1));
    canvas.place(STONE, Coord::new(-1, 1, base_z + 1));
    canvas.place(LEVER, Coord::new(-1, 2, base_z + 1));
}

/// Walks the schedule, placing each gate and routing its inputs.
///
/// Returns the final x cursor (where the output lane begins). Gates with
/// no resolvable template are skipped: no blocks, no recorded output
/// anchor, and the cursor does not advance.
pub(crate) fn place_gates(
    canvas: &mut Canvas,
    gates: &[Gate],
    schedule: &Schedule,
    templates: &TemplateTable,
    options: &LayoutOptions,
    sink: &DiagnosticSink,
) -> i32 {
    let mut cursor_x = options.gate_spacing;
    for &idx in schedule.order() {
        let gate = &gates[idx];
        let Some(template) = templates.resolve(&gate.kind) else {
            sink.emit(
                Diagnostic::warning(
                    codes::UNSUPPORTED_GATE,
                    format!("no template for gate type '{}'", gate.kind),
                )
                .with_subject(format!("gate '{}'", gate.name))
                .with_note("the gate's blocks were not emitted; downstream nets stay unrouted"),
            );
            continue;
        };

        let base_z = gate_base_z(canvas, gate, template.footprint.z as i32);
        let origin = Coord::new(cursor_x, 0, base_z);

        for block in &template.blocks {
            canvas.place(block.kind.clone(), origin + block.offset);
        }

        for (i, anchor) in template
            .input_anchors
            .iter()
            .enumerate()
            .take(gate.inputs.len())
        {
            let target = origin + *anchor;
            connect(canvas, &gate.inputs[i], target, options, sink);
        }

        if let Some(output) = &gate.output {
            canvas
                .nets
                .record(output.clone(), origin + template.output_anchor);
        }

        cursor_x += template.footprint.x as i32 + options.gate_spacing;
    }
    cursor_x
}

/// Vertically centers the gate on the rounded average z of its
/// already-placed input anchors (0 when it has none), clamped to the
/// grid.
fn gate_base_z(canvas: &Canvas, gate: &Gate, footprint_z: i32) -> i32 {
    let mut sum = 0i64;
    let mut count = 0i64;
    for bit in &gate.inputs {
        if let Some(pos) = canvas.nets.get(bit) {
            sum += pos.z as i64;
            count += 1;
        }
    }
    let avg_z = if count > 0 {
        (sum as f64 / count as f64).round() as i32
    } else {
        0
    };
    (avg_z - footprint_z / 2).max(0)
}

/// Places the declared outputs at the final cursor column and routes each
/// from its recorded source anchor.
pub(crate) fn place_outputs(
    canvas: &mut Canvas,
    outputs: &[Port],
    cursor_x: i32,
    options: &LayoutOptions,
    sink: &DiagnosticSink,
) -> Vec<Anchor> {
    let mut anchors = Vec::with_capacity(outputs.len());
    for (i, port) in outputs.iter().enumerate() {
        let lane_z = i as i32 * options.lane_spacing;
        place_actuator(canvas, cursor_x, lane_z, &options.output_kind);
        let target = Coord::new(cursor_x, 1, lane_z);
        connect(canvas, &port.bit, target, options, sink);
        anchors.push(Anchor {
            label: port.name.clone(),
            pos: target,
        });
    }
    anchors
}

/// Stone base plus the actuator stack selected by the output kind.
fn place_actuator(canvas: &mut Canvas, x: i32, z: i32, kind: &OutputKind) {
    canvas.place(STONE, Coord::new(x, 0, z));
    match kind {
        OutputKind::Lamp => canvas.place(LAMP, Coord::new(x, 1, z)),
        OutputKind::IronDoor => {
            canvas.place("iron_door[half=lower]", Coord::new(x, 1, z));
            canvas.place("iron_door[half=upper]", Coord::new(x, 2, z));
        }
        OutputKind::StickyPiston => {
            canvas.place("sticky_piston[facing=up]", Coord::new(x, 1, z));
        }
        OutputKind::Dispenser => canvas.place("dispenser[facing=up]", Coord::new(x, 1, z)),
        OutputKind::Dropper => canvas.place("dropper[facing=down]", Coord::new(x, 1, z)),
        OutputKind::Custom(name) => canvas.place(name.clone(), Coord::new(x, 1, z)),
    }
}

/// Routes from a bit's recorded anchor to `target`, or reports the
/// omitted connection. Symbolic (constant) bits have no anchor to route
/// from and are skipped without a report.
fn connect(
    canvas: &mut Canvas,
    bit: &SignalBit,
    target: Coord,
    options: &LayoutOptions,
    sink: &DiagnosticSink,
) {
    match canvas.nets.get(bit) {
        Some(src) => route_wire(canvas, src, target, options, sink),
        None => {
            if !bit.is_symbolic() {
                sink.emit(
                    Diagnostic::warning(
                        codes::MISSING_SOURCE,
                        "no recorded source anchor; connection omitted",
                    )
                    .with_subject(format!("bit {bit} -> {target}")),
                );
            }
        }
    }
}
