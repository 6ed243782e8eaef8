//! Conductive path routing between signal anchors.
//!
//! Routes are Manhattan, X-then-Z, single bend: the x delta is exhausted
//! first, then the z delta, stopping one step before the destination
//! cell. Each waypoint probes upward for a free elevation when the signal
//! layer is blocked, ramping up and back down one level at a time.
//! A booster (repeater) replaces the next segment whenever the unboosted
//! run reaches the configured maximum. Routing never backtracks; if the
//! elevation probe exhausts, the segment is emitted anyway at the last
//! probed level and the overlap is reported.

use crate::data::{Canvas, Occupancy};
use crate::options::LayoutOptions;
use cinnabar_common::{Coord, Facing};
use cinnabar_diagnostics::code::codes;
use cinnabar_diagnostics::{Diagnostic, DiagnosticSink};
use cinnabar_templates::kinds::{self, STONE, WIRE};

/// The default signal-carrying layer.
const SIGNAL_Y: i32 = 1;

/// How far above the signal layer the elevation probe will search.
const PROBE_LIMIT: i32 = 8;

struct Waypoint {
    x: i32,
    z: i32,
    facing: Facing,
}

/// Routes a conductive path from `src` to `tgt`, claiming every emitted
/// cell in the canvas occupancy set.
pub(crate) fn route_wire(
    canvas: &mut Canvas,
    src: Coord,
    tgt: Coord,
    options: &LayoutOptions,
    sink: &DiagnosticSink,
) {
    let step_x = (tgt.x - src.x).signum();
    let step_z = (tgt.z - src.z).signum();
    let facing_x = Facing::along_x(step_x);
    let facing_z = Facing::along_z(step_z);

    // X first, then Z; stop one step before the destination's own cell.
    let mut waypoints = Vec::new();
    let (mut cx, mut cz) = (src.x, src.z);
    while cx != tgt.x {
        cx += step_x;
        if cx == tgt.x && cz == tgt.z {
            break;
        }
        waypoints.push(Waypoint {
            x: cx,
            z: cz,
            facing: facing_x,
        });
    }
    while cz != tgt.z {
        cz += step_z;
        if cx == tgt.x && cz == tgt.z {
            break;
        }
        waypoints.push(Waypoint {
            x: cx,
            z: cz,
            facing: facing_z,
        });
    }

    let mut run = 0u32;
    let mut prev_y = SIGNAL_Y;

    for wp in &waypoints {
        let (clear_y, exhausted) = find_clear_y(&canvas.occupancy, wp.x, wp.z);
        if exhausted {
            sink.emit(
                Diagnostic::warning(
                    codes::ELEVATION_EXHAUSTED,
                    "no free elevation for routed segment; overlapping placement emitted",
                )
                .with_subject(format!("{}", Coord::new(wp.x, clear_y, wp.z))),
            );
        }
        if clear_y != prev_y {
            // Ramp up or down at this column instead of emitting a segment.
            emit_vertical(canvas, wp.x, wp.z, prev_y, clear_y, &mut run);
        } else {
            emit_segment(
                canvas,
                Coord::new(wp.x, clear_y, wp.z),
                wp.facing,
                &mut run,
                options,
            );
        }
        prev_y = clear_y;
    }

    // Hand off at the signal layer so the consuming anchor sees the path.
    if let Some(last) = waypoints.last() {
        if prev_y != SIGNAL_Y {
            emit_vertical(canvas, last.x, last.z, prev_y, SIGNAL_Y, &mut run);
        }
    }
}

/// Probes upward two levels at a time for a free cell, bounded at
/// [`PROBE_LIMIT`] above the signal layer. Returns the chosen elevation
/// and whether the probe exhausted without finding a free cell.
fn find_clear_y(occupancy: &Occupancy, x: i32, z: i32) -> (i32, bool) {
    let mut y = SIGNAL_Y;
    while !occupancy.is_free(Coord::new(x, y, z)) && y < SIGNAL_Y + PROBE_LIMIT {
        y += 2;
    }
    (y, !occupancy.is_free(Coord::new(x, y, z)))
}

/// Emits one conductive segment with a support beneath it if the cell
/// below is free. Replaces the segment with a booster oriented along the
/// direction of travel when the unboosted run reaches the maximum.
fn emit_segment(
    canvas: &mut Canvas,
    pos: Coord,
    facing: Facing,
    run: &mut u32,
    options: &LayoutOptions,
) {
    if canvas.occupancy.is_free(pos.below()) {
        canvas.place(STONE, pos.below());
    }
    *run += 1;
    if *run >= options.max_wire_run {
        canvas.place(kinds::repeater(facing, 1), pos);
        *run = 0;
    } else {
        canvas.place(WIRE, pos);
    }
}

/// Ramps the path from `from_y` to `to_y` at column (`x`, `z`), one level
/// at a time, placing a support beneath each step where the cell below is
/// free. Steps count toward the unboosted run.
fn emit_vertical(canvas: &mut Canvas, x: i32, z: i32, from_y: i32, to_y: i32, run: &mut u32) {
    let dir = if to_y > from_y { 1 } else { -1 };
    let mut y = from_y;
    while y != to_y {
        y += dir;
        let pos = Coord::new(x, y, z);
        if canvas.occupancy.is_free(pos.below()) {
            canvas.place(STONE, pos.below());
        }
        canvas.place(WIRE, pos);
        *run += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinnabar_templates::kinds::base_kind;

    fn route(canvas: &mut Canvas, src: Coord, tgt: Coord) -> Vec<Diagnostic> {
        let options = LayoutOptions::default();
        let sink = DiagnosticSink::new();
        route_wire(canvas, src, tgt, &options, &sink);
        sink.take_all()
    }

    fn wires_at_y(canvas: &Canvas, y: i32) -> Vec<Coord> {
        canvas
            .blocks
            .iter()
            .filter(|b| base_kind(&b.kind) == "redstone_wire" && b.pos.y == y)
            .map(|b| b.pos)
            .collect()
    }

    #[test]
    fn straight_route_stops_short_of_target() {
        let mut canvas = Canvas::new();
        route(&mut canvas, Coord::new(0, 1, 0), Coord::new(5, 1, 0));
        let wires = wires_at_y(&canvas, 1);
        assert_eq!(wires.len(), 4); // x = 1..=4, not the target cell
        assert!(!wires.contains(&Coord::new(5, 1, 0)));
        assert!(!wires.contains(&Coord::new(0, 1, 0)));
    }

    #[test]
    fn every_segment_has_support() {
        let mut canvas = Canvas::new();
        route(&mut canvas, Coord::new(0, 1, 0), Coord::new(6, 1, 3));
        for wire in wires_at_y(&canvas, 1) {
            assert!(
                canvas.blocks.iter().any(|b| b.pos == wire.below()),
                "no support under {wire}"
            );
        }
    }

    #[test]
    fn l_shaped_route_is_x_then_z() {
        let mut canvas = Canvas::new();
        route(&mut canvas, Coord::new(0, 1, 0), Coord::new(3, 1, 3));
        let wires = wires_at_y(&canvas, 1);
        // x leg at z=0, then z leg at x=3
        assert!(wires.contains(&Coord::new(1, 1, 0)));
        assert!(wires.contains(&Coord::new(2, 1, 0)));
        assert!(wires.contains(&Coord::new(3, 1, 0)));
        assert!(wires.contains(&Coord::new(3, 1, 1)));
        assert!(wires.contains(&Coord::new(3, 1, 2)));
    }

    #[test]
    fn booster_inserted_at_max_run() {
        let mut canvas = Canvas::new();
        let options = LayoutOptions::default();
        let sink = DiagnosticSink::new();
        route_wire(
            &mut canvas,
            Coord::new(0, 1, 0),
            Coord::new(40, 1, 0),
            &options,
            &sink,
        );
        let boosters: Vec<_> = canvas
            .blocks
            .iter()
            .filter(|b| base_kind(&b.kind) == "repeater")
            .collect();
        assert_eq!(boosters.len(), 2); // segments 14 and 28 of 39
        assert_eq!(boosters[0].pos, Coord::new(14, 1, 0));
        assert_eq!(boosters[1].pos, Coord::new(28, 1, 0));
        assert!(boosters[0].kind.contains("facing=east"));

        // No unboosted run longer than the maximum
        let mut streak = 0u32;
        for x in 1..40 {
            let pos = Coord::new(x, 1, 0);
            let block = canvas.blocks.iter().find(|b| b.pos == pos).unwrap();
            if base_kind(&block.kind) == "repeater" {
                streak = 0;
            } else {
                streak += 1;
                assert!(streak < options.max_wire_run);
            }
        }
    }

    #[test]
    fn westward_booster_faces_west() {
        let mut canvas = Canvas::new();
        route(&mut canvas, Coord::new(40, 1, 0), Coord::new(0, 1, 0));
        let booster = canvas
            .blocks
            .iter()
            .find(|b| base_kind(&b.kind) == "repeater")
            .unwrap();
        assert!(booster.kind.contains("facing=west"));
    }

    #[test]
    fn detours_over_obstacle() {
        let mut canvas = Canvas::new();
        // Obstacle in the middle of the straight path
        canvas.place("stone", Coord::new(3, 1, 0));
        route(&mut canvas, Coord::new(0, 1, 0), Coord::new(6, 1, 0));
        // The path climbs at the obstacle column and comes back down
        let elevated = wires_at_y(&canvas, 3);
        assert!(
            elevated.contains(&Coord::new(3, 3, 0)),
            "expected a bridge over the obstacle"
        );
        // Hand-off back at the signal layer before the target
        assert!(wires_at_y(&canvas, 1)
            .iter()
            .any(|c| c.x > 3 && c.z == 0));
    }

    #[test]
    fn route_claims_occupancy() {
        let mut canvas = Canvas::new();
        route(&mut canvas, Coord::new(0, 1, 0), Coord::new(4, 1, 0));
        for block in canvas.blocks.clone() {
            assert!(!canvas.occupancy.is_free(block.pos));
        }
    }

    #[test]
    fn adjacent_cells_produce_no_waypoints() {
        let mut canvas = Canvas::new();
        route(&mut canvas, Coord::new(0, 1, 0), Coord::new(1, 1, 0));
        assert!(canvas.blocks.is_empty());
    }

    #[test]
    fn exhausted_probe_reports_overlap() {
        let mut canvas = Canvas::new();
        // Wall at every probe level of column x=2
        for y in 1..=9 {
            canvas.place("stone", Coord::new(2, y, 0));
        }
        let diags = route(&mut canvas, Coord::new(0, 1, 0), Coord::new(5, 1, 0));
        assert!(diags
            .iter()
            .any(|d| d.code == codes::ELEVATION_EXHAUSTED));
    }

    #[test]
    fn probe_finds_first_free_level() {
        let mut occupancy = Occupancy::new();
        occupancy.claim(Coord::new(0, 1, 0));
        occupancy.claim(Coord::new(0, 3, 0));
        assert_eq!(find_clear_y(&occupancy, 0, 0), (5, false));
        assert_eq!(find_clear_y(&occupancy, 1, 0), (1, false));
    }
}
