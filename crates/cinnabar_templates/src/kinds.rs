//! Block kind vocabulary shared by templates, placement, and routing.
//!
//! Block kind strings may carry bracketed state metadata (e.g.
//! `repeater[facing=east,delay=1]`); the compiler passes the full string
//! through verbatim and only ever inspects the part before the bracket.

use cinnabar_common::Facing;

/// Structural base block.
pub const STONE: &str = "stone";
/// Conductive signal path.
pub const WIRE: &str = "redstone_wire";
/// Signal inverter, placed on top of a stone pillar.
pub const TORCH: &str = "redstone_torch";
/// Manual input toggle.
pub const LEVER: &str = "lever";
/// Default output actuator.
pub const LAMP: &str = "redstone_lamp";

/// Returns the base kind of a block string, stripping bracketed state.
pub fn base_kind(kind: &str) -> &str {
    kind.split('[').next().unwrap_or(kind)
}

/// Builds a repeater block string facing the given direction.
///
/// Repeaters double as signal boosters: routing inserts one whenever a
/// conductive run reaches the maximum unboosted length.
pub fn repeater(facing: Facing, delay: u8) -> String {
    format!("repeater[facing={facing},delay={delay}]")
}

/// Returns `true` if this block kind requires a supporting block beneath it.
pub fn needs_support(kind: &str) -> bool {
    matches!(
        base_kind(kind),
        "redstone_wire"
            | "redstone_torch"
            | "redstone_wall_torch"
            | "repeater"
            | "comparator"
            | "lever"
            | "stone_button"
            | "stone_pressure_plate"
            | "oak_pressure_plate"
            | "daylight_detector"
            | "note_block"
            | "dispenser"
            | "dropper"
    )
}
