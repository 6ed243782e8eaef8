//! Named layout parameters.
//!
//! The spacing and run-length values are properties of the target medium
//! and rarely change, but they are carried as explicit parameters rather
//! than buried constants so callers (and tests) can see and override them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The actuator placed at each declared output.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum OutputKind {
    /// A lamp directly above the output base (the default).
    Lamp,
    /// A two-block iron door.
    IronDoor,
    /// An upward-facing sticky piston.
    StickyPiston,
    /// An upward-facing dispenser.
    Dispenser,
    /// A downward-facing dropper.
    Dropper,
    /// An arbitrary block kind placed directly above the base.
    Custom(String),
}

impl OutputKind {
    /// Resolves a block kind string to an output kind.
    ///
    /// Unrecognized strings become [`OutputKind::Custom`] and are placed
    /// verbatim, mirroring the pass-through policy for block state.
    pub fn from_name(name: &str) -> Self {
        match name {
            "redstone_lamp" => OutputKind::Lamp,
            "iron_door" => OutputKind::IronDoor,
            "sticky_piston" => OutputKind::StickyPiston,
            "dispenser" => OutputKind::Dispenser,
            "dropper" => OutputKind::Dropper,
            other => OutputKind::Custom(other.to_string()),
        }
    }
}

impl Default for OutputKind {
    fn default() -> Self {
        OutputKind::Lamp
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputKind::Lamp => write!(f, "redstone_lamp"),
            OutputKind::IronDoor => write!(f, "iron_door"),
            OutputKind::StickyPiston => write!(f, "sticky_piston"),
            OutputKind::Dispenser => write!(f, "dispenser"),
            OutputKind::Dropper => write!(f, "dropper"),
            OutputKind::Custom(name) => write!(f, "{name}"),
        }
    }
}

/// Tunable parameters of the layout compiler.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LayoutOptions {
    /// Horizontal spacing inserted after each placed gate, in grid units.
    pub gate_spacing: i32,
    /// Maximum unboosted conductive run length before a booster is inserted.
    pub max_wire_run: u32,
    /// Spacing between input (and output) lanes along the z axis.
    pub lane_spacing: i32,
    /// Port names recognized as clocks, compared case-insensitively.
    pub clock_names: Vec<String>,
    /// The actuator template used for declared outputs.
    pub output_kind: OutputKind,
}

impl LayoutOptions {
    /// Returns `true` if the port name matches the clock-name pattern.
    pub fn is_clock(&self, name: &str) -> bool {
        self.clock_names
            .iter()
            .any(|c| c.eq_ignore_ascii_case(name))
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            gate_spacing: 4,
            max_wire_run: 14,
            lane_spacing: 3,
            clock_names: vec!["clk".to_string(), "clock".to_string()],
            output_kind: OutputKind::default(),
        }
    }
}
