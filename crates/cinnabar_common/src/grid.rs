//! Integer grid coordinates and directions for block layouts.
//!
//! The layout grid follows the target convention: `y = 0` is the structural
//! base layer, `y = 1` carries signal wire, `y >= 2` holds elevated
//! components and detour wiring. `x` grows "downstream" through the
//! circuit and `z` spans the input/output lanes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// An absolute position on the integer block grid.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct Coord {
    /// Downstream axis (gate columns).
    pub x: i32,
    /// Vertical axis (0 = base layer, 1 = signal layer).
    pub y: i32,
    /// Lane axis (inputs/outputs step along z).
    pub z: i32,
}

impl Coord {
    /// Creates a coordinate from its three components.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Returns this coordinate shifted by the given deltas.
    pub fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// Returns the cell directly beneath this one.
    pub fn below(self) -> Self {
        self.offset(0, -1, 0)
    }

    /// Returns the cell directly above this one.
    pub fn above(self) -> Self {
        self.offset(0, 1, 0)
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// The axis-aligned size of a block volume.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Extent {
    /// Size along the x axis.
    pub x: u32,
    /// Size along the y axis.
    pub y: u32,
    /// Size along the z axis.
    pub z: u32,
}

impl Extent {
    /// Creates an extent from its three components.
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.x, self.y, self.z)
    }
}

/// A horizontal facing direction in the x/z plane.
///
/// The lowercase display form is the one block state strings expect,
/// e.g. `repeater[facing=east,delay=1]`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Facing {
    /// Toward +x.
    East,
    /// Toward -x.
    West,
    /// Toward +z.
    South,
    /// Toward -z.
    North,
}

impl Facing {
    /// Returns the facing of a unit step along x (`East` for +1, `West` for -1).
    pub fn along_x(step: i32) -> Self {
        if step >= 0 {
            Facing::East
        } else {
            Facing::West
        }
    }

    /// Returns the facing of a unit step along z (`South` for +1, `North` for -1).
    pub fn along_z(step: i32) -> Self {
        if step >= 0 {
            Facing::South
        } else {
            Facing::North
        }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Facing::East => write!(f, "east"),
            Facing::West => write!(f, "west"),
            Facing::South => write!(f, "south"),
            Facing::North => write!(f, "north"),
        }
    }
}
