//! Shared foundational types used across the Cinnabar toolchain.
//!
//! This crate provides core types including integer grid coordinates, facing
//! directions, content hashing, and common result types.

#![warn(missing_docs)]

pub mod grid;
pub mod hash;
pub mod result;

pub use grid::{Coord, Extent, Facing};
pub use hash::ContentHash;
pub use result::{CinnabarResult, InternalError};
