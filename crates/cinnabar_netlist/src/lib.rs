//! The gate-level netlist model for the Cinnabar toolchain.
//!
//! A [`Netlist`] describes logic as a list of [`Gate`]s wired together by
//! signal bits, with named input and output ports. It is the input-only
//! intermediate representation consumed by `cinnabar_layout`; the compiler
//! never mutates it.
//!
//! Netlists are either constructed directly or parsed from a Yosys-style
//! JSON document via [`Netlist::from_yosys_json`].

#![warn(missing_docs)]

pub mod error;
pub mod netlist;
pub mod yosys;

pub use error::NetlistError;
pub use netlist::{Gate, Netlist, Port, SignalBit};
