//! Core netlist data structures.
//!
//! Defines the gate-level netlist consumed by the layout compiler: gates
//! (type, ordered inputs, optional output), ports (name + bit), and the
//! signal bits wiring them together. The [`Netlist`] is immutable once
//! constructed.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// One wire of the netlist, identified by a globally unique bit.
///
/// Synthesis tools number real nets (`Num`); constant or special bits come
/// through as strings such as `"0"`, `"1"`, or `"x"` (`Sym`). Symbolic bits
/// are treated as always available by the scheduler.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SignalBit {
    /// A numbered net.
    Num(u32),
    /// A symbolic/constant bit (e.g. `"0"`, `"1"`, `"x"`).
    Sym(String),
}

impl SignalBit {
    /// Returns `true` for symbolic/constant bits.
    pub fn is_symbolic(&self) -> bool {
        matches!(self, SignalBit::Sym(_))
    }
}

impl From<u32> for SignalBit {
    fn from(bit: u32) -> Self {
        SignalBit::Num(bit)
    }
}

impl fmt::Display for SignalBit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalBit::Num(n) => write!(f, "{n}"),
            SignalBit::Sym(s) => write!(f, "'{s}'"),
        }
    }
}

/// A named top-level port carrying a single signal bit.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Port {
    /// The declared port name. Multi-bit ports are flattened to one `Port`
    /// per bit, all sharing the name.
    pub name: String,
    /// The signal bit this port carries.
    pub bit: SignalBit,
}

/// A single logic gate.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Gate {
    /// The instance name from the source document (used in diagnostics).
    pub name: String,
    /// The gate type identifier (e.g. `$_AND_`, `$_DFF_P_`).
    pub kind: String,
    /// Input signal bits, in port order.
    pub inputs: Vec<SignalBit>,
    /// The output signal bit, if the gate drives one.
    pub output: Option<SignalBit>,
}

/// A gate-level netlist: declared inputs and outputs plus the gates
/// connecting them.
///
/// Invariant (guaranteed by the producing tool, tolerated if violated):
/// every bit consumed by a gate or output is either a declared input bit
/// or the output of some gate. The layout compiler leaves violating
/// signals unrouted rather than failing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Netlist {
    /// Declared input ports, one per bit.
    pub inputs: Vec<Port>,
    /// Declared output ports, one per bit.
    pub outputs: Vec<Port>,
    /// All gates, in document order.
    pub gates: Vec<Gate>,
    /// Number of modules in the source document (only the first is used).
    #[serde(default = "default_module_count")]
    pub module_count: usize,
}

fn default_module_count() -> usize {
    1
}

impl Netlist {
    /// Returns `true` if the netlist contains no gates.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Returns the set of declared input bits.
    pub fn input_bits(&self) -> HashSet<&SignalBit> {
        self.inputs.iter().map(|p| &p.bit).collect()
    }

    /// Returns the number of gates.
    pub fn gate_count(&self) -> usize {
        self.gates.len()
    }
}
