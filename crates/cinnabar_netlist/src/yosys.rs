//! Parsing of Yosys-style JSON netlist documents.
//!
//! The document shape is the one `write_json` emits: a `modules` map whose
//! entries carry `ports` (direction + bits) and `cells` (type,
//! `port_directions`, `connections`). Only the first module is used;
//! multi-bit ports are flattened to one [`Port`] per bit.

use crate::error::NetlistError;
use crate::netlist::{Gate, Netlist, Port, SignalBit};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Top-level Yosys JSON document.
#[derive(Debug, Deserialize)]
struct YosysDoc {
    #[serde(default)]
    modules: BTreeMap<String, YosysModule>,
}

/// One module of a Yosys JSON document.
#[derive(Debug, Deserialize)]
struct YosysModule {
    #[serde(default)]
    ports: BTreeMap<String, YosysPort>,
    #[serde(default)]
    cells: BTreeMap<String, YosysCell>,
}

/// A module port with direction and bit list.
#[derive(Debug, Deserialize)]
struct YosysPort {
    direction: String,
    #[serde(default)]
    bits: Vec<SignalBit>,
}

/// A cell instance with typed connections.
#[derive(Debug, Deserialize)]
struct YosysCell {
    #[serde(rename = "type")]
    cell_type: String,
    #[serde(default)]
    port_directions: BTreeMap<String, String>,
    #[serde(default)]
    connections: BTreeMap<String, Vec<SignalBit>>,
}

impl Netlist {
    /// Parses a Yosys-style JSON netlist document.
    ///
    /// Takes the first module (in name order), flattening each multi-bit
    /// port into one [`Port`] per bit. Cell input bits are collected in
    /// port order; the first output port's first bit becomes the gate
    /// output. Returns [`NetlistError::NoModules`] for a document with an
    /// empty or missing `modules` map.
    pub fn from_yosys_json(json: &str) -> Result<Netlist, NetlistError> {
        let doc: YosysDoc = serde_json::from_str(json)?;
        let module_count = doc.modules.len();
        let (_, module) = doc
            .modules
            .into_iter()
            .next()
            .ok_or(NetlistError::NoModules)?;

        let mut inputs = Vec::new();
        let mut outputs = Vec::new();
        for (name, port) in &module.ports {
            let dest = match port.direction.as_str() {
                "input" => &mut inputs,
                "output" => &mut outputs,
                _ => continue,
            };
            for bit in &port.bits {
                dest.push(Port {
                    name: name.clone(),
                    bit: bit.clone(),
                });
            }
        }

        let mut gates = Vec::new();
        for (name, cell) in &module.cells {
            let mut gate_inputs = Vec::new();
            let mut gate_output = None;
            for (port_name, bits) in &cell.connections {
                match cell.port_directions.get(port_name).map(String::as_str) {
                    Some("input") => gate_inputs.extend(bits.iter().cloned()),
                    Some("output") => {
                        if gate_output.is_none() {
                            gate_output = bits.first().cloned();
                        }
                    }
                    _ => {}
                }
            }
            gates.push(Gate {
                name: name.clone(),
                kind: cell.cell_type.clone(),
                inputs: gate_inputs,
                output: gate_output,
            });
        }

        Ok(Netlist {
            inputs,
            outputs,
            gates,
            module_count,
        })
    }
}
