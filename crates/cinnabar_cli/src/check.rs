//! `cinnabar check` — validate a netlist without emitting a design.
//!
//! Parses the document, runs the scheduler, and reports gate kinds with
//! no template mapping and gates caught in feedback loops, so problems
//! surface before a build.

use cinnabar_layout::schedule_gates;
use cinnabar_netlist::Netlist;
use cinnabar_templates::TemplateTable;
use std::collections::BTreeSet;

use crate::{CheckArgs, Cli};

/// Runs the `cinnabar check` command.
///
/// Returns exit code 0 if the netlist would compile, 1 otherwise.
pub fn run(args: &CheckArgs, cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(&args.input)?;
    let netlist = Netlist::from_yosys_json(&json)?;

    if netlist.is_empty() {
        eprintln!("error: {}: netlist contains no gates", args.input);
        return Ok(1);
    }

    let templates = TemplateTable::builtin();
    let unknown: BTreeSet<&str> = netlist
        .gates
        .iter()
        .filter(|g| !templates.supports(&g.kind))
        .map(|g| g.kind.as_str())
        .collect();

    let schedule = schedule_gates(&netlist.gates, &netlist.inputs);

    if !cli.quiet {
        eprintln!(
            "   {}: {} gates, {} inputs, {} outputs",
            args.input,
            netlist.gate_count(),
            netlist.inputs.len(),
            netlist.outputs.len()
        );
    }
    for kind in &unknown {
        eprintln!("warning: no template for gate type '{kind}'; its gates will be skipped");
    }
    if !schedule.is_full() {
        let names: Vec<&str> = schedule
            .unresolved()
            .iter()
            .map(|&i| netlist.gates[i].name.as_str())
            .collect();
        eprintln!(
            "warning: feedback loop through {} gate(s): {}",
            names.len(),
            names.join(", ")
        );
    }
    if unknown.is_empty() && schedule.is_full() && !cli.quiet {
        eprintln!("   All gate types mapped; schedule is acyclic");
    }

    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_kinds_collected() {
        let netlist = Netlist::from_yosys_json(
            r#"{
                "modules": {
                    "top": {
                        "ports": { "a": { "direction": "input", "bits": [2] } },
                        "cells": {
                            "l0": {
                                "type": "$_LUT4_",
                                "port_directions": { "A": "input", "Y": "output" },
                                "connections": { "A": [2], "Y": [3] }
                            },
                            "n0": {
                                "type": "$_NOT_",
                                "port_directions": { "A": "input", "Y": "output" },
                                "connections": { "A": [3], "Y": [4] }
                            }
                        }
                    }
                }
            }"#,
        )
        .unwrap();
        let templates = TemplateTable::builtin();
        let unknown: Vec<&str> = netlist
            .gates
            .iter()
            .filter(|g| !templates.supports(&g.kind))
            .map(|g| g.kind.as_str())
            .collect();
        assert_eq!(unknown, vec!["$_LUT4_"]);
    }
}
