//! The netlist-to-layout compiler at the heart of Cinnabar.
//!
//! This crate takes a gate-level [`Netlist`] (from `cinnabar_netlist`) and
//! a [`TemplateTable`] (from `cinnabar_templates`) and emits a [`Design`]:
//! a concrete three-dimensional block layout implementing the same logic.
//!
//! # Pipeline
//!
//! 1. **Schedule** — order gates so producers are placed before consumers
//! 2. **Place** — input lane, gate templates at a running cursor, outputs
//! 3. **Route** — connect every recorded source anchor to its targets
//!    (interleaved with placement as each gate's inputs become known)
//! 4. **Repair** — synthesize missing supports, dedup, recompute bounds
//!
//! Only an empty gate list is a hard failure; every other anomaly
//! degrades gracefully and is reported through the [`DiagnosticSink`].
//!
//! # Usage
//!
//! ```
//! use cinnabar_diagnostics::DiagnosticSink;
//! use cinnabar_layout::{compile, LayoutOptions};
//! use cinnabar_netlist::{Gate, Netlist, Port};
//! use cinnabar_templates::TemplateTable;
//!
//! let netlist = Netlist {
//!     inputs: vec![
//!         Port { name: "a".into(), bit: 1.into() },
//!         Port { name: "b".into(), bit: 2.into() },
//!     ],
//!     outputs: vec![Port { name: "y".into(), bit: 3.into() }],
//!     gates: vec![Gate {
//!         name: "and_0".into(),
//!         kind: "$_AND_".into(),
//!         inputs: vec![1.into(), 2.into()],
//!         output: Some(3.into()),
//!     }],
//!     module_count: 1,
//! };
//!
//! let sink = DiagnosticSink::new();
//! let design = compile(
//!     &netlist,
//!     &TemplateTable::builtin(),
//!     &LayoutOptions::default(),
//!     &sink,
//! )
//! .unwrap();
//! assert!(design.block_count() > 0);
//! ```

#![warn(missing_docs)]

pub mod data;
pub mod error;
pub mod options;
pub mod repair;
pub mod schedule;

mod place;
mod route;

pub use data::{Anchor, Block, Canvas, Design, NetPositions, Occupancy};
pub use error::LayoutError;
pub use options::{LayoutOptions, OutputKind};
pub use repair::repair;
pub use schedule::{schedule_gates, Schedule};

use cinnabar_common::Extent;
use cinnabar_diagnostics::code::codes;
use cinnabar_diagnostics::{Diagnostic, DiagnosticSink};
use cinnabar_netlist::Netlist;
use cinnabar_templates::TemplateTable;

/// Compiles a netlist into a block layout.
///
/// The template table and options are injected so alternate template sets
/// and spacings are substitutable; the occupancy state lives in a fresh
/// [`Canvas`] owned by this call, so independent compilations can run in
/// parallel without interference.
///
/// Returns [`LayoutError::EmptyCircuit`] for a netlist with zero gates.
/// All other anomalies (unsupported gate types, unroutable connections,
/// elevation exhaustion, feedback loops) degrade gracefully and are
/// reported through `sink`.
pub fn compile(
    netlist: &Netlist,
    templates: &TemplateTable,
    options: &LayoutOptions,
    sink: &DiagnosticSink,
) -> Result<Design, LayoutError> {
    if netlist.is_empty() {
        return Err(LayoutError::EmptyCircuit);
    }

    let schedule = schedule_gates(&netlist.gates, &netlist.inputs);
    if !schedule.is_full() {
        let names: Vec<&str> = schedule
            .unresolved()
            .iter()
            .map(|&i| netlist.gates[i].name.as_str())
            .collect();
        sink.emit(
            Diagnostic::warning(
                codes::FEEDBACK_LOOP,
                "gates form a dependency cycle; feedback gates placed in input order",
            )
            .with_subject(names.join(", "))
            .with_note("the layout may be semantically wrong for genuinely cyclic designs"),
        );
    }

    let mut canvas = Canvas::new();
    let inputs = place::place_inputs(&mut canvas, &netlist.inputs, options);
    let cursor_x = place::place_gates(
        &mut canvas,
        &netlist.gates,
        &schedule,
        templates,
        options,
        sink,
    );
    let outputs = place::place_outputs(&mut canvas, &netlist.outputs, cursor_x, options, sink);

    let mut design = Design {
        blocks: canvas.blocks,
        size: Extent::default(),
        inputs,
        outputs,
    };
    repair::repair(&mut design);
    Ok(design)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinnabar_netlist::{Gate, Port, SignalBit};

    fn port(name: &str, bit: u32) -> Port {
        Port {
            name: name.into(),
            bit: bit.into(),
        }
    }

    fn and_netlist() -> Netlist {
        Netlist {
            inputs: vec![port("a", 1), port("b", 2)],
            outputs: vec![port("y", 3)],
            gates: vec![Gate {
                name: "and_0".into(),
                kind: "$_AND_".into(),
                inputs: vec![1.into(), 2.into()],
                output: Some(3.into()),
            }],
            module_count: 1,
        }
    }

    #[test]
    fn empty_netlist_rejected() {
        let netlist = Netlist {
            inputs: vec![port("a", 1)],
            outputs: vec![port("y", 2)],
            gates: vec![],
            module_count: 1,
        };
        let sink = DiagnosticSink::new();
        let result = compile(
            &netlist,
            &TemplateTable::builtin(),
            &LayoutOptions::default(),
            &sink,
        );
        assert!(matches!(result, Err(LayoutError::EmptyCircuit)));
    }

    #[test]
    fn and_gate_compiles() {
        let sink = DiagnosticSink::new();
        let design = compile(
            &and_netlist(),
            &TemplateTable::builtin(),
            &LayoutOptions::default(),
            &sink,
        )
        .unwrap();
        assert!(design.block_count() > 0);
        assert_eq!(design.inputs.len(), 2);
        assert_eq!(design.outputs.len(), 1);
        assert!(!sink.has_errors());
    }

    #[test]
    fn feedback_reported_but_compiles() {
        let netlist = Netlist {
            inputs: vec![port("s", 1), port("r", 2)],
            outputs: vec![port("q", 5)],
            gates: vec![
                Gate {
                    name: "nor_a".into(),
                    kind: "$_NOR_".into(),
                    inputs: vec![1.into(), 6.into()],
                    output: Some(5.into()),
                },
                Gate {
                    name: "nor_b".into(),
                    kind: "$_NOR_".into(),
                    inputs: vec![2.into(), 5.into()],
                    output: Some(6.into()),
                },
            ],
            module_count: 1,
        };
        let sink = DiagnosticSink::new();
        let design = compile(
            &netlist,
            &TemplateTable::builtin(),
            &LayoutOptions::default(),
            &sink,
        )
        .unwrap();
        assert!(design.block_count() > 0);
        let diags = sink.take_all();
        assert!(diags.iter().any(|d| d.code == codes::FEEDBACK_LOOP));
        let loop_diag = diags
            .iter()
            .find(|d| d.code == codes::FEEDBACK_LOOP)
            .unwrap();
        assert!(loop_diag.subject.as_deref().unwrap().contains("nor_a"));
    }

    #[test]
    fn symbolic_input_is_tolerated() {
        let netlist = Netlist {
            inputs: vec![port("a", 1)],
            outputs: vec![port("y", 5)],
            gates: vec![Gate {
                name: "tie".into(),
                kind: "$_AND_".into(),
                inputs: vec![1.into(), SignalBit::Sym("1".into())],
                output: Some(5.into()),
            }],
            module_count: 1,
        };
        let sink = DiagnosticSink::new();
        let design = compile(
            &netlist,
            &TemplateTable::builtin(),
            &LayoutOptions::default(),
            &sink,
        )
        .unwrap();
        assert!(design.block_count() > 0);
        // The constant leg is simply unrouted, with no missing-source report
        assert!(sink.diagnostics().is_empty());
    }
}
