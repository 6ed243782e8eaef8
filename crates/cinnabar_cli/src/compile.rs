//! `cinnabar compile` — Yosys JSON netlists to block layout designs.
//!
//! Multiple input files compile in parallel; each compilation owns its
//! canvas and diagnostic sink, so they share no state (the pipeline is
//! strictly sequential per netlist, but independent netlists are not).

use std::path::Path;

use cinnabar_diagnostics::{Diagnostic, DiagnosticSink};
use cinnabar_layout::Design;
use cinnabar_netlist::Netlist;
use cinnabar_templates::TemplateTable;
use rayon::prelude::*;

use crate::pipeline::{
    default_output_path, load_optional_config, render_diagnostics, resolve_layout_options,
    write_design,
};
use crate::{Cli, CompileArgs};

/// Runs the `cinnabar compile` command.
///
/// Returns exit code 0 on success, 1 if any input failed to compile.
pub fn run(args: &CompileArgs, cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    if args.inputs.len() > 1 && args.output.is_some() {
        return Err("--output is only valid with a single input file".into());
    }

    let config = load_optional_config()?;
    let options = resolve_layout_options(config.as_ref(), args.output_kind.as_deref());
    let templates = TemplateTable::builtin();

    let results: Vec<(String, Result<(Design, Vec<Diagnostic>), String>)> = args
        .inputs
        .par_iter()
        .map(|input| (input.clone(), compile_one(input, &templates, &options)))
        .collect();

    let mut failed = false;
    for (input, result) in results {
        match result {
            Ok((design, diagnostics)) => {
                if !cli.quiet && !diagnostics.is_empty() {
                    eprintln!("{input}:");
                    render_diagnostics(&diagnostics, cli);
                }
                let out_path = match &args.output {
                    Some(path) => path.clone().into(),
                    None => default_output_path(Path::new(&input)),
                };
                write_design(&design, &out_path, args.pretty)?;
                if !cli.quiet {
                    eprintln!(
                        "   Compiled {input} -> {} ({} blocks, {})",
                        out_path.display(),
                        design.block_count(),
                        design.size
                    );
                }
            }
            Err(message) => {
                eprintln!("error: {input}: {message}");
                failed = true;
            }
        }
    }

    Ok(if failed { 1 } else { 0 })
}

fn compile_one(
    input: &str,
    templates: &TemplateTable,
    options: &cinnabar_layout::LayoutOptions,
) -> Result<(Design, Vec<Diagnostic>), String> {
    let json = std::fs::read_to_string(input).map_err(|e| e.to_string())?;
    let netlist = Netlist::from_yosys_json(&json).map_err(|e| e.to_string())?;
    let sink = DiagnosticSink::new();
    let design =
        cinnabar_layout::compile(&netlist, templates, options, &sink).map_err(|e| e.to_string())?;
    Ok((design, sink.take_all()))
}
