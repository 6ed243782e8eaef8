//! `cinnabar build` — full pipeline from Verilog source to block layout.
//!
//! Orchestrates: read `cinnabar.toml` (if present) → synthesize the top
//! Verilog file through Yosys → compile the netlist → write the design.

use std::path::{Path, PathBuf};
use std::time::Duration;

use cinnabar_diagnostics::DiagnosticSink;
use cinnabar_synth::SynthOptions;
use cinnabar_templates::TemplateTable;

use crate::pipeline::{
    default_output_path, load_optional_config, report_sink, resolve_layout_options, write_design,
};
use crate::{BuildArgs, Cli};

/// Runs the `cinnabar build` command.
///
/// Returns exit code 0 on success, 1 on error.
pub fn run(args: &BuildArgs, cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let config = load_optional_config()?;

    let top: PathBuf = match (&args.top, config.as_ref().and_then(|c| c.project.top.as_ref())) {
        (Some(top), _) => top.into(),
        (None, Some(top)) => top.into(),
        (None, None) => {
            return Err("no top file: pass --top or set project.top in cinnabar.toml".into())
        }
    };

    if !cli.quiet {
        if let Some(config) = &config {
            eprintln!("   Building {}", config.project.name);
        }
        eprintln!("       Top {}", top.display());
    }

    let verilog = std::fs::read_to_string(&top)?;
    let synth_options = resolve_synth_options(config.as_ref());
    let netlist = cinnabar_synth::synthesize(&verilog, &synth_options)?;

    if !cli.quiet {
        eprintln!(
            "   Synthesized: {} gates, {} inputs, {} outputs",
            netlist.gate_count(),
            netlist.inputs.len(),
            netlist.outputs.len()
        );
    }

    let options = resolve_layout_options(config.as_ref(), args.output_kind.as_deref());
    let sink = DiagnosticSink::new();
    let design = cinnabar_layout::compile(&netlist, &TemplateTable::builtin(), &options, &sink)?;
    let had_errors = report_sink(&sink, cli);

    let out_path = match &args.output {
        Some(path) => path.into(),
        None => default_output_path(&top),
    };
    write_design(&design, &out_path, args.pretty)?;

    if !cli.quiet {
        eprintln!(
            "   Wrote {} ({} blocks, {})",
            out_path.display(),
            design.block_count(),
            design.size
        );
    }

    Ok(if had_errors { 1 } else { 0 })
}

fn resolve_synth_options(config: Option<&cinnabar_config::ProjectConfig>) -> SynthOptions {
    let mut options = SynthOptions::default();
    if let Some(config) = config {
        options.yosys_candidates = config.synth.yosys.iter().map(Path::new).map(Into::into).collect();
        options.timeout = Duration::from_millis(config.synth.timeout_ms);
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synth_options_from_config() {
        let config = cinnabar_config::load_config_from_str(
            r#"
            [project]
            name = "x"
            [synth]
            yosys = ["/opt/yosys/bin/yosys"]
            timeout_ms = 5000
            "#,
        )
        .unwrap();
        let options = resolve_synth_options(Some(&config));
        assert_eq!(
            options.yosys_candidates,
            vec![PathBuf::from("/opt/yosys/bin/yosys")]
        );
        assert_eq!(options.timeout, Duration::from_millis(5000));
    }

    #[test]
    fn synth_options_default_without_config() {
        let options = resolve_synth_options(None);
        assert_eq!(options.yosys_candidates.len(), 3);
    }
}
