//! Shared helpers for the CLI commands: option resolution, diagnostic
//! rendering, and design output.

use crate::Cli;
use cinnabar_config::ProjectConfig;
use cinnabar_diagnostics::{Diagnostic, DiagnosticRenderer, DiagnosticSink, TerminalRenderer};
use cinnabar_layout::{Design, LayoutOptions, OutputKind};
use std::path::{Path, PathBuf};

/// Loads `cinnabar.toml` from the current directory if one exists.
///
/// A missing file is fine (defaults apply); a malformed file is an error.
pub fn load_optional_config() -> Result<Option<ProjectConfig>, Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    if !cwd.join("cinnabar.toml").is_file() {
        return Ok(None);
    }
    Ok(Some(cinnabar_config::load_config(&cwd)?))
}

/// Resolves layout options from config-file settings and CLI overrides.
pub fn resolve_layout_options(
    config: Option<&ProjectConfig>,
    output_kind_flag: Option<&str>,
) -> LayoutOptions {
    let mut options = LayoutOptions::default();
    if let Some(config) = config {
        options.gate_spacing = config.layout.gate_spacing;
        options.max_wire_run = config.layout.max_wire_run;
        options.lane_spacing = config.layout.lane_spacing;
        options.clock_names = config.layout.clock_names.clone();
        options.output_kind = OutputKind::from_name(&config.layout.output_kind);
    }
    if let Some(kind) = output_kind_flag {
        options.output_kind = OutputKind::from_name(kind);
    }
    options
}

/// Renders every accumulated diagnostic to stderr.
pub fn render_diagnostics(diagnostics: &[Diagnostic], cli: &Cli) {
    let renderer = TerminalRenderer::new(cli.color.enabled());
    for diag in diagnostics {
        eprint!("{}", renderer.render(diag));
    }
}

/// Drains and renders a sink, returning whether it held errors.
pub fn report_sink(sink: &DiagnosticSink, cli: &Cli) -> bool {
    let diagnostics = sink.take_all();
    if !cli.quiet || sink.has_errors() {
        render_diagnostics(&diagnostics, cli);
    }
    sink.has_errors()
}

/// Serializes a design and writes it to the chosen path.
pub fn write_design(
    design: &Design,
    path: &Path,
    pretty: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = if pretty {
        serde_json::to_string_pretty(design)?
    } else {
        serde_json::to_string(design)?
    };
    std::fs::write(path, json)?;
    Ok(())
}

/// Default output path for a design compiled from `input`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "design".to_string());
    input.with_file_name(format!("{stem}.design.json"))
}
