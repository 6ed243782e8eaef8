//! Configuration types deserialized from `cinnabar.toml`.

use serde::Deserialize;

/// The top-level project configuration parsed from `cinnabar.toml`.
#[derive(Debug, Deserialize)]
pub struct ProjectConfig {
    /// Core project metadata (name, version, top source file).
    pub project: ProjectMeta,
    /// Layout settings.
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Synthesis settings.
    #[serde(default)]
    pub synth: SynthConfig,
}

/// Core project metadata required in every `cinnabar.toml`.
#[derive(Debug, Deserialize)]
pub struct ProjectMeta {
    /// The project name.
    pub name: String,
    /// The project version string.
    #[serde(default)]
    pub version: String,
    /// A brief description of the project.
    #[serde(default)]
    pub description: String,
    /// Path to the top-level Verilog file, used by `cinnabar build`.
    #[serde(default)]
    pub top: Option<String>,
}

/// Layout settings overriding the compiler defaults.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// The actuator kind placed at declared outputs.
    pub output_kind: String,
    /// Horizontal spacing between placed gates.
    pub gate_spacing: i32,
    /// Maximum unboosted conductive run length.
    pub max_wire_run: u32,
    /// Spacing between input/output lanes along z.
    pub lane_spacing: i32,
    /// Port names recognized as clocks (case-insensitive).
    pub clock_names: Vec<String>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            output_kind: "redstone_lamp".to_string(),
            gate_spacing: 4,
            max_wire_run: 14,
            lane_spacing: 3,
            clock_names: vec!["clk".to_string(), "clock".to_string()],
        }
    }
}

/// Synthesis settings for the external Yosys invocation.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SynthConfig {
    /// Candidate Yosys binaries, tried in order.
    pub yosys: Vec<String>,
    /// Subprocess timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            yosys: vec![
                "yosys".to_string(),
                "/usr/local/bin/yosys".to_string(),
                "/opt/homebrew/bin/yosys".to_string(),
            ],
            timeout_ms: 15_000,
        }
    }
}
