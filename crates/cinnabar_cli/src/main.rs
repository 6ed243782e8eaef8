//! Cinnabar CLI — the command-line interface for the Cinnabar toolchain.
//!
//! Provides `cinnabar compile` for turning gate-level netlist documents
//! into block layouts, `cinnabar build` for the full Verilog-to-layout
//! pipeline (requires Yosys), and `cinnabar check` for validating a
//! netlist without emitting a design.

#![warn(missing_docs)]

mod build;
mod check;
mod compile;
mod pipeline;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};

/// Cinnabar — a netlist-to-redstone layout compiler.
#[derive(Parser, Debug)]
#[command(name = "cinnabar", version, about = "Cinnabar redstone toolchain")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control colored output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compile Yosys JSON netlists into block layout designs.
    Compile(CompileArgs),
    /// Build a design from Verilog source (requires Yosys).
    Build(BuildArgs),
    /// Parse and schedule a netlist without emitting a design.
    Check(CheckArgs),
}

/// Arguments for the `cinnabar compile` subcommand.
#[derive(Parser, Debug)]
pub struct CompileArgs {
    /// Netlist JSON files. Multiple files compile in parallel.
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// Output path (single input only; defaults to `<input>.design.json`).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Block kind used for declared outputs.
    #[arg(long)]
    pub output_kind: Option<String>,

    /// Pretty-print the emitted JSON.
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for the `cinnabar build` subcommand.
#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// Top-level Verilog file (overrides `project.top` in cinnabar.toml).
    #[arg(long)]
    pub top: Option<String>,

    /// Output path (defaults to `<top>.design.json`).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Block kind used for declared outputs.
    #[arg(long)]
    pub output_kind: Option<String>,

    /// Pretty-print the emitted JSON.
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for the `cinnabar check` subcommand.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Netlist JSON file.
    pub input: String,
}

/// Control for colored diagnostic output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color when stderr is a terminal.
    Auto,
    /// Always color.
    Always,
    /// Never color.
    Never,
}

impl ColorChoice {
    /// Resolves the choice against the current environment.
    pub fn enabled(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => std::io::IsTerminal::is_terminal(&std::io::stderr()),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let result = match &cli.command {
        Command::Compile(args) => compile::run(args, &cli),
        Command::Build(args) => build::run(args, &cli),
        Command::Check(args) => check::run(args, &cli),
    };
    match result {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    }
}
