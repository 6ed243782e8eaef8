//! External logic-synthesis collaborator for the Cinnabar toolchain.
//!
//! Invokes Yosys as a subprocess to synthesize Verilog source down to the
//! gate-level primitives the layout compiler understands, then parses the
//! JSON netlist it writes. This is the only asynchronous boundary of the
//! larger system and it is modeled as a synchronous call: it either
//! returns a [`Netlist`] or fails with a typed [`SynthError`] before the
//! core pipeline begins. Nothing in `cinnabar_layout` depends on this
//! crate.

#![warn(missing_docs)]

use cinnabar_netlist::{Netlist, NetlistError};
use std::path::PathBuf;
use std::process::Command;
use std::time::Duration;

/// Errors from the synthesis subprocess.
#[derive(Debug, thiserror::Error)]
pub enum SynthError {
    /// The scratch directory or source file could not be written.
    #[error("failed to stage synthesis input: {0}")]
    Io(#[from] std::io::Error),

    /// No candidate Yosys binary could be executed successfully.
    #[error("yosys synthesis failed (is yosys installed?): {stderr}")]
    YosysFailed {
        /// Captured stderr of the last attempted invocation.
        stderr: String,
    },

    /// Yosys ran but its JSON output could not be parsed.
    #[error(transparent)]
    BadNetlist(#[from] NetlistError),
}

/// Options for the synthesis invocation.
#[derive(Clone, Debug)]
pub struct SynthOptions {
    /// Candidate Yosys binaries, tried in order.
    pub yosys_candidates: Vec<PathBuf>,
    /// Subprocess timeout.
    pub timeout: Duration,
}

impl Default for SynthOptions {
    fn default() -> Self {
        Self {
            yosys_candidates: vec![
                PathBuf::from("yosys"),
                PathBuf::from("/usr/local/bin/yosys"),
                PathBuf::from("/opt/homebrew/bin/yosys"),
            ],
            timeout: Duration::from_secs(15),
        }
    }
}

/// Synthesizes Verilog source into a gate-level [`Netlist`].
///
/// Writes the source to a scratch directory, runs
/// `read_verilog; synth -flatten -noabc; clean; write_json`, and parses
/// the resulting document. Candidate binaries are tried in order; the
/// error of the last failing candidate is reported.
pub fn synthesize(verilog: &str, options: &SynthOptions) -> Result<Netlist, SynthError> {
    let dir = tempfile::Builder::new().prefix("cinnabar-").tempdir()?;
    let source_path = dir.path().join("circuit.v");
    let json_path = dir.path().join("circuit.json");
    std::fs::write(&source_path, verilog)?;

    let script = format!(
        "read_verilog {}; synth -flatten -noabc; clean; write_json {}",
        source_path.display(),
        json_path.display()
    );

    let mut last_stderr = String::new();
    for candidate in &options.yosys_candidates {
        let mut command = Command::new(candidate);
        command.arg("-p").arg(&script);
        match run_with_timeout(command, options.timeout) {
            Ok(RunResult::Success) => {
                let json = std::fs::read_to_string(&json_path)?;
                return Ok(Netlist::from_yosys_json(&json)?);
            }
            Ok(RunResult::Failed(stderr)) => last_stderr = stderr,
            Err(err) => last_stderr = err.to_string(),
        }
    }

    Err(SynthError::YosysFailed {
        stderr: last_stderr,
    })
}

enum RunResult {
    Success,
    Failed(String),
}

/// Runs the command, killing it if the deadline passes. Stdout is
/// discarded (Yosys is chatty); stderr is captured for error reporting.
fn run_with_timeout(
    mut command: Command,
    timeout: Duration,
) -> std::io::Result<RunResult> {
    use std::process::Stdio;

    let mut child = command
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()?;

    let deadline = std::time::Instant::now() + timeout;
    loop {
        if child.try_wait()?.is_some() {
            break;
        }
        if std::time::Instant::now() >= deadline {
            child.kill()?;
            child.wait()?;
            return Ok(RunResult::Failed(format!(
                "timed out after {}s",
                timeout.as_secs()
            )));
        }
        std::thread::sleep(Duration::from_millis(50));
    }

    let output = child.wait_with_output()?;
    if output.status.success() {
        Ok(RunResult::Success)
    } else {
        Ok(RunResult::Failed(
            String::from_utf8_lossy(&output.stderr).into_owned(),
        ))
    }
}

/// Probes whether any candidate Yosys binary responds to `--version`.
pub fn is_yosys_available(options: &SynthOptions) -> bool {
    options.yosys_candidates.iter().any(|candidate| {
        Command::new(candidate)
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_candidates() {
        let options = SynthOptions::default();
        assert_eq!(options.yosys_candidates[0], PathBuf::from("yosys"));
        assert_eq!(options.timeout, Duration::from_secs(15));
    }

    #[test]
    fn missing_binary_reports_failure() {
        let options = SynthOptions {
            yosys_candidates: vec![PathBuf::from("/nonexistent/yosys-definitely-absent")],
            timeout: Duration::from_secs(1),
        };
        let err = synthesize("module m; endmodule", &options).unwrap_err();
        assert!(matches!(err, SynthError::YosysFailed { .. }));
    }

    #[test]
    fn no_candidates_reports_failure() {
        let options = SynthOptions {
            yosys_candidates: vec![],
            timeout: Duration::from_secs(1),
        };
        assert!(!is_yosys_available(&options));
        let err = synthesize("module m; endmodule", &options).unwrap_err();
        assert!(matches!(err, SynthError::YosysFailed { .. }));
    }
}
