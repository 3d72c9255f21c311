//! External printer invocation.
//!
//! The label is handed to the `ptouch-print` command line tool. Its stdout
//! and stderr pass straight through to the user; the exit status is returned
//! so the caller can mirror it as the process exit code. No availability
//! check happens up front: a missing tool surfaces as a spawn error.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, ExitStatus};

use crate::config::LabelConfig;

/// Queries the printer for tape and device information.
///
/// Runs `ptouch-print --info` and returns its exit status.
pub fn print_info(config: &LabelConfig) -> Result<ExitStatus> {
    run(&config.printer_command, &["--info"])
}

/// Sends a rendered label image to the printer.
///
/// Runs `ptouch-print --image <path>` and returns its exit status.
pub fn print_image(config: &LabelConfig, image_path: &Path) -> Result<ExitStatus> {
    let path = image_path
        .to_str()
        .with_context(|| format!("Image path is not valid UTF-8: {}", image_path.display()))?;

    run(&config.printer_command, &["--image", path])
}

/// Runs the printer command with inherited stdio.
fn run(command: &str, args: &[&str]) -> Result<ExitStatus> {
    Command::new(command)
        .args(args)
        .status()
        .with_context(|| format!("Failed to execute {command}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tool_is_a_spawn_error() {
        let config = LabelConfig {
            printer_command: "ptouch-print-no-such-tool".to_string(),
            ..LabelConfig::default()
        };

        assert!(print_info(&config).is_err());
    }

    #[test]
    fn test_exit_status_is_propagated_not_wrapped() {
        // A command that exists but fails must yield Ok with a non-zero
        // status; the caller decides the process exit code.
        let config = LabelConfig {
            printer_command: "false".to_string(),
            ..LabelConfig::default()
        };

        let status = print_info(&config).unwrap();
        assert!(!status.success());
    }
}
