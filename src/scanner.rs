// SPDX-FileCopyrightText: 2026 Glot Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Key Usage Scanning
//!
//! Answers whether a resource key is still referenced by project source.
//! Shells out to ripgrep when available, plain grep otherwise. A scanner
//! failure is "unknown", never "unused": callers must not treat an error
//! as a negative result.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use thiserror::Error;

/// Source files that can carry generated resource references.
const REFERENCE_GLOBS: [&str; 2] = ["*.kt", "*.java"];

/// Errors from a usage scan. Both variants mean the answer is unknown.
#[derive(Debug, Error)]
pub enum ScannerError {
    #[error("failed to launch {tool}: {source}")]
    Launch { tool: &'static str, source: io::Error },
    #[error("{tool} search failed ({status}): {stderr}")]
    Search {
        tool: &'static str,
        status: ExitStatus,
        stderr: String,
    },
}

/// The usage-check contract. The search mechanism is an external
/// concern; the engine only asks the question.
pub trait UsageScanner {
    fn is_key_referenced(&self, key: &str) -> Result<bool, ScannerError>;
}

/// The generated reference a key produces in source code.
fn reference_pattern(key: &str) -> String {
    format!("R.string.{key}")
}

/// Maps a search tool's exit to the contract: success means a match
/// exists, status 1 means none, anything else is a real failure.
fn interpret_exit(
    tool: &'static str,
    output: io::Result<std::process::Output>,
) -> Result<bool, ScannerError> {
    let output = output.map_err(|source| ScannerError::Launch { tool, source })?;
    match output.status.code() {
        Some(0) => Ok(true),
        Some(1) => Ok(false),
        _ => Err(ScannerError::Search {
            tool,
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }),
    }
}

/// Scanner backed by ripgrep.
pub struct RipgrepScanner {
    root: PathBuf,
}

impl RipgrepScanner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl UsageScanner for RipgrepScanner {
    fn is_key_referenced(&self, key: &str) -> Result<bool, ScannerError> {
        let mut cmd = Command::new("rg");
        cmd.arg("--quiet").arg("--fixed-strings");
        for glob in REFERENCE_GLOBS {
            cmd.arg("--glob").arg(glob);
        }
        cmd.arg(reference_pattern(key)).arg(&self.root);
        interpret_exit("rg", cmd.output())
    }
}

/// Fallback scanner backed by plain grep.
pub struct GrepScanner {
    root: PathBuf,
}

impl GrepScanner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl UsageScanner for GrepScanner {
    fn is_key_referenced(&self, key: &str) -> Result<bool, ScannerError> {
        let mut cmd = Command::new("grep");
        cmd.arg("-r").arg("-q").arg("-F");
        for glob in REFERENCE_GLOBS {
            cmd.arg(format!("--include={glob}"));
        }
        cmd.arg(reference_pattern(key)).arg(&self.root);
        interpret_exit("grep", cmd.output())
    }
}

/// Picks the fastest scanner available on this machine.
pub fn detect_scanner(root: &Path) -> Box<dyn UsageScanner> {
    if which::which("rg").is_ok() {
        Box::new(RipgrepScanner::new(root))
    } else {
        Box::new(GrepScanner::new(root))
    }
}
