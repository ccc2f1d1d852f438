// SPDX-FileCopyrightText: 2026 Glot Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI Configuration

use std::path::PathBuf;

use anyhow::{Result, anyhow};

/// Configuration threaded into every command.
///
/// The API key is resolved once at argument-parse time (flag or
/// environment variable, captured by clap) and travels through here;
/// no component reads the environment on its own.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Root of the Android project to operate on.
    pub project_root: PathBuf,
    /// Translation API key, when one was provided.
    pub api_key: Option<String>,
}

impl CliConfig {
    /// Returns the API key or a hard error telling the user how to
    /// provide one. Commands that translate call this before touching
    /// any catalog.
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            anyhow!(
                "no translation API key configured. \
                 Pass --api-key or set the GOOGLE_TRANSLATE_KEY environment variable."
            )
        })
    }
}
