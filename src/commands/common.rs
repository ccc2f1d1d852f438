// SPDX-FileCopyrightText: 2026 Glot Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared helpers for CLI commands.

use std::path::PathBuf;

use anyhow::{Result, bail};
use dialoguer::Select;

use crate::SelectionArgs;
use crate::config::CliConfig;
use crate::display;
use crate::project::{self, LoadOutcome};

/// Resolves which resource directories a command operates on.
///
/// Checks the project precondition first, then honors `--res-dir`,
/// `--all-modules`, or falls back to the interactive picker. A project
/// with a single resource directory skips the picker.
pub(crate) fn resolve_res_dirs(
    config: &CliConfig,
    selection: &SelectionArgs,
) -> Result<Vec<PathBuf>> {
    project::ensure_android_project(&config.project_root)?;

    if let Some(dir) = &selection.res_dir {
        if !dir.is_dir() {
            bail!("resource directory {} does not exist", dir.display());
        }
        return Ok(vec![dir.clone()]);
    }

    let dirs = project::find_resource_dirs(&config.project_root)?;
    if dirs.is_empty() {
        bail!("no android resource directories found");
    }

    if selection.all_modules || dirs.len() == 1 {
        return Ok(dirs);
    }

    let items: Vec<String> = dirs.iter().map(|d| d.display().to_string()).collect();
    let index = Select::new()
        .with_prompt("Select a resource directory")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(vec![dirs[index].clone()])
}

/// Loads every catalog under the given resource directories.
///
/// Per-catalog failures are isolated: each skipped file is reported with
/// its path and reason, and the rest of the batch goes on. Finding no
/// loadable catalog at all is fatal to the run.
pub(crate) fn load_catalogs(dirs: &[PathBuf]) -> Result<LoadOutcome> {
    let mut paths = Vec::new();
    for dir in dirs {
        paths.extend(project::find_catalog_files(dir)?);
    }
    if paths.is_empty() {
        bail!("no catalog files found in the selected resource directories");
    }

    let outcome = project::load_catalogs(&paths);
    for skipped in &outcome.skipped {
        display::warning(&format!(
            "skipping {}: {}",
            skipped.path.display(),
            skipped.error
        ));
    }
    if outcome.catalogs.is_empty() {
        bail!("none of the catalog files could be loaded");
    }

    Ok(outcome)
}
