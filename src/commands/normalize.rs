// SPDX-FileCopyrightText: 2026 Glot Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Normalize Command
//!
//! Rewrites every catalog that violates the key ordering. Sorted files
//! are left untouched, byte for byte.

use anyhow::Result;

use crate::SelectionArgs;
use crate::commands::common;
use crate::config::CliConfig;
use crate::display;

pub fn run(config: &CliConfig, selection: &SelectionArgs) -> Result<()> {
    let dirs = common::resolve_res_dirs(config, selection)?;
    let outcome = common::load_catalogs(&dirs)?;

    println!("Sorting unsorted catalog files...");

    let mut rewritten = 0;
    for mut catalog in outcome.catalogs {
        if catalog.is_sorted_by_key() {
            continue;
        }

        println!(
            "{} is not sorted by key. Sorting...",
            catalog.source_path().display()
        );
        catalog.sort_by_key();

        // A failed write skips this file only; the rest of the batch
        // still gets normalized.
        match catalog.save() {
            Ok(()) => {
                display::success(&format!("Sorted {}", catalog.source_path().display()));
                rewritten += 1;
            }
            Err(err) => display::error(&err.to_string()),
        }
    }

    if rewritten == 0 {
        display::success("All catalogs are already sorted by key");
    } else {
        display::success(&format!("Rewrote {rewritten} catalog file(s)"));
    }
    Ok(())
}
