// SPDX-FileCopyrightText: 2026 Glot Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remove Command
//!
//! Removes a key from every catalog of the selected resource
//! directories. The key format is validated before anything is loaded
//! or written.

use anyhow::Result;

use crate::SelectionArgs;
use crate::catalog;
use crate::commands::common;
use crate::config::CliConfig;
use crate::display;

pub fn run(config: &CliConfig, selection: &SelectionArgs, key: &str) -> Result<()> {
    catalog::validate_key(key)?;

    let dirs = common::resolve_res_dirs(config, selection)?;
    let outcome = common::load_catalogs(&dirs)?;

    display::display_languages_found(&outcome.catalogs);
    println!("Removing...");

    let mut removed = 0;
    for mut catalog in outcome.catalogs {
        if !catalog.contains_key(key) {
            display::info(&format!(
                "key {:?} not found in {}",
                key,
                catalog.source_path().display()
            ));
            continue;
        }

        catalog.remove_by_key(key);
        match catalog.save() {
            Ok(()) => {
                display::success(&format!(
                    "Removed {:?} from {}",
                    key,
                    catalog.source_path().display()
                ));
                removed += 1;
            }
            Err(err) => display::error(&err.to_string()),
        }
    }

    if removed == 0 {
        display::warning(&format!("key {key:?} was not present in any catalog"));
    }
    Ok(())
}
