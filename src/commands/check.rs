// SPDX-FileCopyrightText: 2026 Glot Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Check Command
//!
//! Read-only consistency checks over a set of catalogs: key ordering,
//! translation coverage, and unused keys. Never writes a file.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Result, bail};

use crate::SelectionArgs;
use crate::catalog::Catalog;
use crate::commands::common;
use crate::config::CliConfig;
use crate::coverage::CoverageIndex;
use crate::display;
use crate::scanner::{self};

/// Which checks to run. No flag means all of them.
pub struct CheckArgs {
    pub sorting: bool,
    pub coverage: bool,
    pub unused: bool,
}

impl CheckArgs {
    fn run_all(&self) -> bool {
        !(self.sorting || self.coverage || self.unused)
    }
}

pub fn run(config: &CliConfig, selection: &SelectionArgs, checks: &CheckArgs) -> Result<()> {
    let dirs = common::resolve_res_dirs(config, selection)?;
    let outcome = common::load_catalogs(&dirs)?;

    display::display_catalog_table(&outcome.catalogs);

    // A file that could not even be loaded is a failed check.
    let mut problems = outcome.skipped.len();
    let all = checks.run_all();

    if checks.sorting || all {
        problems += check_sorting(&outcome.catalogs);
    }
    if checks.coverage || all {
        problems += check_coverage(&outcome.catalogs);
    }
    if checks.unused || all {
        problems += check_unused(&outcome.catalogs, &config.project_root);
    }

    if problems > 0 {
        bail!("{problems} problem(s) found");
    }
    display::success("All checks passed");
    Ok(())
}

/// Reports every catalog that violates the key ordering.
fn check_sorting(catalogs: &[Catalog]) -> usize {
    println!();
    println!("Checking if catalog files are sorted by key...");

    let mut failures = 0;
    for catalog in catalogs {
        if !catalog.is_sorted_by_key() {
            display::error(&format!(
                "{} is not sorted by key",
                catalog.source_path().display()
            ));
            failures += 1;
        }
    }

    if failures == 0 {
        display::success("All catalogs are sorted by key");
    }
    failures
}

/// Prints the missing-translation report and counts its findings.
fn check_coverage(catalogs: &[Catalog]) -> usize {
    println!();
    println!("Checking translation coverage...");

    let index = CoverageIndex::build(catalogs);
    println!(
        "Comparing {} locales: [{}]",
        index.locales().len(),
        index.locales().join(", ")
    );

    let missing = index.missing_translations();
    println!("{}", index.render_report());
    missing.len()
}

/// Scans project source for each distinct key and reports the ones with
/// no reference left. A scanner error makes that key "unknown", which is
/// reported but never counted as unused.
fn check_unused(catalogs: &[Catalog], project_root: &Path) -> usize {
    println!();
    println!("Checking for unused keys...");

    let keys: BTreeSet<&str> = catalogs
        .iter()
        .flat_map(|c| c.entries())
        .map(|e| e.key.as_str())
        .collect();

    let scanner = scanner::detect_scanner(project_root);
    let mut unused = Vec::new();
    let mut unknown = 0;

    for key in keys {
        match scanner.is_key_referenced(key) {
            Ok(true) => {}
            Ok(false) => unused.push(key),
            Err(err) => {
                display::warning(&format!("could not determine usage of {key:?}: {err}"));
                unknown += 1;
            }
        }
    }

    for key in &unused {
        println!("\t{key}");
    }
    println!("Found {} possible unused keys", unused.len());
    if unknown > 0 {
        display::warning(&format!(
            "{unknown} key(s) could not be checked and may still be in use"
        ));
    }

    unused.len()
}
