// SPDX-FileCopyrightText: 2026 Glot Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Translation Coverage
//!
//! Cross-catalog diffing: which locales define each translatable key and
//! which are missing it. The index is built fresh for every run and never
//! persisted.

use std::collections::HashMap;

use crate::catalog::Catalog;

/// Per-key coverage across one run's set of catalogs.
///
/// Locales are identified by display name. Two catalogs whose tags
/// render the same display name merge here; the raw tag pair stays
/// available on each catalog's [`crate::locale::LocaleId`] if that
/// coarsening ever needs to change.
#[derive(Debug, Default)]
pub struct CoverageIndex {
    /// Every locale observed, in catalog encounter order.
    locales: Vec<String>,
    /// Key to the locales defining it, in catalog encounter order.
    defined_in: HashMap<String, Vec<String>>,
}

/// One report line: a key that at least one locale is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingKey {
    pub key: String,
    pub defined_in: Vec<String>,
    pub missing_from: Vec<String>,
}

impl CoverageIndex {
    /// Folds a set of catalogs into a coverage index. Entries marked
    /// `translatable="false"` are local-only resources and stay out of
    /// the universe of keys.
    pub fn build<'a>(catalogs: impl IntoIterator<Item = &'a Catalog>) -> Self {
        let mut index = Self::default();

        for catalog in catalogs {
            let locale = catalog.locale().display_name();
            if !index.locales.iter().any(|l| l == locale) {
                index.locales.push(locale.to_string());
            }

            for entry in catalog.entries() {
                if !entry.is_translatable() {
                    continue;
                }
                let defined = index.defined_in.entry(entry.key.clone()).or_default();
                if !defined.iter().any(|l| l == locale) {
                    defined.push(locale.to_string());
                }
            }
        }

        index
    }

    /// All locales observed across the catalogs, in encounter order.
    pub fn locales(&self) -> &[String] {
        &self.locales
    }

    /// Keys missing from at least one locale, ordered lexicographically
    /// by key. Keys defined everywhere are fully covered and excluded.
    ///
    /// The backing map is unordered; the sort here is what makes the
    /// report deterministic across runs.
    pub fn missing_translations(&self) -> Vec<MissingKey> {
        let mut missing: Vec<MissingKey> = self
            .defined_in
            .iter()
            .filter_map(|(key, defined_in)| {
                let missing_from: Vec<String> = self
                    .locales
                    .iter()
                    .filter(|locale| !defined_in.contains(locale))
                    .cloned()
                    .collect();
                if missing_from.is_empty() {
                    return None;
                }
                Some(MissingKey {
                    key: key.clone(),
                    defined_in: defined_in.clone(),
                    missing_from,
                })
            })
            .collect();

        missing.sort_by(|a, b| a.key.cmp(&b.key));
        missing
    }

    /// Renders the human-readable missing-translation report. Diagnostic
    /// output only; nothing parses it back.
    pub fn render_report(&self) -> String {
        let missing = self.missing_translations();
        if missing.is_empty() {
            return String::from("No missing translations found.");
        }

        let mut report = format!("Found {} possible missing translations:\n", missing.len());
        for line in &missing {
            report.push_str(&format!(
                "\t{}:\n\t\tDEFINED IN: [{}]\n\t\tMISSING FROM: [{}]\n",
                line.key,
                line.defined_in.join(", "),
                line.missing_from.join(", ")
            ));
        }
        report
    }
}
