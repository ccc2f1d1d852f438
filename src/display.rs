// SPDX-FileCopyrightText: 2026 Glot Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Display Helpers
//!
//! Terminal output formatting and styling.

use console::style;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style as TableStyle, object::Columns},
};

use crate::catalog::Catalog;

/// Prints a success message.
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Prints an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}

/// Prints a warning message.
pub fn warning(msg: &str) {
    println!("{} {}", style("⚠").yellow().bold(), msg);
}

/// Prints an info message.
pub fn info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Row structure for the catalog table.
#[derive(Tabled)]
struct CatalogRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Locale")]
    locale: String,
    #[tabled(rename = "Language")]
    language: String,
    #[tabled(rename = "Keys")]
    keys: usize,
    #[tabled(rename = "Sorted")]
    sorted: String,
    #[tabled(rename = "File")]
    file: String,
}

/// Displays the loaded catalogs as a formatted table.
pub fn display_catalog_table(catalogs: &[Catalog]) {
    let rows: Vec<CatalogRow> = catalogs
        .iter()
        .enumerate()
        .map(|(i, c)| CatalogRow {
            index: i + 1,
            locale: match c.locale().region() {
                Some(region) => format!("{}-{}", c.locale().language(), region),
                None => c.locale().language().to_string(),
            },
            language: c.locale().display_name().to_string(),
            keys: c.entries().len(),
            sorted: if c.is_sorted_by_key() {
                "✓".to_string()
            } else {
                "✗".to_string()
            },
            file: c.source_path().display().to_string(),
        })
        .collect();

    let table = Table::new(rows)
        .with(TableStyle::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::right()))
        .to_string();

    println!("{}", table);
}

/// Prints the locales covered by the loaded catalogs.
pub fn display_languages_found(catalogs: &[Catalog]) {
    let names: Vec<&str> = catalogs
        .iter()
        .map(|c| c.locale().display_name())
        .collect();
    println!("Languages found: [{}]", names.join(", "));
}
