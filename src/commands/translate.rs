// SPDX-FileCopyrightText: 2026 Glot Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Translate Command
//!
//! Machine-translates a string into every locale of the selected
//! resource directories and upserts it under the given key. Already
//! present keys are updated in place; sorted catalogs stay sorted.

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use crate::SelectionArgs;
use crate::catalog;
use crate::commands::common;
use crate::config::CliConfig;
use crate::display;
use crate::translate::TranslateClient;

pub async fn run(
    config: &CliConfig,
    selection: &SelectionArgs,
    key: &str,
    value: &str,
) -> Result<()> {
    catalog::validate_key(key)?;
    let client = TranslateClient::new(config.require_api_key()?);

    let dirs = common::resolve_res_dirs(config, selection)?;
    let outcome = common::load_catalogs(&dirs)?;

    display::display_languages_found(&outcome.catalogs);
    println!("Translating...");

    let bar = ProgressBar::new(outcome.catalogs.len() as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{bar:30.green} {pos}/{len} {msg}")
            .unwrap(),
    );

    let mut translated = 0;
    for mut catalog in outcome.catalogs {
        let language = catalog.locale().display_name().to_string();
        bar.set_message(language.clone());

        // One locale failing to translate or save must not stop the
        // others; each catalog is an independent read-modify-write.
        match client.translate(value, catalog.locale().language()).await {
            Ok(text) => {
                catalog.create_or_substitute(key, &text);
                match catalog.save() {
                    Ok(()) => {
                        bar.println(format!("{language}: {text}"));
                        translated += 1;
                    }
                    Err(err) => bar.println(format!("✗ {err}")),
                }
            }
            Err(err) => bar.println(format!("✗ failed to translate to {language}: {err}")),
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    display::success(&format!(
        "Translated {key:?} into {translated} catalog(s)"
    ));
    Ok(())
}
