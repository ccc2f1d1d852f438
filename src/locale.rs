// SPDX-FileCopyrightText: 2026 Glot Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Locale Identification
//!
//! Derives a language/region pair from a catalog's directory name
//! (`values[-<lang>[-r<REGION>]]`) and resolves it to an English display
//! name. Resolution failure means the catalog cannot be labeled and must
//! not be loaded.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

/// File name every string catalog is stored under.
pub const CATALOG_FILE_NAME: &str = "strings.xml";

/// Language used when a resource directory carries no locale qualifier.
const DEFAULT_LANGUAGE: &str = "en";

static VALUES_DIR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"values-(\w+)(?:-r(\w+))?").expect("values dir pattern compiles"));

/// Errors raised while labeling a catalog with its locale.
#[derive(Debug, Error)]
pub enum LocaleError {
    /// The directory qualifier does not form a well-formed BCP 47 tag.
    #[error("malformed language tag {tag:?}: {reason}")]
    MalformedTag { tag: String, reason: String },
    /// The language subtag is well-formed but not in the ISO 639 registry.
    #[error("unknown language subtag {language:?}")]
    UnknownLanguage { language: String },
}

/// The resolved locale of one catalog: language code, optional region
/// code, and the English display name used in reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleId {
    language: String,
    region: Option<String>,
    display_name: String,
}

impl LocaleId {
    /// Resolves a language code and optional region code into a labeled
    /// locale.
    ///
    /// The pair is validated as a BCP 47 tag and the language subtag is
    /// looked up in the ISO 639 registry for its English name. Either
    /// step failing is a hard error; there is no silent fallback.
    pub fn resolve(language: &str, region: Option<&str>) -> Result<Self, LocaleError> {
        let tag = match region {
            Some(region) => format!("{language}-{region}"),
            None => language.to_string(),
        };

        let id: LanguageIdentifier =
            tag.parse().map_err(|err| LocaleError::MalformedTag {
                tag: tag.clone(),
                reason: format!("{err:?}"),
            })?;

        let language = id.language.as_str().to_string();
        let named = isolang::Language::from_639_1(&language)
            .or_else(|| isolang::Language::from_639_3(&language))
            .ok_or_else(|| LocaleError::UnknownLanguage {
                language: language.clone(),
            })?;

        let region = id.region.map(|r| r.as_str().to_string());
        let display_name = match &region {
            Some(region) => format!("{} ({})", named.to_name(), region),
            None => named.to_name().to_string(),
        };

        Ok(Self {
            language,
            region,
            display_name,
        })
    }

    /// Derives the locale from a resource values-directory name.
    ///
    /// A name without a locale qualifier (plain `values`, or anything the
    /// pattern does not match) is the base locale, `en`.
    pub fn from_values_dir(dir_name: &str) -> Result<Self, LocaleError> {
        match VALUES_DIR_PATTERN.captures(dir_name) {
            Some(caps) => {
                let language = caps.get(1).map_or(DEFAULT_LANGUAGE, |m| m.as_str());
                let region = caps.get(2).map(|m| m.as_str());
                Self::resolve(language, region)
            }
            None => Self::resolve(DEFAULT_LANGUAGE, None),
        }
    }

    /// Derives the locale from a catalog file path by matching the known
    /// catalog filename and reading its parent directory name.
    pub fn from_catalog_path(path: &Path) -> Result<Self, LocaleError> {
        let dir_name = path
            .parent()
            .and_then(Path::file_name)
            .and_then(|name| name.to_str())
            .unwrap_or_default();
        Self::from_values_dir(dir_name)
    }

    /// ISO 639 language code, lowercase.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Canonical region code, uppercase, when the directory carried one.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// English display name, e.g. `Spanish` or `Spanish (MX)`.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}
