// SPDX-FileCopyrightText: 2026 Glot Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! String Catalogs
//!
//! The in-memory model of one locale's `strings.xml`: parsing,
//! serialization, the key-ordering invariant and its maintenance, and
//! key-format validation.
//!
//! Entries should be ordered by key. The invariant is checked, never
//! structurally enforced: an unsorted file parses fine, and the ordering
//! operations are written so that equal keys keep their insertion order.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use quick_xml::Reader;
use quick_xml::escape::escape;
use quick_xml::events::{BytesStart, Event};
use regex::Regex;
use thiserror::Error;

use crate::locale::{LocaleError, LocaleId};

static KEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]+(?:_[a-z]+)*$").expect("key pattern compiles"));

/// Errors raised while loading, labeling, or writing one catalog.
///
/// All of these are fatal for the affected catalog only; batch callers
/// skip the file and continue.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("malformed catalog {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },
    #[error("cannot label catalog {}: {source}", path.display())]
    Locale { path: PathBuf, source: LocaleError },
}

/// A key that does not match the resource-key format.
#[derive(Debug, Error)]
#[error("invalid key {key:?}: only lowercase letters separated by single underscores are allowed")]
pub struct InvalidKey {
    pub key: String,
}

/// Returns true if `key` is a well-formed resource key: groups of
/// lowercase letters separated by single underscores, no leading or
/// trailing underscore, no digits.
pub fn is_valid_key(key: &str) -> bool {
    KEY_PATTERN.is_match(key)
}

/// Validates a key before it is used to mutate any catalog.
pub fn validate_key(key: &str) -> Result<(), InvalidKey> {
    if is_valid_key(key) {
        Ok(())
    } else {
        Err(InvalidKey {
            key: key.to_string(),
        })
    }
}

/// One `<string>` resource: key, raw value, and the `translatable`
/// attribute when the file carries one.
///
/// The value is kept exactly as found between the element tags, markup
/// and entity references included, and is written back byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
    pub translatable: Option<bool>,
}

impl Entry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            translatable: None,
        }
    }

    /// An entry is translatable unless explicitly marked otherwise.
    /// Untranslatable entries are local-only resources and stay out of
    /// the coverage diff and the translation flow.
    pub fn is_translatable(&self) -> bool {
        self.translatable != Some(false)
    }
}

/// One locale's ordered list of string entries, backed by one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    locale: LocaleId,
    source_path: PathBuf,
    entries: Vec<Entry>,
}

impl Catalog {
    /// Creates an empty catalog for the given locale and backing path.
    pub fn new(locale: LocaleId, source_path: impl Into<PathBuf>) -> Self {
        Self {
            locale,
            source_path: source_path.into(),
            entries: Vec::new(),
        }
    }

    /// Reads and deserializes the catalog at `path`, deriving its locale
    /// from the parent directory name. Read-only; the file is not
    /// touched until [`Catalog::save`].
    pub fn parse(path: &Path) -> Result<Self, CatalogError> {
        let locale = LocaleId::from_catalog_path(path).map_err(|source| CatalogError::Locale {
            path: path.to_path_buf(),
            source,
        })?;

        let xml = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse_str(&xml, locale, path)
    }

    /// Deserializes catalog markup that is already in memory.
    pub fn parse_str(
        xml: &str,
        locale: LocaleId,
        source_path: impl Into<PathBuf>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new(locale, source_path);
        catalog.entries = parse_entries(xml).map_err(|reason| CatalogError::Parse {
            path: catalog.source_path.clone(),
            reason,
        })?;
        Ok(catalog)
    }

    pub fn locale(&self) -> &LocaleId {
        &self.locale
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// True if every adjacent pair of entries is ordered by key. Equal
    /// adjacent keys never violate the check; value order is not part of
    /// the ordering key.
    pub fn is_sorted_by_key(&self) -> bool {
        self.entries.windows(2).all(|pair| pair[0].key <= pair[1].key)
    }

    /// Stable sort by key.
    ///
    /// The short-circuit on an already-sorted catalog is part of the
    /// contract, not an optimization: sort preserves the insertion order
    /// of entries that share a key, it never normalizes it.
    pub fn sort_by_key(&mut self) {
        if self.is_sorted_by_key() {
            return;
        }
        self.entries.sort_by(|a, b| a.key.cmp(&b.key));
    }

    /// Leftmost index at which `entry` can be inserted while keeping the
    /// sequence sorted by key. With duplicate keys this lands at the
    /// first occurrence, leaving the relative order of equal keys alone.
    pub fn index_to_add_sorted(&self, entry: &Entry) -> usize {
        self.entries.partition_point(|e| e.key < entry.key)
    }

    /// Inserts at [`Catalog::index_to_add_sorted`]. Only meaningful when
    /// the catalog was sorted before the call.
    pub fn add_sorted(&mut self, entry: Entry) {
        let index = self.index_to_add_sorted(&entry);
        self.entries.insert(index, entry);
    }

    /// Inserts at the end unconditionally; for catalogs whose sortedness
    /// cannot be assumed.
    pub fn append(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    /// Removes every entry with the given key, not just the first.
    pub fn remove_by_key(&mut self, key: &str) {
        self.entries.retain(|e| e.key != key);
    }

    /// Replaces the first entry with the given key in place, keeping its
    /// position and `translatable` attribute. When the key is absent the
    /// entry is inserted sorted if the catalog is currently sorted, else
    /// appended.
    pub fn create_or_substitute(&mut self, key: &str, value: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.key == key) {
            entry.value = value.to_string();
            return;
        }

        let entry = Entry::new(key, value);
        if self.is_sorted_by_key() {
            self.add_sorted(entry);
        } else {
            self.append(entry);
        }
    }

    /// Renders the catalog back to storage markup: four-space
    /// indentation, `translatable` emitted only when present, values
    /// written raw. `parse` of the result reproduces the entries and
    /// their order exactly.
    pub fn serialize(&self) -> String {
        if self.entries.is_empty() {
            return String::from("<resources></resources>");
        }

        let mut out = String::from("<resources>");
        for entry in &self.entries {
            out.push_str("\n    <string name=\"");
            out.push_str(&escape(entry.key.as_str()));
            out.push('"');
            if let Some(translatable) = entry.translatable {
                out.push_str(" translatable=\"");
                out.push_str(if translatable { "true" } else { "false" });
                out.push('"');
            }
            out.push('>');
            out.push_str(&entry.value);
            out.push_str("</string>");
        }
        out.push_str("\n</resources>");
        out
    }

    /// Serializes and overwrites the backing file. Each catalog's update
    /// is an independent read-modify-write; no cross-catalog transaction
    /// exists or is needed.
    pub fn save(&self) -> Result<(), CatalogError> {
        std::fs::write(&self.source_path, self.serialize()).map_err(|source| {
            CatalogError::Write {
                path: self.source_path.clone(),
                source,
            }
        })
    }
}

/// Reads the `<string>` children of the `<resources>` root.
///
/// Values are captured as raw inner XML so markup and entity references
/// survive a rewrite untouched. Elements other than `<string>` are
/// skipped whole.
fn parse_entries(xml: &str) -> Result<Vec<Entry>, String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut entries = Vec::new();
    let mut in_resources = false;

    loop {
        match reader.read_event().map_err(|err| err.to_string())? {
            Event::Start(e) if !in_resources => {
                if e.name().as_ref() == b"resources" {
                    in_resources = true;
                } else {
                    return Err(format!(
                        "expected <resources> root, found <{}>",
                        String::from_utf8_lossy(e.name().as_ref())
                    ));
                }
            }
            Event::Empty(e) if !in_resources => {
                if e.name().as_ref() == b"resources" {
                    in_resources = true;
                } else {
                    return Err(format!(
                        "expected <resources> root, found <{}>",
                        String::from_utf8_lossy(e.name().as_ref())
                    ));
                }
            }
            Event::Start(e) if e.name().as_ref() == b"string" => {
                let (key, translatable) = string_attributes(&e)?;
                let span = reader
                    .read_to_end(e.name())
                    .map_err(|err| err.to_string())?;
                let value = xml[span.start as usize..span.end as usize].to_string();
                entries.push(Entry {
                    key,
                    value,
                    translatable,
                });
            }
            Event::Empty(e) if e.name().as_ref() == b"string" => {
                let (key, translatable) = string_attributes(&e)?;
                entries.push(Entry {
                    key,
                    value: String::new(),
                    translatable,
                });
            }
            // Non-string resources (plurals, arrays, comments) are not
            // part of the catalog model.
            Event::Start(e) => {
                reader
                    .read_to_end(e.name())
                    .map_err(|err| err.to_string())?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !in_resources {
        return Err("missing <resources> root element".to_string());
    }

    Ok(entries)
}

fn string_attributes(element: &BytesStart<'_>) -> Result<(String, Option<bool>), String> {
    let mut key = None;
    let mut translatable = None;

    for attribute in element.attributes() {
        let attribute = attribute.map_err(|err| err.to_string())?;
        match attribute.key.as_ref() {
            b"name" => {
                key = Some(
                    attribute
                        .unescape_value()
                        .map_err(|err| err.to_string())?
                        .into_owned(),
                );
            }
            b"translatable" => {
                let value = attribute.unescape_value().map_err(|err| err.to_string())?;
                translatable = Some(match value.as_ref() {
                    "true" => true,
                    "false" => false,
                    other => {
                        return Err(format!("invalid translatable attribute {other:?}"));
                    }
                });
            }
            _ => {}
        }
    }

    let key = key.ok_or("string element missing name attribute")?;
    Ok((key, translatable))
}

// INLINE_TEST_REQUIRED: Binary crate without lib.rs - tests cannot be external
#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_locale() -> LocaleId {
        LocaleId::from_values_dir("values").unwrap()
    }

    fn catalog(entries: &[(&str, &str)]) -> Catalog {
        let mut catalog = Catalog::new(test_locale(), "res/values/strings.xml");
        for (key, value) in entries {
            catalog.append(Entry::new(*key, *value));
        }
        catalog
    }

    fn keys(catalog: &Catalog) -> Vec<&str> {
        catalog.entries().iter().map(|e| e.key.as_str()).collect()
    }

    #[test]
    fn test_key_validation() {
        for valid in ["ok_key", "a", "welcome_message", "a_b_c"] {
            assert!(is_valid_key(valid), "{valid:?} should be valid");
        }
        for invalid in ["", "_bad", "bad_", "Bad", "bad1", "has space", "a__b"] {
            assert!(!is_valid_key(invalid), "{invalid:?} should be invalid");
        }
    }

    #[test]
    fn test_validate_key_reports_the_key() {
        let err = validate_key("Bad").unwrap_err();
        assert!(err.to_string().contains("\"Bad\""));
    }

    #[test]
    fn test_is_sorted_by_key() {
        assert!(catalog(&[]).is_sorted_by_key());
        assert!(catalog(&[("a", "A")]).is_sorted_by_key());
        assert!(catalog(&[("a", "A"), ("b", "B"), ("c", "C")]).is_sorted_by_key());
        assert!(!catalog(&[("b", "B"), ("a", "A")]).is_sorted_by_key());
        // Equal adjacent keys never violate sortedness, whatever their
        // value order.
        assert!(catalog(&[("a", "Z"), ("a", "A"), ("b", "B")]).is_sorted_by_key());
    }

    #[test]
    fn test_sort_by_key_sorts_unsorted_entries() {
        let mut cat = catalog(&[("c", "C"), ("a", "A"), ("b", "B")]);
        cat.sort_by_key();
        assert_eq!(keys(&cat), ["a", "b", "c"]);
        assert!(cat.is_sorted_by_key());
    }

    #[test]
    fn test_sort_by_key_is_idempotent() {
        let mut cat = catalog(&[("c", "C"), ("a", "A"), ("b", "B")]);
        cat.sort_by_key();
        let once = cat.clone();
        cat.sort_by_key();
        assert_eq!(cat, once);
    }

    #[test]
    fn test_sort_by_key_preserves_duplicate_key_order() {
        // Already sorted: the short-circuit guarantees nothing moves,
        // including equal keys in "wrong" value order.
        let mut sorted = catalog(&[("a", "second"), ("a", "first"), ("b", "B")]);
        sorted.sort_by_key();
        assert_eq!(sorted.entries()[0].value, "second");
        assert_eq!(sorted.entries()[1].value, "first");

        // Unsorted: the stable sort keeps equal keys in insertion order.
        let mut unsorted = catalog(&[("b", "B"), ("a", "second"), ("a", "first")]);
        unsorted.sort_by_key();
        assert_eq!(keys(&unsorted), ["a", "a", "b"]);
        assert_eq!(unsorted.entries()[0].value, "second");
        assert_eq!(unsorted.entries()[1].value, "first");
    }

    #[test]
    fn test_index_to_add_sorted() {
        let cat = catalog(&[("b", "B"), ("d", "D"), ("f", "F")]);
        assert_eq!(cat.index_to_add_sorted(&Entry::new("a", "")), 0);
        assert_eq!(cat.index_to_add_sorted(&Entry::new("c", "")), 1);
        assert_eq!(cat.index_to_add_sorted(&Entry::new("g", "")), 3);
        // Duplicate key lands at the first occurrence (lower bound).
        assert_eq!(cat.index_to_add_sorted(&Entry::new("d", "")), 1);
    }

    #[test]
    fn test_add_sorted() {
        let mut empty = catalog(&[]);
        empty.add_sorted(Entry::new("test_key", "Test Value"));
        assert_eq!(keys(&empty), ["test_key"]);

        let mut cat = catalog(&[("a", "A"), ("b", "B"), ("d", "D")]);
        cat.add_sorted(Entry::new("c", "C"));
        assert_eq!(keys(&cat), ["a", "b", "c", "d"]);

        let mut duplicates = catalog(&[("a", "A"), ("b", "B"), ("c", "old"), ("d", "D")]);
        duplicates.add_sorted(Entry::new("c", "new"));
        assert_eq!(keys(&duplicates), ["a", "b", "c", "c", "d"]);
        assert_eq!(duplicates.entries()[2].value, "new");
    }

    #[test]
    fn test_append_ignores_order() {
        let mut cat = catalog(&[("b", "B")]);
        cat.append(Entry::new("a", "A"));
        assert_eq!(keys(&cat), ["b", "a"]);
    }

    #[test]
    fn test_contains_key() {
        let cat = catalog(&[("a", "A"), ("b", "B")]);
        assert!(cat.contains_key("a"));
        assert!(!cat.contains_key("c"));
    }

    #[test]
    fn test_remove_by_key_removes_all_matches() {
        let mut cat = catalog(&[("a", "A"), ("b", "one"), ("b", "two"), ("c", "C")]);
        cat.remove_by_key("b");
        assert_eq!(keys(&cat), ["a", "c"]);

        // Removing an absent key is a no-op.
        cat.remove_by_key("z");
        assert_eq!(keys(&cat), ["a", "c"]);
    }

    #[test]
    fn test_create_or_substitute_replaces_in_place() {
        let mut cat = catalog(&[("a", "A"), ("b", "B"), ("c", "C")]);
        cat.entries[1].translatable = Some(false);

        cat.create_or_substitute("b", "updated");

        assert_eq!(keys(&cat), ["a", "b", "c"]);
        assert_eq!(cat.entries()[1].value, "updated");
        // Position, count, and the translatable attribute survive.
        assert_eq!(cat.entries()[1].translatable, Some(false));
    }

    #[test]
    fn test_create_or_substitute_inserts_sorted_when_sorted() {
        let mut cat = catalog(&[("a", "A"), ("d", "D")]);
        cat.create_or_substitute("b", "B");
        assert_eq!(keys(&cat), ["a", "b", "d"]);
    }

    #[test]
    fn test_create_or_substitute_appends_when_unsorted() {
        let mut cat = catalog(&[("d", "D"), ("a", "A")]);
        cat.create_or_substitute("b", "B");
        assert_eq!(keys(&cat), ["d", "a", "b"]);
    }

    #[test]
    fn test_parse_str_valid_catalog() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<resources>
    <string name="app_name">Test App</string>
    <string name="welcome_message">Welcome to the app!</string>
</resources>"#;

        let cat = Catalog::parse_str(xml, test_locale(), "strings.xml").unwrap();
        assert_eq!(
            cat.entries(),
            [
                Entry::new("app_name", "Test App"),
                Entry::new("welcome_message", "Welcome to the app!"),
            ]
        );
    }

    #[test]
    fn test_parse_str_empty_catalog() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?><resources></resources>"#;
        let cat = Catalog::parse_str(xml, test_locale(), "strings.xml").unwrap();
        assert!(cat.entries().is_empty());

        let collapsed = Catalog::parse_str("<resources/>", test_locale(), "strings.xml").unwrap();
        assert!(collapsed.entries().is_empty());
    }

    #[test]
    fn test_parse_str_keeps_values_raw() {
        let xml = concat!(
            "<resources>\n",
            "    <string name=\"styled\">Hello <b>world</b></string>\n",
            "    <string name=\"escaped\">Tom &amp; Jerry</string>\n",
            "    <string name=\"empty\"></string>\n",
            "</resources>"
        );

        let cat = Catalog::parse_str(xml, test_locale(), "strings.xml").unwrap();
        assert_eq!(cat.entries()[0].value, "Hello <b>world</b>");
        // Entity references stay encoded; they belong to the value.
        assert_eq!(cat.entries()[1].value, "Tom &amp; Jerry");
        assert_eq!(cat.entries()[2].value, "");
    }

    #[test]
    fn test_parse_str_translatable_attribute() {
        let xml = concat!(
            "<resources>\n",
            "    <string name=\"a\">A</string>\n",
            "    <string name=\"b\" translatable=\"false\">B</string>\n",
            "    <string name=\"c\" translatable=\"true\">C</string>\n",
            "</resources>"
        );

        let cat = Catalog::parse_str(xml, test_locale(), "strings.xml").unwrap();
        assert_eq!(cat.entries()[0].translatable, None);
        assert_eq!(cat.entries()[1].translatable, Some(false));
        assert_eq!(cat.entries()[2].translatable, Some(true));
        assert!(cat.entries()[0].is_translatable());
        assert!(!cat.entries()[1].is_translatable());
        assert!(cat.entries()[2].is_translatable());
    }

    #[test]
    fn test_parse_str_skips_other_resources() {
        let xml = concat!(
            "<resources>\n",
            "    <string name=\"a\">A</string>\n",
            "    <plurals name=\"count\"><item quantity=\"one\">x</item></plurals>\n",
            "    <string name=\"b\">B</string>\n",
            "</resources>"
        );

        let cat = Catalog::parse_str(xml, test_locale(), "strings.xml").unwrap();
        assert_eq!(keys(&cat), ["a", "b"]);
    }

    #[test]
    fn test_parse_str_rejects_malformed_content() {
        for xml in [
            "This is not valid XML content",
            "<resources><string name=\"a\">unclosed</resources>",
            "<other><string name=\"a\">A</string></other>",
            "<resources><string>no name</string></resources>",
            "<resources><string name=\"a\" translatable=\"flase\">A</string></resources>",
        ] {
            let result = Catalog::parse_str(xml, test_locale(), "strings.xml");
            assert!(
                matches!(result, Err(CatalogError::Parse { .. })),
                "{xml:?} should fail to parse"
            );
        }
    }

    #[test]
    fn test_serialize() {
        let mut cat = catalog(&[("app_name", "Test App"), ("welcome_message", "Welcome!")]);
        cat.entries[1].translatable = Some(false);

        insta::assert_snapshot!(cat.serialize(), @r#"
        <resources>
            <string name="app_name">Test App</string>
            <string name="welcome_message" translatable="false">Welcome!</string>
        </resources>
        "#);
    }

    #[test]
    fn test_serialize_empty_catalog() {
        assert_eq!(catalog(&[]).serialize(), "<resources></resources>");
    }

    #[test]
    fn test_serialize_escapes_keys_but_not_values() {
        let cat = catalog(&[("invalid<>key", "Can<>t")]);
        assert_eq!(
            cat.serialize(),
            "<resources>\n    <string name=\"invalid&lt;&gt;key\">Can<>t</string>\n</resources>"
        );
    }

    #[test]
    fn test_round_trip() {
        let mut original = catalog(&[
            ("plain", "Hello"),
            ("styled", "Hello <b>world</b> &amp; co"),
            ("empty", ""),
        ]);
        original.entries[1].translatable = Some(false);
        original.entries[2].translatable = Some(true);

        let reparsed =
            Catalog::parse_str(&original.serialize(), test_locale(), "res/values/strings.xml")
                .unwrap();

        assert_eq!(reparsed.entries(), original.entries());
    }

    #[test]
    fn test_parse_reads_file_and_labels_locale() {
        let dir = tempfile::tempdir().unwrap();
        let values = dir.path().join("values-es");
        std::fs::create_dir(&values).unwrap();
        let path = values.join("strings.xml");
        std::fs::write(&path, "<resources>\n    <string name=\"a\">A</string>\n</resources>")
            .unwrap();

        let cat = Catalog::parse(&path).unwrap();
        assert_eq!(cat.locale().display_name(), "Spanish");
        assert_eq!(cat.source_path(), path);
        assert_eq!(keys(&cat), ["a"]);
    }

    #[test]
    fn test_parse_missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("values").join("strings.xml");
        let err = Catalog::parse(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }

    #[test]
    fn test_parse_unresolvable_locale_is_a_locale_error() {
        let dir = tempfile::tempdir().unwrap();
        let values = dir.path().join("values-zz");
        std::fs::create_dir(&values).unwrap();
        let path = values.join("strings.xml");
        std::fs::write(&path, "<resources></resources>").unwrap();

        let err = Catalog::parse(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Locale { .. }));
    }

    #[test]
    fn test_save_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let values = dir.path().join("values");
        std::fs::create_dir(&values).unwrap();
        let path = values.join("strings.xml");

        let mut cat = Catalog::new(test_locale(), &path);
        cat.append(Entry::new("b", "B"));
        cat.append(Entry::new("a", "A <i>italic</i>"));
        cat.save().unwrap();

        let reloaded = Catalog::parse(&path).unwrap();
        assert_eq!(reloaded.entries(), cat.entries());
    }

    prop_compose! {
        fn arb_key()(groups in prop::collection::vec("[a-z]{1,5}", 1..4)) -> String {
            groups.join("_")
        }
    }

    proptest! {
        #[test]
        fn prop_sort_then_check_always_sorted(keys in prop::collection::vec(arb_key(), 0..20)) {
            let mut cat = catalog(&[]);
            for key in &keys {
                cat.append(Entry::new(key.clone(), "v"));
            }
            cat.sort_by_key();
            prop_assert!(cat.is_sorted_by_key());
        }

        #[test]
        fn prop_add_sorted_preserves_sortedness(
            mut keys in prop::collection::vec(arb_key(), 0..20),
            new_key in arb_key(),
        ) {
            keys.sort();
            let mut cat = catalog(&[]);
            for key in &keys {
                cat.append(Entry::new(key.clone(), "v"));
            }
            prop_assert!(cat.is_sorted_by_key());

            cat.add_sorted(Entry::new(new_key, "v"));
            prop_assert!(cat.is_sorted_by_key());
        }

        #[test]
        fn prop_upsert_existing_changes_only_that_value(
            mut keys in prop::collection::vec(arb_key(), 1..20),
            index in 0usize..20,
        ) {
            keys.sort();
            keys.dedup();
            let index = index % keys.len();
            let target = keys[index].clone();

            let mut cat = catalog(&[]);
            for key in &keys {
                cat.append(Entry::new(key.clone(), "v"));
            }
            let before = cat.clone();

            cat.create_or_substitute(&target, "updated");

            prop_assert_eq!(cat.entries().len(), before.entries().len());
            for (after, original) in cat.entries().iter().zip(before.entries()) {
                prop_assert_eq!(&after.key, &original.key);
                if after.key == target {
                    prop_assert_eq!(after.value.as_str(), "updated");
                } else {
                    prop_assert_eq!(&after.value, &original.value);
                }
            }
        }
    }
}
