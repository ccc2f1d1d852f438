// SPDX-FileCopyrightText: 2026 Glot Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Project Layout
//!
//! Locating resource directories and catalog files inside an Android
//! project tree, plus batch catalog loading. One bad file never aborts a
//! batch: it is skipped and reported, and the rest of the run continues.

use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use crate::catalog::{Catalog, CatalogError};
use crate::locale::CATALOG_FILE_NAME;

/// Files or directories whose presence marks an Android project root.
const ANDROID_ROOT_INDICATORS: [&str; 4] =
    ["build.gradle", "settings.gradle", "settings.gradle.kts", "app"];

/// Errors from project discovery.
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("{} is not an android project", root.display())]
    NotAndroidProject { root: PathBuf },
    #[error("failed to walk {}: {source}", root.display())]
    Walk {
        root: PathBuf,
        source: walkdir::Error,
    },
}

/// True if `root` carries any of the usual Android build markers.
pub fn is_android_project(root: &Path) -> bool {
    ANDROID_ROOT_INDICATORS
        .iter()
        .any(|indicator| root.join(indicator).exists())
}

/// Precondition gate for every command: the caller decides what to do
/// with the failure.
pub fn ensure_android_project(root: &Path) -> Result<(), ProjectError> {
    if is_android_project(root) {
        Ok(())
    } else {
        Err(ProjectError::NotAndroidProject {
            root: root.to_path_buf(),
        })
    }
}

/// Finds every resource directory under `root`: a directory named `res`
/// containing a `values` child. Sorted for a stable picker listing.
pub fn find_resource_dirs(root: &Path) -> Result<Vec<PathBuf>, ProjectError> {
    let mut dirs = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|source| ProjectError::Walk {
            root: root.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_dir()
            && entry.file_name() == "res"
            && entry.path().join("values").is_dir()
        {
            dirs.push(entry.into_path());
        }
    }

    dirs.sort();
    Ok(dirs)
}

/// Finds every catalog file under a resource directory, by the known
/// catalog filename.
pub fn find_catalog_files(res_dir: &Path) -> Result<Vec<PathBuf>, ProjectError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(res_dir) {
        let entry = entry.map_err(|source| ProjectError::Walk {
            root: res_dir.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_file() && entry.file_name() == CATALOG_FILE_NAME {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

/// A catalog that could not be loaded, with the reason it was skipped.
#[derive(Debug)]
pub struct SkippedCatalog {
    pub path: PathBuf,
    pub error: CatalogError,
}

/// Result of loading a batch of catalog files.
#[derive(Debug)]
pub struct LoadOutcome {
    pub catalogs: Vec<Catalog>,
    pub skipped: Vec<SkippedCatalog>,
}

/// Parses every path, isolating per-catalog failures into `skipped`.
pub fn load_catalogs(paths: &[PathBuf]) -> LoadOutcome {
    let mut catalogs = Vec::new();
    let mut skipped = Vec::new();

    for path in paths {
        match Catalog::parse(path) {
            Ok(catalog) => catalogs.push(catalog),
            Err(error) => skipped.push(SkippedCatalog {
                path: path.clone(),
                error,
            }),
        }
    }

    LoadOutcome { catalogs, skipped }
}
