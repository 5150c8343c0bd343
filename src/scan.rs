//! Directory scanning helpers.
//!
//! This module provides functions for locating dataset folders and the
//! sample files inside them. Both operate on an explicit root path so the
//! scan can be pointed at any directory, not just the process working
//! directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::{DATASET_SUFFIX, WAV_EXTENSION};

/// Find the dataset directories directly inside `root`.
///
/// Scans the immediate children of `root` and keeps entries that are
/// directories whose name ends with the literal `.dataset` suffix. The
/// comparison is case-sensitive and the result preserves directory-listing
/// order, which is filesystem-defined and not guaranteed sorted.
///
/// # Arguments
///
/// * `root` - Directory whose children should be scanned
///
/// # Returns
///
/// Returns the full paths of the matching directories. Nested directories
/// deeper than one level are never discovered.
///
/// # Errors
///
/// This function will return an error if `root` cannot be listed or an
/// entry's metadata cannot be read.
///
/// # Examples
///
/// ```rust,no_run
/// use wavname_rs::scan::dataset_dirs;
/// use std::path::Path;
///
/// for dir in dataset_dirs(Path::new("samples"))? {
///     println!("found {}", dir.display());
/// }
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn dataset_dirs(root: &Path) -> io::Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();

    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name();
        match name.to_str() {
            Some(name) if name.ends_with(DATASET_SUFFIX) => dirs.push(entry.path()),
            Some(_) => {}
            // Non-UTF-8 names cannot end with the ASCII suffix.
            None => log::debug!("skipping non-UTF-8 entry {:?}", name),
        }
    }

    Ok(dirs)
}

/// Find the first `.wav` file directly inside `dir`.
///
/// Entries are visited in listing order and the scan stops at the first
/// regular file whose name ends with `.wav`. Subdirectories are never
/// descended into, and a subdirectory named like a sample does not count
/// as a candidate.
///
/// # Errors
///
/// This function will return an error if `dir` cannot be listed or an
/// entry's metadata cannot be read.
pub fn first_wav(dir: &Path) -> io::Result<Option<PathBuf>> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if name.ends_with(WAV_EXTENSION) {
                return Ok(Some(entry.path()));
            }
        }
    }

    Ok(None)
}
