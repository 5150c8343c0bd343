//! The rename pass over dataset directories.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::{scan, RenameOutcome, DATASET_SUFFIX, WAV_EXTENSION};

/// Errors raised while scanning or renaming.
#[derive(thiserror::Error, Debug)]
pub enum RenameError {
    #[error("failed to list {}", .path.display())]
    ListDir { path: PathBuf, source: io::Error },
    #[error("failed to rename {} to {}", .from.display(), .to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },
    #[error("{} is not a .dataset directory", .path.display())]
    NotDataset { path: PathBuf },
}

/// Process a single dataset directory.
///
/// Renames the first `.wav` file inside `dir` so its base name matches the
/// directory name with the `.dataset` suffix stripped, and reports what
/// happened. A directory without any candidate file is left untouched and
/// reported as [`RenameOutcome::NoCandidate`].
///
/// A candidate that already carries the target name is tolerated: the
/// rename syscall is skipped and the outcome still reports `Renamed`, so
/// repeat runs over the same tree are no-ops.
pub fn rename_dataset(dir: &Path) -> Result<RenameOutcome, RenameError> {
    let base = dir
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.strip_suffix(DATASET_SUFFIX))
        .ok_or_else(|| RenameError::NotDataset {
            path: dir.to_path_buf(),
        })?;

    let candidate = scan::first_wav(dir).map_err(|source| RenameError::ListDir {
        path: dir.to_path_buf(),
        source,
    })?;
    let from = match candidate {
        Some(path) => path,
        None => {
            return Ok(RenameOutcome::NoCandidate {
                dir: dir.to_path_buf(),
            })
        }
    };

    let to = dir.join(format!("{base}{WAV_EXTENSION}"));

    if from == to {
        log::debug!("{} already matches its folder, leaving it", from.display());
        return Ok(RenameOutcome::Renamed { from, to });
    }

    fs::rename(&from, &to).map_err(|source| RenameError::Rename {
        from: from.clone(),
        to: to.clone(),
        source,
    })?;
    log::debug!("renamed {} to {}", from.display(), to.display());

    Ok(RenameOutcome::Renamed { from, to })
}

/// Run the rename pass over every dataset directory inside `root`.
///
/// Convenience wrapper over [`scan::dataset_dirs`] and [`rename_dataset`]
/// that collects one outcome per dataset directory, in listing order. The
/// pass fails fast: the first listing or rename error aborts it, leaving
/// earlier renames in place and later directories untouched.
pub fn rename_all(root: &Path) -> Result<Vec<RenameOutcome>, RenameError> {
    let dirs = scan::dataset_dirs(root).map_err(|source| RenameError::ListDir {
        path: root.to_path_buf(),
        source,
    })?;

    dirs.iter().map(|dir| rename_dataset(dir)).collect()
}
