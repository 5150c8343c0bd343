pub mod renamer;
pub mod scan;

use std::fmt;
use std::path::PathBuf;

/// Directory suffix that marks a folder as holding a sample dataset.
pub const DATASET_SUFFIX: &str = ".dataset";

/// Extension carried by candidate sample files.
pub const WAV_EXTENSION: &str = ".wav";

/// Result of processing one dataset directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// The first candidate file was renamed to match its folder.
    Renamed { from: PathBuf, to: PathBuf },
    /// The directory held no candidate file; nothing was touched.
    NoCandidate { dir: PathBuf },
}

impl fmt::Display for RenameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenameOutcome::Renamed { from, to } => {
                write!(f, "Renamed {} to {}", from.display(), to.display())
            }
            RenameOutcome::NoCandidate { dir } => {
                write!(f, "No .wav file found in {}", dir.display())
            }
        }
    }
}
