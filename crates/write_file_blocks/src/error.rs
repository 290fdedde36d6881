// crates/write_file_blocks/src/error.rs

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure to materialize a single block on disk.
///
/// `path` is always the resolved target file, so callers can report which
/// block failed without keeping the block around.
#[derive(Debug, Error)]
pub enum WriteError {
    /// A missing parent directory could not be created.
    #[error("could not create directory {}: {source}", .dir.display())]
    CreateDir {
        path: PathBuf,
        dir: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The file itself could not be created or overwritten.
    #[error("could not write file: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WriteError {
    /// The resolved file path of the block that failed.
    pub fn path(&self) -> &Path {
        match self {
            WriteError::CreateDir { path, .. } | WriteError::Write { path, .. } => path,
        }
    }
}
