// crates/write_file_blocks/src/lib.rs

use std::fs;
use std::path::PathBuf;

use extract_file_blocks::FileBlock;

mod error;
mod path_resolver;

pub use error::WriteError;
pub use path_resolver::PathResolver;

/// Destination for extracted blocks.
pub trait BlockSink {
    /// Materializes `block` and returns the path it was written to.
    fn write_block(&mut self, block: &FileBlock<'_>) -> Result<PathBuf, WriteError>;
}

/// Strips any trailing run of `\r` and `\n` and appends exactly one `\n`.
pub fn normalize_content(content: &str) -> String {
    let mut normalized = content.trim_end_matches(['\r', '\n']).to_string();
    normalized.push('\n');
    normalized
}

/// Writes blocks to the local filesystem, creating parent directories and
/// overwriting existing files.
#[derive(Debug, Clone)]
pub struct FsBlockWriter {
    resolver: PathResolver,
}

impl FsBlockWriter {
    pub fn new(resolver: PathResolver) -> Self {
        Self { resolver }
    }
}

impl BlockSink for FsBlockWriter {
    fn write_block(&mut self, block: &FileBlock<'_>) -> Result<PathBuf, WriteError> {
        let path = self.resolver.resolve(block.path);

        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|source| WriteError::CreateDir {
                path: path.clone(),
                dir: dir.to_path_buf(),
                source,
            })?;
        }

        let content = normalize_content(block.content);
        fs::write(&path, content.as_bytes()).map_err(|source| WriteError::Write {
            path: path.clone(),
            source,
        })?;

        log::debug!("Wrote {} byte(s) to {}", content.len(), path.display());
        Ok(path)
    }
}
