// crates/extract_file_blocks/src/lib.rs

use std::iter::FusedIterator;

use file_marker::FILE_MARKER;
use thiserror::Error;

/// A labeled block cut out of the input text.
///
/// Both fields borrow from the input: `path` is the trimmed text that followed
/// the marker prefix and `content` is everything between the marker line and
/// the next marker line (or the end of input), untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileBlock<'a> {
    pub path: &'a str,
    pub content: &'a str,
}

/// Errors raised before any scanning takes place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// The input was empty or contained only whitespace.
    #[error("input is empty or contains only whitespace")]
    EmptyInput,
}

/// Splits `input` into file blocks.
///
/// A marker line starts with `//`, is followed by optional whitespace and a
/// non-empty path, and ends with `\n` or `\r\n`. Every marker line opens a new
/// block; the block's content runs up to the next marker line or the end of
/// the input. Text before the first marker line is skipped.
///
/// The returned iterator scans lazily. Input without any marker line yields no
/// blocks.
///
/// # Errors
///
/// Returns [`ExtractError::EmptyInput`] if `input` is empty or only whitespace.
pub fn extract_file_blocks(input: &str) -> Result<FileBlocks<'_>, ExtractError> {
    if input.trim().is_empty() {
        return Err(ExtractError::EmptyInput);
    }
    Ok(FileBlocks::new(input))
}

/// Returns the path announced by `line` if it is a marker line.
///
/// `line` must include its terminator: a marker-shaped line that is not
/// terminated (the last line of an input without a trailing newline) is
/// content, not a marker.
pub fn parse_marker_line(line: &str) -> Option<&str> {
    let body = line.strip_suffix('\n')?;
    let body = body.strip_suffix('\r').unwrap_or(body);
    let path = body.strip_prefix(FILE_MARKER)?.trim();
    if path.is_empty() {
        None
    } else {
        Some(path)
    }
}

/// Lazy iterator over the blocks of an input, in order of appearance.
#[derive(Debug, Clone)]
pub struct FileBlocks<'a> {
    input: &'a str,
    next_marker: Option<Marker<'a>>,
}

#[derive(Debug, Clone, Copy)]
struct Marker<'a> {
    /// Byte offset of the marker line itself.
    start: usize,
    /// Byte offset just past the marker line's terminator.
    body_start: usize,
    path: &'a str,
}

impl<'a> FileBlocks<'a> {
    fn new(input: &'a str) -> Self {
        let next_marker = find_marker(input, 0);
        match next_marker {
            Some(marker) if marker.start > 0 => {
                log::debug!(
                    "Skipping {} byte(s) of text before the first marker line",
                    marker.start
                );
            }
            None => log::debug!("No marker lines found in input"),
            _ => {}
        }
        Self { input, next_marker }
    }
}

impl<'a> Iterator for FileBlocks<'a> {
    type Item = FileBlock<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let marker = self.next_marker.take()?;
        self.next_marker = find_marker(self.input, marker.body_start);
        let end = self
            .next_marker
            .map_or(self.input.len(), |next| next.start);

        Some(FileBlock {
            path: marker.path,
            content: &self.input[marker.body_start..end],
        })
    }
}

impl FusedIterator for FileBlocks<'_> {}

/// Finds the first marker line at or after `from`, which must be a line start.
fn find_marker(input: &str, from: usize) -> Option<Marker<'_>> {
    let mut offset = from;
    for line in input[from..].split_inclusive('\n') {
        if let Some(path) = parse_marker_line(line) {
            return Some(Marker {
                start: offset,
                body_start: offset + line.len(),
                path,
            });
        }
        offset += line.len();
    }
    None
}
