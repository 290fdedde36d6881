// crates/file_marker/src/lib.rs

//! Marker shared by the extractor and the writer tests.

/// Prefix that opens a file block when it starts a line.
pub const FILE_MARKER: &str = "//";

/// Builds the marker line announcing `path`, terminator included.
pub fn marker_line(path: &str) -> String {
    format!("{} {}\n", FILE_MARKER, path)
}
