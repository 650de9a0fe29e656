//! A minimal concrete `FileSet`.
//!
//! §1 scopes the source model (file content map + line index + string
//! interner) as an external collaborator, specified only via its contract
//! toward the core. This module provides one reference implementation of
//! that contract — an in-memory `Vec<SourceFile>` — sufficient to drive
//! the diagnostic renderers and fix-thunk resolution end-to-end. A real
//! driver is free to supply its own `SourceFiles` implementation (backed
//! by mmap'd files, an LSP document store, etc.) instead.

use crate::id::FileID;

/// Pre-computed line-start offset table for O(log L) line/column lookup.
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Byte offset of each line start. `offsets[0] == 0`.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    /// Scan `source` once to record every line start.
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        for (i, byte) in source.as_bytes().iter().enumerate() {
            if *byte == b'\n' {
                offsets.push((i + 1) as u32);
            }
        }
        LineOffsetTable { offsets }
    }

    /// 1-based line number containing `offset`.
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        (line_idx as u32) + 1
    }

    /// 1-based `(line, column)` for `offset`; column counts characters,
    /// not bytes, from the start of the line.
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let line_start = self.offsets[(line - 1) as usize] as usize;
        let offset = (offset as usize).min(source.len());
        let col = source[line_start..offset].chars().count() as u32 + 1;
        (line, col)
    }

    /// Byte offset of the start of 1-based `line`, if it exists.
    pub fn line_start_offset(&self, line: u32) -> Option<u32> {
        if line == 0 {
            return None;
        }
        self.offsets.get((line - 1) as usize).copied()
    }

    /// Number of lines in the source this table was built from.
    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }
}

/// One source file tracked by a `FileSet`: its path, content, and a
/// pre-computed line table.
pub struct SourceFile {
    path: String,
    content: String,
    line_table: LineOffsetTable,
}

impl SourceFile {
    fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        let line_table = LineOffsetTable::build(&content);
        SourceFile {
            path: path.into(),
            content,
            line_table,
        }
    }
}

/// The read-mostly contract every renderer and fix thunk needs: map a
/// `FileID` to its path, content, and byte-offset→line/column lookup.
pub trait SourceFiles {
    fn path(&self, file: FileID) -> &str;
    fn content(&self, file: FileID) -> &str;
    fn line_col(&self, file: FileID, offset: u32) -> (u32, u32);
    fn line_count(&self, file: FileID) -> usize;
    fn line_start_offset(&self, file: FileID, line: u32) -> Option<u32>;
}

/// In-memory reference implementation of [`SourceFiles`].
#[derive(Default)]
pub struct FileSet {
    files: Vec<SourceFile>,
}

impl FileSet {
    pub fn new() -> Self {
        FileSet { files: Vec::new() }
    }

    /// Add a file, returning its newly assigned 1-based `FileID`.
    pub fn add_file(&mut self, path: impl Into<String>, content: impl Into<String>) -> FileID {
        self.files.push(SourceFile::new(path, content));
        FileID::from_raw(self.files.len() as u32)
    }

    #[track_caller]
    fn get(&self, file: FileID) -> &SourceFile {
        &self.files[file.index()]
    }

    /// Byte range `[start, end)` of `span` sliced from the owning file's
    /// content, clamped to the file's length.
    pub fn text(&self, file: FileID, start: u32, end: u32) -> &str {
        let source = self.get(file).content.as_str();
        let start = (start as usize).min(source.len());
        let end = (end as usize).min(source.len()).max(start);
        &source[start..end]
    }
}

impl SourceFiles for FileSet {
    fn path(&self, file: FileID) -> &str {
        &self.get(file).path
    }

    fn content(&self, file: FileID) -> &str {
        &self.get(file).content
    }

    fn line_col(&self, file: FileID, offset: u32) -> (u32, u32) {
        let f = self.get(file);
        f.line_table.offset_to_line_col(&f.content, offset)
    }

    fn line_count(&self, file: FileID) -> usize {
        self.get(file).line_table.line_count()
    }

    fn line_start_offset(&self, file: FileID, line: u32) -> Option<u32> {
        self.get(file).line_table.line_start_offset(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_offset_table_basic() {
        let source = "line1\nline2\nline3";
        let table = LineOffsetTable::build(source);
        assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
        assert_eq!(table.offset_to_line_col(source, 6), (2, 1));
        assert_eq!(table.offset_to_line_col(source, 12), (3, 1));
        assert_eq!(table.line_count(), 3);
    }

    #[test]
    fn file_set_roundtrip() {
        let mut files = FileSet::new();
        let id = files.add_file("a.sg", "fn main() {}\n");
        assert_eq!(files.path(id), "a.sg");
        assert_eq!(files.content(id), "fn main() {}\n");
        assert_eq!(files.line_col(id, 0), (1, 1));
    }

    #[test]
    fn multiple_files_are_independent() {
        let mut files = FileSet::new();
        let a = files.add_file("a.sg", "one\n");
        let b = files.add_file("b.sg", "two\nthree\n");
        assert_ne!(a, b);
        assert_eq!(files.line_count(b), 2);
        assert_eq!(files.line_count(a), 1);
    }
}
