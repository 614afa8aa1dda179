//! Plain-text dictionaries (Visual Assist, newer IDEA, most editors)
//!
//! One word per line. Only the line terminator is stripped on read, so a blank
//! line comes back as an empty word. Writes join with `\n` and leave no
//! trailing newline.

use crate::provider::SourceFile;
use crate::Result;
use dictmerge_core::Word;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug)]
pub struct PlainTextDictionary {
    file: SourceFile,
    words: Vec<Word>,
}

impl PlainTextDictionary {
    pub fn open(path: impl Into<PathBuf>, read_only: bool) -> Result<Self> {
        let file = SourceFile::open(path.into(), read_only)?;
        let text = std::fs::read_to_string(file.path())?;
        let words = parse_lines(&text);
        debug!("{} words in {}", words.len(), file.path().display());
        Ok(Self { file, words })
    }

    pub fn read(&self) -> &[Word] {
        &self.words
    }

    pub fn write(&mut self, words: &[Word]) -> Result<()> {
        if self.file.skip_write() {
            return Ok(());
        }
        std::fs::write(self.file.path(), words.join("\n"))?;
        self.words = words.to_vec();
        Ok(())
    }

    pub fn name(&self) -> &str {
        self.file.name()
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn is_read_only(&self) -> bool {
        self.file.read_only()
    }
}

/// Split on `\n` / `\r\n`. A final terminator does not start a new entry.
pub fn parse_lines(text: &str) -> Vec<Word> {
    text.lines().map(str::to_string).collect()
}
