//! The closed set of dictionary providers

use crate::{Error, PlainTextDictionary, Result, StructuredDictionary};
use dictmerge_core::Word;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::info;

/// On-disk dictionary format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictionaryFormat {
    /// IDEA XML: `component/dictionary/words/w`
    Structured,
    /// One word per line
    PlainText,
}

impl DictionaryFormat {
    /// Guess the format from the file extension: `.xml` is structured,
    /// everything else is plain text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("xml") => DictionaryFormat::Structured,
            _ => DictionaryFormat::PlainText,
        }
    }
}

impl fmt::Display for DictionaryFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DictionaryFormat::Structured => write!(f, "IDEA"),
            DictionaryFormat::PlainText => write!(f, "plaintext"),
        }
    }
}

/// Path, derived name and write guard shared by both variants
#[derive(Debug, Clone)]
pub(crate) struct SourceFile {
    path: PathBuf,
    name: String,
    read_only: bool,
}

impl SourceFile {
    /// Bind to an existing file. Fails if `path` is not a regular file.
    pub(crate) fn open(path: PathBuf, read_only: bool) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::FileNotFound { path });
        }

        info!("Parse dictionary {}", path.display());
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self {
            path,
            name,
            read_only,
        })
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn read_only(&self) -> bool {
        self.read_only
    }

    /// True when a write must be skipped; logs the skip
    pub(crate) fn skip_write(&self) -> bool {
        if self.read_only {
            info!("Read-only dictionary {}, skip writing", self.name);
        }
        self.read_only
    }
}

/// A dictionary file of either format
#[derive(Debug)]
pub enum DictionaryProvider {
    Structured(StructuredDictionary),
    PlainText(PlainTextDictionary),
}

impl DictionaryProvider {
    /// Open `path` as a dictionary of the given format and load its words
    pub fn open(
        format: DictionaryFormat,
        path: impl Into<PathBuf>,
        read_only: bool,
    ) -> Result<Self> {
        Ok(match format {
            DictionaryFormat::Structured => {
                DictionaryProvider::Structured(StructuredDictionary::open(path, read_only)?)
            }
            DictionaryFormat::PlainText => {
                DictionaryProvider::PlainText(PlainTextDictionary::open(path, read_only)?)
            }
        })
    }

    /// Words as loaded from disk, in file order, duplicates included
    pub fn read(&self) -> &[Word] {
        match self {
            DictionaryProvider::Structured(d) => d.read(),
            DictionaryProvider::PlainText(d) => d.read(),
        }
    }

    /// Replace the file content with `words`. No-op for read-only providers.
    pub fn write(&mut self, words: &[Word]) -> Result<()> {
        match self {
            DictionaryProvider::Structured(d) => d.write(words),
            DictionaryProvider::PlainText(d) => d.write(words),
        }
    }

    /// File stem of the backing file
    pub fn name(&self) -> &str {
        match self {
            DictionaryProvider::Structured(d) => d.name(),
            DictionaryProvider::PlainText(d) => d.name(),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            DictionaryProvider::Structured(d) => d.path(),
            DictionaryProvider::PlainText(d) => d.path(),
        }
    }

    pub fn is_read_only(&self) -> bool {
        match self {
            DictionaryProvider::Structured(d) => d.is_read_only(),
            DictionaryProvider::PlainText(d) => d.is_read_only(),
        }
    }

    pub fn format(&self) -> DictionaryFormat {
        match self {
            DictionaryProvider::Structured(_) => DictionaryFormat::Structured,
            DictionaryProvider::PlainText(_) => DictionaryFormat::PlainText,
        }
    }
}
