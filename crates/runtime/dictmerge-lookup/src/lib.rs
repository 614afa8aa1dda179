//! # dictmerge lookup
//!
//! Finds dictionary files by exact name:
//!
//! - [`files_lookup`] walks one directory tree.
//! - [`DictionaryLookup`] combines walks over the project root, the JetBrains
//!   vendor directory and the application data root.

pub mod lookup;
pub mod scanner;

pub use lookup::{
    DictionaryLookup, IDEA_CACHE_FILES, PROJECT_PLAINTEXT_FILES, USER_WORDS_FILE,
};
pub use scanner::files_lookup;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Directory {} does not exist", path.display())]
    NotADirectory { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
