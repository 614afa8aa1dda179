//! # dictmerge merge
//!
//! ```text
//! explicit files ─┐
//!                 ├─► providers ─► read ─► ∪ ─► sort ─► write back to each
//! lookup results ─┘
//! ```
//!
//! The union is computed fully in memory before any file is rewritten. A
//! write failure part way through leaves earlier files updated; there is no
//! rollback across files.

pub mod engine;
pub mod workflow;

pub use engine::{merge, write_all};
pub use workflow::{MergeOutcome, MergeRequest, MergeWorkflow};

use dictmerge_provider::DictionaryFormat;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{format} dictionary {} not found", path.display())]
    MissingFile {
        format: DictionaryFormat,
        path: PathBuf,
    },

    #[error("{format} dictionary {} has zero size", path.display())]
    EmptyFile {
        format: DictionaryFormat,
        path: PathBuf,
    },

    #[error(transparent)]
    Provider(#[from] dictmerge_provider::Error),

    #[error(transparent)]
    Lookup(#[from] dictmerge_lookup::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for problems with a file named on the command line
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::MissingFile { .. } | Error::EmptyFile { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
