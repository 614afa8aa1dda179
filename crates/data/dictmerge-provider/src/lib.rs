//! # dictmerge provider
//!
//! One provider wraps one dictionary file on disk. Two formats exist:
//!
//! ```text
//! STRUCTURED (IDEA XML)                      PLAIN TEXT
//! <component name="ProjectDictionaryState">  cortana
//!   <dictionary name="alice">                filesize
//!     <words>                                ...
//!       <w>cortana</w>
//!       <w>filesize</w>
//!     </words>
//!   </dictionary>
//! </component>
//! ```
//!
//! Both are read fully when the provider is opened and rewritten in full by
//! [`DictionaryProvider::write`]. A read-only provider never touches its file.

pub mod plaintext;
pub mod provider;
pub mod structured;

pub use plaintext::PlainTextDictionary;
pub use provider::{DictionaryFormat, DictionaryProvider};
pub use structured::{StructuredDictionary, PROJECT_DICTIONARY_STATE};

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while opening or rewriting a dictionary file
#[derive(Error, Debug)]
pub enum Error {
    #[error("File does not exist: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed dictionary XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("Failed to render dictionary XML: {0}")]
    XmlWrite(#[from] quick_xml::Error),

    #[error("Rendered dictionary is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, Error>;
