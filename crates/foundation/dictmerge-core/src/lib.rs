//! # dictmerge core
//!
//! Foundation shared by every dictmerge crate:
//!
//! - **Words**: a [`Word`] is an exact token, compared byte for byte. No case
//!   folding, no trimming.
//! - **Paths**: [`PathResolver`] computes where IDEs and editors keep their
//!   user dictionaries on the current platform.

pub mod paths;

pub use paths::{Environment, PathResolver, Platform};

use std::collections::HashSet;

/// A single accepted spelling.
pub type Word = String;

/// Unordered set of words, used for intermediate unions.
pub type WordSet = HashSet<Word>;
