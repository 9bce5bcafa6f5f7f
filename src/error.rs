// src/error.rs
use std::fmt::Display;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Crate-wide error kinds.
///
/// `NotFound` and `Duplicate` carry the normalized keys they were checked
/// against, so callers can tell exactly which (category, letter) pair missed.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no stored answers for {letter} ({category})")]
    NotFound { category: String, letter: char },

    #[error("answer \"{answer}\" already stored for {letter} ({category})")]
    Duplicate {
        category: String,
        letter: char,
        answer: String,
    },

    #[error("store file {path}: {reason}")]
    Storage { path: PathBuf, reason: String },

    #[error("no scrape pattern for category \"{0}\"")]
    UnknownCategory(String),

    #[error("remote fetch failed: {0}")]
    RemoteFetch(String),
}

impl Error {
    pub(crate) fn storage(path: &Path, reason: impl Display) -> Self {
        Error::Storage {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}
