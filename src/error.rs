use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while loading or resolving the width table.
///
/// A code point without a containing range is not an error: lookups fall
/// back to `Neutral` and `OtherNotAssigned` for it.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line {line}: malformed record: {reason}")]
    MalformedRecord { line: usize, reason: String },
    #[error("line {line}: unknown East Asian Width code {code:?}")]
    UnknownWidthCode { line: usize, code: String },
    #[error("unknown general category code {code:?} for U+{code_point:04X}")]
    UnknownCategoryCode { code_point: u32, code: String },
    #[error("invalid range table: {0}")]
    InvalidTable(String),
    #[error("failed to build audit thread pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn malformed<S: Into<String>>(line: usize, reason: S) -> Self {
        Error::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }
}
