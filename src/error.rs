use std::io;
use std::path::PathBuf;

/// Failure of `Dictionary::load`.
///
/// Apart from `Open` and `AlreadyLoaded`, these are raised after the source
/// was opened: entries inserted before the failing token stay in the table
/// and `size()` counts them.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("could not open dictionary file {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read dictionary source")]
    Read(#[source] io::Error),
    #[error("word {index} is {len} bytes long, limit is {max}")]
    WordTooLong { index: usize, len: usize, max: usize },
    #[error("word {index} is not valid UTF-8")]
    InvalidUtf8 { index: usize },
    #[error("out of memory storing word {index}")]
    Allocation { index: usize },
    #[error("dictionary is already loaded")]
    AlreadyLoaded,
}

/// Failure of `Dictionary::unload`.
#[derive(Debug, thiserror::Error)]
pub enum UnloadError {
    #[error("released {released} entries but {expected} were counted")]
    CountMismatch { expected: usize, released: usize },
}
