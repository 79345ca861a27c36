use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Everything that can abort a pipeline stage.
///
/// Per-word rejections are not errors; they are reported through
/// [`crate::models::Admission`] and the rejection logs.
#[derive(Debug, Error)]
pub enum WordbankError {
    #[error("missing {what} at {}; provision it and rerun", .path.display())]
    MissingResource { what: &'static str, path: PathBuf },

    #[error("I/O failure on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("bad wordbank JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("tagging model {}:{line}: {message}", .path.display())]
    TaggerModel {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("{banks} wordbank file(s) failed verification")]
    VerificationFailed { banks: usize },
}

pub type Result<T> = std::result::Result<T, WordbankError>;

impl WordbankError {
    pub fn io(path: &Path, source: io::Error) -> Self {
        WordbankError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn json(path: &Path, source: serde_json::Error) -> Self {
        WordbankError::Json {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Map a failed open into a setup failure when the file simply isn't there.
    pub fn on_open(what: &'static str, path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            WordbankError::MissingResource {
                what,
                path: path.to_path_buf(),
            }
        } else {
            WordbankError::io(path, source)
        }
    }
}
