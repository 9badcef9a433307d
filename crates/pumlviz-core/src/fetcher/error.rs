//! Fetch error type.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while downloading a rendered diagram. The destination file is never
/// left holding partial content when one of these is returned.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Server answered with something other than 200.
    #[error("failed to fetch image: HTTP {code} from {url}")]
    Status { url: String, code: u32 },
    /// Curl could not complete the request (DNS, connect, timeout, bad URL, ...).
    #[error("transport error: {0}")]
    Transport(#[from] curl::Error),
    /// Writing, renaming or cleaning up the local file failed.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The blocking download task panicked or was cancelled.
    #[error("download task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl FetchError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        FetchError::Io {
            path: path.into(),
            source,
        }
    }

    /// HTTP status for `Status` errors.
    pub fn status_code(&self) -> Option<u32> {
        match self {
            FetchError::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}
