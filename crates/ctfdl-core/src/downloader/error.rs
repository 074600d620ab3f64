//! Asset download error type.

use std::io;
use thiserror::Error;

/// Why one asset did not land on disk. Scoped to that file only.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// Curl reported an error (timeout, connection reset, etc.).
    #[error("transfer failed: {0}")]
    Transport(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("server returned HTTP {0}")]
    Http(u32),
    /// Fewer bytes arrived than `Content-Length` announced.
    #[error("partial transfer: expected {expected} bytes, got {received}")]
    PartialTransfer { expected: u64, received: u64 },
    /// Destination could not be created or written (disk full, permission denied).
    #[error("storage: {0}")]
    Storage(#[from] io::Error),
}
