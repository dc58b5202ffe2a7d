//! The seam between the publish sequence and the wire protocol.
//!
//! `publish` only sees this trait, so the FTPS client can be swapped for an
//! in-memory fake in tests. Failures of the best-effort operations are
//! classified here instead of being blanket-suppressed: only the two benign
//! conditions (`AlreadyExists`, `NotFound`) are absorbed by the caller.

use std::io::Read;

use thiserror::Error;

/// A classified failure from the remote side.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The directory being created is already there.
    #[error("remote path already exists: {0}")]
    AlreadyExists(String),

    /// The file being deleted is not there.
    #[error("remote path not found: {0}")]
    NotFound(String),

    /// Local I/O failure while streaming a file.
    #[error("local I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Anything else the server or the transport reported.
    #[error("session error: {0}")]
    Session(String),
}

/// One open session against the remote filesystem.
pub trait RemoteSite {
    /// Create a directory. Parents are not created implicitly.
    fn make_dir(&mut self, path: &str) -> Result<(), RemoteError>;

    /// Delete a file.
    fn remove_file(&mut self, path: &str) -> Result<(), RemoteError>;

    /// Stream the reader's bytes to `remote_path` in binary mode,
    /// overwriting any existing file. Returns the byte count.
    fn store(&mut self, remote_path: &str, reader: &mut dyn Read) -> Result<u64, RemoteError>;

    /// Close the session cleanly.
    fn quit(&mut self) -> Result<(), RemoteError>;
}
