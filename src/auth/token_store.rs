//! Durable on-disk cache for the bearer token.
//!
//! The store keeps exactly one token string in a plain-text file named
//! `token.txt` inside the configured directory. Absence of the file is a
//! normal state, not an error; the file is created on first successful
//! authentication, overwritten on refresh, and deleted on invalidation.

use std::io;
use std::path::{Path, PathBuf};

/// File name used for the persisted token inside the configured directory.
pub const TOKEN_FILE_NAME: &str = "token.txt";

/// Persists and retrieves one bearer token from a configured directory.
///
/// When constructed without a path the store is inert: reads report
/// absence and writes/deletes are no-ops, leaving the token in memory
/// only for the lifetime of the process.
#[derive(Clone, Debug)]
pub struct TokenStore {
    path: Option<PathBuf>,
}

impl TokenStore {
    /// Creates a store backed by `token.txt` under `dir`, or an inert
    /// in-memory-only store when `dir` is `None`.
    #[must_use]
    pub fn new(dir: Option<&Path>) -> Self {
        Self {
            path: dir.map(|dir| dir.join(TOKEN_FILE_NAME)),
        }
    }

    /// Returns the full path of the token file, if persistence is configured.
    #[must_use]
    pub fn file_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Reads the cached token.
    ///
    /// Returns `None` when no path is configured, the file does not exist,
    /// or the file is empty. A missing file is a normal state and never an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns an I/O error only for failures other than absence (e.g.
    /// permission denied).
    pub fn read(&self) -> io::Result<Option<String>> {
        let Some(path) = &self.path else {
            return Ok(None);
        };
        match std::fs::read_to_string(path) {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token.to_string()))
                }
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Persists `token`, creating or overwriting the token file.
    ///
    /// A store without a configured path accepts the write as a no-op.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the configured directory does not exist
    /// or is not writable.
    pub fn write(&self, token: &str) -> io::Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        std::fs::write(path, token)
    }

    /// Removes the persisted token file.
    ///
    /// Deleting an absent file is a no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns an I/O error for failures other than absence.
    pub fn delete(&self) -> io::Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        match std::fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err),
        }
    }
}
