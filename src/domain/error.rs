// ============================================================
// Layer 3 — Split Errors
// ============================================================
// Every failure a split run can surface. Nothing here is
// retried or recovered: the run stops at the first error and
// whatever was already copied stays on disk.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Errors that can occur while planning or running a split.
#[derive(Debug, Error)]
pub enum SplitError {
    /// Invalid ratio or malformed subpath, caught before any
    /// directory is created.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The source tree or a class directory is missing.
    #[error("not found: '{}'", path.display())]
    NotFound { path: PathBuf },

    /// Permission denied reading the source or writing the destination.
    #[error("access denied: '{}'", path.display())]
    Access { path: PathBuf },

    /// Any other I/O failure (disk full, device error, ...).
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SplitError {
    /// Creates a configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Classify an `io::Error` raised while touching `path`.
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::Access { path },
            _ => Self::Io { path, source },
        }
    }
}

/// Result alias used by the domain, data and infra layers.
pub type SplitResult<T> = Result<T, SplitError>;

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_classified() {
        let err = SplitError::from_io(
            "data/images",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, SplitError::NotFound { ref path } if path == &PathBuf::from("data/images")));
    }

    #[test]
    fn test_permission_denied_is_access() {
        let err = SplitError::from_io(
            "data/train",
            io::Error::new(io::ErrorKind::PermissionDenied, "nope"),
        );
        assert!(matches!(err, SplitError::Access { .. }));
    }

    #[test]
    fn test_other_kinds_stay_io() {
        let err = SplitError::from_io("data/val/a.png", io::Error::other("disk full"));
        assert!(matches!(err, SplitError::Io { .. }));
        assert!(err.to_string().contains("data/val/a.png"));
    }
}
