// ============================================================
// Layer 6 — Tree Writer
// ============================================================
// Writes the split output to the local filesystem:
//   - ensure_dir → create_dir_all, a no-op for existing dirs
//   - copy_file  → byte-for-byte copy under the same file name
//
// Existing destination files with the same name are
// overwritten. Nothing is ever deleted.

use std::{ffi::OsStr, fs, io, path::Path};

use crate::domain::error::{SplitError, SplitResult};
use crate::domain::traits::DatasetSink;

/// Creates directories and copies files on the local filesystem.
/// Implements the DatasetSink trait from Layer 3.
#[derive(Debug, Default)]
pub struct TreeWriter;

impl TreeWriter {
    pub fn new() -> Self {
        Self
    }
}

impl DatasetSink for TreeWriter {
    fn ensure_dir(&self, dir: &Path) -> SplitResult<()> {
        // create_dir_all succeeds silently when the directory is already there
        fs::create_dir_all(dir).map_err(|e| SplitError::from_io(dir, e))?;
        tracing::debug!("Ensured directory '{}'", dir.display());
        Ok(())
    }

    fn copy_file(&self, src_dir: &Path, dst_dir: &Path, name: &OsStr) -> SplitResult<()> {
        let src = src_dir.join(name);
        let dst = dst_dir.join(name);

        // Open both ends first so a failure names the path that caused it
        let mut reader = fs::File::open(&src).map_err(|e| SplitError::from_io(&src, e))?;
        let mut writer = fs::File::create(&dst).map_err(|e| SplitError::from_io(&dst, e))?;

        io::copy(&mut reader, &mut writer).map_err(|e| SplitError::from_io(&dst, e))?;

        Ok(())
    }
}
