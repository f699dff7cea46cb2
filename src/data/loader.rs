// ============================================================
// Layer 4 — Directory Loader
// ============================================================
// Enumerates a class-per-folder dataset:
//
//   images/
//     ├── NORMAL/      ← class label "NORMAL"
//     │     ├── a.png
//     │     └── b.png
//     └── PNEUMONIA/   ← class label "PNEUMONIA"
//           └── c.png
//
// Only the first level below the root are classes and only
// regular files inside a class are samples. Anything else is
// logged and skipped (nested hierarchies are not supported).
//
// With ListingOrder::Sorted both listings are sorted by name so
// the split is identical on every platform. ListingOrder::Filesystem
// keeps the raw read_dir order.
//
// Reference: Rust Book §9 (Error Handling)
//            std::fs::read_dir documentation

use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use crate::domain::class_split::ClassLabel;
use crate::domain::error::{SplitError, SplitResult};
use crate::domain::split_config::ListingOrder;
use crate::domain::traits::DatasetSource;

/// Reads class folders and file names from the local filesystem.
/// Implements the DatasetSource trait from Layer 3.
pub struct DirectoryLoader {
    order: ListingOrder,
}

impl DirectoryLoader {
    /// Create a loader that lists entries in the given order
    pub fn new(order: ListingOrder) -> Self {
        Self { order }
    }
}

impl DatasetSource for DirectoryLoader {
    fn class_labels(&self, root: &Path) -> SplitResult<Vec<ClassLabel>> {
        let mut labels = Vec::new();

        for (path, name) in read_entries(root)? {
            if !is_dir(&path)? {
                tracing::warn!("Skipping '{}': not a class directory", path.display());
                continue;
            }

            match name.into_string() {
                Ok(name) => labels.push(ClassLabel::new(name)),
                Err(raw) => {
                    tracing::warn!("Skipping class folder with non UTF-8 name {:?}", raw);
                }
            }
        }

        if self.order == ListingOrder::Sorted {
            labels.sort();
        }

        tracing::debug!("Found {} classes under '{}'", labels.len(), root.display());
        Ok(labels)
    }

    fn class_files(&self, root: &Path, label: &ClassLabel) -> SplitResult<Vec<OsString>> {
        let class_dir = root.join(label.as_str());
        let mut files = Vec::new();

        for (path, name) in read_entries(&class_dir)? {
            if is_file(&path)? {
                files.push(name);
            } else {
                tracing::warn!("Skipping '{}': not a regular file", path.display());
            }
        }

        if self.order == ListingOrder::Sorted {
            files.sort();
        }

        Ok(files)
    }
}

/// List `(path, file_name)` for every entry of `dir`, in read_dir order.
fn read_entries(dir: &Path) -> SplitResult<Vec<(PathBuf, OsString)>> {
    let iter = fs::read_dir(dir).map_err(|e| SplitError::from_io(dir, e))?;

    let mut entries = Vec::new();
    for entry in iter {
        let entry = entry.map_err(|e| SplitError::from_io(dir, e))?;
        entries.push((entry.path(), entry.file_name()));
    }
    Ok(entries)
}

// fs::metadata follows symlinks, so a linked class folder or image counts
fn is_dir(path: &Path) -> SplitResult<bool> {
    fs::metadata(path)
        .map(|m| m.is_dir())
        .map_err(|e| SplitError::from_io(path, e))
}

fn is_file(path: &Path) -> SplitResult<bool> {
    fs::metadata(path)
        .map(|m| m.is_file())
        .map_err(|e| SplitError::from_io(path, e))
}
