// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The split workflow only talks to the filesystem through
// these two traits:
//   - DatasetSource → where class folders and files come from
//                     (DirectoryLoader in Layer 4)
//   - DatasetSink   → where directories and copies go
//                     (TreeWriter in Layer 6)
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use std::{ffi::OsStr, ffi::OsString, path::Path};

use crate::domain::class_split::ClassLabel;
use crate::domain::error::SplitResult;

// ─── DatasetSource ────────────────────────────────────────────────────────────
/// Anything that can enumerate a class-per-folder dataset.
pub trait DatasetSource {
    /// Class labels found directly under `root`.
    fn class_labels(&self, root: &Path) -> SplitResult<Vec<ClassLabel>>;

    /// File names inside `root/<label>`. Captured once per call;
    /// callers must not list again between splitting and copying.
    fn class_files(&self, root: &Path, label: &ClassLabel) -> SplitResult<Vec<OsString>>;
}

// ─── DatasetSink ──────────────────────────────────────────────────────────────
/// Anything that can receive the split output.
pub trait DatasetSink {
    /// Create `dir` (and parents) if absent. Existing directories
    /// are left as they are.
    fn ensure_dir(&self, dir: &Path) -> SplitResult<()>;

    /// Copy `src_dir/name` to `dst_dir/name`, byte for byte.
    fn copy_file(&self, src_dir: &Path, dst_dir: &Path, name: &OsStr) -> SplitResult<()>;
}
