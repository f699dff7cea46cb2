// ============================================================
// Layer 3 — Split Configuration
// ============================================================
// The four inputs of a split (ratio + three subpaths under a
// base directory) plus the listing order used before the
// boundary is computed.
//
// The config is an immutable value: it is built once (from CLI
// flags or a JSON file), validated, and passed by reference to
// the use case. Paths are resolved fresh on every call.
//
// Layout on disk:
//   <base_path>/<images_subpath>/<class>/<file>   ← source
//   <base_path>/<train_subpath>/<class>/<file>    ← train copy
//   <base_path>/<val_subpath>/<class>/<file>      ← val copy

use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

use crate::domain::error::{SplitError, SplitResult};

/// The order directory entries are taken in before splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingOrder {
    /// Lexicographic order of the entry names. Same split on every machine.
    #[default]
    Sorted,
    /// Whatever `read_dir` yields on this platform.
    Filesystem,
}

/// All inputs of a split run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitConfig {
    pub train_ratio:    f64,
    pub base_path:      PathBuf,
    pub images_subpath: PathBuf,
    pub train_subpath:  PathBuf,
    pub val_subpath:    PathBuf,
    #[serde(default)]
    pub listing_order:  ListingOrder,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            train_ratio:    0.8,
            base_path:      PathBuf::from("data"),
            images_subpath: PathBuf::from("images"),
            train_subpath:  PathBuf::from("train"),
            val_subpath:    PathBuf::from("val"),
            listing_order:  ListingOrder::Sorted,
        }
    }
}

/// The three directories a split reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub images: PathBuf,
    pub train:  PathBuf,
    pub val:    PathBuf,
}

impl ResolvedPaths {
    /// The three top-level directories, source first.
    pub fn all(&self) -> [&Path; 3] {
        [&self.images, &self.train, &self.val]
    }
}

impl SplitConfig {
    /// Check the ratio and the subpaths. Touches no filesystem.
    ///
    /// Accepts `0.0 ..= 1.0`: a ratio of 0 sends every file to
    /// validation, 1 sends every file to training.
    pub fn validate(&self) -> SplitResult<()> {
        if !(0.0..=1.0).contains(&self.train_ratio) {
            return Err(SplitError::configuration(format!(
                "train_ratio must be within [0, 1], got {}",
                self.train_ratio
            )));
        }

        let subpaths = [
            ("images_subpath", &self.images_subpath),
            ("train_subpath", &self.train_subpath),
            ("val_subpath", &self.val_subpath),
        ];

        for (name, sub) in subpaths {
            check_subpath(name, sub)?;
        }

        // "./train" and "train" are the same folder, and "images/train" lives inside "images"
        let normalized = subpaths.map(|(name, sub)| (name, normalize(sub)));
        for (i, (name_a, a)) in normalized.iter().enumerate() {
            for (name_b, b) in &normalized[i + 1..] {
                if a.starts_with(b) || b.starts_with(a) {
                    return Err(SplitError::configuration(format!(
                        "{name_a} '{}' and {name_b} '{}' overlap",
                        a.display(),
                        b.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Join `base_path` with each subpath.
    pub fn resolve(&self) -> ResolvedPaths {
        ResolvedPaths {
            images: self.base_path.join(&self.images_subpath),
            train:  self.base_path.join(&self.train_subpath),
            val:    self.base_path.join(&self.val_subpath),
        }
    }
}

/// Drop `.` components so equal folders compare equal.
fn normalize(sub: &Path) -> PathBuf {
    sub.components()
        .filter(|c| *c != Component::CurDir)
        .collect()
}

/// A subpath must be non-empty, relative, and stay below `base_path`.
fn check_subpath(name: &str, sub: &Path) -> SplitResult<()> {
    if sub.as_os_str().is_empty() {
        return Err(SplitError::configuration(format!("{name} is empty")));
    }

    for component in sub.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir => {
                return Err(SplitError::configuration(format!(
                    "{name} '{}' must not contain '..'",
                    sub.display()
                )));
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(SplitError::configuration(format!(
                    "{name} '{}' must be relative to the base path",
                    sub.display()
                )));
            }
        }
    }

    // "." or "./." would make the subpath the base itself
    if sub.components().all(|c| c == Component::CurDir) {
        return Err(SplitError::configuration(format!(
            "{name} '{}' resolves to the base path",
            sub.display()
        )));
    }

    Ok(())
}
