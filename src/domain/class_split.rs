// ============================================================
// Layer 3 — Class Labels and Split Outcomes
// ============================================================
// A class label is the name of one folder under the source
// tree. For every class the split produces a ClassSplit:
// the train files followed by the val files reproduce the
// class listing exactly, in order.

use std::{ffi::OsString, fmt};

/// The name of one immediate subdirectory of the source tree.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClassLabel(String);

impl ClassLabel {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The train/val partition of one class's file listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSplit {
    pub label: ClassLabel,
    pub train: Vec<OsString>,
    pub val:   Vec<OsString>,
}

impl ClassSplit {
    /// Number of files the class had before splitting.
    pub fn total(&self) -> usize {
        self.train.len() + self.val.len()
    }
}

/// Per-class counts for one class of a summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassCounts {
    pub label: ClassLabel,
    pub train: usize,
    pub val:   usize,
}

impl From<&ClassSplit> for ClassCounts {
    fn from(split: &ClassSplit) -> Self {
        Self {
            label: split.label.clone(),
            train: split.train.len(),
            val:   split.val.len(),
        }
    }
}

/// What a split run (or plan) did, class by class, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitSummary {
    pub classes: Vec<ClassCounts>,
}

impl SplitSummary {
    pub fn push(&mut self, split: &ClassSplit) {
        self.classes.push(split.into());
    }

    pub fn train_total(&self) -> usize {
        self.classes.iter().map(|c| c.train).sum()
    }

    pub fn val_total(&self) -> usize {
        self.classes.iter().map(|c| c.val).sum()
    }
}
