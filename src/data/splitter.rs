// ============================================================
// Layer 4 — Train/Validation Splitter
// ============================================================
// Splits one ordered listing into two sets by position:
//   - Training set:   the first n_train entries
//   - Validation set: everything after them
//
//   n_train = floor(count * train_fraction)
//
// e.g. 5 files at 0.8 → 4 train, 1 val
//      3 files at 0.5 → floor(1.5) = 1 train, 2 val
//
// No shuffling happens here. Whatever order the caller passes
// in is the order the boundary is cut in, so the same listing
// and ratio always give the same split.
//
// Reference: Rust Book §8 (Vectors)

use std::ffi::OsString;

use crate::domain::class_split::{ClassLabel, ClassSplit};

/// Number of entries that go to training for a listing of `total`.
///
/// Truncates toward zero and never exceeds `total`.
pub fn train_count(total: usize, train_fraction: f64) -> usize {
    let n = ((total as f64) * train_fraction).floor() as usize;
    n.min(total)
}

/// Split `samples` into (train, validation) at the positional boundary.
///
/// # Arguments
/// * `samples`        - The ordered listing (consumed by this function)
/// * `train_fraction` - Proportion for training, e.g. 0.8 = 80%
///
/// # Returns
/// A tuple (train_samples, val_samples); concatenated they give back
/// `samples` in its original order.
pub fn split_train_val<T>(mut samples: Vec<T>, train_fraction: f64) -> (Vec<T>, Vec<T>) {
    let total    = samples.len();
    let split_at = train_count(total, train_fraction);

    // split_off(n) removes elements [n..] from the Vec and returns them
    let val = samples.split_off(split_at);

    tracing::debug!(
        "Split {} entries: {} training, {} validation",
        total,
        samples.len(),
        val.len(),
    );

    (samples, val)
}

/// Split one class's file listing into a `ClassSplit`.
pub fn split_class(label: ClassLabel, files: Vec<OsString>, train_fraction: f64) -> ClassSplit {
    let (train, val) = split_train_val(files, train_fraction);
    ClassSplit { label, train, val }
}
