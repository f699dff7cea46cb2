// ============================================================
// Layer 4 — Data Layer
// ============================================================
// Everything between the source tree on disk and the per-class
// split outcome:
//
//   images/<class>/<file>
//       │
//       ▼
//   DirectoryLoader   → lists class folders and their files
//       │
//       ▼
//   splitter          → cuts each listing into (train, val)
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Lists class folders and file names from a source directory
pub mod loader;

/// Positional train/validation split of an ordered listing
pub mod splitter;
