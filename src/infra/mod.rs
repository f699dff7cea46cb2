// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Filesystem side effects and persistence that the workflow
// uses but does not own:
//
//   tree_writer.rs  — Creates the train/val directory trees
//                     and copies files into them.
//
//   config_store.rs — Loads and saves a SplitConfig as JSON
//                     so a split can be rerun with the same
//                     inputs.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Idempotent directory creation and byte-for-byte copies
pub mod tree_writer;

/// SplitConfig JSON persistence
pub mod config_store;
