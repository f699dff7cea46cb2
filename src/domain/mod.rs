// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits that describe a split:
// what is being split, how it is configured, what came out
// of it, and what can go wrong.
//
// Rules for this layer:
//   - NO clap types
//   - NO direct file I/O (the traits describe it, Layers 4
//     and 6 implement it)
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// Split configuration and the paths resolved from it
pub mod split_config;

// Class labels and the per-class split outcome
pub mod class_split;

// The error taxonomy for a split run
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;
