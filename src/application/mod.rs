// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers to split a dataset.
//
// Rules for this layer:
//   - No split arithmetic here (that's Layer 4)
//   - No printing here (that's Layer 1)
//   - No direct file access (that's Layer 4 and 6)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The split workflow (run and dry-run plan)
pub mod split_use_case;
