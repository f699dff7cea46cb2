// ============================================================
// Layer 6 — Config Store
// ============================================================
// Reads and writes a SplitConfig as pretty JSON so a split can
// be reproduced later with exactly the same inputs:
//
//   {
//     "train_ratio": 0.8,
//     "base_path": "data/chest_xray",
//     "images_subpath": "images",
//     "train_subpath": "train",
//     "val_subpath": "val",
//     "listing_order": "sorted"
//   }
//
// "listing_order" may be omitted and defaults to "sorted".
//
// Reference: serde_json documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::domain::split_config::SplitConfig;

/// Load a split configuration from a JSON file.
pub fn load_config(path: &Path) -> Result<SplitConfig> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Cannot read split config from '{}'", path.display()))?;

    let cfg: SplitConfig = serde_json::from_str(&json)
        .with_context(|| format!("Malformed split config in '{}'", path.display()))?;

    tracing::debug!("Loaded split config from '{}'", path.display());
    Ok(cfg)
}

/// Save a split configuration as pretty JSON.
pub fn save_config(path: &Path, cfg: &SplitConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(cfg)?;

    fs::write(path, json)
        .with_context(|| format!("Cannot write split config to '{}'", path.display()))?;

    tracing::debug!("Saved split config to '{}'", path.display());
    Ok(())
}
