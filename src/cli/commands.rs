// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands, `split` and `plan`, and the
// flags they share. Base path and ratio can also come from
// the environment (SPLIT_BASE_PATH, SPLIT_TRAIN_RATIO).
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::domain::split_config::{ListingOrder, SplitConfig};

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy every class folder into train/ and val/ trees
    Split(SplitArgs),

    /// Show how each class would be split, without copying anything
    Plan(DatasetArgs),
}

/// Flags describing the dataset and the split ratio.
#[derive(Args, Debug, Clone)]
pub struct DatasetArgs {
    /// Root directory holding the source, train and val folders
    #[arg(long, env = "SPLIT_BASE_PATH", default_value = "data")]
    pub base_path: PathBuf,

    /// Source folder under the base path, one subfolder per class
    #[arg(long, default_value = "images")]
    pub images_subpath: PathBuf,

    /// Training output folder under the base path
    #[arg(long, default_value = "train")]
    pub train_subpath: PathBuf,

    /// Validation output folder under the base path
    #[arg(long, default_value = "val")]
    pub val_subpath: PathBuf,

    /// Fraction of each class copied to train, in [0, 1].
    /// The count is truncated: 3 files at 0.5 → 1 train, 2 val
    #[arg(long, env = "SPLIT_TRAIN_RATIO", default_value_t = 0.8)]
    pub train_ratio: f64,

    /// Order files are taken in before the boundary is cut
    #[arg(long, value_enum, default_value_t = OrderArg::Sorted)]
    pub listing_order: OrderArg,

    /// Read the whole configuration from a JSON file instead of the flags above
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// All arguments for the `split` command
#[derive(Args, Debug)]
pub struct SplitArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Write the configuration used for this run to a JSON file
    #[arg(long)]
    pub save_config: Option<PathBuf>,
}

/// Command-line spelling of ListingOrder
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderArg {
    /// Sort names lexicographically
    Sorted,
    /// Keep the platform's directory listing order
    Filesystem,
}

impl From<OrderArg> for ListingOrder {
    fn from(o: OrderArg) -> Self {
        match o {
            OrderArg::Sorted     => ListingOrder::Sorted,
            OrderArg::Filesystem => ListingOrder::Filesystem,
        }
    }
}

/// Convert CLI flags into the domain SplitConfig.
/// The application layer never sees clap types.
impl From<DatasetArgs> for SplitConfig {
    fn from(a: DatasetArgs) -> Self {
        SplitConfig {
            train_ratio:    a.train_ratio,
            base_path:      a.base_path,
            images_subpath: a.images_subpath,
            train_subpath:  a.train_subpath,
            val_subpath:    a.val_subpath,
            listing_order:  a.listing_order.into(),
        }
    }
}
