// ============================================================
// Layer 2 — SplitUseCase
// ============================================================
// Builds the train/val directory tree from a class-per-folder
// source tree:
//
//   Step 1: Validate the config           (Layer 3 - domain)
//   Step 2: Resolve images/train/val      (Layer 3 - domain)
//   Step 3: Ensure the top-level dirs     (Layer 6 - infra)
//   Step 4: Enumerate class labels        (Layer 4 - data)
//   Step 5: Per class, in order:
//             a. list files (once)        (Layer 4 - data)
//             b. positional split         (Layer 4 - data)
//             c. ensure class dirs        (Layer 6 - infra)
//             d. copy train, then val     (Layer 6 - infra)
//
// The first error stops the run. Files already copied stay
// where they are.
//
// `plan()` runs steps 1, 2, 4, 5a and 5b only and writes nothing.

use crate::data::{loader::DirectoryLoader, splitter::split_class};
use crate::domain::{
    class_split::{ClassSplit, SplitSummary},
    error::SplitResult,
    split_config::{ResolvedPaths, SplitConfig},
    traits::{DatasetSink, DatasetSource},
};
use crate::infra::tree_writer::TreeWriter;

// ─── SplitUseCase ─────────────────────────────────────────────────────────────
// Borrows the config and runs the split against a source and a sink.
pub struct SplitUseCase<'a, S = DirectoryLoader, W = TreeWriter> {
    config: &'a SplitConfig,
    source: S,
    sink:   W,
}

impl<'a> SplitUseCase<'a> {
    /// Split on the local filesystem.
    pub fn new(config: &'a SplitConfig) -> Self {
        Self {
            config,
            source: DirectoryLoader::new(config.listing_order),
            sink:   TreeWriter::new(),
        }
    }
}

impl<'a, S: DatasetSource, W: DatasetSink> SplitUseCase<'a, S, W> {
    /// Split with a custom source and sink.
    pub fn with_io(config: &'a SplitConfig, source: S, sink: W) -> Self {
        Self { config, source, sink }
    }

    /// Run the split end to end and return what was copied.
    pub fn execute(&self) -> SplitResult<SplitSummary> {
        let cfg = self.config;

        // ── Steps 1-2: Validate, then resolve paths ──────────────────────────
        // Nothing is touched on disk if the config is invalid
        cfg.validate()?;
        let paths = cfg.resolve();

        // ── Step 3: Top-level directories ────────────────────────────────────
        for dir in paths.all() {
            self.sink.ensure_dir(dir)?;
        }

        // ── Step 4: Class labels ─────────────────────────────────────────────
        let labels = self.source.class_labels(&paths.images)?;
        tracing::info!(
            "Splitting {} classes from '{}' at train_ratio={}",
            labels.len(),
            paths.images.display(),
            cfg.train_ratio,
        );

        // ── Step 5: One class at a time ──────────────────────────────────────
        let mut summary = SplitSummary::default();
        for label in labels {
            let files = self.source.class_files(&paths.images, &label)?;
            let split = split_class(label, files, cfg.train_ratio);

            self.write_class(&paths, &split)?;

            tracing::info!(
                "Class '{}': {} files, {} train, {} val",
                split.label,
                split.total(),
                split.train.len(),
                split.val.len(),
            );
            summary.push(&split);
        }

        tracing::info!(
            "Split complete: {} train files in '{}', {} val files in '{}'",
            summary.train_total(),
            paths.train.display(),
            summary.val_total(),
            paths.val.display(),
        );
        Ok(summary)
    }

    /// Compute the per-class split without creating or copying anything.
    pub fn plan(&self) -> SplitResult<SplitSummary> {
        let cfg = self.config;
        cfg.validate()?;
        let paths = cfg.resolve();

        let mut summary = SplitSummary::default();
        for label in self.source.class_labels(&paths.images)? {
            let files = self.source.class_files(&paths.images, &label)?;
            summary.push(&split_class(label, files, cfg.train_ratio));
        }

        tracing::info!(
            "Planned split of {} classes: {} train, {} val",
            summary.classes.len(),
            summary.train_total(),
            summary.val_total(),
        );
        Ok(summary)
    }

    /// Create both class directories, then copy train files and val files.
    fn write_class(&self, paths: &ResolvedPaths, split: &ClassSplit) -> SplitResult<()> {
        let class_src   = paths.images.join(split.label.as_str());
        let class_train = paths.train.join(split.label.as_str());
        let class_val   = paths.val.join(split.label.as_str());

        self.sink.ensure_dir(&class_train)?;
        self.sink.ensure_dir(&class_val)?;

        for name in &split.train {
            self.sink.copy_file(&class_src, &class_train, name)?;
        }
        for name in &split.val {
            self.sink.copy_file(&class_src, &class_val, name)?;
        }

        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::class_split::ClassLabel;
    use crate::domain::error::SplitError;
    use crate::domain::split_config::ListingOrder;
    use std::{
        cell::Cell,
        ffi::{OsStr, OsString},
        fs,
        path::{Path, PathBuf},
    };
    use tempfile::{tempdir, TempDir};

    /// Lay out `<tmp>/images/<class>/<file>` with each file holding its own name.
    fn dataset(classes: &[(&str, &[&str])]) -> TempDir {
        let dir = tempdir().unwrap();
        for (class, files) in classes {
            let class_dir = dir.path().join("images").join(class);
            fs::create_dir_all(&class_dir).unwrap();
            for f in *files {
                fs::write(class_dir.join(f), format!("pixels of {class}/{f}")).unwrap();
            }
        }
        dir
    }

    fn config(base: &Path, train_ratio: f64) -> SplitConfig {
        SplitConfig {
            train_ratio,
            base_path: base.to_path_buf(),
            ..SplitConfig::default()
        }
    }

    fn sorted_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_scenario_a_eighty_percent() {
        let dir = dataset(&[("catdog", &["e.png", "c.png", "a.png", "d.png", "b.png"])]);
        let cfg = config(dir.path(), 0.8);

        let summary = SplitUseCase::new(&cfg).execute().unwrap();

        assert_eq!(sorted_names(&dir.path().join("train/catdog")), vec!["a.png", "b.png", "c.png", "d.png"]);
        assert_eq!(sorted_names(&dir.path().join("val/catdog")), vec!["e.png"]);
        assert_eq!(summary.train_total(), 4);
        assert_eq!(summary.val_total(), 1);
    }

    #[test]
    fn test_scenario_b_full_ratio_leaves_val_empty() {
        let dir = dataset(&[("cat", &["a.png", "b.png", "c.png"])]);
        let cfg = config(dir.path(), 1.0);

        SplitUseCase::new(&cfg).execute().unwrap();

        assert_eq!(sorted_names(&dir.path().join("train/cat")).len(), 3);
        assert!(dir.path().join("val/cat").is_dir());
        assert!(sorted_names(&dir.path().join("val/cat")).is_empty());
    }

    #[test]
    fn test_scenario_c_half_of_three_truncates() {
        let dir = dataset(&[("dog", &["a.png", "b.png", "c.png"])]);
        let cfg = config(dir.path(), 0.5);

        SplitUseCase::new(&cfg).execute().unwrap();

        assert_eq!(sorted_names(&dir.path().join("train/dog")), vec!["a.png"]);
        assert_eq!(sorted_names(&dir.path().join("val/dog")), vec!["b.png", "c.png"]);
    }

    #[test]
    fn test_scenario_d_empty_class() {
        let dir = dataset(&[("empty", &[])]);
        let cfg = config(dir.path(), 0.8);

        let summary = SplitUseCase::new(&cfg).execute().unwrap();

        assert!(dir.path().join("train/empty").is_dir());
        assert!(dir.path().join("val/empty").is_dir());
        assert!(sorted_names(&dir.path().join("train/empty")).is_empty());
        assert!(sorted_names(&dir.path().join("val/empty")).is_empty());
        assert_eq!(summary.classes[0].train, 0);
        assert_eq!(summary.classes[0].val, 0);
    }

    #[test]
    fn test_zero_ratio_sends_everything_to_val() {
        let dir = dataset(&[("cat", &["a.png", "b.png"])]);
        let cfg = config(dir.path(), 0.0);

        SplitUseCase::new(&cfg).execute().unwrap();

        assert!(sorted_names(&dir.path().join("train/cat")).is_empty());
        assert_eq!(sorted_names(&dir.path().join("val/cat")), vec!["a.png", "b.png"]);
    }

    #[test]
    fn test_partition_and_copies_are_exact() {
        let files: Vec<String> = (0..17).map(|i| format!("img_{i:02}.png")).collect();
        let refs: Vec<&str> = files.iter().map(String::as_str).collect();
        let dir = dataset(&[("NORMAL", refs.as_slice()), ("PNEUMONIA", &refs[..6])]);
        let cfg = config(dir.path(), 0.7);

        let summary = SplitUseCase::new(&cfg).execute().unwrap();

        for counts in &summary.classes {
            let class = counts.label.as_str();
            let src   = sorted_names(&dir.path().join("images").join(class));
            let train = sorted_names(&dir.path().join("train").join(class));
            let val   = sorted_names(&dir.path().join("val").join(class));

            let n_train = (src.len() as f64 * 0.7).floor() as usize;
            assert_eq!(train, src[..n_train].to_vec());
            assert_eq!(val, src[n_train..].to_vec());

            for (subset, root) in [(&train, "train"), (&val, "val")] {
                for name in subset {
                    let original = fs::read(dir.path().join("images").join(class).join(name)).unwrap();
                    let copied   = fs::read(dir.path().join(root).join(class).join(name)).unwrap();
                    assert_eq!(original, copied);
                }
            }
        }
        assert_eq!(summary.classes[0].label.as_str(), "NORMAL");
        assert_eq!(summary.classes[1].train, 4);
        assert_eq!(summary.classes[1].val, 2);
    }

    #[test]
    fn test_rerun_keeps_existing_dirs_and_files() {
        let dir = dataset(&[("cat", &["a.png", "b.png"])]);
        let cfg = config(dir.path(), 0.5);
        fs::create_dir_all(dir.path().join("val")).unwrap();
        fs::write(dir.path().join("val/notes.txt"), b"mine").unwrap();

        SplitUseCase::new(&cfg).execute().unwrap();
        SplitUseCase::new(&cfg).execute().unwrap();

        assert_eq!(fs::read(dir.path().join("val/notes.txt")).unwrap(), b"mine");
        assert_eq!(sorted_names(&dir.path().join("train/cat")), vec!["a.png"]);
        assert_eq!(sorted_names(&dir.path().join("val/cat")), vec!["b.png"]);
    }

    #[test]
    fn test_custom_subpaths() {
        let dir = tempdir().unwrap();
        let class_dir = dir.path().join("raw/chest_xray/NORMAL");
        fs::create_dir_all(&class_dir).unwrap();
        fs::write(class_dir.join("a.png"), b"a").unwrap();
        fs::write(class_dir.join("b.png"), b"b").unwrap();

        let cfg = SplitConfig {
            train_ratio:    0.5,
            base_path:      dir.path().to_path_buf(),
            images_subpath: PathBuf::from("raw/chest_xray"),
            train_subpath:  PathBuf::from("split/training"),
            val_subpath:    PathBuf::from("split/validation"),
            listing_order:  ListingOrder::Sorted,
        };
        SplitUseCase::new(&cfg).execute().unwrap();

        assert_eq!(sorted_names(&dir.path().join("split/training/NORMAL")), vec!["a.png"]);
        assert_eq!(sorted_names(&dir.path().join("split/validation/NORMAL")), vec!["b.png"]);
    }

    #[test]
    fn test_invalid_config_touches_nothing() {
        let dir = tempdir().unwrap();
        let cfg = config(dir.path(), 1.5);

        let err = SplitUseCase::new(&cfg).execute().unwrap_err();

        assert!(matches!(err, SplitError::Configuration(_)));
        assert!(!dir.path().join("train").exists());
        assert!(!dir.path().join("val").exists());
    }

    #[test]
    fn test_split_on_missing_source_creates_it_and_splits_nothing() {
        let dir = tempdir().unwrap();
        let cfg = config(dir.path(), 0.8);

        let summary = SplitUseCase::new(&cfg).execute().unwrap();

        assert!(summary.classes.is_empty());
        for sub in ["images", "train", "val"] {
            assert!(dir.path().join(sub).is_dir(), "{sub} was not created");
            assert!(sorted_names(&dir.path().join(sub)).is_empty());
        }
    }

    #[test]
    fn test_aliased_output_dirs_rejected_before_copying() {
        let dir = dataset(&[("cat", &["a.png", "b.png"])]);
        let cfg = SplitConfig {
            val_subpath: PathBuf::from("./train"),
            ..config(dir.path(), 0.5)
        };

        let err = SplitUseCase::new(&cfg).execute().unwrap_err();

        assert!(matches!(err, SplitError::Configuration(_)));
        assert!(!dir.path().join("train").exists());
    }

    #[test]
    fn test_plan_on_missing_source_is_not_found() {
        let dir = tempdir().unwrap();
        let cfg = config(&dir.path().join("missing"), 0.8);

        let err = SplitUseCase::new(&cfg).plan().unwrap_err();
        assert!(matches!(err, SplitError::NotFound { .. }));
    }

    #[test]
    fn test_missing_class_dir_is_not_found() {
        let dir = dataset(&[("cat", &["a.png"])]);
        let cfg = config(dir.path(), 0.8);
        let use_case = SplitUseCase::with_io(&cfg, FixedSource(vec!["a.png"]), TreeWriter::new());

        // FixedSource always reports a class named "cls", which has no folder
        let err = use_case.execute().unwrap_err();
        assert!(matches!(err, SplitError::NotFound { .. }));
    }

    #[test]
    fn test_plan_writes_nothing() {
        let dir = dataset(&[("cat", &["a.png", "b.png", "c.png", "d.png"])]);
        let cfg = config(dir.path(), 0.75);

        let summary = SplitUseCase::new(&cfg).plan().unwrap();

        assert_eq!(summary.train_total(), 3);
        assert_eq!(summary.val_total(), 1);
        assert!(!dir.path().join("train").exists());
        assert!(!dir.path().join("val").exists());
    }

    /// Sink that fails on the n-th copy and records everything before it.
    struct FailingSink {
        fail_at: usize,
        copies:  Cell<usize>,
        inner:   TreeWriter,
    }

    impl DatasetSink for FailingSink {
        fn ensure_dir(&self, dir: &Path) -> SplitResult<()> {
            self.inner.ensure_dir(dir)
        }

        fn copy_file(&self, src_dir: &Path, dst_dir: &Path, name: &OsStr) -> SplitResult<()> {
            let n = self.copies.get();
            self.copies.set(n + 1);
            if n == self.fail_at {
                return Err(SplitError::from_io(
                    dst_dir.join(name),
                    std::io::Error::other("disk full"),
                ));
            }
            self.inner.copy_file(src_dir, dst_dir, name)
        }
    }

    #[test]
    fn test_copy_failure_aborts_and_keeps_partial_output() {
        let dir  = dataset(&[("a_class", &["1.png", "2.png"]), ("b_class", &["3.png", "4.png"])]);
        let cfg  = config(dir.path(), 0.5);
        let sink = FailingSink { fail_at: 2, copies: Cell::new(0), inner: TreeWriter::new() };

        let use_case = SplitUseCase::with_io(&cfg, DirectoryLoader::new(ListingOrder::Sorted), sink);
        let err = use_case.execute().unwrap_err();

        assert!(matches!(err, SplitError::Io { .. }));
        // First class finished before the failure
        assert_eq!(sorted_names(&dir.path().join("train/a_class")), vec!["1.png"]);
        assert_eq!(sorted_names(&dir.path().join("val/a_class")), vec!["2.png"]);
        // Second class stopped at its first copy
        assert!(sorted_names(&dir.path().join("train/b_class")).is_empty());
        assert!(sorted_names(&dir.path().join("val/b_class")).is_empty());
    }

    /// Source that hands out one class "cls" with a fixed, unsorted listing.
    struct FixedSource(Vec<&'static str>);

    impl DatasetSource for FixedSource {
        fn class_labels(&self, _root: &Path) -> SplitResult<Vec<ClassLabel>> {
            Ok(vec![ClassLabel::new("cls")])
        }

        fn class_files(&self, _root: &Path, _label: &ClassLabel) -> SplitResult<Vec<OsString>> {
            Ok(self.0.iter().map(OsString::from).collect())
        }
    }

    #[test]
    fn test_boundary_follows_source_order() {
        let dir = dataset(&[("cls", &["a.png", "b.png", "y.png", "z.png"])]);
        let cfg = config(dir.path(), 0.5);
        let use_case = SplitUseCase::with_io(
            &cfg,
            FixedSource(vec!["z.png", "y.png", "a.png", "b.png"]),
            TreeWriter::new(),
        );

        use_case.execute().unwrap();

        assert_eq!(sorted_names(&dir.path().join("train/cls")), vec!["y.png", "z.png"]);
        assert_eq!(sorted_names(&dir.path().join("val/cls")), vec!["a.png", "b.png"]);
    }
}
