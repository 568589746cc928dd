//! Correction pass that rewrites flagged files under a mirror root.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use adapter_flatfile::rewrite_without;

use crate::error::EngineError;

/// Rewrites record files with their flagged rows removed.
///
/// The fixer holds no validation state of its own. It is composed next to a
/// [`FileValidator`](crate::validate::FileValidator) and consumes whatever
/// flagged positions that validator produced; asking it to fix a path nobody
/// validated is refused rather than silently copying unfiltered data.
///
/// Outputs mirror the input tree: each fixed file lands under the output
/// root at the same relative path it had under the input root.
#[derive(Debug, Clone)]
pub struct FileFixer {
    input_root: PathBuf,
    output_root: PathBuf,
}

impl FileFixer {
    /// Creates a fixer mirroring `input_root` onto `output_root`.
    pub fn new(input_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            input_root: input_root.into(),
            output_root: output_root.into(),
        }
    }

    /// Where the fixed copy of `input` will be written.
    ///
    /// A path outside the input root keeps only its file name; the output
    /// never escapes the output root.
    pub fn output_path(&self, input: &Path) -> PathBuf {
        match input.strip_prefix(&self.input_root) {
            Ok(relative) => self.output_root.join(relative),
            Err(_) => self
                .output_root
                .join(input.file_name().unwrap_or(input.as_os_str())),
        }
    }

    /// Creates every output directory the given inputs will need.
    ///
    /// Runs once before the pool starts, so workers never race directory
    /// creation.
    pub fn prepare_dirs(&self, inputs: &[PathBuf]) -> Result<(), EngineError> {
        let parents: BTreeSet<PathBuf> = inputs
            .iter()
            .filter_map(|input| self.output_path(input).parent().map(Path::to_path_buf))
            .collect();

        for parent in parents {
            fs::create_dir_all(&parent).map_err(|source| EngineError::PrepareDirs {
                path: parent.clone(),
                source,
            })?;
        }
        Ok(())
    }

    /// Rewrites `path` without the rows `indices` flags for it.
    ///
    /// `indices` is keyed by path string exactly as the validator recorded
    /// it. A missing key means validation never ran for this path, which is
    /// a caller error: [`EngineError::MissingValidation`]. Returns the number
    /// of data rows written to the mirror copy.
    pub fn fix_with(
        &self,
        path: &Path,
        indices: &BTreeMap<String, Vec<usize>>,
    ) -> Result<usize, EngineError> {
        let key = path.display().to_string();
        let Some(flagged) = indices.get(&key) else {
            return Err(EngineError::MissingValidation {
                path: path.to_path_buf(),
            });
        };

        let dest = self.output_path(path);
        Ok(rewrite_without(path, &dest, flagged)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_output_path_mirrors_relative_layout() {
        let fixer = FileFixer::new("data/input", "results/fixed");
        assert_eq!(
            fixer.output_path(Path::new("data/input/2020/day.csv")),
            PathBuf::from("results/fixed/2020/day.csv")
        );
    }

    #[test]
    fn test_output_path_never_escapes_output_root() {
        let fixer = FileFixer::new("data/input", "results/fixed");
        assert_eq!(
            fixer.output_path(Path::new("/elsewhere/stray.csv")),
            PathBuf::from("results/fixed/stray.csv")
        );
    }

    #[test]
    fn test_prepare_dirs_creates_mirror_tree() {
        let dir = TempDir::new().unwrap();
        let input_root = dir.path().join("input");
        let output_root = dir.path().join("fixed");
        let fixer = FileFixer::new(&input_root, &output_root);

        let inputs = vec![
            input_root.join("2020/a.csv"),
            input_root.join("2020/b.csv"),
            input_root.join("2021/c.csv"),
        ];
        fixer.prepare_dirs(&inputs).unwrap();

        assert!(output_root.join("2020").is_dir());
        assert!(output_root.join("2021").is_dir());
    }

    #[test]
    fn test_fix_with_refuses_unvalidated_path() {
        let fixer = FileFixer::new("input", "fixed");
        let indices = BTreeMap::new();

        let err = fixer
            .fix_with(Path::new("input/2020/day.csv"), &indices)
            .unwrap_err();
        assert!(matches!(err, EngineError::MissingValidation { .. }));
    }

    #[test]
    fn test_fix_with_drops_flagged_rows() {
        let dir = TempDir::new().unwrap();
        let input_root = dir.path().join("input");
        let output_root = dir.path().join("fixed");
        std::fs::create_dir_all(input_root.join("2020")).unwrap();

        let src = input_root.join("2020/day.csv");
        std::fs::write(
            &src,
            "Ticker,SecId,TradeDate\n\
             AAA,1,2020-06-01\n\
             AAA,2,2020-06-01\n\
             BBB,9,2020-06-01\n",
        )
        .unwrap();

        let fixer = FileFixer::new(&input_root, &output_root);
        fixer.prepare_dirs(&[src.clone()]).unwrap();

        let mut indices = BTreeMap::new();
        indices.insert(src.display().to_string(), vec![1]);

        let written = fixer.fix_with(&src, &indices).unwrap();
        assert_eq!(written, 2);

        let fixed = std::fs::read_to_string(fixer.output_path(&src)).unwrap();
        assert_eq!(
            fixed,
            "Ticker,SecId,TradeDate\n\
             AAA,1,2020-06-01\n\
             BBB,9,2020-06-01\n"
        );
    }
}
