//! Input-tree discovery of daily record files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::FlatfileError;

/// Enumerates the `.csv` files to process under `input_root`.
///
/// With a year, only the files directly inside `input_root/<year>/` are
/// considered (daily files are laid out one directory per year). Without
/// one, the whole tree under `input_root` is walked recursively. Extension
/// matching is ASCII case-insensitive.
///
/// Mirrors glob semantics: a missing root or year directory yields an empty
/// list rather than an error. The result is sorted so runs over the same
/// tree always see the same file order.
pub fn discover(input_root: &Path, year: Option<i32>) -> Result<Vec<PathBuf>, FlatfileError> {
    let mut files = Vec::new();

    match year {
        Some(year) => {
            let year_dir = input_root.join(year.to_string());
            if year_dir.is_dir() {
                collect_dir(&year_dir, false, &mut files)?;
            }
        }
        None => {
            if input_root.is_dir() {
                collect_dir(input_root, true, &mut files)?;
            }
        }
    }

    files.sort();
    Ok(files)
}

fn collect_dir(dir: &Path, recurse: bool, out: &mut Vec<PathBuf>) -> Result<(), FlatfileError> {
    let entries = fs::read_dir(dir).map_err(|e| FlatfileError::from_io(dir, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| FlatfileError::from_io(dir, e))?;
        let path = entry.path();
        let file_type = entry
            .file_type()
            .map_err(|e| FlatfileError::from_io(&path, e))?;

        if file_type.is_dir() {
            if recurse {
                collect_dir(&path, true, out)?;
            }
        } else if is_csv(&path) {
            out.push(path);
        }
    }
    Ok(())
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "Ticker,SecId,TradeDate\n").unwrap();
    }

    #[test]
    fn test_recursive_walk_finds_nested_files_sorted() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "2021/20210104.csv");
        touch(dir.path(), "2020/20200601.csv");
        touch(dir.path(), "2020/q3/20200901.csv");
        touch(dir.path(), "notes.txt");

        let files = discover(dir.path(), None).unwrap();

        let rel: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            rel,
            vec![
                PathBuf::from("2020/20200601.csv"),
                PathBuf::from("2020/q3/20200901.csv"),
                PathBuf::from("2021/20210104.csv"),
            ]
        );
    }

    #[test]
    fn test_year_filter_takes_only_that_directory() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "2020/20200601.csv");
        touch(dir.path(), "2020/20200602.csv");
        touch(dir.path(), "2021/20210104.csv");

        let files = discover(dir.path(), Some(2020)).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|p| p.to_string_lossy().contains("2020")));
    }

    #[test]
    fn test_year_filter_is_single_level() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "2020/20200601.csv");
        touch(dir.path(), "2020/extra/20200602.csv");

        let files = discover(dir.path(), Some(2020)).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_missing_year_directory_yields_empty_list() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "2020/20200601.csv");

        let files = discover(dir.path(), Some(1999)).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_missing_root_yields_empty_list() {
        let dir = TempDir::new().unwrap();
        let files = discover(&dir.path().join("nowhere"), None).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "2020/20200601.CSV");

        let files = discover(dir.path(), None).unwrap();
        assert_eq!(files.len(), 1);
    }
}
