//! Dataset discovery and cleanup.
//!
//! A "dataset" is identified by its path prefix: the measurement suite
//! writes `<prefix>.fractional-*.csv` files next to each other, and every
//! derived figure and video reuses the prefix with a different suffix.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::IoError;
use crate::naming;

/// Find every dataset prefix under `dir`, recursively.
///
/// A dataset is present wherever a `*.fractional-amplitude.csv` file is
/// found; the returned prefixes are sorted for deterministic batch order.
pub fn discover_prefixes(dir: &Path) -> Result<Vec<PathBuf>, IoError> {
    let mut prefixes = Vec::new();
    walk(dir, &mut prefixes)?;
    prefixes.sort();
    Ok(prefixes)
}

fn walk(dir: &Path, prefixes: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(|e| IoError::read_dir(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| IoError::read_dir(dir, e))?;
        let path = entry.path();
        if path.is_dir() {
            walk(&path, prefixes)?;
        } else if let Some(text) = path.to_str() {
            if let Some(prefix) = text.strip_suffix(naming::AMPLITUDE_SUFFIX) {
                prefixes.push(PathBuf::from(prefix));
            }
        }
    }
    Ok(())
}

/// Delete the intermediate measurement CSVs for one dataset prefix.
///
/// Must only run after every figure and animation for the prefix has been
/// produced; the caller owns that ordering.
pub fn remove_intermediates(prefix: &Path) -> Result<(), IoError> {
    for suffix in naming::INTERMEDIATE_SUFFIXES {
        let path = naming::with_suffix(prefix, suffix);
        fs::remove_file(&path).map_err(|e| IoError::remove_file(&path, e))?;
        tracing::debug!(path = %path.display(), "removed intermediate");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    fn touch(path: &Path) {
        File::create(path).unwrap();
    }

    #[test]
    fn discovers_prefixes_recursively_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        touch(&dir.path().join("b.fractional-amplitude.csv"));
        touch(&dir.path().join("nested/a.fractional-amplitude.csv"));
        touch(&dir.path().join("unrelated.csv"));

        let prefixes = discover_prefixes(dir.path()).unwrap();
        assert_eq!(
            prefixes,
            vec![dir.path().join("b"), dir.path().join("nested/a")]
        );
    }

    #[test]
    fn ignores_other_fractional_files() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("x.fractional-group.csv"));
        assert!(discover_prefixes(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let absent = dir.path().join("absent");
        assert!(matches!(
            discover_prefixes(&absent),
            Err(IoError::ReadDir { .. })
        ));
    }

    #[test]
    fn removes_all_five_intermediates() {
        let dir = tempfile::tempdir().unwrap();
        let prefix = dir.path().join("run");
        for suffix in naming::INTERMEDIATE_SUFFIXES {
            touch(&naming::with_suffix(&prefix, suffix));
        }
        // Stats table and figures survive cleanup.
        touch(&naming::with_suffix(&prefix, naming::STATS_SUFFIX));

        remove_intermediates(&prefix).unwrap();
        for suffix in naming::INTERMEDIATE_SUFFIXES {
            assert!(!naming::with_suffix(&prefix, suffix).exists());
        }
        assert!(naming::with_suffix(&prefix, naming::STATS_SUFFIX).exists());
    }

    #[test]
    fn cleanup_of_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let prefix = dir.path().join("run");
        assert!(matches!(
            remove_intermediates(&prefix),
            Err(IoError::RemoveFile { .. })
        ));
    }
}
