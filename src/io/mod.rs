pub mod output;

use crate::errors::ProbeError;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| ProbeError::io(path, e).into())
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| ProbeError::io(path, e))?;
    Ok(())
}

pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}

pub fn dir_exists(path: &Path) -> bool {
    path.exists() && path.is_dir()
}

/// Files directly under `dir` with the given extension, sorted by name.
///
/// Dataset corpora are flat directories (fold and split files side by
/// side), so the walk does not recurse.
pub fn list_files_with_extension(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| {
            let io_err = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("walk error"));
            ProbeError::io(dir, io_err)
        })?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == extension) {
            files.push(path.to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

/// Immediate subdirectories of `dir`, sorted by name.
pub fn list_subdirectories(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| {
            let io_err = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("walk error"));
            ProbeError::io(dir, io_err)
        })?;
        if entry.file_type().is_dir() {
            dirs.push(entry.path().to_path_buf());
        }
    }
    dirs.sort();
    Ok(dirs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn lists_only_matching_extension_sorted() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("b.tsv")).unwrap();
        File::create(dir.path().join("a.tsv")).unwrap();
        File::create(dir.path().join("notes.txt")).unwrap();

        let files = list_files_with_extension(dir.path(), "tsv").unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.tsv", "b.tsv"]);
    }

    #[test]
    fn does_not_recurse_into_nested_dirs() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        File::create(dir.path().join("nested/deep.tsv")).unwrap();
        File::create(dir.path().join("top.tsv")).unwrap();

        let files = list_files_with_extension(dir.path(), "tsv").unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn lists_subdirectories_sorted() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("javanese")).unwrap();
        fs::create_dir(dir.path().join("acehnese")).unwrap();
        File::create(dir.path().join("readme.md")).unwrap();

        let dirs = list_subdirectories(dir.path()).unwrap();
        let names: Vec<_> = dirs
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["acehnese", "javanese"]);
    }
}
