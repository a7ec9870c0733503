use crate::chart::CHART_EXTENSION;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Recursively collect every chart file under `root`.
///
/// A missing root aborts with an error. A subdirectory that cannot be read
/// is logged and contributes no files; traversal continues elsewhere. The
/// extension match is case-insensitive.
pub fn find_chart_files(root: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(Error::DirectoryNotFound(root.display().to_string()));
    }

    let mut files = Vec::new();
    collect_files(root, &mut files);
    files.retain(|path| is_chart_file(path));
    Ok(files)
}

fn collect_files(dir: &Path, files: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Could not read directory {}: {}", dir.display(), e);
            return;
        }
    };

    for entry in entries {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(e) => {
                warn!("Could not read entry in {}: {}", dir.display(), e);
                continue;
            }
        };
        if path.is_dir() {
            collect_files(&path, files);
        } else {
            files.push(path);
        }
    }
}

fn is_chart_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(CHART_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_root_is_an_error() {
        let result = find_chart_files("/no/such/directory");
        assert!(matches!(result, Err(Error::DirectoryNotFound(_))));
    }

    #[test]
    fn test_finds_chart_files_recursively() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("a.sm"), "x").unwrap();
        fs::write(temp.path().join("sub/b.sm"), "x").unwrap();
        fs::write(temp.path().join("sub/skip.txt"), "x").unwrap();
        fs::write(temp.path().join("skip.bak"), "x").unwrap();

        let mut files = find_chart_files(temp.path()).unwrap();
        files.sort();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.sm", "b.sm"]);
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("LOUD.SM"), "x").unwrap();
        let files = find_chart_files(temp.path()).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_empty_directory_yields_no_files() {
        let temp = TempDir::new().unwrap();
        assert!(find_chart_files(temp.path()).unwrap().is_empty());
    }
}
