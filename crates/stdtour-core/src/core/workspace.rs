//! Working directory and directory listing
//!
//! Read-only filesystem helpers: where the process is running and which
//! source files live in a given directory.

use crate::error::FsError;
use std::fs;
use std::path::Path;

/// Suffix matched by [`list_python_files`]
pub const PYTHON_SUFFIX: &str = ".py";

/// Get the process working directory as a (lossy) UTF-8 string
pub fn get_current_directory() -> Result<String, FsError> {
    let cwd = std::env::current_dir().map_err(FsError::CurrentDir)?;
    Ok(cwd.to_string_lossy().to_string())
}

/// List base names of entries in `directory` whose name ends with `suffix`
///
/// Order follows the underlying directory enumeration and is unspecified.
/// Entries are matched by name only, so a directory named `pkg.py` is listed too.
pub fn list_source_files<P: AsRef<Path>>(directory: P, suffix: &str) -> Result<Vec<String>, FsError> {
    let directory = directory.as_ref();
    if !directory.is_dir() {
        return Err(FsError::DirectoryNotFound {
            path: directory.to_string_lossy().to_string(),
        });
    }

    let unreadable = |source| FsError::Unreadable {
        path: directory.to_string_lossy().to_string(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(directory).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        let name = entry.file_name().to_string_lossy().to_string();
        if name.ends_with(suffix) {
            names.push(name);
        }
    }

    log::debug!(
        "Found {} '{}' entries in {}",
        names.len(),
        suffix,
        directory.display()
    );
    Ok(names)
}

/// List `.py` files in `directory`
pub fn list_python_files<P: AsRef<Path>>(directory: P) -> Result<Vec<String>, FsError> {
    list_source_files(directory, PYTHON_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, name: &str) {
        fs::write(dir.path().join(name), "print('hello')").expect("Failed to write fixture");
    }

    #[test]
    fn test_get_current_directory_is_existing_dir() {
        let cwd = get_current_directory().expect("current dir should be readable");
        assert!(!cwd.is_empty());
        assert!(Path::new(&cwd).is_dir());
    }

    #[test]
    fn test_list_python_files_filters_by_suffix() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        for name in ["a.py", "b.txt", "c.py", "README.md"] {
            touch(&temp_dir, name);
        }

        let found: HashSet<String> = list_python_files(temp_dir.path())
            .expect("listing should succeed")
            .into_iter()
            .collect();
        let expected: HashSet<String> = ["a.py", "c.py"].iter().map(|s| s.to_string()).collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_list_source_files_custom_suffix() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        for name in ["lib.rs", "main.rs", "notes.txt"] {
            touch(&temp_dir, name);
        }

        let mut found = list_source_files(temp_dir.path(), ".rs").expect("listing should succeed");
        found.sort();
        assert_eq!(found, vec!["lib.rs", "main.rs"]);
    }

    #[test]
    fn test_list_python_files_empty_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let found = list_python_files(temp_dir.path()).expect("listing should succeed");
        assert!(found.is_empty());
    }

    #[test]
    fn test_list_python_files_matches_directories_by_name() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::create_dir(temp_dir.path().join("pkg.py")).expect("Failed to create dir");

        let found = list_python_files(temp_dir.path()).expect("listing should succeed");
        assert_eq!(found, vec!["pkg.py"]);
    }

    #[test]
    fn test_list_python_files_missing_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let missing = temp_dir.path().join("does_not_exist");

        let result = list_python_files(&missing);
        assert!(matches!(result, Err(FsError::DirectoryNotFound { .. })));
    }

    #[test]
    fn test_list_python_files_rejects_regular_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        touch(&temp_dir, "script.py");

        let result = list_python_files(temp_dir.path().join("script.py"));
        assert!(matches!(result, Err(FsError::DirectoryNotFound { .. })));
    }
}
