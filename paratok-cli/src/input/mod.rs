//! Input resolution and output path mapping

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::glob;

/// Resolve file patterns to actual file paths
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))?;
        for path in paths {
            let path = path.with_context(|| format!("Error resolving pattern: {pattern}"))?;
            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    files.sort();
    files.dedup();
    Ok(files)
}

/// Where the segmented output for an input file goes
///
/// With no explicit output the result lands next to the input with an
/// `.xml` extension. An explicit output names the file directly for a
/// single input, and acts as a directory when processing several files.
pub fn output_path_for(input: &Path, output: Option<&Path>, multiple: bool) -> PathBuf {
    match output {
        None => input.with_extension("xml"),
        Some(path) if multiple || path.is_dir() => {
            let name = input.file_name().unwrap_or_else(|| OsStr::new("output"));
            path.join(name).with_extension("xml")
        }
        Some(path) => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_plain_paths_and_globs() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();

        let pattern = dir.path().join("*.txt").display().to_string();
        let files = resolve_patterns(&[pattern]).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0] < files[1]);
    }

    #[test]
    fn test_resolve_deduplicates() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.txt");
        fs::write(&file, "a").unwrap();

        let plain = file.display().to_string();
        let pattern = dir.path().join("*.txt").display().to_string();
        let files = resolve_patterns(&[plain, pattern]).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_resolve_no_matches_fails() {
        let dir = TempDir::new().unwrap();
        let pattern = dir.path().join("*.missing").display().to_string();
        assert!(resolve_patterns(&[pattern]).is_err());
    }

    #[test]
    fn test_output_path_default_is_sibling_xml() {
        assert_eq!(
            output_path_for(Path::new("corpus/book.txt"), None, false),
            Path::new("corpus/book.xml")
        );
    }

    #[test]
    fn test_output_path_single_file() {
        assert_eq!(
            output_path_for(Path::new("book.txt"), Some(Path::new("out.xml")), false),
            Path::new("out.xml")
        );
    }

    #[test]
    fn test_output_path_multiple_into_directory() {
        assert_eq!(
            output_path_for(Path::new("corpus/book.txt"), Some(Path::new("out")), true),
            Path::new("out/book.xml")
        );
    }
}
