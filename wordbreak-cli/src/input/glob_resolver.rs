//! File pattern resolution using glob

use super::file_reader::InputSource;
use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::collections::HashSet;
use std::path::PathBuf;

/// Resolve input arguments to sources, in argument order
///
/// `-` stands for stdin. Matches of one glob are sorted; a path named more
/// than once keeps its first position. A pattern without glob
/// metacharacters that matches nothing is reported as a missing file.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<InputSource>> {
    let mut sources = Vec::new();
    let mut seen = HashSet::new();
    let mut stdin_seen = false;

    for pattern in patterns {
        if pattern == "-" {
            if !stdin_seen {
                stdin_seen = true;
                sources.push(InputSource::Stdin);
            }
            continue;
        }

        let matches = resolve_pattern(pattern)?;
        if matches.is_empty() && !is_glob(pattern) {
            return Err(CliError::FileNotFound(pattern.clone()).into());
        }

        for path in matches {
            if seen.insert(path.clone()) {
                sources.push(InputSource::File(path));
            }
        }
    }

    if sources.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    log::debug!("Resolved {} input(s)", sources.len());
    Ok(sources)
}

/// Files matched by a single pattern, sorted
fn resolve_pattern(pattern: &str) -> Result<Vec<PathBuf>> {
    let paths =
        glob(pattern).map_err(|e| CliError::InvalidPattern(format!("{pattern}: {e}")))?;

    let mut files = Vec::new();
    for path_result in paths {
        let path = path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn pattern_in(dir: &TempDir, name: &str) -> String {
        dir.path().join(name).display().to_string()
    }

    fn file(dir: &TempDir, name: &str) -> InputSource {
        InputSource::File(dir.path().join(name))
    }

    #[test]
    fn test_resolve_glob_sorted_and_deduplicated() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.txt"), "b").unwrap();
        fs::write(temp_dir.path().join("a.txt"), "a").unwrap();
        fs::write(temp_dir.path().join("c.md"), "c").unwrap();

        let sources = resolve_patterns(&[
            pattern_in(&temp_dir, "*.txt"),
            pattern_in(&temp_dir, "a.txt"),
        ])
        .unwrap();

        assert_eq!(
            sources,
            vec![file(&temp_dir, "a.txt"), file(&temp_dir, "b.txt")]
        );
    }

    #[test]
    fn test_argument_order_is_kept() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "a").unwrap();
        fs::write(temp_dir.path().join("b.txt"), "b").unwrap();
        fs::write(temp_dir.path().join("c.md"), "c").unwrap();

        let sources = resolve_patterns(&[
            pattern_in(&temp_dir, "c.md"),
            pattern_in(&temp_dir, "b.txt"),
            "-".to_string(),
            pattern_in(&temp_dir, "*.txt"),
            "-".to_string(),
        ])
        .unwrap();

        assert_eq!(
            sources,
            vec![
                file(&temp_dir, "c.md"),
                file(&temp_dir, "b.txt"),
                InputSource::Stdin,
                file(&temp_dir, "a.txt"),
            ]
        );
    }

    #[test]
    fn test_stdin_only() {
        let sources = resolve_patterns(&["-".to_string()]).unwrap();
        assert_eq!(sources, vec![InputSource::Stdin]);
    }

    #[test]
    fn test_missing_plain_file() {
        let err = resolve_patterns(&["/nonexistent/file.txt".to_string()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_empty_glob() {
        let temp_dir = TempDir::new().unwrap();
        let err = resolve_patterns(&[pattern_in(&temp_dir, "*.none")]).unwrap_err();
        assert!(err.to_string().contains("No files found"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = resolve_patterns(&["[".to_string()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_directories_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("sub.txt")).unwrap();
        fs::write(temp_dir.path().join("file.txt"), "x").unwrap();

        let sources = resolve_patterns(&[pattern_in(&temp_dir, "*.txt")]).unwrap();
        assert_eq!(sources, vec![file(&temp_dir, "file.txt")]);
    }
}
