use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::Pattern;
use walkdir::WalkDir;

use super::dialect::Dialect;

/// Find all candidate test sources for one dialect under `root`.
///
/// A candidate is a regular file whose name starts with `prefix` and ends
/// with `.` + the dialect's extension, anywhere in the subtree. Matching is
/// an exact string comparison on the file name, not glob expansion. Paths
/// matching one of the compiled `ignores` patterns are skipped.
///
/// Traversal errors abort the scan: a build-time generator should fail
/// loudly rather than emit a runner from a partially visible tree.
pub fn scan_candidates(
    root: &Path,
    prefix: &str,
    dialect: Dialect,
    ignores: &[Pattern],
) -> Result<Vec<PathBuf>> {
    let suffix = format!(".{}", dialect.extension());
    let mut candidates = Vec::new();

    for entry in WalkDir::new(root) {
        let entry =
            entry.with_context(|| format!("Failed to walk directory: {}", root.display()))?;
        let path = entry.path();

        if ignores.iter().any(|p| p.matches(&path.to_string_lossy())) {
            continue;
        }
        if !entry.file_type().is_file() {
            continue;
        }
        // Non-UTF8 file names cannot match an ASCII naming convention.
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.starts_with(prefix) && name.ends_with(&suffix) {
            candidates.push(path.to_path_buf());
        }
    }

    // Directory listing order is OS-dependent; sort so verbose output and
    // candidate counts are stable run to run.
    candidates.sort();
    Ok(candidates)
}
