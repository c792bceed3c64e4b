use std::path::{Path, PathBuf};

use globset::Glob;
use walkdir::WalkDir;

use crate::error::ComposableError;

/// Find the single project file directly inside `dir` whose name matches
/// `pattern`. Zero or several matches yield `None`.
pub fn find_project_file(dir: &Path, pattern: &str) -> Result<Option<PathBuf>, ComposableError> {
    let matcher = Glob::new(pattern)
        .map_err(|source| ComposableError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?
        .compile_matcher();

    let mut candidates: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && matcher.is_match(e.file_name()))
        .map(|e| e.into_path())
        .collect();

    tracing::debug!(
        "{} project file candidates in {}",
        candidates.len(),
        dir.display()
    );

    if candidates.len() == 1 {
        Ok(candidates.pop())
    } else {
        Ok(None)
    }
}

pub fn validate_pattern(pattern: &str) -> Result<(), ComposableError> {
    Glob::new(pattern)
        .map(|_| ())
        .map_err(|source| ComposableError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}
