//! Save stripped text to a plain UTF-8 file.

use std::path::{Path, PathBuf};

use thiserror::Error;

pub const DEFAULT_EXTENSION: &str = "txt";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Output path is required")]
    EmptyPath,
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type ExportResult<T> = Result<T, ExportError>;

/// Append `.txt` when the path has no extension.
pub fn with_default_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        return path.to_path_buf();
    }
    path.with_extension(DEFAULT_EXTENSION)
}

/// Parse a user-typed path, applying the default extension.
pub fn resolve_path(input: &str) -> ExportResult<PathBuf> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ExportError::EmptyPath);
    }
    Ok(with_default_extension(&expand_home(trimmed)))
}

fn expand_home(input: &str) -> PathBuf {
    let Some(rest) = input.strip_prefix("~/") else {
        return PathBuf::from(input);
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => PathBuf::from(input),
    }
}

fn ensure_parent_dir(output_path: &Path) -> ExportResult<()> {
    let Some(parent) = output_path.parent() else {
        return Ok(());
    };

    if parent.as_os_str().is_empty() || parent.exists() {
        return Ok(());
    }

    std::fs::create_dir_all(parent).map_err(|source| ExportError::CreateDir {
        path: parent.to_path_buf(),
        source,
    })
}

/// Write `text` verbatim to `path` (default extension applied).
///
/// Returns the path actually written.
pub fn save_text(text: &str, path: &Path) -> ExportResult<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(ExportError::EmptyPath);
    }

    let output_path = with_default_extension(path);
    ensure_parent_dir(&output_path)?;

    std::fs::write(&output_path, text.as_bytes()).map_err(|source| ExportError::Write {
        path: output_path.clone(),
        source,
    })?;

    Ok(output_path)
}
