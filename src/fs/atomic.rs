//! Atomic file writes.
//!
//! Every write goes to a temporary file in the target's directory, is synced
//! to disk, then renamed over the target. Source and destination share a
//! directory, so the rename stays on one filesystem.
//!
//! On crash a temporary file named `.{filename}.tmp` may remain next to the
//! target. The template store ignores dot-files when listing.

use crate::error::{Result, TradeDocsError};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file, creating parent directories as needed.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            TradeDocsError::StorageError(format!(
                "failed to create directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content)?;
    replace(&temp_path, path)
}

/// Atomically write a string to a file.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            TradeDocsError::StorageError(format!("invalid file path '{}'", target.display()))
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        TradeDocsError::StorageError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let written = file.write_all(content).and_then(|()| file.sync_all());
    if let Err(e) = written {
        let _ = fs::remove_file(path);
        return Err(TradeDocsError::StorageError(format!(
            "failed to write temporary file '{}': {}",
            path.display(),
            e
        )));
    }

    Ok(())
}

fn replace(source: &Path, target: &Path) -> Result<()> {
    // Windows refuses to rename over an existing file.
    if cfg!(windows) && target.exists() {
        let _ = fs::remove_file(target);
    }

    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        TradeDocsError::StorageError(format!(
            "failed to replace '{}': {}",
            target.display(),
            e
        ))
    })?;

    // Persist the directory entry; directories cannot be opened on Windows.
    if let Some(parent) = target.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }

    Ok(())
}
