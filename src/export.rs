//! Bulk render helpers: one PNG page per slide.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::ExportError;

/// `slide-01.png`, widening the number for decks of 100 slides or more.
pub fn page_path(dir: &Path, ordinal: usize, total: usize) -> PathBuf {
    let width = total.to_string().len().max(2);
    dir.join(format!("slide-{ordinal:0width$}.png"))
}

pub fn prepare_directory(dir: &Path) -> Result<(), ExportError> {
    fs::create_dir_all(dir).map_err(|source| ExportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Removes a page left by an earlier export so a failed write cannot pass
/// for a fresh one. A missing page is fine.
pub fn clear_page(path: &Path) -> Result<(), ExportError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(ExportError::ClearPage {
            path: path.to_path_buf(),
            source,
        }),
    }
}
