use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::Error;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

/// One converted input file, ready to be emitted.
#[derive(Clone, PartialEq, Debug)]
pub struct EmbeddedAsset {
    pub name: String,
    pub source: PathBuf,
    pub data: Vec<u8>,
    /// Number of bytes per emitted group. Line wrapping counts groups, so a
    /// pixel never gets split across two lines.
    pub group: usize,
    pub dimensions: Option<Dimensions>,
}

impl EmbeddedAsset {
    pub fn size(&self) -> usize {
        self.data.len()
    }
}

/// Derives the identifier used for an asset's symbols: the file name up to its
/// first dot, with hyphens turned into underscores.
pub fn short_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    let stem = file_name.split('.').next().unwrap_or_default();
    stem.replace('-', "_")
}

pub fn sanitize_namespace(namespace: &str) -> String {
    namespace.replace('-', "_")
}

/// Recursively collects the files below `folder` accepted by `filter`,
/// sorted by their full path string. Symlinks to files count as files;
/// symlinked folders are not entered. A `folder` that is not a directory
/// yields nothing.
pub fn find_files<F>(folder: &Path, filter: F) -> Result<Vec<PathBuf>, Error>
where
    F: Fn(&Path) -> bool,
{
    if !folder.exists() {
        return Err(Error::FolderNotFound(folder.to_path_buf()));
    }
    if !folder.is_dir() {
        return Ok(Vec::new());
    }
    let mut files = Vec::new();
    for entry in WalkDir::new(folder) {
        let entry = entry?;
        let is_file = if entry.path_is_symlink() {
            entry.path().is_file()
        } else {
            entry.file_type().is_file()
        };
        if is_file && filter(entry.path()) {
            files.push(entry.into_path());
        }
    }
    // Plain string order, so `b-c/` sorts before `b/`.
    files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    Ok(files)
}

pub fn is_png(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().to_ascii_lowercase().ends_with(".png"))
        .unwrap_or(false)
}
