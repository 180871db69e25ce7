use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::asset::{short_name, EmbeddedAsset};
use crate::Error;

/// Embeds files verbatim.
#[derive(Clone, Copy, Default, Debug)]
pub struct ResourceConverter;

impl ResourceConverter {
    pub fn convert(&self, path: &Path) -> Result<EmbeddedAsset, Error> {
        let data = fs::read(path).map_err(|e| Error::file(path, e))?;
        info!("Generating data for \"{}\"", path.display());
        if data.is_empty() {
            warn!("{} is empty, emitting an empty array", path.display());
        }
        Ok(EmbeddedAsset {
            name: short_name(path),
            source: path.to_path_buf(),
            data,
            group: 1,
            dimensions: None,
        })
    }

    pub fn convert_all(&self, paths: &[PathBuf]) -> Result<Vec<EmbeddedAsset>, Error> {
        paths.iter().map(|path| self.convert(path)).collect()
    }
}
