use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::asset::{find_files, is_png, sanitize_namespace, EmbeddedAsset};
use crate::emit::Emitter;
use crate::image::ImageConverter;
use crate::pixels::PixelSource;
use crate::resource::ResourceConverter;
use crate::Error;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Kind {
    Images,
    Resources,
}

#[derive(Clone, Debug)]
pub struct GenerateOptions {
    pub namespace: String,
    pub folder: PathBuf,
    pub out_dir: PathBuf,
}

impl GenerateOptions {
    pub fn new(namespace: &str, folder: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        GenerateOptions {
            namespace: sanitize_namespace(namespace),
            folder: folder.into(),
            out_dir: out_dir.into(),
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Generated {
    pub header: PathBuf,
    pub source: PathBuf,
    pub assets: usize,
}

/// Converts everything below `options.folder` and writes
/// `<namespace>.hpp` and `<namespace>.cpp` into `options.out_dir`.
pub fn generate(kind: Kind, options: &GenerateOptions) -> Result<Generated, Error> {
    match kind {
        Kind::Images => generate_images(options, &ImageConverter::new()),
        Kind::Resources => {
            let files = find_files(&options.folder, |_| true)?;
            let assets = ResourceConverter.convert_all(&files)?;
            write_outputs(&options.namespace, &options.out_dir, &assets)
        }
    }
}

pub fn generate_images<P: PixelSource>(
    options: &GenerateOptions,
    converter: &ImageConverter<P>,
) -> Result<Generated, Error> {
    let files = find_files(&options.folder, is_png)?;
    let assets = converter.convert_all(&files)?;
    write_outputs(&options.namespace, &options.out_dir, &assets)
}

/// Writes both output files. Nothing is created before all assets have been
/// converted, so callers only reach this with a complete set.
pub fn write_outputs(
    namespace: &str,
    out_dir: &Path,
    assets: &[EmbeddedAsset],
) -> Result<Generated, Error> {
    let namespace = sanitize_namespace(namespace);
    warn_duplicate_names(assets);

    let header_path = out_dir.join(format!("{}.hpp", namespace));
    let source_path = out_dir.join(format!("{}.cpp", namespace));
    let header = File::create(&header_path).map_err(|e| Error::file(&header_path, e))?;
    let source = File::create(&source_path).map_err(|e| Error::file(&source_path, e))?;

    let mut emitter = Emitter::begin(
        &namespace,
        assets.len(),
        BufWriter::new(header),
        BufWriter::new(source),
    )?;
    for asset in assets {
        emitter.asset(asset)?;
    }
    emitter.finish()?;

    debug!(
        "wrote {} and {}",
        header_path.display(),
        source_path.display()
    );
    Ok(Generated {
        header: header_path,
        source: source_path,
        assets: assets.len(),
    })
}

fn warn_duplicate_names(assets: &[EmbeddedAsset]) {
    let mut seen: BTreeMap<&str, &Path> = BTreeMap::new();
    for asset in assets {
        if let Some(first) = seen.insert(&asset.name, &asset.source) {
            warn!(
                "{} and {} both map to symbol {}Data",
                first.display(),
                asset.source.display(),
                asset.name
            );
        }
    }
}
