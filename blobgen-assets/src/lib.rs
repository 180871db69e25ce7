//! Converts folders of PNG images and arbitrary resource files into a pair of
//! generated C++ sources (`<namespace>.hpp` / `<namespace>.cpp`) holding the
//! data as static byte arrays.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub mod alpha;
pub mod asset;
pub mod emit;
pub mod format;
pub mod generate;
pub mod image;
pub mod pixels;
pub mod resource;

pub use alpha::{AlphaRule, AlphaRules};
pub use asset::{find_files, sanitize_namespace, short_name, Dimensions, EmbeddedAsset};
pub use emit::Emitter;
pub use format::ChannelFormat;
pub use generate::{generate, generate_images, write_outputs, GenerateOptions, Generated, Kind};
pub use image::ImageConverter;
pub use pixels::{LodePngSource, PixelRows, PixelSource};
pub use resource::ResourceConverter;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error")]
    Io(#[from] io::Error),
    #[error("I/O error on {path}")]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("lodepng error in {path}")]
    Png {
        path: PathBuf,
        #[source]
        source: lodepng::Error,
    },
    #[error("failed to walk folder")]
    Walk(#[from] walkdir::Error),
    #[error("folder '{0}' does not exist")]
    FolderNotFound(PathBuf),
    #[error("invalid image {0}: no pixel rows")]
    EmptyImage(PathBuf),
    #[error("invalid image channel count {channels} in {path}")]
    UnsupportedChannels { path: PathBuf, channels: usize },
}

impl Error {
    pub(crate) fn file(path: impl Into<PathBuf>, source: io::Error) -> Error {
        Error::File {
            path: path.into(),
            source,
        }
    }
}
