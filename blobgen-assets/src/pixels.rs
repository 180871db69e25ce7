use std::fs;
use std::path::Path;

use lodepng::ColorType;

use crate::Error;

/// Decoded 8-bit image data. Samples are interleaved in source channel order
/// (LA, RGB or RGBA), row by row from the top.
#[derive(Clone, PartialEq, Debug)]
pub struct PixelRows {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
    pub data: Vec<u8>,
}

impl PixelRows {
    pub fn new(width: usize, height: usize, channels: usize, data: Vec<u8>) -> PixelRows {
        debug_assert_eq!(data.len(), width * height * channels);
        PixelRows {
            width,
            height,
            channels,
            data,
        }
    }

    /// Iterates over the pixels of all rows. `channels` must be non-zero.
    pub fn pixels(&self) -> std::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(self.channels)
    }
}

/// Anything that can turn an image file into pixel rows. Palette images must
/// come back expanded to direct color.
pub trait PixelSource {
    fn open(&self, path: &Path) -> Result<PixelRows, Error>;
}

/// PNG decoding backed by lodepng.
#[derive(Clone, Copy, Default, Debug)]
pub struct LodePngSource;

impl PixelSource for LodePngSource {
    fn open(&self, path: &Path) -> Result<PixelRows, Error> {
        let bytes = fs::read(path).map_err(|e| Error::file(path, e))?;
        let png_error = |source| Error::Png {
            path: path.to_path_buf(),
            source,
        };

        // Only the header is read here; it tells us which channels the file
        // actually stores.
        let mut decoder = lodepng::Decoder::new();
        decoder.inspect(&bytes).map_err(png_error)?;
        let colortype = decoder.info_png().color.colortype();

        // Always decode to 8-bit RGBA and project down afterwards. This also
        // takes care of palette expansion and 16-bit samples.
        let image = lodepng::decode32(&bytes).map_err(png_error)?;

        let channels = match colortype {
            ColorType::GREY => 1,
            ColorType::GREY_ALPHA => 2,
            ColorType::RGB => 3,
            ColorType::RGBA => 4,
            // Palettes with transparency expand to RGBA, opaque ones to RGB.
            ColorType::PALETTE => {
                if image.buffer.iter().any(|pixel| pixel.a != 255) {
                    4
                } else {
                    3
                }
            }
            _ => 4,
        };

        let mut data = Vec::with_capacity(image.width * image.height * channels);
        for pixel in image.buffer.iter() {
            match channels {
                1 => data.push(pixel.r),
                2 => data.extend_from_slice(&[pixel.r, pixel.a]),
                3 => data.extend_from_slice(&[pixel.r, pixel.g, pixel.b]),
                _ => data.extend_from_slice(&[pixel.r, pixel.g, pixel.b, pixel.a]),
            }
        }
        Ok(PixelRows::new(image.width, image.height, channels, data))
    }
}
