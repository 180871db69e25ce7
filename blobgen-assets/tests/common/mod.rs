use std::fs;
use std::path::Path;

use lodepng::ColorType;

/// Writes a PNG that stores exactly `colortype`.
pub fn write_png(path: &Path, raw: &[u8], width: usize, height: usize, colortype: ColorType) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let mut encoder = lodepng::Encoder::new();
    encoder.set_auto_convert(false);
    encoder.info_raw_mut().colortype = colortype;
    encoder.info_png_mut().color.colortype = colortype;
    let png = encoder.encode(raw, width, height).unwrap();
    fs::write(path, png).unwrap();
}

/// Writes an 8-bit palette PNG; `indices` index into `palette`.
pub fn write_palette_png(path: &Path, indices: &[u8], width: usize, palette: &[lodepng::RGBA]) {
    let mut encoder = lodepng::Encoder::new();
    encoder.set_auto_convert(false);
    encoder.info_raw_mut().colortype = ColorType::PALETTE;
    encoder.info_png_mut().color.colortype = ColorType::PALETTE;
    for entry in palette {
        encoder.info_raw_mut().palette_add(*entry).unwrap();
        encoder.info_png_mut().color.palette_add(*entry).unwrap();
    }
    let png = encoder.encode(indices, width, indices.len() / width).unwrap();
    fs::write(path, png).unwrap();
}
