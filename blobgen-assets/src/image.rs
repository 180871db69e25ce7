use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::alpha::{AlphaRule, AlphaRules};
use crate::asset::{short_name, Dimensions, EmbeddedAsset};
use crate::format::ChannelFormat;
use crate::pixels::{LodePngSource, PixelRows, PixelSource};
use crate::Error;

/// Turns images into BGR/BGRA (or luminance/alpha) byte arrays.
pub struct ImageConverter<P: PixelSource = LodePngSource> {
    source: P,
    rules: AlphaRules,
}

impl ImageConverter<LodePngSource> {
    pub fn new() -> ImageConverter<LodePngSource> {
        ImageConverter::with_source(LodePngSource, AlphaRules::default())
    }
}

impl Default for ImageConverter<LodePngSource> {
    fn default() -> Self {
        ImageConverter::new()
    }
}

impl<P: PixelSource> ImageConverter<P> {
    pub fn with_source(source: P, rules: AlphaRules) -> ImageConverter<P> {
        ImageConverter { source, rules }
    }

    pub fn convert(&self, path: &Path) -> Result<EmbeddedAsset, Error> {
        let name = short_name(path);
        let rows = self.source.open(path)?;
        if rows.height == 0 || rows.width == 0 {
            return Err(Error::EmptyImage(path.to_path_buf()));
        }
        let format =
            ChannelFormat::from_channels(rows.channels).ok_or_else(|| Error::UnsupportedChannels {
                path: path.to_path_buf(),
                channels: rows.channels,
            })?;

        info!(
            "Generating data for \"{}\" using '{}' type",
            path.display(),
            format
        );
        debug!(width = rows.width, height = rows.height, "{}", name);

        let rule = self.rules.get(&name);
        let data = encode_pixels(&rows, format, rule);
        debug_assert_eq!(data.len(), rows.width * rows.height * format.channels());

        Ok(EmbeddedAsset {
            name,
            source: path.to_path_buf(),
            data,
            group: format.channels(),
            dimensions: Some(Dimensions {
                width: rows.width,
                height: rows.height,
            }),
        })
    }

    /// Converts every image in order, stopping at the first failure.
    pub fn convert_all(&self, paths: &[PathBuf]) -> Result<Vec<EmbeddedAsset>, Error> {
        paths.iter().map(|path| self.convert(path)).collect()
    }
}

fn encode_pixels(rows: &PixelRows, format: ChannelFormat, rule: Option<AlphaRule>) -> Vec<u8> {
    let mut data = Vec::with_capacity(rows.data.len());
    for pixel in rows.pixels() {
        match format {
            ChannelFormat::Luminance => data.extend_from_slice(pixel),
            ChannelFormat::Bgr => data.extend_from_slice(&[pixel[2], pixel[1], pixel[0]]),
            ChannelFormat::Bgra => {
                let (r, g, b, a) = (pixel[0], pixel[1], pixel[2], pixel[3]);
                let a = match rule {
                    Some(rule) => rule.apply(r, a),
                    None => a,
                };
                data.extend_from_slice(&[b, g, r, a]);
            }
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FakeSource(HashMap<PathBuf, PixelRows>);

    impl FakeSource {
        fn single(path: &str, rows: PixelRows) -> FakeSource {
            let mut images = HashMap::new();
            images.insert(PathBuf::from(path), rows);
            FakeSource(images)
        }
    }

    impl PixelSource for FakeSource {
        fn open(&self, path: &Path) -> Result<PixelRows, Error> {
            self.0
                .get(path)
                .cloned()
                .ok_or_else(|| Error::EmptyImage(path.to_path_buf()))
        }
    }

    #[test]
    fn rgba_is_reordered_to_bgra() {
        let rows = PixelRows::new(2, 1, 4, vec![255, 0, 0, 200, 10, 20, 30, 40]);
        let converter = ImageConverter::with_source(
            FakeSource::single("art/knob.png", rows),
            AlphaRules::default(),
        );
        let asset = converter.convert(Path::new("art/knob.png")).unwrap();
        assert_eq!(asset.name, "knob");
        assert_eq!(asset.data, vec![0, 0, 255, 200, 30, 20, 10, 40]);
        assert_eq!(asset.size(), 8);
        assert_eq!(asset.group, 4);
        assert_eq!(
            asset.dimensions,
            Some(Dimensions {
                width: 2,
                height: 1
            })
        );
    }

    #[test]
    fn rgb_is_reordered_to_bgr() {
        let rows = PixelRows::new(1, 2, 3, vec![1, 2, 3, 4, 5, 6]);
        let converter =
            ImageConverter::with_source(FakeSource::single("a.png", rows), AlphaRules::default());
        let asset = converter.convert(Path::new("a.png")).unwrap();
        assert_eq!(asset.data, vec![3, 2, 1, 6, 5, 4]);
        assert_eq!(asset.size(), 6);
    }

    #[test]
    fn luminance_alpha_is_unchanged() {
        let rows = PixelRows::new(2, 2, 2, vec![255, 255, 1, 2, 3, 4, 5, 6]);
        let converter =
            ImageConverter::with_source(FakeSource::single("sit.png", rows), AlphaRules::default());
        let asset = converter.convert(Path::new("sit.png")).unwrap();
        assert_eq!(asset.data, vec![255, 255, 1, 2, 3, 4, 5, 6]);
        assert_eq!(asset.size(), 2 * 2 * 2);
    }

    #[test]
    fn listed_assets_lose_alpha_on_full_red() {
        let rows = PixelRows::new(3, 1, 4, vec![255, 9, 9, 200, 255, 0, 0, 20, 254, 0, 0, 200]);
        let converter = ImageConverter::with_source(
            FakeSource::single("artwork/claw1.png", rows),
            AlphaRules::default(),
        );
        let asset = converter.convert(Path::new("artwork/claw1.png")).unwrap();
        assert_eq!(
            asset.data,
            vec![9, 9, 255, 162, 0, 0, 255, 0, 0, 0, 254, 200]
        );
    }

    #[test]
    fn unlisted_assets_keep_alpha() {
        let rows = PixelRows::new(1, 1, 4, vec![255, 0, 0, 200]);
        let converter = ImageConverter::with_source(
            FakeSource::single("artwork/claw1.png", rows),
            AlphaRules::empty(),
        );
        let asset = converter.convert(Path::new("artwork/claw1.png")).unwrap();
        assert_eq!(asset.data, vec![0, 0, 255, 200]);
    }

    #[test]
    fn custom_rule_table() {
        let mut rules = AlphaRules::empty();
        rules.insert(
            "glow",
            AlphaRule {
                red: 0,
                reduce_by: 100,
            },
        );
        let rows = PixelRows::new(2, 1, 4, vec![0, 1, 2, 150, 1, 1, 2, 150]);
        let converter = ImageConverter::with_source(FakeSource::single("glow.png", rows), rules);
        let asset = converter.convert(Path::new("glow.png")).unwrap();
        assert_eq!(asset.data, vec![2, 1, 0, 50, 2, 1, 1, 150]);
    }

    #[test]
    fn unsupported_channel_counts_fail() {
        for channels in [1, 5] {
            let rows = PixelRows::new(1, 1, channels, vec![0; channels]);
            let converter = ImageConverter::with_source(
                FakeSource::single("odd.png", rows),
                AlphaRules::default(),
            );
            match converter.convert(Path::new("odd.png")) {
                Err(Error::UnsupportedChannels { channels: got, .. }) => assert_eq!(got, channels),
                other => panic!("unexpected result: {:?}", other),
            }
        }
    }

    #[test]
    fn image_without_rows_fails() {
        let rows = PixelRows::new(0, 0, 4, Vec::new());
        let converter =
            ImageConverter::with_source(FakeSource::single("e.png", rows), AlphaRules::default());
        assert!(matches!(
            converter.convert(Path::new("e.png")),
            Err(Error::EmptyImage(_))
        ));
    }

    #[test]
    fn convert_all_stops_at_first_failure() {
        let mut images = HashMap::new();
        images.insert(PathBuf::from("a.png"), PixelRows::new(1, 1, 3, vec![1, 2, 3]));
        images.insert(PathBuf::from("b.png"), PixelRows::new(1, 1, 1, vec![1]));
        let converter = ImageConverter::with_source(FakeSource(images), AlphaRules::default());
        let paths = vec![PathBuf::from("a.png"), PathBuf::from("b.png")];
        assert!(converter.convert_all(&paths).is_err());
        assert_eq!(converter.convert_all(&paths[..1]).unwrap().len(), 1);
    }
}
