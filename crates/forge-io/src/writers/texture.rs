// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Texture encoding to PNG.

use crate::assets::{PixelFormat, Texture};
use forge_core::writer::{AssetWriter, WriteError, WriteResult};
use image::{
    codecs::png::{CompressionType, FilterType, PngEncoder},
    ExtendedColorType, ImageEncoder, ImageError,
};
use std::io::Write;

/// How hard the PNG encoder works to shrink its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PngCompression {
    /// Fast encoding, larger files.
    Fast,
    /// The encoder's balanced default.
    #[default]
    Balanced,
    /// Slow encoding, smallest files.
    Best,
}

/// A writer dedicated to encoding [`Texture`] assets as PNG files.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngTextureWriter {
    compression: PngCompression,
}

impl PngTextureWriter {
    /// Creates a writer with the default compression level.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a writer with an explicit compression level.
    pub fn with_compression(compression: PngCompression) -> Self {
        Self { compression }
    }
}

impl AssetWriter<Texture> for PngTextureWriter {
    fn extension(&self) -> &'static str {
        "png"
    }

    fn write_to(&self, asset: &Texture, out: &mut dyn Write) -> WriteResult<()> {
        if asset.width == 0 || asset.height == 0 {
            return Err(WriteError::invalid_asset(format!(
                "texture has a zero dimension ({}x{})",
                asset.width, asset.height
            )));
        }

        // The encoder panics on a length mismatch, so check it up front.
        let expected = asset.expected_len();
        if asset.pixels.len() != expected {
            return Err(WriteError::invalid_asset(format!(
                "pixel buffer holds {} bytes, expected {} for {}x{} {:?}",
                asset.pixels.len(),
                expected,
                asset.width,
                asset.height,
                asset.format
            )));
        }

        let color_type = match asset.format {
            PixelFormat::Luma8 => ExtendedColorType::L8,
            PixelFormat::Rgb8 => ExtendedColorType::Rgb8,
            PixelFormat::Rgba8 => ExtendedColorType::Rgba8,
        };
        let compression = match self.compression {
            PngCompression::Fast => CompressionType::Fast,
            PngCompression::Balanced => CompressionType::Default,
            PngCompression::Best => CompressionType::Best,
        };

        PngEncoder::new_with_quality(out, compression, FilterType::Adaptive)
            .write_image(&asset.pixels, asset.width, asset.height, color_type)
            .map_err(|e| match e {
                ImageError::IoError(io) => WriteError::Io(io),
                other => WriteError::encoding(format!("PNG encoding failed: {other}")),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_core::writer::ErrorKind;

    fn checkerboard() -> Texture {
        let mut pixels = Vec::new();
        for y in 0..2u8 {
            for x in 0..2u8 {
                let v = if (x + y) % 2 == 0 { 255 } else { 0 };
                pixels.extend_from_slice(&[v, v, v, 255]);
            }
        }
        Texture::rgba8(2, 2, pixels)
    }

    #[test]
    fn test_png_decodes_to_same_pixels() {
        let texture = checkerboard();
        let bytes = PngTextureWriter::new().encode_to_vec(&texture).unwrap();

        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (2, 2));
        assert_eq!(decoded.into_raw(), texture.pixels);
    }

    #[test]
    fn test_luma_texture() {
        let texture = Texture {
            width: 3,
            height: 1,
            format: PixelFormat::Luma8,
            pixels: vec![0, 128, 255],
        };
        let bytes = PngTextureWriter::with_compression(PngCompression::Best)
            .encode_to_vec(&texture)
            .unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_luma8();
        assert_eq!(decoded.into_raw(), vec![0, 128, 255]);
    }

    #[test]
    fn test_buffer_mismatch_is_invalid_asset() {
        let texture = Texture::rgba8(2, 2, vec![0; 15]);
        let err = PngTextureWriter::new().encode_to_vec(&texture).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::InvalidAsset));
    }

    #[test]
    fn test_zero_dimension_is_invalid_asset() {
        let texture = Texture::rgba8(0, 4, Vec::new());
        let err = PngTextureWriter::new().encode_to_vec(&texture).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::InvalidAsset));
    }
}
