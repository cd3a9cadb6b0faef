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

//! CPU-side texture data.

use forge_core::asset::Asset;
use serde::{Deserialize, Serialize};

/// The layout of a single pixel in a [`Texture`] buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PixelFormat {
    /// One 8-bit luminance channel.
    Luma8,
    /// Three 8-bit channels: red, green, blue.
    Rgb8,
    /// Four 8-bit channels: red, green, blue, alpha.
    Rgba8,
}

impl PixelFormat {
    /// Returns the size of one pixel in bytes.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            PixelFormat::Luma8 => 1,
            PixelFormat::Rgb8 => 3,
            PixelFormat::Rgba8 => 4,
        }
    }
}

/// A 2D texture held in CPU memory, stored row by row from the top-left corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// The layout of each pixel.
    pub format: PixelFormat,
    /// The tightly packed pixel data.
    pub pixels: Vec<u8>,
}

impl Texture {
    /// Creates an RGBA8 texture.
    pub fn rgba8(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            format: PixelFormat::Rgba8,
            pixels,
        }
    }

    /// The length `pixels` must have to match the dimensions and format.
    pub fn expected_len(&self) -> usize {
        self.width as usize * self.height as usize * self.format.bytes_per_pixel()
    }
}

impl Asset for Texture {}
