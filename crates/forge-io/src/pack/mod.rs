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

//! Bundling of written assets into a `data.pack` + `index.bin` pair.
//!
//! The data file is the plain concatenation of every entry. The index is a
//! bincode-encoded [`PackIndex`] whose entries locate each asset inside the
//! data file through the `"default"` variant of its metadata, and carry a
//! BLAKE3 hash of the uncompressed bytes for integrity checks.

mod builder;
mod reader;

pub use builder::*;
pub use reader::*;

use forge_core::asset::{Asset, AssetMetadata, AssetSource};
use forge_core::writer::{AssetWriter, WriteError, WriteResult};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// File name of the pack's data file.
pub const PACK_DATA_FILE: &str = "data.pack";
/// File name of the pack's index file.
pub const PACK_INDEX_FILE: &str = "index.bin";
/// The index layout version written by [`PackBuilder`].
pub const PACK_FORMAT_VERSION: u32 = 2;
/// The variant name under which an entry's location is recorded.
pub const DEFAULT_VARIANT: &str = "default";

/// How an entry's bytes are stored in the data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PackCompression {
    /// Stored verbatim.
    #[default]
    None,
    /// LZ4 block compression with the uncompressed size prepended.
    Lz4,
}

/// One asset stored in a pack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackEntry {
    /// Identity and location of the asset.
    pub metadata: AssetMetadata,
    /// How the stored bytes are encoded.
    pub compression: PackCompression,
    /// Size of the asset before compression.
    pub uncompressed_size: u64,
    /// BLAKE3 hash of the uncompressed bytes.
    pub hash: [u8; 32],
}

impl PackEntry {
    /// Returns the `(offset, size)` of the stored bytes in the data file.
    pub fn location(&self) -> Option<(u64, u64)> {
        match self.metadata.variants.get(DEFAULT_VARIANT)? {
            AssetSource::Packed { offset, size } => Some((*offset, *size)),
            AssetSource::Path(_) => None,
        }
    }
}

/// The content of `index.bin`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackIndex {
    /// The layout version, see [`PACK_FORMAT_VERSION`].
    pub version: u32,
    /// Entries in the order their bytes appear in the data file.
    pub entries: Vec<PackEntry>,
}

impl Asset for PackIndex {}

/// Writes a [`PackIndex`] as bincode.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackIndexWriter;

impl AssetWriter<PackIndex> for PackIndexWriter {
    fn extension(&self) -> &'static str {
        "bin"
    }

    fn write_to(&self, asset: &PackIndex, out: &mut dyn Write) -> WriteResult<()> {
        let config = bincode::config::standard();
        let bytes = bincode::serde::encode_to_vec(asset, config)
            .map_err(|e| WriteError::encoding(format!("failed to serialize pack index: {e}")))?;
        out.write_all(&bytes)?;
        Ok(())
    }
}
