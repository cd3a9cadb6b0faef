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

use super::{
    PackCompression, PackEntry, PackIndex, PACK_DATA_FILE, PACK_FORMAT_VERSION, PACK_INDEX_FILE,
};
use ahash::AHashMap;
use forge_core::asset::AssetUUID;
use std::{
    fs::{self, File},
    io::{self, Read, Seek, SeekFrom},
    path::Path,
};

/// An error raised while reading back a pack.
#[derive(Debug, thiserror::Error)]
pub enum PackReadError {
    /// A lower-level I/O fault.
    #[error("I/O fault while reading pack: {0}")]
    Io(#[from] io::Error),
    /// `index.bin` is not a valid bincode-encoded index.
    #[error("failed to decode pack index: {0}")]
    Decode(String),
    /// The index was written by an incompatible version.
    #[error("unsupported pack format version {0}")]
    UnsupportedVersion(u32),
    /// No entry with the requested uuid exists.
    #[error("asset {0} is not in the pack")]
    UnknownAsset(AssetUUID),
    /// The stored bytes do not match what the index recorded.
    #[error("asset {uuid} is corrupted: {reason}")]
    Corrupted {
        /// The affected asset.
        uuid: AssetUUID,
        /// What check failed.
        reason: String,
    },
}

/// Reads entries back out of a pack and checks their integrity.
pub struct PackReader {
    /// An open file handle to the `data.pack` file.
    pack_file: File,
    index: PackIndex,
    lookup: AHashMap<AssetUUID, usize>,
}

impl PackReader {
    /// Opens the `data.pack` and `index.bin` found in `dir`.
    pub fn open(dir: &Path) -> Result<Self, PackReadError> {
        let index_bytes = fs::read(dir.join(PACK_INDEX_FILE))?;
        let pack_file = File::open(dir.join(PACK_DATA_FILE))?;
        Self::from_parts(&index_bytes, pack_file)
    }

    /// Builds a reader from raw index bytes and an open data file.
    pub fn from_parts(index_bytes: &[u8], pack_file: File) -> Result<Self, PackReadError> {
        let config = bincode::config::standard();
        let (index, _): (PackIndex, _) = bincode::serde::decode_from_slice(index_bytes, config)
            .map_err(|e| PackReadError::Decode(e.to_string()))?;

        if index.version != PACK_FORMAT_VERSION {
            return Err(PackReadError::UnsupportedVersion(index.version));
        }

        let lookup = index
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.metadata.uuid, i))
            .collect();

        Ok(Self {
            pack_file,
            index,
            lookup,
        })
    }

    /// All entries, in data-file order.
    pub fn entries(&self) -> &[PackEntry] {
        &self.index.entries
    }

    /// Looks up the entry for `uuid`.
    pub fn entry(&self, uuid: &AssetUUID) -> Option<&PackEntry> {
        self.lookup.get(uuid).map(|&i| &self.index.entries[i])
    }

    /// Reads, decompresses, and verifies the bytes of an asset.
    pub fn read(&mut self, uuid: &AssetUUID) -> Result<Vec<u8>, PackReadError> {
        let entry = self
            .lookup
            .get(uuid)
            .map(|&i| &self.index.entries[i])
            .ok_or(PackReadError::UnknownAsset(*uuid))?;

        let corrupted = |reason: String| PackReadError::Corrupted {
            uuid: *uuid,
            reason,
        };

        let (offset, size) = entry
            .location()
            .ok_or_else(|| corrupted("index entry has no packed location".to_string()))?;

        // Reject ranges past the end of the data file before allocating.
        let data_len = self.pack_file.metadata()?.len();
        if !matches!(offset.checked_add(size), Some(end) if end <= data_len) {
            return Err(corrupted(format!(
                "entry spans {size} bytes at offset {offset}, past the {data_len}-byte data file"
            )));
        }

        let mut stored = vec![0; size as usize];
        self.pack_file.seek(SeekFrom::Start(offset))?;
        self.pack_file.read_exact(&mut stored)?;

        let bytes = match entry.compression {
            PackCompression::None => stored,
            PackCompression::Lz4 => lz4_flex::decompress_size_prepended(&stored)
                .map_err(|e| corrupted(format!("LZ4 decompression failed: {e}")))?,
        };

        if bytes.len() as u64 != entry.uncompressed_size {
            return Err(corrupted(format!(
                "expected {} bytes, found {}",
                entry.uncompressed_size,
                bytes.len()
            )));
        }
        if *blake3::hash(&bytes).as_bytes() != entry.hash {
            return Err(corrupted("hash mismatch".to_string()));
        }

        Ok(bytes)
    }

    /// Reads every entry and returns the failures. An empty list means the
    /// whole pack is intact.
    pub fn verify_all(&mut self) -> Vec<PackReadError> {
        let uuids: Vec<AssetUUID> = self
            .index
            .entries
            .iter()
            .map(|entry| entry.metadata.uuid)
            .collect();

        uuids
            .iter()
            .filter_map(|uuid| self.read(uuid).err())
            .collect()
    }
}
