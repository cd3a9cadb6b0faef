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
    PackCompression, PackEntry, PackIndex, PackIndexWriter, DEFAULT_VARIANT, PACK_DATA_FILE,
    PACK_FORMAT_VERSION, PACK_INDEX_FILE,
};
use crate::{assets::BlobAsset, writers::RawWriter};
use ahash::AHashSet;
use forge_core::{
    asset::{Asset, AssetMetadata, AssetSource, AssetUUID},
    writer::{write_file, AssetWriter, ErrorKind, WriteError, WriteOptions, WriteResult},
};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Describes the files produced by [`PackBuilder::finish`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackSummary {
    /// Number of entries in the pack.
    pub entry_count: usize,
    /// Path of the written `data.pack`.
    pub data_path: PathBuf,
    /// Path of the written `index.bin`.
    pub index_path: PathBuf,
    /// Size of `data.pack` in bytes.
    pub data_bytes: u64,
    /// Size of `index.bin` in bytes.
    pub index_bytes: u64,
    /// Total size of all entries before compression.
    pub uncompressed_bytes: u64,
}

/// Accumulates encoded assets and writes them out as a pack.
///
/// Entries are kept in memory until [`finish`](Self::finish) is called. Each
/// entry's uuid is derived from its source path, so adding the same path twice
/// is rejected.
pub struct PackBuilder {
    compression: PackCompression,
    options: WriteOptions,
    entries: Vec<PackEntry>,
    uuids: AHashSet<AssetUUID>,
    data: Vec<u8>,
    uncompressed_bytes: u64,
}

impl PackBuilder {
    /// Creates an empty builder storing entries with `compression`.
    pub fn new(compression: PackCompression) -> Self {
        Self {
            compression,
            options: WriteOptions::default(),
            entries: Vec::new(),
            uuids: AHashSet::new(),
            data: Vec::new(),
            uncompressed_bytes: 0,
        }
    }

    /// Sets the options used when writing the pack files.
    pub fn with_write_options(mut self, options: WriteOptions) -> Self {
        self.options = options;
        self
    }

    /// Number of entries added so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entry has been added.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds already-encoded bytes under `source_path`.
    pub fn add_bytes(
        &mut self,
        source_path: impl AsRef<Path>,
        type_name: &str,
        bytes: &[u8],
    ) -> WriteResult<AssetUUID> {
        let source_path = source_path.as_ref();
        // Forward slashes keep uuids identical across platforms.
        let normalized = source_path
            .to_str()
            .ok_or_else(|| {
                WriteError::invalid_asset(format!(
                    "source path '{}' is not valid UTF-8",
                    source_path.display()
                ))
            })?
            .replace('\\', "/");

        let mut metadata = AssetMetadata::new(normalized.as_str(), type_name);
        if !self.uuids.insert(metadata.uuid) {
            return Err(WriteError::invalid_asset(format!(
                "'{normalized}' was already added to the pack"
            )));
        }

        let stored = match self.compression {
            PackCompression::None => bytes.to_vec(),
            PackCompression::Lz4 => lz4_flex::compress_prepend_size(bytes),
        };
        let offset = self.data.len() as u64;
        let size = stored.len() as u64;
        self.data.extend_from_slice(&stored);
        self.uncompressed_bytes += bytes.len() as u64;

        metadata
            .variants
            .insert(DEFAULT_VARIANT.to_string(), AssetSource::Packed { offset, size });
        let uuid = metadata.uuid;

        log::debug!(
            "PackBuilder: added '{}' ({} bytes, stored as {})",
            normalized,
            bytes.len(),
            size
        );

        self.entries.push(PackEntry {
            metadata,
            compression: self.compression,
            uncompressed_size: bytes.len() as u64,
            hash: *blake3::hash(bytes).as_bytes(),
        });

        Ok(uuid)
    }

    /// Encodes `asset` with `writer` and adds the result under `source_path`.
    pub fn add_asset<A, W>(
        &mut self,
        source_path: impl AsRef<Path>,
        type_name: &str,
        writer: &W,
        asset: &A,
    ) -> WriteResult<AssetUUID>
    where
        A: Asset,
        W: AssetWriter<A> + ?Sized,
    {
        let bytes = writer.encode_to_vec(asset)?;
        self.add_bytes(source_path, type_name, &bytes)
    }

    /// Writes `data.pack` and `index.bin` into `dest_dir`.
    ///
    /// A previous `index.bin` is removed before the data file is replaced, and
    /// the new index is written last. A repack that fails part way therefore
    /// leaves no index at all rather than an index describing other data.
    pub fn finish(self, dest_dir: &Path) -> WriteResult<PackSummary> {
        let data_path = dest_dir.join(PACK_DATA_FILE);
        let index_path = dest_dir.join(PACK_INDEX_FILE);
        let entry_count = self.entries.len();

        remove_stale_index(&index_path, &self.options)?;

        let data_report = write_file(
            &RawWriter,
            &BlobAsset::new(self.data),
            &data_path,
            &self.options,
        )?;

        let index = PackIndex {
            version: PACK_FORMAT_VERSION,
            entries: self.entries,
        };
        let index_report = write_file(&PackIndexWriter, &index, &index_path, &self.options)?;

        log::info!(
            "PackBuilder: wrote {} entries to '{}' ({} bytes, index {} bytes)",
            entry_count,
            dest_dir.display(),
            data_report.bytes_written,
            index_report.bytes_written
        );

        Ok(PackSummary {
            entry_count,
            data_path,
            index_path,
            data_bytes: data_report.bytes_written,
            index_bytes: index_report.bytes_written,
            uncompressed_bytes: self.uncompressed_bytes,
        })
    }
}

fn remove_stale_index(index_path: &Path, options: &WriteOptions) -> WriteResult<()> {
    if !options.overwrite {
        if index_path.exists() {
            return Err(WriteError::domain(
                ErrorKind::DestinationExists,
                format!("'{}' already exists", index_path.display()),
            ));
        }
        return Ok(());
    }

    match fs::remove_file(index_path) {
        Ok(()) => {
            log::debug!("PackBuilder: removed stale '{}'", index_path.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(WriteError::Io(e)),
    }
}

impl Default for PackBuilder {
    fn default() -> Self {
        Self::new(PackCompression::default())
    }
}
