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

//! A registry for asset writers, enabling dispatch to typed writers by name.

use crate::writers::{
    MetadataWriter, ObjMeshWriter, PngTextureWriter, RawWriter, TextWriter, WavSoundWriter,
};
use ahash::AHashMap;
use forge_core::{
    asset::Asset,
    writer::{
        write_file, AssetWriter, ErrorKind, WriteError, WriteOptions, WriteReport, WriteResult,
    },
};
use std::{
    any::Any,
    io::Write,
    marker::PhantomData,
    path::Path,
    sync::atomic::{AtomicU64, Ordering},
};

/// Internal trait for writing any asset type.
trait AnyAssetWriter: Send + Sync {
    fn extension(&self) -> &'static str;
    fn write_any(&self, asset: &dyn Any, out: &mut dyn Write) -> WriteResult<()>;
    fn write_file_any(
        &self,
        asset: &dyn Any,
        destination: &Path,
        options: &WriteOptions,
    ) -> WriteResult<WriteReport>;
}

/// A "wrapper" that takes a generic `AssetWriter<A>` and implements `AnyAssetWriter`.
struct AssetWriterWrapper<A: Asset, W: AssetWriter<A>>(W, PhantomData<fn(&A)>);

impl<A: Asset, W: AssetWriter<A>> AssetWriterWrapper<A, W> {
    fn downcast<'a>(&self, asset: &'a dyn Any) -> WriteResult<&'a A> {
        asset.downcast_ref::<A>().ok_or_else(|| {
            WriteError::domain(
                ErrorKind::AssetTypeMismatch,
                format!(
                    "writer expects assets of type '{}'",
                    std::any::type_name::<A>()
                ),
            )
        })
    }
}

impl<A: Asset, W: AssetWriter<A>> AnyAssetWriter for AssetWriterWrapper<A, W> {
    fn extension(&self) -> &'static str {
        self.0.extension()
    }

    fn write_any(&self, asset: &dyn Any, out: &mut dyn Write) -> WriteResult<()> {
        let asset = self.downcast(asset)?;
        self.0.write_to(asset, out)
    }

    fn write_file_any(
        &self,
        asset: &dyn Any,
        destination: &Path,
        options: &WriteOptions,
    ) -> WriteResult<WriteReport> {
        let asset = self.downcast(asset)?;
        write_file(&self.0, asset, destination, options)
    }
}

/// A snapshot of the registry's write counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WriterStats {
    /// Writes that completed with the success sentinel.
    pub writes_succeeded: u64,
    /// Writes that failed, through either error channel.
    pub writes_failed: u64,
    /// Total bytes produced by successful writes.
    pub bytes_written: u64,
}

#[derive(Debug, Default)]
struct StatCounters {
    writes_succeeded: AtomicU64,
    writes_failed: AtomicU64,
    bytes_written: AtomicU64,
}

/// Maps asset type names (e.g. `"texture"`) to the writer responsible for them.
///
/// The registry is `Send + Sync`; once populated it can be shared between
/// threads and used concurrently for distinct destinations.
#[derive(Default)]
pub struct WriterRegistry {
    /// A map from asset type names to their corresponding writers.
    writers: AHashMap<String, Box<dyn AnyAssetWriter>>,
    stats: StatCounters,
}

impl WriterRegistry {
    /// Creates an empty `WriterRegistry`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with every built-in writer registered under its
    /// conventional type name: `text`, `blob`, `texture`, `sound`, `mesh`
    /// and `meta`.
    pub fn with_builtin_writers() -> Self {
        let mut registry = Self::new();
        registry.register("text", TextWriter::new());
        registry.register("blob", RawWriter);
        registry.register("texture", PngTextureWriter::new());
        registry.register("sound", WavSoundWriter::new());
        registry.register("mesh", ObjMeshWriter);
        registry.register("meta", MetadataWriter);
        registry
    }

    /// Registers a writer for `type_name`, replacing any previous registration.
    pub fn register<A: Asset>(&mut self, type_name: &str, writer: impl AssetWriter<A> + 'static) {
        let wrapped = AssetWriterWrapper(writer, PhantomData);
        if self
            .writers
            .insert(type_name.to_string(), Box::new(wrapped))
            .is_some()
        {
            log::warn!("WriterRegistry: replaced the writer for '{}'", type_name);
        }
    }

    /// Returns `true` if a writer is registered for `type_name`.
    pub fn contains(&self, type_name: &str) -> bool {
        self.writers.contains_key(type_name)
    }

    /// Returns the registered type names in sorted order.
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.writers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the file extension produced for `type_name`.
    pub fn extension_for(&self, type_name: &str) -> Option<&'static str> {
        self.writers.get(type_name).map(|writer| writer.extension())
    }

    /// Writes `asset` to `destination` with the writer registered for
    /// `type_name`, using the default [`WriteOptions`].
    pub fn write<A: Asset>(
        &self,
        type_name: &str,
        asset: &A,
        destination: &Path,
    ) -> WriteResult<WriteReport> {
        self.write_with(type_name, asset, destination, &WriteOptions::default())
    }

    /// Writes `asset` to `destination` with explicit options.
    pub fn write_with<A: Asset>(
        &self,
        type_name: &str,
        asset: &A,
        destination: &Path,
        options: &WriteOptions,
    ) -> WriteResult<WriteReport> {
        let result = self
            .writer(type_name)
            .and_then(|writer| writer.write_file_any(asset, destination, options));

        match &result {
            Ok(report) => self.record_success(report.bytes_written),
            Err(e) => {
                self.stats.writes_failed.fetch_add(1, Ordering::Relaxed);
                log::warn!(
                    "WriterRegistry: failed to write '{}' asset to '{}': {}",
                    type_name,
                    destination.display(),
                    e
                );
            }
        }
        result
    }

    /// Encodes `asset` into memory with the writer registered for `type_name`.
    pub fn encode<A: Asset>(&self, type_name: &str, asset: &A) -> WriteResult<Vec<u8>> {
        let mut buffer = Vec::new();
        let result = self
            .writer(type_name)
            .and_then(|writer| writer.write_any(asset, &mut buffer));

        match result {
            Ok(()) => {
                self.record_success(buffer.len() as u64);
                Ok(buffer)
            }
            Err(e) => {
                self.stats.writes_failed.fetch_add(1, Ordering::Relaxed);
                log::warn!(
                    "WriterRegistry: failed to encode '{}' asset: {}",
                    type_name,
                    e
                );
                Err(e)
            }
        }
    }

    /// Returns a snapshot of the write counters.
    pub fn stats(&self) -> WriterStats {
        WriterStats {
            writes_succeeded: self.stats.writes_succeeded.load(Ordering::Relaxed),
            writes_failed: self.stats.writes_failed.load(Ordering::Relaxed),
            bytes_written: self.stats.bytes_written.load(Ordering::Relaxed),
        }
    }

    fn writer(&self, type_name: &str) -> WriteResult<&dyn AnyAssetWriter> {
        self.writers
            .get(type_name)
            .map(|writer| &**writer)
            .ok_or_else(|| {
                WriteError::domain(
                    ErrorKind::NoWriterRegistered,
                    format!("no writer registered for asset type '{type_name}'"),
                )
            })
    }

    fn record_success(&self, bytes: u64) {
        self.stats.writes_succeeded.fetch_add(1, Ordering::Relaxed);
        self.stats.bytes_written.fetch_add(bytes, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{SoundData, TextAsset};

    #[test]
    fn test_builtin_names() {
        let registry = WriterRegistry::with_builtin_writers();
        assert_eq!(
            registry.type_names(),
            vec!["blob", "mesh", "meta", "sound", "text", "texture"]
        );
        assert_eq!(registry.extension_for("texture"), Some("png"));
        assert_eq!(registry.extension_for("model"), None);
    }

    #[test]
    fn test_encode_dispatches_by_name() {
        let registry = WriterRegistry::with_builtin_writers();
        let bytes = registry.encode("text", &TextAsset::new("hello")).unwrap();
        assert_eq!(bytes, b"hello");
        assert_eq!(
            registry.stats(),
            WriterStats {
                writes_succeeded: 1,
                writes_failed: 0,
                bytes_written: 5,
            }
        );
    }

    #[test]
    fn test_missing_writer() {
        let registry = WriterRegistry::new();
        let err = registry.encode("text", &TextAsset::new("x")).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::NoWriterRegistered));
        assert_eq!(registry.stats().writes_failed, 1);
    }

    #[test]
    fn test_wrong_asset_type_for_name() {
        let registry = WriterRegistry::with_builtin_writers();
        let sound = SoundData {
            samples: vec![0.0],
            channels: 1,
            sample_rate: 8000,
        };
        let err = registry.encode("text", &sound).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::AssetTypeMismatch));
    }

    #[test]
    fn test_register_replaces_existing_writer() {
        let mut registry = WriterRegistry::new();
        registry.register("text", TextWriter::new());
        registry.register("text", TextWriter::with_trailing_newline());

        assert_eq!(registry.type_names(), vec!["text"]);
        let bytes = registry.encode("text", &TextAsset::new("a")).unwrap();
        assert_eq!(bytes, b"a\n");
    }
}
