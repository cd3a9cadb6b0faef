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

//! The contract every format-specific asset writer satisfies.
//!
//! An [`AssetWriter`] is bound to exactly one asset type. Writers only have to
//! know how to encode an asset into a byte sink; the provided
//! [`AssetWriter::write`] method takes care of the destination file.

mod destination;
mod error;

pub use destination::*;
pub use error::*;

use crate::asset::Asset;
use std::{io::Write, path::Path};

/// A trait for types that can persist a specific kind of asset.
///
/// Each `AssetWriter` is specialized for a single asset type `A`, so handing a
/// writer an asset of another type is rejected by the compiler.
///
/// Writers take `&self` and must be `Send + Sync`. All writers in this
/// workspace are stateless and can be used concurrently as long as each call
/// targets a distinct destination.
///
/// # Examples
///
/// ```
/// use forge_core::asset::Asset;
/// use forge_core::writer::{AssetWriter, WriteResult};
/// use std::io::Write;
///
/// struct Note(String);
/// impl Asset for Note {}
///
/// struct NoteWriter;
///
/// impl AssetWriter<Note> for NoteWriter {
///     fn extension(&self) -> &'static str {
///         "txt"
///     }
///
///     fn write_to(&self, asset: &Note, out: &mut dyn Write) -> WriteResult<()> {
///         out.write_all(asset.0.as_bytes())?;
///         Ok(())
///     }
/// }
///
/// let bytes = NoteWriter.encode_to_vec(&Note("hello".into())).unwrap();
/// assert_eq!(bytes, b"hello");
/// ```
pub trait AssetWriter<A: Asset>: Send + Sync {
    /// The canonical file extension of the produced format, without the dot.
    fn extension(&self) -> &'static str;

    /// Encodes `asset` into `out`.
    ///
    /// # Errors
    /// Returns [`WriteError::Domain`] when the asset cannot be represented in
    /// the writer's format, and [`WriteError::Io`] when `out` fails.
    fn write_to(&self, asset: &A, out: &mut dyn Write) -> WriteResult<()>;

    /// Writes `asset` to the file at `destination` with the default
    /// [`WriteOptions`].
    ///
    /// On success the destination holds exactly the serialization of the
    /// asset. On a domain failure the destination is left untouched. A
    /// destination inside a missing directory raises an I/O fault.
    fn write(&self, asset: &A, destination: &Path) -> WriteResult<WriteReport> {
        write_file(self, asset, destination, &WriteOptions::default())
    }

    /// Encodes `asset` into a freshly allocated buffer.
    fn encode_to_vec(&self, asset: &A) -> WriteResult<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write_to(asset, &mut buffer)?;
        Ok(buffer)
    }
}
