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

use super::uuid::AssetUUID;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, path::PathBuf};

/// Describes where the bytes of an asset variant live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetSource {
    /// A standalone file on disk.
    Path(PathBuf),
    /// A byte range inside a `data.pack` file.
    Packed {
        /// Byte offset of the entry from the start of the pack.
        offset: u64,
        /// Size of the stored entry in bytes.
        size: u64,
    },
}

/// Serializable metadata that describes an asset and its relationship to other assets.
///
/// This is the "identity card" written next to an asset (as a `.meta` sidecar)
/// or into a pack index. It is enough to locate and classify an asset without
/// reading its data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetMetadata {
    /// The unique, stable identifier for this asset.
    pub uuid: AssetUUID,

    /// The path to the original source file.
    pub source_path: PathBuf,

    /// A string identifier for the asset's type (e.g., "texture", "mesh").
    /// This selects the writer in a `WriterRegistry`.
    pub asset_type_name: String,

    /// Other assets this asset depends on.
    pub dependencies: Vec<AssetUUID>,

    /// Available variants of the asset, keyed by a variant identifier
    /// (e.g., "default", "LOD0").
    pub variants: HashMap<String, AssetSource>,

    /// Semantic tags for querying and organization.
    pub tags: Vec<String>,
}

impl AssetMetadata {
    /// Creates metadata with a deterministic uuid derived from `source_path`
    /// and no variants, dependencies, or tags.
    pub fn new(source_path: impl Into<PathBuf>, asset_type_name: impl Into<String>) -> Self {
        let source_path = source_path.into();
        let uuid = AssetUUID::new_v5(&source_path.to_string_lossy());
        Self {
            uuid,
            source_path,
            asset_type_name: asset_type_name.into(),
            dependencies: Vec::new(),
            variants: HashMap::new(),
            tags: Vec::new(),
        }
    }

    /// Records where the given variant is stored, replacing any previous entry.
    pub fn with_variant(mut self, name: impl Into<String>, source: AssetSource) -> Self {
        self.variants.insert(name.into(), source);
        self
    }
}

impl crate::asset::Asset for AssetMetadata {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_survives_bincode() {
        let metadata = AssetMetadata::new("sounds/step.wav", "sound").with_variant(
            "default",
            AssetSource::Packed {
                offset: 128,
                size: 4096,
            },
        );

        let config = bincode::config::standard();
        let bytes = bincode::serde::encode_to_vec(&metadata, config).unwrap();
        let (decoded, _): (AssetMetadata, _) =
            bincode::serde::decode_from_slice(&bytes, config).unwrap();

        assert_eq!(decoded, metadata);
        assert_eq!(decoded.uuid, AssetUUID::new_v5("sounds/step.wav"));
    }
}
