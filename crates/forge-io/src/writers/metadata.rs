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

//! Writes asset metadata sidecars.

use super::serde_writer::encode_value;
use forge_core::{
    asset::{AssetMetadata, AssetSource, AssetUUID},
    serialization::SerializedFormat,
    writer::{AssetWriter, WriteResult},
};
use serde::Serialize;
use std::{collections::BTreeMap, io::Write, path::Path};

/// Writes [`AssetMetadata`] as a pretty-printed RON `.meta` sidecar.
///
/// Variants are emitted in name order so that unchanged metadata always
/// produces an identical file, which keeps sidecars diff-friendly under
/// version control. The output reads back directly as `AssetMetadata`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetadataWriter;

/// Mirrors `AssetMetadata` field for field, with ordered variants.
#[derive(Serialize)]
struct OrderedMetadata<'a> {
    uuid: &'a AssetUUID,
    source_path: &'a Path,
    asset_type_name: &'a str,
    dependencies: &'a [AssetUUID],
    variants: BTreeMap<&'a str, &'a AssetSource>,
    tags: &'a [String],
}

impl<'a> From<&'a AssetMetadata> for OrderedMetadata<'a> {
    fn from(metadata: &'a AssetMetadata) -> Self {
        Self {
            uuid: &metadata.uuid,
            source_path: &metadata.source_path,
            asset_type_name: &metadata.asset_type_name,
            dependencies: &metadata.dependencies,
            variants: metadata
                .variants
                .iter()
                .map(|(name, source)| (name.as_str(), source))
                .collect(),
            tags: &metadata.tags,
        }
    }
}

impl AssetWriter<AssetMetadata> for MetadataWriter {
    fn extension(&self) -> &'static str {
        "meta"
    }

    fn write_to(&self, asset: &AssetMetadata, out: &mut dyn Write) -> WriteResult<()> {
        let bytes = encode_value(&OrderedMetadata::from(asset), SerializedFormat::Ron)?;
        out.write_all(&bytes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> AssetMetadata {
        let mut metadata = AssetMetadata::new("textures/grass.png", "texture")
            .with_variant("default", AssetSource::Path("grass.png".into()))
            .with_variant("low", AssetSource::Packed { offset: 0, size: 64 })
            .with_variant("4k", AssetSource::Path("grass_4k.png".into()));
        metadata.tags.push("terrain".to_string());
        metadata.dependencies.push(AssetUUID::new_v5("materials/ground"));
        metadata
    }

    #[test]
    fn test_sidecar_reads_back_as_metadata() {
        let original = metadata();
        let text = String::from_utf8(MetadataWriter.encode_to_vec(&original).unwrap()).unwrap();

        let decoded: AssetMetadata = ron::from_str(&text).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_variants_are_ordered() {
        let text = String::from_utf8(MetadataWriter.encode_to_vec(&metadata()).unwrap()).unwrap();

        let first = text.find("\"4k\"").unwrap();
        let second = text.find("\"default\"").unwrap();
        let third = text.find("\"low\"").unwrap();
        assert!(first < second && second < third);
    }
}
