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

use crate::assets::BlobAsset;
use forge_core::writer::{AssetWriter, WriteResult};
use std::io::Write;

/// An `AssetWriter` that copies a [`BlobAsset`] to its destination unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawWriter;

impl AssetWriter<BlobAsset> for RawWriter {
    fn extension(&self) -> &'static str {
        "bin"
    }

    fn write_to(&self, asset: &BlobAsset, out: &mut dyn Write) -> WriteResult<()> {
        out.write_all(&asset.bytes)?;
        Ok(())
    }
}
