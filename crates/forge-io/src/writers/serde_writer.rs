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

//! Goal-driven serialization of structured documents.

use crate::assets::Document;
use forge_core::{
    serialization::{SerializationGoal, SerializedFormat},
    writer::{AssetWriter, WriteError, WriteResult},
};
use serde::Serialize;
use std::{io::Write, marker::PhantomData};

/// Writes a [`Document<T>`] in the format selected for a [`SerializationGoal`].
///
/// Output is deterministic as long as `T` does not contain hash-ordered maps.
pub struct SerdeWriter<T> {
    format: SerializedFormat,
    _marker: PhantomData<fn(&T)>,
}

impl<T> SerdeWriter<T> {
    /// Creates a writer for an explicit format.
    pub fn new(format: SerializedFormat) -> Self {
        Self {
            format,
            _marker: PhantomData,
        }
    }

    /// Creates a writer for the format that best serves `goal`.
    pub fn for_goal(goal: SerializationGoal) -> Self {
        Self::new(SerializedFormat::for_goal(goal))
    }

    /// The format this writer produces.
    pub fn format(&self) -> SerializedFormat {
        self.format
    }
}

impl<T> Clone for SerdeWriter<T> {
    fn clone(&self) -> Self {
        Self::new(self.format)
    }
}

impl<T> std::fmt::Debug for SerdeWriter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerdeWriter")
            .field("format", &self.format)
            .finish()
    }
}

/// Encodes `value` with the given format.
pub(crate) fn encode_value<V: Serialize + ?Sized>(
    value: &V,
    format: SerializedFormat,
) -> WriteResult<Vec<u8>> {
    match format {
        SerializedFormat::Bincode => encode_bincode(value),
        SerializedFormat::CompressedBincode => {
            let bytes = encode_bincode(value)?;
            Ok(lz4_flex::compress_prepend_size(&bytes))
        }
        SerializedFormat::Ron => {
            ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default())
                .map(String::into_bytes)
                .map_err(|e| WriteError::encoding(format!("RON serialization failed: {e}")))
        }
        SerializedFormat::Json => serde_json::to_vec_pretty(value)
            .map_err(|e| WriteError::encoding(format!("JSON serialization failed: {e}"))),
    }
}

fn encode_bincode<V: Serialize + ?Sized>(value: &V) -> WriteResult<Vec<u8>> {
    let config = bincode::config::standard();
    bincode::serde::encode_to_vec(value, config)
        .map_err(|e| WriteError::encoding(format!("bincode serialization failed: {e}")))
}

impl<T> AssetWriter<Document<T>> for SerdeWriter<T>
where
    T: Serialize + Send + Sync + 'static,
{
    fn extension(&self) -> &'static str {
        self.format.extension()
    }

    fn write_to(&self, asset: &Document<T>, out: &mut dyn Write) -> WriteResult<()> {
        let bytes = encode_value(&asset.value, self.format)?;
        out.write_all(&bytes)?;
        Ok(())
    }
}
