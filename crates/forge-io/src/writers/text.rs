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

//! Implements a writer for plain text assets.

use crate::assets::TextAsset;
use forge_core::writer::{AssetWriter, WriteResult};
use std::io::Write;

/// An `AssetWriter` that stores a [`TextAsset`] as UTF-8 bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextWriter {
    trailing_newline: bool,
}

impl TextWriter {
    /// Creates a writer that stores the content exactly as given.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a writer that terminates the file with `\n` when the content
    /// does not already end with one.
    pub fn with_trailing_newline() -> Self {
        Self {
            trailing_newline: true,
        }
    }
}

impl AssetWriter<TextAsset> for TextWriter {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn write_to(&self, asset: &TextAsset, out: &mut dyn Write) -> WriteResult<()> {
        out.write_all(asset.content.as_bytes())?;
        if self.trailing_newline && !asset.content.ends_with('\n') {
            out.write_all(b"\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_written_verbatim() {
        let bytes = TextWriter::new()
            .encode_to_vec(&TextAsset::new("hello"))
            .unwrap();
        assert_eq!(bytes, b"hello");
    }

    #[test]
    fn test_trailing_newline_is_added_once() {
        let writer = TextWriter::with_trailing_newline();
        assert_eq!(writer.encode_to_vec(&TextAsset::new("a")).unwrap(), b"a\n");
        assert_eq!(writer.encode_to_vec(&TextAsset::new("a\n")).unwrap(), b"a\n");
    }
}
