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

use forge_core::asset::Asset;

/// A plain UTF-8 text asset (shader sources, scripts, localization tables).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextAsset {
    /// The text content.
    pub content: String,
}

impl TextAsset {
    /// Creates a text asset from anything convertible into a `String`.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl Asset for TextAsset {}
