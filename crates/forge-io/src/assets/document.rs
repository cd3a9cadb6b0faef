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

/// A structured document: any serializable value treated as an asset.
///
/// Game settings, level recipes, and other data-driven content are written
/// through a `SerdeWriter` in the format chosen by a serialization goal.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document<T> {
    /// The document payload.
    pub value: T,
}

impl<T> Document<T> {
    /// Wraps `value` as a document asset.
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T: Send + Sync + 'static> Asset for Document<T> {}
