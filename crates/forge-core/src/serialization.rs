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

//! Goal-oriented selection of structured serialization formats.
//!
//! Instead of naming a file format, callers state their *intent* with a
//! [`SerializationGoal`] and the writer derives the [`SerializedFormat`].

use serde::{Deserialize, Serialize};

/// Defines the caller's high-level intention for a serialization operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SerializationGoal {
    /// Prioritizes the fastest possible loading time.
    /// The resulting file is compact binary and not human-readable.
    FastestLoad,

    /// Prioritizes the smallest possible file size on disk.
    /// Loading pays for a decompression step.
    SmallestFileSize,

    /// Prioritizes human-readability for debugging and version control.
    HumanReadableDebug,

    /// Prioritizes long-term stability. The format is self-describing and
    /// independent of the in-memory layout.
    LongTermStability,
}

/// A concrete encoding for structured documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SerializedFormat {
    /// Bincode with the standard configuration.
    Bincode,
    /// Bincode, LZ4-compressed with the uncompressed size prepended.
    CompressedBincode,
    /// Pretty-printed RON.
    Ron,
    /// Pretty-printed JSON.
    Json,
}

impl SerializedFormat {
    /// Picks the format that best serves `goal`.
    pub fn for_goal(goal: SerializationGoal) -> Self {
        match goal {
            SerializationGoal::FastestLoad => SerializedFormat::Bincode,
            SerializationGoal::SmallestFileSize => SerializedFormat::CompressedBincode,
            SerializationGoal::HumanReadableDebug => SerializedFormat::Ron,
            SerializationGoal::LongTermStability => SerializedFormat::Json,
        }
    }

    /// The file extension conventionally used for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            SerializedFormat::Bincode => "bin",
            SerializedFormat::CompressedBincode => "binz",
            SerializedFormat::Ron => "ron",
            SerializedFormat::Json => "json",
        }
    }

    /// Returns `true` for text-based formats.
    pub fn is_human_readable(&self) -> bool {
        matches!(self, SerializedFormat::Ron | SerializedFormat::Json)
    }
}

impl From<SerializationGoal> for SerializedFormat {
    fn from(goal: SerializationGoal) -> Self {
        Self::for_goal(goal)
    }
}
