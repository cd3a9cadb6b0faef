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

//! Format-specific asset writers.
//!
//! Every writer here is stateless, deterministic (the same asset always
//! produces the same bytes), and bound to a single asset type.

mod metadata;
mod mesh;
mod raw;
mod serde_writer;
mod sound;
mod text;
mod texture;

pub use metadata::MetadataWriter;
pub use mesh::ObjMeshWriter;
pub use raw::RawWriter;
pub use serde_writer::SerdeWriter;
pub use sound::{WavSampleFormat, WavSoundWriter};
pub use text::TextWriter;
pub use texture::{PngCompression, PngTextureWriter};
