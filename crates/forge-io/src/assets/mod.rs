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

//! In-memory asset types understood by the built-in writers.

mod blob;
mod document;
mod mesh;
mod sound;
mod text;
mod texture;

pub use blob::*;
pub use document::*;
pub use mesh::*;
pub use sound::*;
pub use text::*;
pub use texture::*;
