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

//! Defines data structures for mesh representation.

use forge_core::asset::Asset;

/// A triangle mesh in struct-of-arrays layout.
///
/// Optional attributes, when present, hold one element per position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeshData {
    /// Vertex positions.
    pub positions: Vec<[f32; 3]>,
    /// Vertex normals.
    pub normals: Option<Vec<[f32; 3]>>,
    /// Vertex texture coordinates.
    pub tex_coords: Option<Vec<[f32; 2]>>,
    /// Triangle list indices. Without indices, every three consecutive
    /// positions form a triangle.
    pub indices: Option<Vec<u32>>,
}

impl MeshData {
    /// The number of triangles the mesh describes.
    pub fn triangle_count(&self) -> usize {
        match &self.indices {
            Some(indices) => indices.len() / 3,
            None => self.positions.len() / 3,
        }
    }
}

impl Asset for MeshData {}
