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

//! Mesh export to the Wavefront OBJ text format.

use crate::assets::MeshData;
use forge_core::writer::{AssetWriter, WriteError, WriteResult};
use std::io::Write;

/// A writer that exports [`MeshData`] as a Wavefront `.obj` file.
///
/// Indices are converted to OBJ's 1-based convention. Normals and texture
/// coordinates share the position index, so faces are emitted as `v/vt/vn`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjMeshWriter;

impl ObjMeshWriter {
    fn validate(mesh: &MeshData) -> WriteResult<()> {
        let vertex_count = mesh.positions.len();
        if vertex_count == 0 {
            return Err(WriteError::invalid_asset("mesh has no vertices"));
        }
        if let Some(normals) = &mesh.normals {
            if normals.len() != vertex_count {
                return Err(WriteError::invalid_asset(format!(
                    "mesh has {} normals for {} positions",
                    normals.len(),
                    vertex_count
                )));
            }
        }
        if let Some(tex_coords) = &mesh.tex_coords {
            if tex_coords.len() != vertex_count {
                return Err(WriteError::invalid_asset(format!(
                    "mesh has {} texture coordinates for {} positions",
                    tex_coords.len(),
                    vertex_count
                )));
            }
        }
        check_finite("position", &mesh.positions)?;
        if let Some(normals) = &mesh.normals {
            check_finite("normal", normals)?;
        }
        if let Some(tex_coords) = &mesh.tex_coords {
            check_finite("texture coordinate", tex_coords)?;
        }
        match &mesh.indices {
            Some(indices) => {
                if indices.len() % 3 != 0 {
                    return Err(WriteError::invalid_asset(format!(
                        "index count {} is not a multiple of 3",
                        indices.len()
                    )));
                }
                if let Some(bad) = indices.iter().find(|&&i| i as usize >= vertex_count) {
                    return Err(WriteError::invalid_asset(format!(
                        "index {bad} is out of range for {vertex_count} vertices"
                    )));
                }
            }
            None if vertex_count % 3 != 0 => {
                return Err(WriteError::invalid_asset(format!(
                    "non-indexed mesh has {vertex_count} positions, not a multiple of 3"
                )));
            }
            None => {}
        }
        Ok(())
    }

    fn face_vertex(mesh: &MeshData, index: u32) -> String {
        let i = index + 1;
        match (mesh.tex_coords.is_some(), mesh.normals.is_some()) {
            (true, true) => format!("{i}/{i}/{i}"),
            (true, false) => format!("{i}/{i}"),
            (false, true) => format!("{i}//{i}"),
            (false, false) => i.to_string(),
        }
    }
}

fn check_finite<const N: usize>(attribute: &str, values: &[[f32; N]]) -> WriteResult<()> {
    match values.iter().position(|v| v.iter().any(|c| !c.is_finite())) {
        Some(index) => Err(WriteError::invalid_asset(format!(
            "{attribute} {index} has a non-finite component"
        ))),
        None => Ok(()),
    }
}

impl AssetWriter<MeshData> for ObjMeshWriter {
    fn extension(&self) -> &'static str {
        "obj"
    }

    fn write_to(&self, mesh: &MeshData, out: &mut dyn Write) -> WriteResult<()> {
        Self::validate(mesh)?;

        writeln!(
            out,
            "# {} vertices, {} triangles",
            mesh.positions.len(),
            mesh.triangle_count()
        )?;
        for [x, y, z] in &mesh.positions {
            writeln!(out, "v {x} {y} {z}")?;
        }
        if let Some(tex_coords) = &mesh.tex_coords {
            for [u, v] in tex_coords {
                writeln!(out, "vt {u} {v}")?;
            }
        }
        if let Some(normals) = &mesh.normals {
            for [x, y, z] in normals {
                writeln!(out, "vn {x} {y} {z}")?;
            }
        }

        let sequential: Vec<u32>;
        let indices = match &mesh.indices {
            Some(indices) => indices.as_slice(),
            None => {
                sequential = (0..mesh.positions.len() as u32).collect();
                sequential.as_slice()
            }
        };
        for triangle in indices.chunks_exact(3) {
            writeln!(
                out,
                "f {} {} {}",
                Self::face_vertex(mesh, triangle[0]),
                Self::face_vertex(mesh, triangle[1]),
                Self::face_vertex(mesh, triangle[2])
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_core::writer::ErrorKind;

    fn triangle() -> MeshData {
        MeshData {
            positions: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            normals: Some(vec![[0.0, 0.0, 1.0]; 3]),
            tex_coords: Some(vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]),
            indices: Some(vec![0, 1, 2]),
        }
    }

    #[test]
    fn test_indexed_triangle() {
        let text = String::from_utf8(ObjMeshWriter.encode_to_vec(&triangle()).unwrap()).unwrap();
        let expected = "\
# 3 vertices, 1 triangles
v 0 0 0
v 1 0 0
v 0 1 0
vt 0 0
vt 1 0
vt 0 1
vn 0 0 1
vn 0 0 1
vn 0 0 1
f 1/1/1 2/2/2 3/3/3
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_non_indexed_positions_only() {
        let mesh = MeshData {
            positions: vec![[0.5, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            ..Default::default()
        };
        let text = String::from_utf8(ObjMeshWriter.encode_to_vec(&mesh).unwrap()).unwrap();
        assert!(text.contains("v 0.5 0 0\n"));
        assert!(text.ends_with("f 1 2 3\n"));
    }

    #[test]
    fn test_out_of_range_index() {
        let mut mesh = triangle();
        mesh.indices = Some(vec![0, 1, 3]);
        let err = ObjMeshWriter.encode_to_vec(&mesh).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::InvalidAsset));
    }

    #[test]
    fn test_attribute_length_mismatch() {
        let mut mesh = triangle();
        mesh.normals = Some(vec![[0.0, 0.0, 1.0]]);
        assert!(ObjMeshWriter.encode_to_vec(&mesh).is_err());

        let mut mesh = triangle();
        mesh.indices = Some(vec![0, 1]);
        let err = ObjMeshWriter.encode_to_vec(&mesh).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::InvalidAsset));
    }

    #[test]
    fn test_empty_mesh() {
        let err = ObjMeshWriter.encode_to_vec(&MeshData::default()).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::InvalidAsset));
    }

    #[test]
    fn test_non_finite_attributes_are_rejected() {
        let mut mesh = triangle();
        mesh.positions[1][0] = f32::NAN;
        let err = ObjMeshWriter.encode_to_vec(&mesh).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::InvalidAsset));

        let mut mesh = triangle();
        mesh.normals = Some(vec![[0.0, 0.0, f32::INFINITY]; 3]);
        let err = ObjMeshWriter.encode_to_vec(&mesh).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::InvalidAsset));

        let mut mesh = triangle();
        mesh.tex_coords = Some(vec![[0.0, 0.0], [f32::NEG_INFINITY, 0.0], [0.0, 1.0]]);
        let err = ObjMeshWriter.encode_to_vec(&mesh).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::InvalidAsset));
    }
}
