use realm_blocks::Rgba;
use realm_geom::VoxelPos;

use crate::face::{CUBE_CORNERS, Face};

/// Parallel mesh buffers: three floats per vertex position and normal,
/// four bytes per vertex color. Insertion order is draw order; buffers
/// are rebuilt whole on every meshing pass, never patched.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct MeshBuild {
    pub pos: Vec<f32>,
    pub norm: Vec<f32>,
    pub col: Vec<u8>,
}

impl MeshBuild {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos.len() / 3
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.vertex_count() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos.is_empty()
    }

    /// Clears all arrays but retains capacity for reuse.
    #[inline]
    pub fn clear_keep_capacity(&mut self) {
        self.pos.clear();
        self.norm.clear();
        self.col.clear();
    }

    /// Pre-reserve capacity for `n_faces` faces (6 vertices each).
    #[inline]
    pub fn reserve_faces(&mut self, n_faces: usize) {
        self.pos.reserve(n_faces * 6 * 3);
        self.norm.reserve(n_faces * 6 * 3);
        self.col.reserve(n_faces * 6 * 4);
    }

    /// Appends one exposed face of the voxel at `pos`: two triangles,
    /// each vertex carrying the face normal and the given color.
    pub fn add_face(&mut self, face: Face, pos: VoxelPos, color: Rgba) {
        let n = face.normal();
        let center = pos.to_vec3();
        let rgba = color.channels();
        for tri in face.triangles() {
            for &corner in tri {
                let v = CUBE_CORNERS[corner] + center;
                self.pos.extend_from_slice(&[v.x, v.y, v.z]);
                self.norm.extend_from_slice(&[n.x, n.y, n.z]);
                self.col.extend_from_slice(&rgba);
            }
        }
    }
}
