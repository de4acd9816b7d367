use terrabar_geom::{Aabb, Vec3};

use crate::constants::{INDICES_PER_FACE, OPAQUE_ALPHA, QUAD_TRIANGLES, VERTS_PER_FACE};

/// Flat-shaded triangle mesh in four parallel buffers.
///
/// `pos`, `norm` and `col` carry 3 floats per vertex; `idx` is a triangle list
/// with 6 entries per face. Faces never share vertices.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct TerrainMesh {
    pub pos: Vec<f32>,
    pub norm: Vec<f32>,
    pub col: Vec<f32>,
    pub idx: Vec<u32>,
}

impl TerrainMesh {
    /// Clears all arrays but retains capacity for reuse across passes.
    #[inline]
    pub fn clear_keep_capacity(&mut self) {
        self.pos.clear();
        self.norm.clear();
        self.col.clear();
        self.idx.clear();
    }

    /// Pre-reserve capacity for approximately `n_faces` faces worth of data.
    #[inline]
    pub fn reserve_faces(&mut self, n_faces: usize) {
        let verts = n_faces * VERTS_PER_FACE;
        self.pos.reserve(verts * 3);
        self.norm.reserve(verts * 3);
        self.col.reserve(verts * 3);
        self.idx.reserve(n_faces * INDICES_PER_FACE);
    }

    /// Appends one face: 4 new vertices sharing `normal`, and the two triangles
    /// `(n, n+1, n+2), (n+2, n+1, n+3)` where `n` is the prior vertex count.
    pub fn push_face(&mut self, corners: [Vec3; 4], normal: Vec3, colors: [[f32; 3]; 4]) {
        let base = self.vertex_count() as u32;
        for (p, c) in corners.iter().zip(colors.iter()) {
            self.pos.extend_from_slice(&[p.x, p.y, p.z]);
            self.norm.extend_from_slice(&[normal.x, normal.y, normal.z]);
            self.col.extend_from_slice(c);
        }
        self.idx.extend(QUAD_TRIANGLES.iter().map(|&i| base + i));
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos.len() / 3
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.idx.len() / INDICES_PER_FACE
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.idx.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.idx.is_empty()
    }

    /// Returns a slice of interleaved vertex positions (x,y,z per vertex).
    pub fn positions(&self) -> &[f32] {
        &self.pos
    }
    /// Returns a slice of interleaved vertex normals (x,y,z per vertex).
    pub fn normals(&self) -> &[f32] {
        &self.norm
    }
    /// Returns a slice of interleaved vertex colors (r,g,b per vertex).
    pub fn colors(&self) -> &[f32] {
        &self.col
    }
    pub fn indices(&self) -> &[u32] {
        &self.idx
    }

    #[inline]
    pub fn vertex(&self, i: usize) -> Vec3 {
        Vec3::new(self.pos[i * 3], self.pos[i * 3 + 1], self.pos[i * 3 + 2])
    }

    #[inline]
    pub fn normal(&self, i: usize) -> Vec3 {
        Vec3::new(self.norm[i * 3], self.norm[i * 3 + 1], self.norm[i * 3 + 2])
    }

    pub fn bbox(&self) -> Option<Aabb> {
        Aabb::from_points((0..self.vertex_count()).map(|i| self.vertex(i)))
    }

    /// Colors quantized to opaque RGBA bytes for renderers without float colors.
    pub fn colors_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.vertex_count() * 4);
        for c in self.col.chunks_exact(3) {
            for ch in c {
                out.push((ch.clamp(0.0, 1.0) * 255.0).round() as u8);
            }
            out.push(OPAQUE_ALPHA);
        }
        out
    }
}
