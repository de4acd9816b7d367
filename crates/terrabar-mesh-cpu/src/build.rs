use terrabar_geom::Vec3;
use terrabar_world::HeightField;

use crate::color::color_for;
use crate::constants::{COLOR_HEADROOM, DEFAULT_TOP_OFFSET};
use crate::face::{FaceDesc, XY_FACES, Z_FACES};
use crate::mesh_build::TerrainMesh;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeshOptions {
    /// Added to a column's height for its top corners. See [`DEFAULT_TOP_OFFSET`].
    pub top_offset: u8,
}

impl Default for MeshOptions {
    fn default() -> Self {
        Self {
            top_offset: DEFAULT_TOP_OFFSET,
        }
    }
}

/// Meshes a height field with default options.
pub fn generate(field: &HeightField) -> TerrainMesh {
    generate_with(field, &MeshOptions::default())
}

/// Converts every column into flat-shaded quads.
///
/// Cells are visited `y` outer, `x` inner. Each column emits its bottom and top
/// caps, then each side face whose neighbor is strictly shorter; off-grid
/// neighbors read as [`terrabar_world::VOID_HEIGHT`], so the perimeter is always closed.
/// Output order is fully determined by the field contents.
pub fn generate_with(field: &HeightField, opts: &MeshOptions) -> TerrainMesh {
    let size = field.size() as i32;
    let mut mesh = TerrainMesh::default();
    // Lower bound: two caps per cell plus the perimeter walls.
    mesh.reserve_faces(2 * field.cell_count() + 4 * field.size());

    let norm_denom = field.max_height() as f32 + COLOR_HEADROOM;
    let top_offset = i32::from(opts.top_offset);
    let mut culled = 0usize;

    for y in 0..size {
        for x in 0..size {
            let height = field.get_height(x, y);
            let top_z = (height + top_offset) as f32;
            for desc in &Z_FACES {
                emit_column_face(&mut mesh, desc, x, y, top_z, norm_denom);
            }
            for desc in &XY_FACES {
                let (dx, dy, _) = desc.face.delta();
                if field.get_height(x + dx, y + dy) < height {
                    emit_column_face(&mut mesh, desc, x, y, top_z, norm_denom);
                } else {
                    culled += 1;
                }
            }
        }
    }

    log::debug!(
        "meshed {}x{} field: {} faces, {} verts, {} side faces culled",
        size,
        size,
        mesh.face_count(),
        mesh.vertex_count(),
        culled
    );
    mesh
}

#[inline]
fn emit_column_face(
    mesh: &mut TerrainMesh,
    desc: &FaceDesc,
    x: i32,
    y: i32,
    top_z: f32,
    norm_denom: f32,
) {
    let mut corners = [Vec3::ZERO; 4];
    let mut colors = [[0.0f32; 3]; 4];
    for (i, c) in desc.corners.iter().enumerate() {
        let z = if c[2] > 0 { top_z } else { 0.0 };
        corners[i] = Vec3::new((x + i32::from(c[0])) as f32, (y + i32::from(c[1])) as f32, z);
        colors[i] = color_for(z / norm_denom);
    }
    mesh.push_face(corners, desc.normal(), colors);
}
