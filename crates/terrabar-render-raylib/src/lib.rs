//! Raylib-based GPU upload for terrain meshes.
// Unsafe is required for Raylib mesh/model upload operations in this crate.

use raylib::prelude::*;
use terrabar_geom::Vec3;
use terrabar_mesh_cpu::TerrainMesh;

pub mod conv {
    use terrabar_geom::{Aabb, Vec3};

    pub fn vec3_to_rl(v: Vec3) -> raylib::prelude::Vector3 {
        raylib::prelude::Vector3::new(v.x, v.y, v.z)
    }

    pub fn aabb_to_rl(bb: Aabb) -> raylib::core::math::BoundingBox {
        raylib::core::math::BoundingBox::new(vec3_to_rl(bb.min), vec3_to_rl(bb.max))
    }
}

/// Raylib meshes index with u16; parts are split at a quad boundary below this.
pub const MAX_PART_VERTS: usize = 65_000;

/// Visual-only floor so faces turned away from every light are not pitch black.
pub const LIGHT_FLOOR: f32 = 0.25;

/// Directions *toward* the two scene lights.
pub const SCENE_LIGHTS: [Vec3; 2] = [Vec3::new(-1.0, 2.0, 4.0), Vec3::new(1.0, -1.0, -2.0)];

pub struct TerrainPart {
    pub model: raylib::core::models::Model,
    pub v_start: usize,
    pub v_count: usize,
}

pub struct TerrainRender {
    pub bbox: raylib::core::math::BoundingBox,
    pub parts: Vec<TerrainPart>,
    pub vertex_count: usize,
    pub face_count: usize,
}

/// Lambert intensity for a unit normal under `lights`, clamped to `[LIGHT_FLOOR, 1]`.
pub fn light_intensity(normal: Vec3, lights: &[Vec3]) -> f32 {
    let sum: f32 = lights
        .iter()
        .map(|l| normal.dot(l.normalized()).max(0.0))
        .sum();
    sum.clamp(LIGHT_FLOOR, 1.0)
}

/// Multiplies each vertex color by its face's light intensity. The renderer's
/// default shader is unlit, so shading is baked here.
pub fn shaded_colors_rgba8(mesh: &TerrainMesh, lights: &[Vec3]) -> Vec<u8> {
    let mut col = mesh.colors_rgba8();
    for (i, rgba) in col.chunks_exact_mut(4).enumerate() {
        let k = light_intensity(mesh.normal(i), lights);
        for ch in &mut rgba[..3] {
            *ch = (f32::from(*ch) * k).round() as u8;
        }
    }
    col
}

pub fn upload_terrain_mesh(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    cpu: &TerrainMesh,
) -> Option<TerrainRender> {
    let bbox = cpu.bbox()?;
    let col = shaded_colors_rgba8(cpu, &SCENE_LIGHTS);
    let total_verts = cpu.vertex_count();
    let total_quads = total_verts / 4;
    let max_quads = MAX_PART_VERTS / 4;
    let mut parts: Vec<TerrainPart> = Vec::new();
    let mut q = 0usize;
    while q < total_quads {
        let take_q = (total_quads - q).min(max_quads);
        let v_start = q * 4;
        let v_count = take_q * 4;
        let mut raw: raylib::ffi::Mesh = unsafe { std::mem::zeroed() };
        raw.vertexCount = v_count as i32;
        raw.triangleCount = (take_q * 2) as i32;
        unsafe {
            let f3_start = v_start * 3;
            let f3_end = f3_start + v_count * 3;
            let col_start = v_start * 4;
            let col_end = col_start + v_count * 4;
            let idx_start = q * 6;
            let idx_end = idx_start + take_q * 6;
            let vbytes = (v_count * 3 * std::mem::size_of::<f32>()) as u32;
            let tbytes = (v_count * 2 * std::mem::size_of::<f32>()) as u32;
            let cbytes = (v_count * 4 * std::mem::size_of::<u8>()) as u32;
            let ibytes = (take_q * 6 * std::mem::size_of::<u16>()) as u32;
            raw.vertices = raylib::ffi::MemAlloc(vbytes) as *mut f32;
            raw.normals = raylib::ffi::MemAlloc(vbytes) as *mut f32;
            raw.texcoords = raylib::ffi::MemAlloc(tbytes) as *mut f32;
            raw.colors = raylib::ffi::MemAlloc(cbytes) as *mut u8;
            raw.indices = raylib::ffi::MemAlloc(ibytes) as *mut u16;
            std::ptr::copy_nonoverlapping(
                cpu.pos[f3_start..f3_end].as_ptr(),
                raw.vertices,
                v_count * 3,
            );
            std::ptr::copy_nonoverlapping(
                cpu.norm[f3_start..f3_end].as_ptr(),
                raw.normals,
                v_count * 3,
            );
            std::ptr::write_bytes(raw.texcoords, 0, v_count * 2);
            std::ptr::copy_nonoverlapping(col[col_start..col_end].as_ptr(), raw.colors, v_count * 4);
            // Rebase indices onto this part; quads never straddle a split.
            for (k, &i) in cpu.idx[idx_start..idx_end].iter().enumerate() {
                *raw.indices.add(k) = (i as usize - v_start) as u16;
            }
        }
        let mut mesh = unsafe { raylib::core::models::Mesh::from_raw(raw) };
        unsafe {
            mesh.upload(false);
        }
        let model = rl
            .load_model_from_mesh(thread, unsafe { mesh.make_weak() })
            .ok()?;
        parts.push(TerrainPart {
            model,
            v_start,
            v_count,
        });
        q += take_q;
    }
    log::info!(
        "uploaded terrain: {} verts, {} faces in {} part(s)",
        total_verts,
        cpu.face_count(),
        parts.len()
    );
    Some(TerrainRender {
        bbox: conv::aabb_to_rl(bbox),
        parts,
        vertex_count: total_verts,
        face_count: cpu.face_count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use terrabar_world::HeightField;

    #[test]
    fn top_faces_are_brighter_than_floor() {
        let up = light_intensity(Vec3::UP, &SCENE_LIGHTS);
        assert!(up > 0.8 && up <= 1.0);
        // -X only sees the first light at a grazing angle.
        let neg_x = light_intensity(Vec3::new(-1.0, 0.0, 0.0), &SCENE_LIGHTS);
        assert!(neg_x < up);
        assert!(neg_x >= LIGHT_FLOOR);
    }

    #[test]
    fn shading_keeps_alpha_and_never_brightens() {
        let hf = HeightField::from_heights(2, vec![1, 2, 3, 4], None).unwrap();
        let mesh = terrabar_mesh_cpu::generate(&hf);
        let flat = mesh.colors_rgba8();
        let shaded = shaded_colors_rgba8(&mesh, &SCENE_LIGHTS);
        assert_eq!(flat.len(), shaded.len());
        for (a, b) in flat.chunks(4).zip(shaded.chunks(4)) {
            assert_eq!(b[3], 255);
            for ch in 0..3 {
                assert!(b[ch] <= a[ch]);
            }
        }
    }
}
