use proptest::prelude::*;
use terrabar_mesh_cpu::{Face, MeshOptions, TerrainMesh, generate, generate_with};
use terrabar_world::HeightField;

fn arb_field() -> impl Strategy<Value = HeightField> {
    (1usize..10).prop_flat_map(|n| {
        proptest::collection::vec(0u8..24, n * n)
            .prop_map(move |hs| HeightField::from_heights(n, hs, None).unwrap())
    })
}

/// `(face, cell_x, cell_y)` for every quad, recovered from its vertices.
fn decode_faces(mesh: &TerrainMesh) -> Vec<(Face, i32, i32)> {
    (0..mesh.face_count())
        .map(|f| {
            let v0 = f * 4;
            let face = Face::from_normal(mesh.normal(v0)).expect("axis normal");
            let min_x = (0..4).map(|k| mesh.vertex(v0 + k).x).fold(f32::MAX, f32::min);
            let min_y = (0..4).map(|k| mesh.vertex(v0 + k).y).fold(f32::MAX, f32::min);
            let mut cx = min_x as i32;
            let mut cy = min_y as i32;
            if face == Face::PosX {
                cx -= 1;
            }
            if face == Face::PosY {
                cy -= 1;
            }
            (face, cx, cy)
        })
        .collect()
}

proptest! {
    #[test]
    fn buffers_stay_parallel(hf in arb_field()) {
        let mesh = generate(&hf);
        prop_assert_eq!(mesh.positions().len(), mesh.normals().len());
        prop_assert_eq!(mesh.positions().len(), mesh.colors().len());
        prop_assert_eq!(mesh.positions().len() % 3, 0);
        prop_assert_eq!(mesh.indices().len() % 6, 0);
        let vc = mesh.vertex_count() as u32;
        prop_assert!(mesh.indices().iter().all(|&i| i < vc));
        prop_assert_eq!(mesh.vertex_count(), mesh.face_count() * 4);
    }

    #[test]
    fn normals_are_unit_axes_and_colors_in_range(hf in arb_field()) {
        let mesh = generate(&hf);
        for n in mesh.normals().chunks(3) {
            let abs_sum: f32 = n.iter().map(|c| c.abs()).sum();
            prop_assert_eq!(abs_sum, 1.0);
        }
        prop_assert!(mesh.colors().iter().all(|c| (0.0..=1.0).contains(c)));
    }

    // Every triangle's geometric normal agrees with the stored face normal.
    #[test]
    fn triangles_face_outward(hf in arb_field()) {
        let mesh = generate(&hf);
        for tri in mesh.indices().chunks(3) {
            let a = mesh.vertex(tri[0] as usize);
            let b = mesh.vertex(tri[1] as usize);
            let c = mesh.vertex(tri[2] as usize);
            let geo = (b - a).cross(c - a);
            prop_assert!(geo.dot(mesh.normal(tri[0] as usize)) > 0.0);
        }
    }

    // Side faces exist exactly where the neighbor (or the void) is strictly shorter.
    #[test]
    fn side_faces_follow_culling_rule(hf in arb_field()) {
        let faces = decode_faces(&generate(&hf));
        let n = hf.size() as i32;
        for y in 0..n {
            for x in 0..n {
                let h = hf.get_height(x, y);
                for face in [Face::NegX, Face::PosX, Face::NegY, Face::PosY] {
                    let (dx, dy, _) = face.delta();
                    let want = hf.get_height(x + dx, y + dy) < h;
                    let count = faces.iter().filter(|f| **f == (face, x, y)).count();
                    prop_assert_eq!(count, usize::from(want), "{:?} at ({}, {})", face, x, y);
                }
                for cap in [Face::NegZ, Face::PosZ] {
                    let count = faces.iter().filter(|f| **f == (cap, x, y)).count();
                    prop_assert_eq!(count, 1);
                }
            }
        }
    }

    #[test]
    fn generate_is_idempotent(hf in arb_field(), top_offset in 0u8..3) {
        let opts = MeshOptions { top_offset };
        prop_assert_eq!(generate_with(&hf, &opts), generate_with(&hf, &opts));
    }

    #[test]
    fn flat_field_face_count(n in 1usize..16, h in 1u8..=255) {
        let hf = HeightField::from_heights(n, vec![h; n * n], None).unwrap();
        prop_assert_eq!(generate(&hf).face_count(), 2 * n * n + 4 * n);
    }
}
