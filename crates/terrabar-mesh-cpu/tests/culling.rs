use terrabar_geom::Vec3;
use terrabar_mesh_cpu::{Face, TerrainMesh, generate};
use terrabar_world::HeightField;

fn row(heights: &[u8]) -> HeightField {
    // A 1-wide strip padded into a square grid; the remaining rows are zero.
    let n = heights.len();
    let mut hf = HeightField::new(n, 0);
    for (x, &h) in heights.iter().enumerate() {
        hf.set_height(x, 0, h);
    }
    hf
}

/// Faces whose every vertex lies on the plane `x = plane_x`.
fn faces_on_x_plane(mesh: &TerrainMesh, plane_x: f32) -> Vec<Face> {
    (0..mesh.face_count())
        .filter(|f| (0..4).all(|k| mesh.vertex(f * 4 + k).x == plane_x))
        .filter_map(|f| Face::from_normal(mesh.normal(f * 4)))
        .filter(|f| matches!(f, Face::NegX | Face::PosX))
        .collect()
}

#[test]
fn equal_neighbors_share_no_wall() {
    let mesh = generate(&row(&[4, 4]));
    assert!(faces_on_x_plane(&mesh, 1.0).is_empty());
}

#[test]
fn only_the_taller_column_draws_the_shared_wall() {
    let mesh = generate(&row(&[6, 2]));
    assert_eq!(faces_on_x_plane(&mesh, 1.0), vec![Face::PosX]);

    let mesh = generate(&row(&[2, 6]));
    assert_eq!(faces_on_x_plane(&mesh, 1.0), vec![Face::NegX]);
}

#[test]
fn shared_wall_spans_the_taller_column() {
    let mesh = generate(&row(&[6, 2]));
    let wall = (0..mesh.face_count())
        .find(|f| {
            (0..4).all(|k| mesh.vertex(f * 4 + k).x == 1.0)
                && mesh.normal(f * 4) == Vec3::new(1.0, 0.0, 0.0)
        })
        .unwrap();
    let zs: Vec<f32> = (0..4).map(|k| mesh.vertex(wall * 4 + k).z).collect();
    assert_eq!(zs, vec![7.0, 7.0, 0.0, 0.0]);
}

#[test]
fn perimeter_walls_are_always_present() {
    // Zero-height grid: no interior walls, every boundary edge still closed.
    let n = 5;
    let mesh = generate(&HeightField::new(n, 0));
    assert_eq!(mesh.face_count(), 2 * n * n + 4 * n);
    assert_eq!(faces_on_x_plane(&mesh, 0.0).len(), n);
    assert_eq!(faces_on_x_plane(&mesh, n as f32).len(), n);
}

#[test]
fn canonical_fixture_counts() {
    let hf = HeightField::from_heights(2, vec![0, 0, 0, 5], None).unwrap();
    let mesh = generate(&hf);
    assert_eq!(mesh.face_count(), 18);
    assert_eq!(mesh.positions().len(), 18 * 4 * 3);
    assert_eq!(mesh.indices().len(), 18 * 6);
    assert_eq!(*mesh.indices().iter().max().unwrap(), 71);
}
