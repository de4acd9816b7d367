use terrabar_geom::Vec3;

/// The six axis-aligned faces of a unit column. Z is up.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    NegX = 0,
    PosX = 1,
    NegY = 2,
    PosY = 3,
    NegZ = 4,
    PosZ = 5,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::NegX,
        Face::PosX,
        Face::NegY,
        Face::PosY,
        Face::NegZ,
        Face::PosZ,
    ];

    /// Returns the `[0..6)` index of this face.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the integer grid delta `(dx,dy,dz)` when stepping out of this face.
    #[inline]
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Face::NegX => (-1, 0, 0),
            Face::PosX => (1, 0, 0),
            Face::NegY => (0, -1, 0),
            Face::PosY => (0, 1, 0),
            Face::NegZ => (0, 0, -1),
            Face::PosZ => (0, 0, 1),
        }
    }

    /// Returns the unit-normal vector for this face.
    #[inline]
    pub fn normal(self) -> Vec3 {
        let (dx, dy, dz) = self.delta();
        Vec3::new(dx as f32, dy as f32, dz as f32)
    }

    /// Inverse of [`Face::normal`] for exact axis unit vectors.
    pub fn from_normal(n: Vec3) -> Option<Face> {
        Face::ALL.into_iter().find(|f| f.normal() == n)
    }

    /// Top and bottom caps never depend on a neighbor.
    #[inline]
    pub fn is_vertical_cap(self) -> bool {
        matches!(self, Face::NegZ | Face::PosZ)
    }
}

/// One face of a unit column: its orientation plus 4 unit-square corners in
/// the column's local frame.
///
/// Corners are wound so that the triangles `(0,1,2)` and `(2,1,3)` both face
/// along `face.normal()`. A local `z` of 1 marks a top corner.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FaceDesc {
    pub face: Face,
    pub corners: [[u8; 3]; 4],
}

impl FaceDesc {
    #[inline]
    pub fn normal(&self) -> Vec3 {
        self.face.normal()
    }
}

/// Bottom then top; emitted for every column.
pub const Z_FACES: [FaceDesc; 2] = [
    FaceDesc {
        face: Face::NegZ,
        corners: [[1, 0, 0], [0, 0, 0], [1, 1, 0], [0, 1, 0]],
    },
    FaceDesc {
        face: Face::PosZ,
        corners: [[0, 0, 1], [1, 0, 1], [0, 1, 1], [1, 1, 1]],
    },
];

/// Side faces; each is emitted only when the neighbor across it is strictly shorter.
pub const XY_FACES: [FaceDesc; 4] = [
    FaceDesc {
        face: Face::NegX,
        corners: [[0, 1, 0], [0, 0, 0], [0, 1, 1], [0, 0, 1]],
    },
    FaceDesc {
        face: Face::PosX,
        corners: [[1, 1, 1], [1, 0, 1], [1, 1, 0], [1, 0, 0]],
    },
    FaceDesc {
        face: Face::NegY,
        corners: [[1, 0, 1], [0, 0, 1], [1, 0, 0], [0, 0, 0]],
    },
    FaceDesc {
        face: Face::PosY,
        corners: [[0, 1, 1], [1, 1, 1], [0, 1, 0], [1, 1, 0]],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::QUAD_TRIANGLES;

    fn corner(c: [u8; 3]) -> Vec3 {
        Vec3::new(c[0] as f32, c[1] as f32, c[2] as f32)
    }

    fn all_descs() -> impl Iterator<Item = FaceDesc> {
        Z_FACES.into_iter().chain(XY_FACES)
    }

    #[test]
    fn table_covers_each_face_once() {
        let mut seen = [false; 6];
        for d in all_descs() {
            assert!(!seen[d.face.index()], "{:?} listed twice", d.face);
            seen[d.face.index()] = true;
        }
        assert!(seen.iter().all(|&s| s));
        assert!(Z_FACES.iter().all(|d| d.face.is_vertical_cap()));
        assert!(XY_FACES.iter().all(|d| !d.face.is_vertical_cap()));
    }

    #[test]
    fn triangles_wind_toward_normal() {
        for d in all_descs() {
            for tri in QUAD_TRIANGLES.chunks(3) {
                let a = corner(d.corners[tri[0] as usize]);
                let b = corner(d.corners[tri[1] as usize]);
                let c = corner(d.corners[tri[2] as usize]);
                let n = (b - a).cross(c - a);
                assert_eq!(n.normalized(), d.normal(), "{:?} tri {:?}", d.face, tri);
            }
        }
    }

    #[test]
    fn corners_lie_on_the_face_plane() {
        for d in all_descs() {
            let n = d.normal();
            // Outward faces sit on the far side of the unit cell.
            let plane = if n.x + n.y + n.z > 0.0 { 1.0 } else { 0.0 };
            for c in d.corners {
                assert_eq!(corner(c).dot(n).abs(), plane, "{:?}", d.face);
            }
        }
    }

    #[test]
    fn side_faces_span_bottom_and_top() {
        for d in XY_FACES {
            let tops = d.corners.iter().filter(|c| c[2] == 1).count();
            assert_eq!(tops, 2, "{:?}", d.face);
        }
    }

    #[test]
    fn from_normal_inverts_normal() {
        for f in Face::ALL {
            assert_eq!(Face::from_normal(f.normal()), Some(f));
        }
        assert_eq!(Face::from_normal(Vec3::new(0.5, 0.5, 0.0)), None);
    }
}
