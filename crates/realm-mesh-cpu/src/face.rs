use realm_blocks::{Rgba, color};
use realm_geom::Vec3;

/// Corner offsets of a unit cube centered at the origin. Indices 0-3 are
/// the bottom ring, 4-7 the top ring, winding around +Y.
pub const CUBE_CORNERS: [Vec3; 8] = [
    Vec3::new(-0.5, -0.5, 0.5),
    Vec3::new(0.5, -0.5, 0.5),
    Vec3::new(0.5, -0.5, -0.5),
    Vec3::new(-0.5, -0.5, -0.5),
    Vec3::new(-0.5, 0.5, 0.5),
    Vec3::new(0.5, 0.5, 0.5),
    Vec3::new(0.5, 0.5, -0.5),
    Vec3::new(-0.5, 0.5, -0.5),
];

/// One of the six axis-aligned cube faces.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    /// Front, +Z.
    PosZ = 0,
    /// Back, -Z.
    NegZ = 1,
    /// Left, -X.
    NegX = 2,
    /// Right, +X.
    PosX = 3,
    /// Top, +Y.
    PosY = 4,
    /// Bottom, -Y.
    NegY = 5,
}

impl Face {
    /// Emission order: front, back, left, right, top, bottom.
    pub const ALL: [Face; 6] = [
        Face::PosZ,
        Face::NegZ,
        Face::NegX,
        Face::PosX,
        Face::PosY,
        Face::NegY,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the unit-normal vector for this face.
    #[inline]
    pub fn normal(self) -> Vec3 {
        match self {
            Face::PosZ => Vec3::new(0.0, 0.0, 1.0),
            Face::NegZ => Vec3::new(0.0, 0.0, -1.0),
            Face::NegX => Vec3::new(-1.0, 0.0, 0.0),
            Face::PosX => Vec3::new(1.0, 0.0, 0.0),
            Face::PosY => Vec3::new(0.0, 1.0, 0.0),
            Face::NegY => Vec3::new(0.0, -1.0, 0.0),
        }
    }

    /// Returns the integer grid delta `(dx,dy,dz)` when stepping out of this face.
    #[inline]
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Face::PosZ => (0, 0, 1),
            Face::NegZ => (0, 0, -1),
            Face::NegX => (-1, 0, 0),
            Face::PosX => (1, 0, 0),
            Face::PosY => (0, 1, 0),
            Face::NegY => (0, -1, 0),
        }
    }

    /// The two triangles of this face as corner indices into
    /// [`CUBE_CORNERS`]. Triangles wind clockwise viewed from outside;
    /// consumers treat clockwise as front-facing.
    #[inline]
    pub fn triangles(self) -> &'static [[usize; 3]; 2] {
        match self {
            Face::PosZ => &[[0, 4, 5], [0, 5, 1]],
            Face::NegZ => &[[2, 6, 7], [2, 7, 3]],
            Face::NegX => &[[3, 7, 4], [3, 4, 0]],
            Face::PosX => &[[1, 5, 6], [1, 6, 2]],
            Face::PosY => &[[4, 7, 6], [4, 6, 5]],
            Face::NegY => &[[3, 0, 1], [3, 1, 2]],
        }
    }

    /// Fixed per-direction color used by the flat-world debug mesh.
    #[inline]
    pub fn debug_color(self) -> Rgba {
        match self {
            Face::PosZ => color::FACE_FRONT,
            Face::NegZ => color::FACE_BACK,
            Face::NegX => color::FACE_LEFT,
            Face::PosX => color::FACE_RIGHT,
            Face::PosY => color::FACE_TOP,
            Face::NegY => color::FACE_BOTTOM,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normals_match_deltas() {
        for face in Face::ALL {
            let n = face.normal();
            let (dx, dy, dz) = face.delta();
            assert_eq!((n.x as i32, n.y as i32, n.z as i32), (dx, dy, dz));
        }
    }

    #[test]
    fn triangle_corners_lie_on_the_face_plane() {
        for face in Face::ALL {
            let n = face.normal();
            for tri in face.triangles() {
                for &i in tri {
                    let c = CUBE_CORNERS[i];
                    // Every corner of a face sits half a unit along the normal.
                    let d = c.x * n.x + c.y * n.y + c.z * n.z;
                    assert_eq!(d, 0.5, "{face:?} corner {i}");
                }
            }
        }
    }

    #[test]
    fn winding_is_consistent_across_faces() {
        // Every triangle winds clockwise viewed from outside its face.
        for face in Face::ALL {
            let n = face.normal();
            for tri in face.triangles() {
                let [a, b, c] = [
                    CUBE_CORNERS[tri[0]],
                    CUBE_CORNERS[tri[1]],
                    CUBE_CORNERS[tri[2]],
                ];
                let e1 = b - a;
                let e2 = c - a;
                let cross = Vec3::new(
                    e1.y * e2.z - e1.z * e2.y,
                    e1.z * e2.x - e1.x * e2.z,
                    e1.x * e2.y - e1.y * e2.x,
                );
                let dot = cross.x * n.x + cross.y * n.y + cross.z * n.z;
                assert!(dot < 0.0, "{face:?} flips orientation");
            }
        }
    }
}
