use realm_chunk::BlockGrid;

use crate::face::Face;
use crate::mesh_build::MeshBuild;

/// Where a face's vertex color comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorSource {
    /// The occupied voxel's own palette color (chunked worlds).
    BlockColor,
    /// A fixed color per face direction (flat-world debug mesh).
    FaceDebug,
}

/// Walks every occupied voxel and emits the faces that border empty
/// space: a face is in the output if and only if the neighbor one step
/// along its direction is unoccupied. Neighbors outside the populated
/// extent are indistinguishable from empty, so boundary voxels always
/// emit their outward faces; adjacent chunks each emit their side of a
/// shared seam.
///
/// Voxels are visited in sorted `(x, y, z)` order, so equal grids yield
/// byte-identical buffers regardless of how they were produced.
pub fn build_grid_mesh(grid: &BlockGrid, colors: ColorSource) -> MeshBuild {
    let mut build = MeshBuild::default();
    if grid.is_empty() {
        return build;
    }
    for pos in grid.sorted_positions() {
        let Some(block) = grid.get(pos) else {
            continue;
        };
        for face in Face::ALL {
            let (dx, dy, dz) = face.delta();
            if grid.contains(pos.offset(dx, dy, dz)) {
                continue;
            }
            let color = match colors {
                ColorSource::BlockColor => block,
                ColorSource::FaceDebug => face.debug_color(),
            };
            build.add_face(face, pos, color);
        }
    }
    log::trace!(
        target: "mesh",
        "meshed {} voxels into {} triangles",
        grid.len(),
        build.triangle_count()
    );
    build
}

#[cfg(test)]
mod tests {
    use super::*;
    use realm_blocks::Rgba;
    use realm_geom::VoxelPos;

    fn grid_of(cells: &[(i32, i32, i32)]) -> BlockGrid {
        let mut grid = BlockGrid::new();
        for &(x, y, z) in cells {
            grid.insert(VoxelPos::new(x, y, z), Rgba::rgb(200, 100, 50));
        }
        grid
    }

    #[test]
    fn empty_grid_is_a_valid_no_op() {
        let mb = build_grid_mesh(&BlockGrid::new(), ColorSource::BlockColor);
        assert!(mb.is_empty());
        assert_eq!(mb.triangle_count(), 0);
    }

    #[test]
    fn single_voxel_emits_all_six_faces() {
        let mb = build_grid_mesh(&grid_of(&[(0, 0, 0)]), ColorSource::BlockColor);
        assert_eq!(mb.triangle_count(), 12);
        assert_eq!(mb.vertex_count(), 36);
        assert_eq!(mb.pos.len(), 108);
        assert_eq!(mb.norm.len(), 108);
        assert_eq!(mb.col.len(), 144);
        // Every vertex carries the block's color.
        for c in mb.col.chunks_exact(4) {
            assert_eq!(c, [200, 100, 50, 255]);
        }
        // Each of the six axis normals appears on exactly six vertices.
        for face in Face::ALL {
            let n = face.normal();
            let count = mb
                .norm
                .chunks_exact(3)
                .filter(|v| v[0] == n.x && v[1] == n.y && v[2] == n.z)
                .count();
            assert_eq!(count, 6, "{face:?}");
        }
    }

    #[test]
    fn stacked_pair_suppresses_the_shared_face() {
        let mb = build_grid_mesh(&grid_of(&[(0, 0, 0), (0, 1, 0)]), ColorSource::BlockColor);
        // 12 faces total minus the lower top and the upper bottom.
        assert_eq!(mb.triangle_count(), 20);
        assert_eq!(mb.vertex_count(), 60);
    }

    #[test]
    fn face_debug_colors_each_direction() {
        let mb = build_grid_mesh(&grid_of(&[(0, 0, 0)]), ColorSource::FaceDebug);
        for face in Face::ALL {
            let n = face.normal();
            let want = face.debug_color().channels();
            for (v, c) in mb.norm.chunks_exact(3).zip(mb.col.chunks_exact(4)) {
                if v[0] == n.x && v[1] == n.y && v[2] == n.z {
                    assert_eq!(c, want, "{face:?}");
                }
            }
        }
    }

    #[test]
    fn identical_grids_mesh_identically() {
        // Insert the same cells in different orders; buffers must match.
        let cells = [(0, 0, 0), (1, 0, 0), (1, 1, 0), (5, 2, -3)];
        let mut reversed = cells;
        reversed.reverse();
        let a = build_grid_mesh(&grid_of(&cells), ColorSource::BlockColor);
        let b = build_grid_mesh(&grid_of(&reversed), ColorSource::BlockColor);
        assert_eq!(a, b);
    }
}
