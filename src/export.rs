//! Wavefront OBJ dump of the built mesh buffers.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use realm_runtime::WorldBuild;

/// Writes the build as triangle soup: positions with per-vertex colors
/// (the widespread `v x y z r g b` extension), face normals, and `f`
/// rows indexing both. Chunk-local positions are placed at each part's
/// world-space origin.
pub fn write_obj(path: &Path, build: &WorldBuild) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "o realm")?;
    let mut base = 1usize; // OBJ indices are 1-based
    for (origin, mesh) in build.parts() {
        for (v, c) in mesh.pos.chunks_exact(3).zip(mesh.col.chunks_exact(4)) {
            writeln!(
                w,
                "v {} {} {} {:.4} {:.4} {:.4}",
                v[0] + origin.x as f32,
                v[1] + origin.y as f32,
                v[2] + origin.z as f32,
                f32::from(c[0]) / 255.0,
                f32::from(c[1]) / 255.0,
                f32::from(c[2]) / 255.0,
            )?;
        }
        for n in mesh.norm.chunks_exact(3) {
            writeln!(w, "vn {} {} {}", n[0], n[1], n[2])?;
        }
        for t in 0..mesh.triangle_count() {
            let i = base + t * 3;
            writeln!(w, "f {}//{} {}//{} {}//{}", i, i, i + 1, i + 1, i + 2, i + 2)?;
        }
        base += mesh.vertex_count();
    }
    w.flush()
}
