//! World generation orchestration: a serial sweep over the chunk
//! lattice, and the primary 4-way quadrant split on a fixed worker pool.
#![forbid(unsafe_code)]

use std::ops::Range;
use std::sync::Arc;
use std::time::Instant;

use crossbeam_channel::unbounded;
use rayon::ThreadPoolBuilder;
use thiserror::Error;

use realm_blocks::Palette;
use realm_chunk::{ChunkOccupancy, generate_chunk, generate_world_grid};
use realm_geom::VoxelPos;
use realm_mesh_cpu::{ColorSource, MeshBuild, build_grid_mesh};
use realm_world::{ChunkCoord, GenCtx, World, WorldMode};

/// Fixed pool width for the quadrant strategy: the X-Z plane splits
/// into four regions, one worker each. No work stealing, no rebalance.
pub const QUADRANT_WORKERS: usize = 4;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("worker pool unavailable: {0}")]
    Pool(String),
    #[error("quadrant {quadrant} worker exited before reporting its chunks")]
    WorkerLost { quadrant: usize },
    #[error("generation failed in {} of 4 quadrants", .0.len())]
    Aggregate(Vec<GenError>),
}

/// One generated chunk: lattice coordinate, world-space origin, block
/// count and occupancy from population, and the meshed buffers. Mesh
/// positions are chunk-local; consumers place them at `origin`.
#[derive(Clone, Debug)]
pub struct BuiltChunk {
    pub coord: ChunkCoord,
    pub origin: VoxelPos,
    pub occupancy: ChunkOccupancy,
    pub blocks: usize,
    pub mesh: MeshBuild,
}

/// Flat-mode output: the whole volume as one grid and one mesh.
#[derive(Clone, Debug)]
pub struct FlatBuild {
    pub blocks: usize,
    pub mesh: MeshBuild,
}

/// The coordinator's joined output. Returned only after every worker
/// has reported; there is no partially-ready state.
pub enum WorldBuild {
    Chunked(Vec<BuiltChunk>),
    Flat(FlatBuild),
}

impl WorldBuild {
    /// Mesh parts with their world-space placement offsets.
    pub fn parts(&self) -> Vec<(VoxelPos, &MeshBuild)> {
        match self {
            WorldBuild::Chunked(chunks) => {
                chunks.iter().map(|c| (c.origin, &c.mesh)).collect()
            }
            WorldBuild::Flat(flat) => vec![(VoxelPos::new(0, 0, 0), &flat.mesh)],
        }
    }

    pub fn total_blocks(&self) -> usize {
        match self {
            WorldBuild::Chunked(chunks) => chunks.iter().map(|c| c.blocks).sum(),
            WorldBuild::Flat(flat) => flat.blocks,
        }
    }

    pub fn total_triangles(&self) -> usize {
        self.parts().iter().map(|(_, m)| m.triangle_count()).sum()
    }

    pub fn total_vertices(&self) -> usize {
        self.parts().iter().map(|(_, m)| m.vertex_count()).sum()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenStrategy {
    /// Triple nested sweep over all chunk coordinates on this thread.
    Serial,
    /// Four workers, one disjoint X-Z quadrant of the lattice each.
    Quadrants,
}

/// Generates and meshes one chunk.
fn build_chunk(world: &World, ctx: &GenCtx, coord: ChunkCoord, palette: &Palette) -> BuiltChunk {
    let generated = generate_chunk(world, ctx, coord, palette);
    let mesh = build_grid_mesh(&generated.chunk.grid, ColorSource::BlockColor);
    BuiltChunk {
        coord,
        origin: generated.chunk.origin,
        occupancy: generated.occupancy,
        blocks: generated.chunk.grid.len(),
        mesh,
    }
}

/// Sweeps a sub-lattice of chunk coordinates, all Y layers included.
/// Each call owns its grids and generation context outright.
fn build_range(
    world: &World,
    palette: &Palette,
    xs: Range<usize>,
    zs: Range<usize>,
) -> Vec<BuiltChunk> {
    let ctx = world.make_gen_ctx();
    let mut out = Vec::with_capacity(xs.len() * zs.len() * world.chunks_y);
    for cx in xs {
        for cz in zs.clone() {
            for cy in 0..world.chunks_y {
                let coord = ChunkCoord::new(cx as i32, cy as i32, cz as i32);
                out.push(build_chunk(world, &ctx, coord, palette));
            }
        }
    }
    out
}

/// The four disjoint X-Z ranges, halving each axis. Odd counts leave
/// the larger half on the high side.
fn quadrant_ranges(chunks_x: usize, chunks_z: usize) -> [(Range<usize>, Range<usize>); 4] {
    let hx = chunks_x / 2;
    let hz = chunks_z / 2;
    [
        (0..hx, 0..hz),
        (hx..chunks_x, 0..hz),
        (0..hx, hz..chunks_z),
        (hx..chunks_x, hz..chunks_z),
    ]
}

fn generate_chunked_serial(world: &World, palette: &Palette) -> Vec<BuiltChunk> {
    build_range(world, palette, 0..world.chunks_x, 0..world.chunks_z)
}

fn generate_chunked_quadrants(
    world: &Arc<World>,
    palette: &Arc<Palette>,
) -> Result<Vec<BuiltChunk>, GenError> {
    let pool = ThreadPoolBuilder::new()
        .num_threads(QUADRANT_WORKERS)
        .thread_name(|i| format!("realm-gen-{i}"))
        .panic_handler(|_| log::error!(target: "gen", "generation worker panicked"))
        .build()
        .map_err(|e| GenError::Pool(e.to_string()))?;

    struct QuadrantOut {
        quadrant: usize,
        chunks: Vec<BuiltChunk>,
        elapsed_ms: u128,
    }

    let (tx, rx) = unbounded::<QuadrantOut>();
    for (quadrant, (xs, zs)) in quadrant_ranges(world.chunks_x, world.chunks_z)
        .into_iter()
        .enumerate()
    {
        let tx = tx.clone();
        let world = Arc::clone(world);
        let palette = Arc::clone(palette);
        pool.spawn(move || {
            let t0 = Instant::now();
            let chunks = build_range(&world, &palette, xs, zs);
            let _ = tx.send(QuadrantOut {
                quadrant,
                chunks,
                elapsed_ms: t0.elapsed().as_millis(),
            });
        });
    }
    drop(tx);

    // Join: block until every quadrant reports. A worker that dies
    // without sending shows up as a channel disconnect once the
    // remaining senders are gone.
    let mut reported = [false; QUADRANT_WORKERS];
    let mut chunks = Vec::new();
    while let Ok(out) = rx.recv() {
        log::info!(
            target: "gen",
            "quadrant {} done: {} chunks in {} ms",
            out.quadrant,
            out.chunks.len(),
            out.elapsed_ms
        );
        reported[out.quadrant] = true;
        chunks.extend(out.chunks);
    }

    let mut lost: Vec<GenError> = reported
        .iter()
        .enumerate()
        .filter(|(_, ok)| !**ok)
        .map(|(quadrant, _)| GenError::WorkerLost { quadrant })
        .collect();
    match lost.len() {
        0 => Ok(chunks),
        1 => Err(lost.remove(0)),
        _ => Err(GenError::Aggregate(lost)),
    }
}

/// Runs population and meshing for the whole world and blocks until
/// every chunk is built. One-shot: there is no regenerate path.
pub fn generate_world(
    world: &Arc<World>,
    palette: &Arc<Palette>,
    strategy: GenStrategy,
) -> Result<WorldBuild, GenError> {
    let t0 = Instant::now();
    let build = match world.mode {
        WorldMode::Flat => {
            let ctx = world.make_gen_ctx();
            let grid = generate_world_grid(world, &ctx, palette);
            let blocks = grid.len();
            let mesh = build_grid_mesh(&grid, ColorSource::FaceDebug);
            WorldBuild::Flat(FlatBuild { blocks, mesh })
        }
        WorldMode::Chunked => {
            let mut chunks = match strategy {
                GenStrategy::Serial => generate_chunked_serial(world, palette),
                GenStrategy::Quadrants => generate_chunked_quadrants(world, palette)?,
            };
            // Workers deliver in completion order; normalize so equal
            // configurations compare equal across strategies.
            chunks.sort_unstable_by_key(|c| c.coord);
            WorldBuild::Chunked(chunks)
        }
    };
    log::info!(
        target: "gen",
        "world ready: {} blocks, {} triangles in {} ms",
        build.total_blocks(),
        build.total_triangles(),
        t0.elapsed().as_millis()
    );
    Ok(build)
}
