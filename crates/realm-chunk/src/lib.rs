//! Sparse block grids and noise-driven chunk population.
#![forbid(unsafe_code)]

use hashbrown::HashMap;

use realm_blocks::{Palette, Rgba};
use realm_geom::VoxelPos;
use realm_world::{ChunkCoord, GenCtx, NoiseField, World, height_at};

/// Sparse voxel store: coordinate -> block color. Presence in the map IS
/// occupancy; there is no separate existence flag. Owned exclusively by
/// one chunk (or by the whole world in flat mode), written once during
/// population and read-only during meshing.
#[derive(Clone, Debug, Default)]
pub struct BlockGrid {
    cells: HashMap<VoxelPos, Rgba>,
}

impl BlockGrid {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn insert(&mut self, pos: VoxelPos, color: Rgba) {
        self.cells.insert(pos, color);
    }

    #[inline]
    pub fn get(&self, pos: VoxelPos) -> Option<Rgba> {
        self.cells.get(&pos).copied()
    }

    #[inline]
    pub fn contains(&self, pos: VoxelPos) -> bool {
        self.cells.contains_key(&pos)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (VoxelPos, Rgba)> + '_ {
        self.cells.iter().map(|(p, c)| (*p, *c))
    }

    /// Occupied positions ordered by `(x, y, z)`. Hash iteration order is
    /// nondeterministic; the mesher walks this instead so equal grids
    /// always produce identical buffers.
    pub fn sorted_positions(&self) -> Vec<VoxelPos> {
        let mut keys: Vec<VoxelPos> = self.cells.keys().copied().collect();
        keys.sort_unstable();
        keys
    }
}

/// One chunk of the world: lattice coordinate, world-space origin, and
/// its private grid. Generated once; there is no edit or regenerate path.
#[derive(Clone, Debug)]
pub struct Chunk {
    pub coord: ChunkCoord,
    pub origin: VoxelPos,
    pub grid: BlockGrid,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChunkOccupancy {
    Empty,
    Populated,
}

impl ChunkOccupancy {
    #[inline]
    pub fn has_blocks(self) -> bool {
        matches!(self, ChunkOccupancy::Populated)
    }
}

#[derive(Clone, Debug)]
pub struct ChunkGenerateResult {
    pub chunk: Chunk,
    pub occupancy: ChunkOccupancy,
}

/// Fills `grid` with terrain columns over an `sx` by `sz` footprint.
///
/// For each column the fractal height is sampled at the global planar
/// coordinate; a column whose surface lies below the grid origin's Y is
/// skipped entirely (the grid sits above the terrain there). Otherwise
/// blocks are stacked from local y = 0 while `y < min(local_height, y_cap)`,
/// cycling the palette per layer. The bound is fractional, matching the
/// original loop: a local height of 4.3 yields five layers.
fn fill_columns<N: NoiseField>(
    grid: &mut BlockGrid,
    sx: usize,
    sz: usize,
    y_cap: usize,
    origin: VoxelPos,
    max_height: f32,
    noise: &N,
    palette: &Palette,
) {
    for x in 0..sx as i32 {
        for z in 0..sz as i32 {
            let gx = (x + origin.x) as f32;
            let gz = (z + origin.z) as f32;
            let height = height_at(noise, gx, gz, max_height);
            if height < origin.y as f32 {
                continue;
            }
            let local_height = height - origin.y as f32;
            let top = local_height.min(y_cap as f32).ceil() as i32;
            for y in 0..top {
                grid.insert(VoxelPos::new(x, y, z), palette.color_for_layer(y as usize));
            }
        }
    }
}

/// Populates a cubic chunk grid of edge `size` at world-space `origin`.
pub fn populate_grid<N: NoiseField>(
    grid: &mut BlockGrid,
    size: usize,
    origin: VoxelPos,
    max_height: f32,
    noise: &N,
    palette: &Palette,
) {
    fill_columns(grid, size, size, size, origin, max_height, noise, palette);
}

/// Generates one chunk: fresh grid, populated, with occupancy derived.
pub fn generate_chunk(
    world: &World,
    ctx: &GenCtx,
    coord: ChunkCoord,
    palette: &Palette,
) -> ChunkGenerateResult {
    let (ox, oy, oz) = coord.origin(world.chunk_size);
    let origin = VoxelPos::new(ox, oy, oz);
    let mut grid = BlockGrid::new();
    populate_grid(
        &mut grid,
        world.chunk_size,
        origin,
        world.max_height,
        &ctx.terrain,
        palette,
    );
    let occupancy = if grid.is_empty() {
        ChunkOccupancy::Empty
    } else {
        ChunkOccupancy::Populated
    };
    ChunkGenerateResult {
        chunk: Chunk {
            coord,
            origin,
            grid,
        },
        occupancy,
    }
}

/// Flat-mode population: one grid spanning the entire world volume,
/// anchored at the origin.
pub fn generate_world_grid(world: &World, ctx: &GenCtx, palette: &Palette) -> BlockGrid {
    let mut grid = BlockGrid::new();
    fill_columns(
        &mut grid,
        world.dims_x,
        world.dims_z,
        world.dims_y,
        VoxelPos::new(0, 0, 0),
        world.max_height,
        &ctx.terrain,
        palette,
    );
    grid
}
