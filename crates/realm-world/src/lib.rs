//! World descriptor, generation parameters, and the terrain height field.
#![forbid(unsafe_code)]

mod chunk_coord;
mod gen_ctx;
mod noise;
mod params;
mod terrain;
mod world;

pub use chunk_coord::ChunkCoord;
pub use gen_ctx::GenCtx;
pub use noise::{NoiseField, TerrainNoise};
pub use params::{Mode, WorldParams, load_params_from_path};
pub use terrain::height_at;
pub use world::{ConfigError, World, WorldMode};
