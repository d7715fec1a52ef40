use thiserror::Error;

use crate::gen_ctx::GenCtx;
use crate::params::{Mode, WorldParams};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("chunk size must be positive")]
    ZeroChunkSize,
    #[error("world dimension {axis} must be positive")]
    ZeroDim { axis: char },
    #[error(
        "world dimension {axis} = {dim} is not a multiple of chunk size {chunk_size}; \
         the chunk lattice would silently truncate the world"
    )]
    DimsNotMultiple {
        axis: char,
        dim: usize,
        chunk_size: usize,
    },
    #[error("max height must be positive, got {value}")]
    BadMaxHeight { value: f32 },
    #[error("failed to read world config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse world config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WorldMode {
    /// One sparse grid and one mesh per chunk.
    Chunked,
    /// A single grid and mesh spanning the whole volume.
    Flat,
}

impl From<Mode> for WorldMode {
    fn from(value: Mode) -> Self {
        match value {
            Mode::Chunked => WorldMode::Chunked,
            Mode::Flat => WorldMode::Flat,
        }
    }
}

/// Immutable world descriptor shared read-only across generation workers.
#[derive(Debug)]
pub struct World {
    pub chunk_size: usize,
    pub dims_x: usize,
    pub dims_y: usize,
    pub dims_z: usize,
    pub chunks_x: usize,
    pub chunks_y: usize,
    pub chunks_z: usize,
    pub seed: i32,
    pub mode: WorldMode,
    pub max_height: f32,
    pub frequency: f32,
}

impl World {
    /// Validates the configuration up front; nothing past this point may
    /// fail on bad dimensions mid-generation.
    pub fn new(
        dims: [usize; 3],
        chunk_size: usize,
        seed: i32,
        mode: WorldMode,
        max_height: f32,
        frequency: f32,
    ) -> Result<Self, ConfigError> {
        if chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }
        for (axis, dim) in ['x', 'y', 'z'].into_iter().zip(dims) {
            if dim == 0 {
                return Err(ConfigError::ZeroDim { axis });
            }
            if mode == WorldMode::Chunked && dim % chunk_size != 0 {
                return Err(ConfigError::DimsNotMultiple {
                    axis,
                    dim,
                    chunk_size,
                });
            }
        }
        if !(max_height > 0.0) {
            return Err(ConfigError::BadMaxHeight { value: max_height });
        }
        let [dims_x, dims_y, dims_z] = dims;
        Ok(Self {
            chunk_size,
            dims_x,
            dims_y,
            dims_z,
            chunks_x: dims_x / chunk_size,
            chunks_y: dims_y / chunk_size,
            chunks_z: dims_z / chunk_size,
            seed,
            mode,
            max_height,
            frequency,
        })
    }

    pub fn from_params(params: &WorldParams) -> Result<Self, ConfigError> {
        let max_height = params.dims[1] as f32 * params.max_height_ratio;
        World::new(
            params.dims,
            params.chunk_size,
            params.seed,
            params.mode.into(),
            max_height,
            params.frequency,
        )
    }

    #[inline]
    pub fn chunk_count(&self) -> usize {
        self.chunks_x * self.chunks_y * self.chunks_z
    }

    #[inline]
    pub fn is_flat(&self) -> bool {
        self.mode == WorldMode::Flat
    }

    /// Builds a per-worker generation context. Seeding is explicit here;
    /// an unseeded noise source cannot reach the populator.
    pub fn make_gen_ctx(&self) -> GenCtx {
        GenCtx::new(self.seed, self.frequency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_chunk_size() {
        let err = World::new([16, 16, 16], 0, 1, WorldMode::Chunked, 16.0, 0.01).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroChunkSize));
    }

    #[test]
    fn rejects_zero_dim() {
        let err = World::new([16, 0, 16], 8, 1, WorldMode::Chunked, 16.0, 0.01).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroDim { axis: 'y' }));
    }

    #[test]
    fn rejects_non_multiple_dims_when_chunked() {
        let err = World::new([20, 16, 16], 8, 1, WorldMode::Chunked, 16.0, 0.01).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::DimsNotMultiple {
                axis: 'x',
                dim: 20,
                chunk_size: 8
            }
        ));
        // The flat variant has no chunk lattice to truncate.
        assert!(World::new([20, 16, 16], 8, 1, WorldMode::Flat, 16.0, 0.01).is_ok());
    }

    #[test]
    fn rejects_non_positive_max_height() {
        for bad in [0.0, -4.0, f32::NAN] {
            let err = World::new([16, 16, 16], 8, 1, WorldMode::Chunked, bad, 0.01).unwrap_err();
            assert!(matches!(err, ConfigError::BadMaxHeight { .. }));
        }
    }

    #[test]
    fn derives_chunk_counts() {
        let w = World::new([128, 64, 128], 16, 9, WorldMode::Chunked, 64.0, 0.01).unwrap();
        assert_eq!((w.chunks_x, w.chunks_y, w.chunks_z), (8, 4, 8));
        assert_eq!(w.chunk_count(), 256);
    }
}
