use crate::noise::TerrainNoise;

/// Per-worker generation context. Each worker owns one; the noise
/// instances inside are never shared across threads.
pub struct GenCtx {
    pub terrain: TerrainNoise,
}

impl GenCtx {
    pub fn new(seed: i32, frequency: f32) -> Self {
        Self {
            terrain: TerrainNoise::new(seed, frequency),
        }
    }
}
