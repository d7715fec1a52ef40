use fastnoise_lite::{FastNoiseLite, NoiseType};

/// Seeded coherent noise, deterministic per seed, range about [-1, 1].
/// The terrain generator treats this as an injected pure function; tests
/// substitute constant stubs.
pub trait NoiseField {
    fn sample2(&self, x: f32, z: f32) -> f32;
    fn sample3(&self, x: f32, y: f32, z: f32) -> f32;
}

/// OpenSimplex2 noise behind the [`NoiseField`] seam.
pub struct TerrainNoise {
    noise: FastNoiseLite,
}

impl TerrainNoise {
    pub fn new(seed: i32, frequency: f32) -> Self {
        let mut noise = FastNoiseLite::with_seed(seed);
        noise.set_noise_type(Some(NoiseType::OpenSimplex2));
        noise.set_frequency(Some(frequency));
        Self { noise }
    }
}

impl NoiseField for TerrainNoise {
    #[inline]
    fn sample2(&self, x: f32, z: f32) -> f32 {
        self.noise.get_noise_2d(x, z)
    }

    #[inline]
    fn sample3(&self, x: f32, y: f32, z: f32) -> f32 {
        self.noise.get_noise_3d(x, y, z)
    }
}
