use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::world::ConfigError;

#[derive(Clone, Debug, Deserialize)]
pub struct WorldParams {
    #[serde(default = "default_seed")]
    pub seed: i32,
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    #[serde(default = "default_dims")]
    pub dims: [usize; 3],
    #[serde(default = "default_mode")]
    pub mode: Mode,
    /// Max terrain height as a fraction of the world's Y extent.
    #[serde(default = "default_max_height_ratio")]
    pub max_height_ratio: f32,
    #[serde(default = "default_frequency")]
    pub frequency: f32,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Chunked,
    Flat,
}

fn default_seed() -> i32 {
    1337
}
fn default_chunk_size() -> usize {
    16
}
fn default_dims() -> [usize; 3] {
    [128, 64, 128]
}
fn default_mode() -> Mode {
    Mode::Chunked
}
fn default_max_height_ratio() -> f32 {
    1.0
}
fn default_frequency() -> f32 {
    0.01
}

impl Default for WorldParams {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            chunk_size: default_chunk_size(),
            dims: default_dims(),
            mode: default_mode(),
            max_height_ratio: default_max_height_ratio(),
            frequency: default_frequency(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct WorldFileConfig {
    #[serde(default)]
    world: Option<WorldParams>,
}

pub fn load_params_from_path(path: &Path) -> Result<WorldParams, ConfigError> {
    let text = fs::read_to_string(path)?;
    let cfg: WorldFileConfig = toml::from_str(&text)?;
    Ok(cfg.world.unwrap_or_default())
}
