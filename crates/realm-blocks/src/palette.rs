use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::color::Rgba;

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("palette must contain at least one color")]
    Empty,
    #[error("palette entry {entry:?} is not a #rrggbb / #rrggbbaa color")]
    BadColor { entry: String },
    #[error("failed to read palette config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse palette config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Ordered, non-empty set of layer colors. Terrain columns cycle through
/// it bottom-up, so `colors[y % len]` is always in range.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<Rgba>,
}

impl Palette {
    pub fn new(colors: Vec<Rgba>) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        Ok(Self { colors })
    }

    /// Earthy default ramp used when no config file is given.
    pub fn default_terrain() -> Self {
        Self {
            colors: vec![
                Rgba::rgb(0x4a, 0x36, 0x28),
                Rgba::rgb(0x6b, 0x4f, 0x33),
                Rgba::rgb(0x8a, 0x6d, 0x45),
                Rgba::rgb(0x4f, 0x7a, 0x36),
                Rgba::rgb(0x3d, 0x94, 0x3d),
            ],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false // non-emptiness is a construction invariant
    }

    /// Color for local layer `y`, cycling through the palette.
    #[inline]
    pub fn color_for_layer(&self, y: usize) -> Rgba {
        self.colors[y % self.colors.len()]
    }

    #[inline]
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }
}

#[derive(Debug, Deserialize)]
pub struct PaletteConfig {
    pub palette: Option<PaletteSection>,
}

#[derive(Debug, Deserialize)]
pub struct PaletteSection {
    #[serde(default)]
    pub colors: Vec<String>,
}

impl Palette {
    pub fn from_section(section: PaletteSection) -> Result<Self, PaletteError> {
        let mut colors = Vec::with_capacity(section.colors.len());
        for entry in section.colors {
            let c = Rgba::from_hex(&entry).ok_or(PaletteError::BadColor {
                entry: entry.clone(),
            })?;
            colors.push(c);
        }
        Palette::new(colors)
    }

    /// Returns `None` when the config has no `[palette]` section at all;
    /// an explicitly empty color list is an error.
    pub fn from_toml_str(toml_str: &str) -> Result<Option<Self>, PaletteError> {
        let cfg: PaletteConfig = toml::from_str(toml_str)?;
        cfg.palette.map(Self::from_section).transpose()
    }
}

pub fn load_palette_from_path(path: impl AsRef<Path>) -> Result<Option<Palette>, PaletteError> {
    let text = fs::read_to_string(path)?;
    Palette::from_toml_str(&text)
}
