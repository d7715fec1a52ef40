//! Block colors and the terrain palette.
#![forbid(unsafe_code)]

pub mod color;
pub mod palette;

pub use color::Rgba;
pub use palette::{Palette, PaletteError, load_palette_from_path};
