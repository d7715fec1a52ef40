//! Command-line front-end: configure a world, generate and mesh it,
//! report a summary, and optionally dump the result as OBJ.

mod export;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use realm_blocks::{Palette, load_palette_from_path};
use realm_runtime::{GenStrategy, generate_world};
use realm_world::{Mode, World, WorldParams, load_params_from_path};

#[derive(Parser, Debug)]
#[command(name = "realm", about = "Voxel terrain generator and face-culling mesher")]
struct Args {
    /// TOML config with [world] and [palette] sections.
    #[arg(long)]
    config: Option<PathBuf>,

    /// World seed (overrides the config).
    #[arg(long)]
    seed: Option<i32>,

    /// World dimensions in voxels, WxHxD (overrides the config).
    #[arg(long, value_parser = parse_dims)]
    dims: Option<[usize; 3]>,

    /// Chunk edge length in voxels (overrides the config).
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Build the whole world as one grid and mesh instead of chunks.
    #[arg(long)]
    flat: bool,

    /// Generate on this thread instead of the 4-quadrant worker pool.
    #[arg(long)]
    serial: bool,

    /// Write the generated world as a Wavefront OBJ.
    #[arg(long)]
    obj: Option<PathBuf>,
}

fn parse_dims(s: &str) -> Result<[usize; 3], String> {
    let parts: Vec<&str> = s.split('x').collect();
    if parts.len() != 3 {
        return Err(format!("expected WxHxD, got {s:?}"));
    }
    let mut dims = [0usize; 3];
    for (slot, part) in dims.iter_mut().zip(parts) {
        *slot = part
            .parse()
            .map_err(|_| format!("bad dimension {part:?}"))?;
    }
    Ok(dims)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(e) = run(Args::parse()) {
        log::error!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut params = match &args.config {
        Some(path) => load_params_from_path(path)?,
        None => WorldParams::default(),
    };
    if let Some(seed) = args.seed {
        params.seed = seed;
    }
    if let Some(dims) = args.dims {
        params.dims = dims;
    }
    if let Some(chunk_size) = args.chunk_size {
        params.chunk_size = chunk_size;
    }
    if args.flat {
        params.mode = Mode::Flat;
    }

    let palette = match &args.config {
        Some(path) => load_palette_from_path(path)?.unwrap_or_else(Palette::default_terrain),
        None => Palette::default_terrain(),
    };

    let world = Arc::new(World::from_params(&params)?);
    let palette = Arc::new(palette);
    let strategy = if args.serial {
        GenStrategy::Serial
    } else {
        GenStrategy::Quadrants
    };

    log::info!(
        "generating {}x{}x{} world, chunk size {}, seed {}, {:?}",
        world.dims_x,
        world.dims_y,
        world.dims_z,
        world.chunk_size,
        world.seed,
        strategy
    );
    let build = generate_world(&world, &palette, strategy)?;

    if let Some(path) = &args.obj {
        export::write_obj(path, &build)?;
        log::info!(
            "wrote {} ({} vertices, {} triangles)",
            path.display(),
            build.total_vertices(),
            build.total_triangles()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dims_parse_and_reject() {
        assert_eq!(parse_dims("128x64x128").unwrap(), [128, 64, 128]);
        assert!(parse_dims("128x64").is_err());
        assert!(parse_dims("axbxc").is_err());
    }
}
