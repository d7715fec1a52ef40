use proptest::prelude::*;

use realm_blocks::{Palette, Rgba};
use realm_chunk::{BlockGrid, populate_grid};
use realm_geom::VoxelPos;
use realm_world::NoiseField;

struct ConstField(f32);

impl NoiseField for ConstField {
    fn sample2(&self, _x: f32, _z: f32) -> f32 {
        self.0
    }
    fn sample3(&self, _x: f32, _y: f32, _z: f32) -> f32 {
        self.0
    }
}

fn size() -> impl Strategy<Value = usize> {
    1usize..=8
}

fn noise_value() -> impl Strategy<Value = f32> {
    -1.0f32..=1.0
}

fn origin_y() -> impl Strategy<Value = i32> {
    -16i32..=48
}

fn palette() -> Palette {
    Palette::new(vec![
        Rgba::rgb(40, 30, 20),
        Rgba::rgb(80, 60, 40),
        Rgba::rgb(50, 110, 50),
    ])
    .unwrap()
}

/// Closed-form column height for constant noise `c`.
fn const_height(c: f32, max_height: f32) -> f32 {
    let r = ((c + 0.5 * c + 0.25) * c / 1.75 + 1.0) / 2.0;
    max_height * r * r
}

proptest! {
    // Every column gets exactly the layer count the height formula says:
    // none above the surface, ceil(min(height - oy, size)) otherwise.
    #[test]
    fn column_layer_count_matches_height(c in noise_value(), size in size(), oy in origin_y()) {
        let max_height = 32.0;
        let origin = VoxelPos::new(5, oy, -3);
        let mut grid = BlockGrid::new();
        populate_grid(&mut grid, size, origin, max_height, &ConstField(c), &palette());

        let height = const_height(c, max_height);
        let expect_layers = if height < oy as f32 {
            0
        } else {
            (height - oy as f32).min(size as f32).ceil() as usize
        };
        prop_assert_eq!(grid.len(), expect_layers * size * size);
        for x in 0..size as i32 {
            for z in 0..size as i32 {
                for y in 0..expect_layers as i32 {
                    prop_assert!(grid.contains(VoxelPos::new(x, y, z)));
                }
                prop_assert!(!grid.contains(VoxelPos::new(x, expect_layers as i32, z)));
            }
        }
    }

    // Columns are solid from the floor up: an occupied cell always sits
    // on another occupied cell or on local y = 0.
    #[test]
    fn columns_have_no_floating_blocks(c in noise_value(), size in size(), oy in origin_y()) {
        let mut grid = BlockGrid::new();
        populate_grid(
            &mut grid,
            size,
            VoxelPos::new(0, oy, 0),
            32.0,
            &ConstField(c),
            &palette(),
        );
        for (pos, _) in grid.iter() {
            prop_assert!((0..size as i32).contains(&pos.x));
            prop_assert!((0..size as i32).contains(&pos.y));
            prop_assert!((0..size as i32).contains(&pos.z));
            if pos.y > 0 {
                prop_assert!(grid.contains(pos.offset(0, -1, 0)));
            }
        }
    }

    // Layer colors cycle the palette bottom-up in every column.
    #[test]
    fn layer_colors_cycle_the_palette(c in noise_value(), size in size()) {
        let pal = palette();
        let mut grid = BlockGrid::new();
        populate_grid(&mut grid, size, VoxelPos::new(0, 0, 0), 32.0, &ConstField(c), &pal);
        for (pos, color) in grid.iter() {
            prop_assert_eq!(color, pal.color_for_layer(pos.y as usize));
        }
    }

    // sorted_positions reports each occupied cell once, in (x, y, z) order.
    #[test]
    fn sorted_positions_cover_the_grid(c in noise_value(), size in size()) {
        let mut grid = BlockGrid::new();
        populate_grid(&mut grid, size, VoxelPos::new(0, 0, 0), 32.0, &ConstField(c), &palette());
        let sorted = grid.sorted_positions();
        prop_assert_eq!(sorted.len(), grid.len());
        prop_assert!(sorted.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(sorted.iter().all(|&p| grid.contains(p)));
    }
}
