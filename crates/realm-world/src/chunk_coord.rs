use serde::{Deserialize, Serialize};

/// Index of a chunk in the world lattice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChunkCoord {
    pub cx: i32,
    pub cy: i32,
    pub cz: i32,
}

impl ChunkCoord {
    #[inline]
    pub const fn new(cx: i32, cy: i32, cz: i32) -> Self {
        Self { cx, cy, cz }
    }

    /// World-space voxel origin of this chunk.
    #[inline]
    pub fn origin(self, chunk_size: usize) -> (i32, i32, i32) {
        let s = chunk_size as i32;
        (self.cx * s, self.cy * s, self.cz * s)
    }
}

impl From<(i32, i32, i32)> for ChunkCoord {
    fn from(value: (i32, i32, i32)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}
