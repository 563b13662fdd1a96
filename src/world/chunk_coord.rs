use glam::{IVec3, Vec3};
use std::cmp::Ordering;

use super::chunk::CHUNK_SIZE;

/// Identity of a chunk column. World block x lies in
/// `[x * CHUNK_SIZE, (x + 1) * CHUNK_SIZE)`, likewise for z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkCoord {
    pub x: i32,
    pub z: i32,
}

impl ChunkCoord {
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Chunk containing the given block cell. Flooring division, so
    /// negative coordinates map to negative chunks without a seam at zero.
    pub fn from_block(pos: IVec3) -> Self {
        Self::new(pos.x.div_euclid(CHUNK_SIZE), pos.z.div_euclid(CHUNK_SIZE))
    }

    pub fn from_world(pos: Vec3) -> Self {
        Self::new(
            (pos.x / CHUNK_SIZE as f32).floor() as i32,
            (pos.z / CHUNK_SIZE as f32).floor() as i32,
        )
    }

    /// World-space block origin of this chunk (minimum corner, y = 0).
    pub fn origin(&self) -> IVec3 {
        IVec3::new(self.x * CHUNK_SIZE, 0, self.z * CHUNK_SIZE)
    }

    pub fn distance_sq(&self, other: ChunkCoord) -> i32 {
        let dx = self.x - other.x;
        let dz = self.z - other.z;
        dx * dx + dz * dz
    }
}

impl PartialOrd for ChunkCoord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ChunkCoord {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.x.cmp(&other.x) {
            Ordering::Equal => self.z.cmp(&other.z),
            ord => ord,
        }
    }
}
