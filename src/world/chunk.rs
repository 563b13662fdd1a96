use glam::Vec3;

use super::block::BlockType;
use super::chunk_coord::ChunkCoord;

/// Horizontal extent of a chunk in blocks.
pub const CHUNK_SIZE: i32 = 16;
/// Vertical extent of the world inside a chunk.
pub const CHUNK_HEIGHT: i32 = 64;

/// One instanced draw unit: every exposed cell of a single block type
/// within one chunk, positioned at cell centers. Rebuilt wholesale on any
/// mutation inside the chunk, never patched.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderBatch {
    pub block: BlockType,
    pub positions: Vec<Vec3>,
}

impl RenderBatch {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// A loaded 16x16 column of the world together with the render batches
/// built from it.
#[derive(Debug)]
pub struct Chunk {
    pub coord: ChunkCoord,
    batches: Vec<RenderBatch>,
}

impl Chunk {
    pub fn new(coord: ChunkCoord, batches: Vec<RenderBatch>) -> Self {
        Self { coord, batches }
    }

    pub fn batches(&self) -> &[RenderBatch] {
        &self.batches
    }

    pub fn replace_batches(&mut self, batches: Vec<RenderBatch>) {
        self.batches = batches;
    }

    /// Total number of exposed cells across all batches.
    pub fn cell_count(&self) -> usize {
        self.batches.iter().map(RenderBatch::len).sum()
    }
}
