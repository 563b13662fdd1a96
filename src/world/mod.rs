pub mod block;
pub mod chunk;
pub mod chunk_coord;
pub mod generator;
pub mod manager;
pub mod mesher;
pub mod store;

pub use block::BlockType;
pub use chunk::{Chunk, RenderBatch, CHUNK_HEIGHT, CHUNK_SIZE};
pub use chunk_coord::ChunkCoord;
pub use generator::{NoiseField, TerrainGenerator};
pub use manager::ChunkManager;
pub use store::VoxelStore;

use glam::IVec3;

use crate::render::RenderBackend;

/// The world aggregate: sparse block content plus the machinery that
/// generates, meshes, and pages it around the player. Owned by the
/// simulation loop and passed explicitly into every subsystem call.
pub struct World {
    pub store: VoxelStore,
    pub manager: ChunkManager,
    generator: TerrainGenerator,
}

impl World {
    pub fn new(seed: u32) -> Self {
        Self {
            store: VoxelStore::new(),
            manager: ChunkManager::new(),
            generator: TerrainGenerator::new(seed),
        }
    }

    pub fn generator(&self) -> &TerrainGenerator {
        &self.generator
    }

    pub fn get_block(&self, pos: IVec3) -> BlockType {
        self.store.get_block(pos)
    }

    /// Writes a block and rebuilds the mesh of the chunk containing it.
    pub fn set_block<R: RenderBackend>(&mut self, renderer: &mut R, pos: IVec3, block: BlockType) {
        self.store.set_block(pos, block);
        self.manager
            .rebuild(&self.store, renderer, ChunkCoord::from_block(pos));
    }

    /// Removes a block, returning what was there, and rebuilds its chunk.
    /// No-op on an empty cell.
    pub fn break_block<R: RenderBackend>(
        &mut self,
        renderer: &mut R,
        pos: IVec3,
    ) -> Option<BlockType> {
        let removed = self.store.remove_block(pos)?;
        self.manager
            .rebuild(&self.store, renderer, ChunkCoord::from_block(pos));
        Some(removed)
    }

    pub fn reconcile<R: RenderBackend>(
        &mut self,
        renderer: &mut R,
        center: ChunkCoord,
        radius: i32,
    ) {
        self.manager
            .reconcile(&mut self.store, &self.generator, renderer, center, radius);
    }
}
