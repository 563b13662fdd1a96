use std::collections::{HashMap, HashSet};

use log::{debug, warn};

use crate::render::RenderBackend;

use super::chunk::Chunk;
use super::chunk_coord::ChunkCoord;
use super::generator::TerrainGenerator;
use super::mesher;
use super::store::VoxelStore;

/// Owns the loaded-chunk set and drives the per-chunk lifecycle:
/// `Unloaded -> Loaded -> Unloaded`, with rebuild as an in-place batch
/// replacement while loaded.
///
/// The generated set records every coordinate whose terrain has ever been
/// written and survives unload. Voxel data outlives its chunk, so
/// re-entering a chunk re-meshes the retained blocks instead of
/// regenerating over player edits.
#[derive(Default)]
pub struct ChunkManager {
    chunks: HashMap<ChunkCoord, Chunk>,
    generated: HashSet<ChunkCoord>,
}

impl ChunkManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self, coord: ChunkCoord) -> bool {
        self.chunks.contains_key(&coord)
    }

    pub fn loaded_count(&self) -> usize {
        self.chunks.len()
    }

    pub fn loaded_coords(&self) -> Vec<ChunkCoord> {
        self.chunks.keys().copied().collect()
    }

    pub fn chunk(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(&coord)
    }

    /// Total number of render batches across all loaded chunks.
    pub fn batch_count(&self) -> usize {
        self.chunks.values().map(|c| c.batches().len()).sum()
    }

    /// Generates (first visit only), meshes, and uploads a chunk. No-op if
    /// already loaded.
    pub fn ensure_loaded<R: RenderBackend>(
        &mut self,
        store: &mut VoxelStore,
        generator: &TerrainGenerator,
        renderer: &mut R,
        coord: ChunkCoord,
    ) {
        if self.chunks.contains_key(&coord) {
            return;
        }
        if self.generated.insert(coord) {
            generator.generate_column(store, coord);
        }
        let batches = mesher::build_batches(store, coord);
        renderer.upload_chunk(coord, &batches);
        self.chunks.insert(coord, Chunk::new(coord, batches));
        debug!("loaded chunk ({}, {})", coord.x, coord.z);
    }

    /// Re-meshes a loaded chunk from current store content, releasing the
    /// old batches first. Called after any block mutation inside the
    /// chunk. Requesting a rebuild of an unloaded chunk indicates a caller
    /// ordering bug and does nothing.
    pub fn rebuild<R: RenderBackend>(
        &mut self,
        store: &VoxelStore,
        renderer: &mut R,
        coord: ChunkCoord,
    ) {
        let Some(chunk) = self.chunks.get_mut(&coord) else {
            warn!("rebuild requested for unloaded chunk ({}, {})", coord.x, coord.z);
            return;
        };
        renderer.release_chunk(coord);
        let batches = mesher::build_batches(store, coord);
        renderer.upload_chunk(coord, &batches);
        chunk.replace_batches(batches);
    }

    /// Releases a chunk's batches and drops it from the loaded set. The
    /// underlying voxel data stays in the store.
    pub fn unload<R: RenderBackend>(&mut self, renderer: &mut R, coord: ChunkCoord) {
        if self.chunks.remove(&coord).is_some() {
            renderer.release_chunk(coord);
            debug!("unloaded chunk ({}, {})", coord.x, coord.z);
        } else {
            warn!("unload requested for unloaded chunk ({}, {})", coord.x, coord.z);
        }
    }

    /// Brings the loaded set in line with the player position: every chunk
    /// in the `[-radius, +radius]` square around `center` gets loaded,
    /// nearest first, and every loaded chunk outside the square is
    /// unloaded. Runs once per simulation tick.
    pub fn reconcile<R: RenderBackend>(
        &mut self,
        store: &mut VoxelStore,
        generator: &TerrainGenerator,
        renderer: &mut R,
        center: ChunkCoord,
        radius: i32,
    ) {
        let mut needed = Vec::with_capacity(((2 * radius + 1) * (2 * radius + 1)) as usize);
        for dx in -radius..=radius {
            for dz in -radius..=radius {
                needed.push(ChunkCoord::new(center.x + dx, center.z + dz));
            }
        }
        needed.sort_by_key(|coord| coord.distance_sq(center));

        for coord in needed {
            self.ensure_loaded(store, generator, renderer, coord);
        }

        let stale: Vec<ChunkCoord> = self
            .chunks
            .keys()
            .filter(|c| (c.x - center.x).abs() > radius || (c.z - center.z).abs() > radius)
            .copied()
            .collect();
        for coord in stale {
            self.unload(renderer, coord);
        }
    }
}
