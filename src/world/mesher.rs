use std::collections::BTreeMap;

use glam::{IVec3, Vec3};

use super::block::BlockType;
use super::chunk::{RenderBatch, CHUNK_HEIGHT, CHUNK_SIZE};
use super::chunk_coord::ChunkCoord;
use super::store::VoxelStore;

const FACE_NEIGHBORS: [IVec3; 6] = [
    IVec3::new(1, 0, 0),
    IVec3::new(-1, 0, 0),
    IVec3::new(0, 1, 0),
    IVec3::new(0, -1, 0),
    IVec3::new(0, 0, 1),
    IVec3::new(0, 0, -1),
];

/// Builds one render batch per block type that has at least one exposed
/// cell in the chunk. A voxel with all six face neighbors solid is never
/// visible and contributes nothing, so batch sizes track the visible shell
/// rather than the solid volume.
///
/// Neighbor lookups go through the global store, so faces on chunk borders
/// cull correctly against adjacent chunks' data when it exists. Scan order
/// is fixed (x, then z, then y), making batch contents stable across
/// rebuilds of unchanged content.
pub fn build_batches(store: &VoxelStore, coord: ChunkCoord) -> Vec<RenderBatch> {
    let origin = coord.origin();
    let mut groups: BTreeMap<BlockType, Vec<Vec3>> = BTreeMap::new();

    for x in 0..CHUNK_SIZE {
        for z in 0..CHUNK_SIZE {
            for y in 0..CHUNK_HEIGHT {
                let cell = IVec3::new(origin.x + x, y, origin.z + z);
                let block = store.get_block(cell);
                if block == BlockType::Air || !has_exposed_face(store, cell) {
                    continue;
                }
                groups
                    .entry(block)
                    .or_default()
                    .push(cell.as_vec3() + Vec3::splat(0.5));
            }
        }
    }

    groups
        .into_iter()
        .map(|(block, positions)| RenderBatch { block, positions })
        .collect()
}

fn has_exposed_face(store: &VoxelStore, cell: IVec3) -> bool {
    FACE_NEIGHBORS
        .iter()
        .any(|offset| store.get_block(cell + *offset) == BlockType::Air)
}
