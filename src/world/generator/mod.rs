pub mod noise_field;

pub use noise_field::NoiseField;

use glam::IVec3;
use log::debug;

use super::block::BlockType;
use super::chunk::CHUNK_SIZE;
use super::chunk_coord::ChunkCoord;
use super::store::VoxelStore;

/// Depth of the dirt layer between the grass cap and the stone body.
const DIRT_DEPTH: i32 = 3;
/// Columns at or below this surface height never grow a tree.
const TREE_MIN_HEIGHT: i32 = 5;
/// Canopy layers relative to the trunk top: this many wide layers below
/// it, this many narrow layers above it.
const CANOPY_BELOW: i32 = 2;
const CANOPY_ABOVE: i32 = 2;
const CANOPY_WIDE_RADIUS: i32 = 2;
const CANOPY_NARROW_RADIUS: i32 = 1;

/// Writes procedural terrain into the voxel store, one chunk footprint at
/// a time. Everything written is a pure function of the seed and the world
/// coordinates: regenerating a chunk into an empty store is bit-identical.
pub struct TerrainGenerator {
    noise: NoiseField,
}

impl TerrainGenerator {
    pub fn new(seed: u32) -> Self {
        Self {
            noise: NoiseField::new(seed),
        }
    }

    pub fn noise(&self) -> &NoiseField {
        &self.noise
    }

    /// Surface height of a world column, exposed for spawn probing.
    pub fn surface_height(&self, x: i32, z: i32) -> i32 {
        self.noise.surface_height(x, z)
    }

    /// Fills one chunk footprint with layered strata and any trees rooted
    /// inside it: a grass cap on the surface, dirt just beneath, stone all
    /// the way down.
    pub fn generate_column(&self, store: &mut VoxelStore, coord: ChunkCoord) {
        let origin = coord.origin();
        for x in 0..CHUNK_SIZE {
            for z in 0..CHUNK_SIZE {
                let wx = origin.x + x;
                let wz = origin.z + z;
                let height = self.noise.surface_height(wx, wz);
                for y in 0..=height {
                    let block = if y == height {
                        BlockType::Grass
                    } else if y > height - DIRT_DEPTH {
                        BlockType::Dirt
                    } else {
                        BlockType::Stone
                    };
                    store.set_block(IVec3::new(wx, y, wz), block);
                }
                if self.noise.tree_at(wx, wz) && height > TREE_MIN_HEIGHT {
                    self.grow_tree(store, IVec3::new(wx, height + 1, wz));
                }
            }
        }
        debug!("generated terrain for chunk ({}, {})", coord.x, coord.z);
    }

    /// Wood trunk with a stepped leaf canopy: wide layers below the trunk
    /// top, narrow layers at and above it. The four outer corners of each
    /// layer stay open, as does the trunk column while inside the trunk.
    fn grow_tree(&self, store: &mut VoxelStore, root: IVec3) {
        let trunk = self.noise.trunk_height(root.x, root.z);
        for i in 0..trunk {
            store.set_block(root + IVec3::new(0, i, 0), BlockType::Wood);
        }
        for layer in (trunk - CANOPY_BELOW)..=(trunk + CANOPY_ABOVE) {
            let radius = if layer < trunk {
                CANOPY_WIDE_RADIUS
            } else {
                CANOPY_NARROW_RADIUS
            };
            for lx in -radius..=radius {
                for lz in -radius..=radius {
                    if lx.abs() == radius && lz.abs() == radius {
                        continue;
                    }
                    if lx == 0 && lz == 0 && layer < trunk {
                        continue;
                    }
                    store.set_block(root + IVec3::new(lx, layer, lz), BlockType::Leaves);
                }
            }
        }
    }
}
