use std::collections::HashMap;

use glam::IVec3;

use super::block::BlockType;

/// Sparse world content: a map from block cell to type, the single source
/// of truth for what the world holds. A coordinate absent from the map is
/// `Air` by definition, so no entry ever stores `Air`; writing `Air`
/// removes the entry instead.
///
/// Entries are never cleared by chunk unload; only render batches are
/// evicted. Memory therefore grows with explored area.
#[derive(Debug, Default)]
pub struct VoxelStore {
    blocks: HashMap<IVec3, BlockType>,
}

impl VoxelStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_block(&self, pos: IVec3) -> BlockType {
        self.blocks.get(&pos).copied().unwrap_or(BlockType::Air)
    }

    pub fn set_block(&mut self, pos: IVec3, block: BlockType) {
        if block == BlockType::Air {
            self.blocks.remove(&pos);
        } else {
            self.blocks.insert(pos, block);
        }
    }

    /// Removes the block at `pos`, returning it if a solid block was there.
    pub fn remove_block(&mut self, pos: IVec3) -> Option<BlockType> {
        self.blocks.remove(&pos)
    }

    pub fn is_solid(&self, pos: IVec3) -> bool {
        self.blocks.contains_key(&pos)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// All entries in a deterministic total order (x, then y, then z).
    /// The map itself iterates in arbitrary order; comparisons and dumps
    /// go through this.
    pub fn sorted_entries(&self) -> Vec<(IVec3, BlockType)> {
        let mut entries: Vec<_> = self.blocks.iter().map(|(p, b)| (*p, *b)).collect();
        entries.sort_by_key(|(p, _)| (p.x, p.y, p.z));
        entries
    }
}
