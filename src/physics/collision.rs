use glam::{IVec3, Vec3};

use crate::world::{BlockType, VoxelStore};

/// Tests the eight corners of the player volume at `pos` against the
/// voxel grid. `pos.y` is the top of the volume; the feet sit `height`
/// below it and the horizontal extent is `width` to each side. A corner
/// is inside a cell by floor truncation, so standing exactly on a block
/// top leaves the lower corners in the cell above it.
pub fn blocked(store: &VoxelStore, pos: Vec3, width: f32, height: f32) -> bool {
    for sx in [-width, width] {
        for sz in [-width, width] {
            for sy in [-height, 0.0] {
                let corner = Vec3::new(pos.x + sx, pos.y + sy, pos.z + sz);
                if store.get_block(corner.floor().as_ivec3()) != BlockType::Air {
                    return true;
                }
            }
        }
    }
    false
}

/// Whether the unit cell at `cell` intersects the player volume at `pos`.
/// Used to reject block placement into the player.
pub fn cell_overlaps_player(cell: IVec3, pos: Vec3, width: f32, height: f32) -> bool {
    let cell_min = cell.as_vec3();
    let cell_max = cell_min + Vec3::ONE;
    let min = Vec3::new(pos.x - width, pos.y - height, pos.z - width);
    let max = Vec3::new(pos.x + width, pos.y, pos.z + width);

    min.x < cell_max.x
        && max.x > cell_min.x
        && min.y < cell_max.y
        && max.y > cell_min.y
        && min.z < cell_max.z
        && max.z > cell_min.z
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f32 = 0.3;
    const HEIGHT: f32 = 1.8;

    #[test]
    fn empty_space_is_clear() {
        let store = VoxelStore::new();
        assert!(!blocked(&store, Vec3::new(0.5, 10.0, 0.5), WIDTH, HEIGHT));
    }

    #[test]
    fn standing_on_a_block_top_is_clear() {
        let mut store = VoxelStore::new();
        store.set_block(IVec3::new(0, 0, 0), BlockType::Stone);
        // Feet exactly on the block top at y = 1.
        let pos = Vec3::new(0.5, 1.0 + HEIGHT, 0.5);
        assert!(!blocked(&store, pos, WIDTH, HEIGHT));
        // A hair lower and the foot corners dip into the block.
        assert!(blocked(&store, pos - Vec3::new(0.0, 0.01, 0.0), WIDTH, HEIGHT));
    }

    #[test]
    fn any_corner_blocks() {
        let mut store = VoxelStore::new();
        store.set_block(IVec3::new(1, 10, 1), BlockType::Stone);
        // Only the +x/+z head corner reaches into the block.
        let pos = Vec3::new(0.9, 10.5, 0.9);
        assert!(blocked(&store, pos, WIDTH, HEIGHT));
        assert!(!blocked(&store, Vec3::new(0.5, 10.5, 0.5), WIDTH, HEIGHT));
    }

    #[test]
    fn placement_overlap_matches_the_volume() {
        let pos = Vec3::new(0.5, 10.0, 0.5);
        // The cell the player's body occupies.
        assert!(cell_overlaps_player(IVec3::new(0, 9, 0), pos, WIDTH, HEIGHT));
        // A cell fully below the feet does not overlap.
        assert!(!cell_overlaps_player(IVec3::new(0, 7, 0), pos, WIDTH, HEIGHT));
        // A laterally adjacent cell is clear of the 0.3 half-width.
        assert!(!cell_overlaps_player(IVec3::new(1, 9, 0), pos, WIDTH, HEIGHT));
    }
}
