use std::collections::HashMap;

use glam::{IVec3, Vec3};

use crate::world::{BlockType, ChunkCoord, RenderBatch};

/// Result of a selection raycast: the hit cell, what occupies it, and the
/// unit normal of the face the ray entered through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub cell: IVec3,
    pub block: BlockType,
    pub normal: IVec3,
}

/// Seam to the renderer. The core pushes chunk batches and the selection
/// outline through this trait and borrows the renderer's raycast for
/// aiming. A backend must free a chunk's resources in `release_chunk`
/// before replacement batches for the same chunk arrive.
pub trait RenderBackend {
    fn upload_chunk(&mut self, coord: ChunkCoord, batches: &[RenderBatch]);
    fn release_chunk(&mut self, coord: ChunkCoord);
    fn set_selection(&mut self, cell: Option<IVec3>);

    /// Nearest solid cell along the ray, resolved against the union of all
    /// uploaded batches.
    fn cast_ray(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RayHit>;
}

/// Headless backend: mirrors the uploaded batches in memory and answers
/// raycasts with a grid walk over them, so scripted sessions and tests can
/// aim at blocks without a GPU.
#[derive(Debug, Default)]
pub struct NullRenderer {
    cells: HashMap<IVec3, BlockType>,
    chunk_cells: HashMap<ChunkCoord, Vec<IVec3>>,
    selection: Option<IVec3>,
    releases: usize,
}

impl NullRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> Option<IVec3> {
        self.selection
    }

    pub fn chunk_count(&self) -> usize {
        self.chunk_cells.len()
    }

    /// How many times a chunk's resources have been released.
    pub fn release_count(&self) -> usize {
        self.releases
    }

    /// The block an uploaded batch claims for this cell, if any.
    pub fn block_at(&self, cell: IVec3) -> Option<BlockType> {
        self.cells.get(&cell).copied()
    }
}

impl RenderBackend for NullRenderer {
    fn upload_chunk(&mut self, coord: ChunkCoord, batches: &[RenderBatch]) {
        let mut cells = Vec::new();
        for batch in batches {
            for position in &batch.positions {
                let cell = (*position - Vec3::splat(0.5)).as_ivec3();
                self.cells.insert(cell, batch.block);
                cells.push(cell);
            }
        }
        self.chunk_cells.insert(coord, cells);
    }

    fn release_chunk(&mut self, coord: ChunkCoord) {
        if let Some(cells) = self.chunk_cells.remove(&coord) {
            for cell in cells {
                self.cells.remove(&cell);
            }
        }
        self.releases += 1;
    }

    fn set_selection(&mut self, cell: Option<IVec3>) {
        self.selection = cell;
    }

    fn cast_ray(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RayHit> {
        let dir = direction.normalize_or_zero();
        if dir == Vec3::ZERO {
            return None;
        }

        // Amanatides-Woo grid walk: step cell to cell along the ray,
        // crossing whichever axis boundary comes first. The cell the
        // origin sits in is never reported as a hit.
        let mut cell = origin.floor().as_ivec3();
        let step = IVec3::new(axis_step(dir.x), axis_step(dir.y), axis_step(dir.z));
        let mut t_max = Vec3::new(
            boundary_distance(origin.x, dir.x),
            boundary_distance(origin.y, dir.y),
            boundary_distance(origin.z, dir.z),
        );
        let t_delta = Vec3::new(axis_delta(dir.x), axis_delta(dir.y), axis_delta(dir.z));

        loop {
            let travelled;
            let normal;
            if t_max.x <= t_max.y && t_max.x <= t_max.z {
                travelled = t_max.x;
                t_max.x += t_delta.x;
                cell.x += step.x;
                normal = IVec3::new(-step.x, 0, 0);
            } else if t_max.y <= t_max.z {
                travelled = t_max.y;
                t_max.y += t_delta.y;
                cell.y += step.y;
                normal = IVec3::new(0, -step.y, 0);
            } else {
                travelled = t_max.z;
                t_max.z += t_delta.z;
                cell.z += step.z;
                normal = IVec3::new(0, 0, -step.z);
            }
            if travelled > max_distance {
                return None;
            }
            if let Some(block) = self.block_at(cell) {
                return Some(RayHit { cell, block, normal });
            }
        }
    }
}

fn axis_step(d: f32) -> i32 {
    if d > 0.0 {
        1
    } else if d < 0.0 {
        -1
    } else {
        0
    }
}

fn axis_delta(d: f32) -> f32 {
    if d == 0.0 {
        f32::INFINITY
    } else {
        (1.0 / d).abs()
    }
}

/// Ray parameter at which the ray leaves the origin's cell along one axis.
fn boundary_distance(p: f32, d: f32) -> f32 {
    if d > 0.0 {
        (p.floor() + 1.0 - p) / d
    } else if d < 0.0 {
        (p - p.floor()) / -d
    } else {
        f32::INFINITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer_with_block(cell: IVec3, block: BlockType) -> NullRenderer {
        let mut renderer = NullRenderer::new();
        let batch = RenderBatch {
            block,
            positions: vec![cell.as_vec3() + Vec3::splat(0.5)],
        };
        renderer.upload_chunk(ChunkCoord::from_block(cell), &[batch]);
        renderer
    }

    #[test]
    fn ray_hits_the_entry_face() {
        let renderer = renderer_with_block(IVec3::new(0, 5, 0), BlockType::Grass);

        // Straight down onto the top face.
        let hit = renderer
            .cast_ray(Vec3::new(0.5, 8.0, 0.5), Vec3::new(0.0, -1.0, 0.0), 6.0)
            .unwrap();
        assert_eq!(hit.cell, IVec3::new(0, 5, 0));
        assert_eq!(hit.block, BlockType::Grass);
        assert_eq!(hit.normal, IVec3::new(0, 1, 0));

        // Sideways onto the -x face.
        let hit = renderer
            .cast_ray(Vec3::new(-2.0, 5.5, 0.5), Vec3::new(1.0, 0.0, 0.0), 6.0)
            .unwrap();
        assert_eq!(hit.normal, IVec3::new(-1, 0, 0));
    }

    #[test]
    fn ray_respects_max_distance() {
        let renderer = renderer_with_block(IVec3::new(0, 0, 10), BlockType::Stone);
        let origin = Vec3::new(0.5, 0.5, 0.5);
        let dir = Vec3::new(0.0, 0.0, 1.0);
        assert!(renderer.cast_ray(origin, dir, 5.0).is_none());
        assert!(renderer.cast_ray(origin, dir, 12.0).is_some());
    }

    #[test]
    fn release_clears_the_chunk_cells() {
        let cell = IVec3::new(3, 3, 3);
        let mut renderer = renderer_with_block(cell, BlockType::Dirt);
        assert_eq!(renderer.block_at(cell), Some(BlockType::Dirt));

        renderer.release_chunk(ChunkCoord::from_block(cell));
        assert_eq!(renderer.block_at(cell), None);
        assert_eq!(renderer.chunk_count(), 0);
        assert_eq!(renderer.release_count(), 1);
    }

    #[test]
    fn zero_direction_never_hits() {
        let renderer = renderer_with_block(IVec3::ZERO, BlockType::Stone);
        assert!(renderer.cast_ray(Vec3::new(5.0, 5.0, 5.0), Vec3::ZERO, 10.0).is_none());
    }
}
