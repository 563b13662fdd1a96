//! Chunked voxel world core: sparse block storage, deterministic
//! procedural terrain, face-culled meshing, chunk paging around the
//! player, and first-person physics against the grid. Rendering, input
//! devices, and UI live behind the seams in [`render`] and the engine's
//! input/read surfaces.

pub mod config;
pub mod engine;
pub mod physics;
pub mod player;
pub mod render;
pub mod world;

pub use config::EngineConfig;
pub use engine::{EngineStats, VoxelEngine};
pub use player::{Inventory, MoveIntent, Player};
pub use render::{NullRenderer, RayHit, RenderBackend};
pub use world::{BlockType, ChunkCoord, World};
