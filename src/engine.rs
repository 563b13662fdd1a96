use glam::{IVec3, Vec3};
use log::{debug, info};

use crate::config::EngineConfig;
use crate::physics::{self, collision};
use crate::player::{Inventory, MoveIntent, Player};
use crate::render::{RayHit, RenderBackend};
use crate::world::{BlockType, ChunkCoord, World};

/// Read-only snapshot for HUD and debug overlays.
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineStats {
    pub ticks: u64,
    pub loaded_chunks: usize,
    pub render_batches: usize,
    pub player_position: Vec3,
}

/// Top-level simulation aggregate: the world, the player, the inventory,
/// and the render backend seam. One `tick` runs the fixed per-frame
/// sequence (physics, then chunk reconciliation, then the selection
/// raycast and its handoff) synchronously to completion.
pub struct VoxelEngine<R: RenderBackend> {
    world: World,
    player: Player,
    inventory: Inventory,
    renderer: R,
    selection: Option<RayHit>,
    config: EngineConfig,
    ticks: u64,
}

impl<R: RenderBackend> VoxelEngine<R> {
    /// Builds the world, loads the spawn neighborhood, and stands the
    /// player on the terrain surface at the configured spawn column.
    pub fn new(config: EngineConfig, mut renderer: R) -> Self {
        let mut world = World::new(config.worldgen.seed);
        info!(
            "creating world (seed {}, render distance {})",
            config.worldgen.seed, config.render_distance
        );

        let (sx, sz) = (config.gameplay.spawn_x, config.gameplay.spawn_z);
        let spawn_chunk = ChunkCoord::from_block(IVec3::new(sx, 0, sz));
        world.reconcile(&mut renderer, spawn_chunk, config.render_distance);

        let spawn = Self::probe_spawn(&world, &config, sx, sz);
        info!("spawning player at {:.1} {:.1} {:.1}", spawn.x, spawn.y, spawn.z);

        Self {
            world,
            player: Player::new(spawn),
            inventory: Inventory::new(),
            renderer,
            selection: None,
            config,
            ticks: 0,
        }
    }

    /// Finds the lowest clear stand above the terrain surface of the spawn
    /// column. Scanning the generated store (not just the height field)
    /// keeps the spawn out of tree canopies.
    fn probe_spawn(world: &World, config: &EngineConfig, sx: i32, sz: i32) -> Vec3 {
        let mut feet = world.generator().surface_height(sx, sz) + 1;
        while world.get_block(IVec3::new(sx, feet, sz)) != BlockType::Air
            || world.get_block(IVec3::new(sx, feet + 1, sz)) != BlockType::Air
        {
            feet += 1;
        }
        Vec3::new(
            sx as f32 + 0.5,
            feet as f32 + config.gameplay.player_height,
            sz as f32 + 0.5,
        )
    }

    /// One simulation frame: player physics, chunk reconciliation around
    /// the player, then the selection raycast and its handoff to the
    /// renderer.
    pub fn tick(&mut self, dt: f32) {
        physics::step(&mut self.player, &self.world.store, &self.config.gameplay, dt);

        let center = ChunkCoord::from_world(self.player.position);
        self.world
            .reconcile(&mut self.renderer, center, self.config.render_distance);

        self.selection = self.renderer.cast_ray(
            self.player.position,
            self.player.look_direction(),
            self.config.gameplay.reach,
        );
        self.renderer.set_selection(self.selection.map(|hit| hit.cell));

        self.ticks += 1;
    }

    /// Breaks the aimed-at block and credits it to the inventory. No-op
    /// without a selection.
    pub fn break_block(&mut self) {
        let Some(hit) = self.selection else { return };
        if let Some(removed) = self.world.break_block(&mut self.renderer, hit.cell) {
            self.inventory.add(removed, 1);
            debug!("broke {} at {}", removed, hit.cell);
        }
    }

    /// Places the hotbar's selected block against the aimed-at face.
    /// Rejected without mutating anything when there is no selection, the
    /// target cell is occupied, the cell would intersect the player, or
    /// the inventory lacks the block.
    pub fn place_block(&mut self) {
        let Some(hit) = self.selection else { return };
        let target = hit.cell + hit.normal;
        if self.world.get_block(target) != BlockType::Air {
            return;
        }
        let gameplay = &self.config.gameplay;
        if collision::cell_overlaps_player(
            target,
            self.player.position,
            gameplay.player_width,
            gameplay.player_height,
        ) {
            return;
        }
        let block = self.inventory.selected_block();
        if !self.inventory.remove(block, 1) {
            return;
        }
        self.world.set_block(&mut self.renderer, target, block);
        debug!("placed {} at {}", block, target);
    }

    // Input surface: discrete events from the window/input layer.

    pub fn set_move_intent(&mut self, intent: MoveIntent) {
        self.player.intent = intent;
    }

    pub fn set_running(&mut self, running: bool) {
        self.player.running = running;
    }

    pub fn jump(&mut self) {
        self.player.queue_jump();
    }

    pub fn set_look(&mut self, yaw: f32, pitch: f32) {
        self.player.set_look(yaw, pitch);
    }

    pub fn select_slot(&mut self, slot: usize) {
        self.inventory.select_slot(slot);
    }

    pub fn cycle_slot(&mut self, delta: i32) {
        self.inventory.cycle_slot(delta);
    }

    // Read accessors for HUD and debug overlays.

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn selection(&self) -> Option<RayHit> {
        self.selection
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn stats(&self) -> EngineStats {
        EngineStats {
            ticks: self.ticks,
            loaded_chunks: self.world.manager.loaded_count(),
            render_batches: self.world.manager.batch_count(),
            player_position: self.player.position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::NullRenderer;

    const DT: f32 = 1.0 / 60.0;

    fn test_engine() -> VoxelEngine<NullRenderer> {
        let mut config = EngineConfig::default();
        config.render_distance = 1;
        VoxelEngine::new(config, NullRenderer::new())
    }

    /// Runs enough ticks for the player to settle onto the ground.
    fn settle(engine: &mut VoxelEngine<NullRenderer>) {
        for _ in 0..60 {
            engine.tick(DT);
        }
        assert!(engine.player().grounded);
    }

    #[test]
    fn construction_loads_the_spawn_neighborhood() {
        let engine = test_engine();
        assert_eq!(engine.stats().loaded_chunks, 9);
        assert_eq!(engine.renderer().chunk_count(), 9);
    }

    #[test]
    fn spawn_stands_clear_of_the_terrain() {
        let engine = test_engine();
        let gameplay = &engine.config.gameplay;
        assert!(!collision::blocked(
            &engine.world().store,
            engine.player().position,
            gameplay.player_width,
            gameplay.player_height,
        ));
    }

    #[test]
    fn aiming_down_selects_the_ground() {
        let mut engine = test_engine();
        engine.set_look(0.0, -1.5);
        settle(&mut engine);

        let hit = engine.selection().expect("ground in reach below the player");
        assert!(hit.block.is_solid());
        assert_eq!(hit.normal, IVec3::new(0, 1, 0));
    }

    #[test]
    fn break_then_place_round_trips() {
        let mut engine = test_engine();
        // Down-forward: far enough to hit ground outside the player's own
        // footprint, close enough to stay within reach.
        engine.set_look(0.0, -1.2);
        settle(&mut engine);

        let hit = engine.selection().expect("terrain within reach");
        let broken = hit.block;
        assert_eq!(engine.inventory().count(broken), 0);

        engine.break_block();
        assert_eq!(engine.inventory().count(broken), 1);
        assert_eq!(engine.world().get_block(hit.cell), BlockType::Air);
        assert_eq!(engine.renderer().block_at(hit.cell), None);

        // Refresh the selection, then put the block back against the
        // newly aimed-at face.
        engine.tick(DT);
        let hit = engine.selection().expect("terrain still within reach");
        let target = hit.cell + hit.normal;
        engine.select_slot(Inventory::slot_of(broken).unwrap());

        engine.place_block();
        assert_eq!(engine.inventory().count(broken), 0);
        assert_eq!(engine.world().get_block(target), broken);
        assert_eq!(engine.renderer().block_at(target), Some(broken));
    }

    #[test]
    fn placing_into_the_player_volume_is_rejected() {
        let mut engine = test_engine();
        // Straight down: the placement target is the cell the player's
        // legs occupy.
        engine.set_look(0.0, -1.5);
        settle(&mut engine);
        let hit = engine.selection().expect("ground below the player");
        let target = hit.cell + hit.normal;

        let block = engine.inventory().selected_block();
        engine.inventory.add(block, 1);
        engine.place_block();

        assert_eq!(engine.inventory().count(block), 1);
        assert_eq!(engine.world().get_block(target), BlockType::Air);
    }

    #[test]
    fn interaction_without_a_selection_is_a_no_op() {
        let mut engine = test_engine();
        // Well above the terrain, looking up at the open sky.
        engine.set_look(0.0, 1.5);
        engine.player.position.y = 50.0;
        engine.tick(DT);
        assert!(engine.selection().is_none());

        let entries = engine.world().store.len();
        engine.break_block();
        engine.place_block();
        assert_eq!(engine.world().store.len(), entries);
    }

    #[test]
    fn placement_without_stock_is_rejected() {
        let mut engine = test_engine();
        engine.set_look(0.0, -1.2);
        settle(&mut engine);
        assert!(engine.selection().is_some());

        let block = engine.inventory().selected_block();
        assert_eq!(engine.inventory().count(block), 0);
        let entries = engine.world().store.len();

        engine.place_block();
        assert_eq!(engine.world().store.len(), entries);
    }

    #[test]
    fn moving_far_enough_shifts_the_loaded_set() {
        let mut engine = test_engine();
        settle(&mut engine);
        let before: Vec<_> = engine.world().manager.loaded_coords();

        // Teleport three chunks east and reconcile on the next tick.
        engine.player.position.x += 48.0;
        engine.player.position.y += 8.0;
        engine.tick(DT);

        let after = engine.world().manager.loaded_coords();
        assert_eq!(after.len(), 9);
        assert_ne!(
            {
                let mut sorted = before.clone();
                sorted.sort();
                sorted
            },
            {
                let mut sorted = after.clone();
                sorted.sort();
                sorted
            }
        );
    }
}
