pub mod collision;

use glam::Vec3;
use log::debug;

use crate::config::GameplayConfig;
use crate::player::Player;
use crate::world::VoxelStore;

/// Advances the player one physics step against the voxel grid.
///
/// Movement is resolved per axis: candidate X first, then Z against the
/// committed X, then Y against both. Rejecting each axis independently
/// lets the player slide along walls and prevents diagonal tunneling
/// through single-block gaps. A vertical hit while falling snaps the
/// player to stand exactly on the obstructing block and grounds them;
/// any vertical hit zeroes vertical velocity.
pub fn step(player: &mut Player, store: &VoxelStore, cfg: &GameplayConfig, dt: f32) {
    let wish = player.wish_direction() * player.current_speed(cfg) * dt;
    let mut pos = player.position;

    let candidate = Vec3::new(pos.x + wish.x, pos.y, pos.z);
    if !collision::blocked(store, candidate, cfg.player_width, cfg.player_height) {
        pos.x = candidate.x;
    }

    let candidate = Vec3::new(pos.x, pos.y, pos.z + wish.z);
    if !collision::blocked(store, candidate, cfg.player_width, cfg.player_height) {
        pos.z = candidate.z;
    }

    if player.take_jump() && player.grounded {
        player.velocity.y = cfg.jump_speed;
        player.grounded = false;
    }

    player.velocity.y -= cfg.gravity * dt;
    player.velocity.y = player.velocity.y.max(-cfg.terminal_velocity);

    let candidate = Vec3::new(pos.x, pos.y + player.velocity.y * dt, pos.z);
    if collision::blocked(store, candidate, cfg.player_width, cfg.player_height) {
        if player.velocity.y < 0.0 {
            // Landed: stand exactly on top of the obstructing block.
            let feet = candidate.y - cfg.player_height;
            pos.y = feet.floor() + 1.0 + cfg.player_height;
            player.grounded = true;
        }
        player.velocity.y = 0.0;
    } else {
        pos.y = candidate.y;
        player.grounded = false;
    }

    player.position = pos;

    if player.position.y < cfg.respawn_y {
        debug!("player fell below the world floor, respawning");
        player.respawn();
    }
}
