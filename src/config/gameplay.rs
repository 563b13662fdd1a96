use serde::{Deserialize, Serialize};

/// Movement and interaction tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    /// Downward acceleration in blocks/s².
    pub gravity: f32,
    /// Fall speed cap in blocks/s.
    pub terminal_velocity: f32,
    /// Initial upward velocity of a jump in blocks/s.
    pub jump_speed: f32,
    pub walk_speed: f32,
    pub run_multiplier: f32,
    /// Horizontal half-extent of the player volume.
    pub player_width: f32,
    /// Vertical extent of the player volume, head to just under the feet.
    pub player_height: f32,
    /// Selection raycast range in blocks.
    pub reach: f32,
    /// Block column the player spawns in.
    pub spawn_x: i32,
    pub spawn_z: i32,
    /// Falling below this y resets the player to the spawn point.
    pub respawn_y: f32,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            gravity: 32.0,
            terminal_velocity: 54.0,
            jump_speed: 8.0,
            walk_speed: 4.3,
            run_multiplier: 1.3,
            player_width: 0.3,
            player_height: 1.8,
            reach: 6.0,
            spawn_x: 8,
            spawn_z: 8,
            respawn_y: -16.0,
        }
    }
}
