use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use crate::config::GameplayConfig;

/// Movement intent flags, set by the input collaborator and consumed by
/// the physics step each tick.
#[derive(Debug, Default, Clone, Copy)]
pub struct MoveIntent {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

/// First-person controller state. `position.y` is the top of the player
/// volume; the feet sit `player_height` below it. Persists for the
/// session and resets to the spawn point when falling out of the world.
#[derive(Debug)]
pub struct Player {
    pub position: Vec3,
    pub velocity: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub intent: MoveIntent,
    pub running: bool,
    pub grounded: bool,
    spawn_point: Vec3,
    jump_queued: bool,
}

impl Player {
    pub fn new(spawn: Vec3) -> Self {
        Self {
            position: spawn,
            velocity: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            intent: MoveIntent::default(),
            running: false,
            grounded: false,
            spawn_point: spawn,
            jump_queued: false,
        }
    }

    /// Horizontal unit direction the player wants to move, derived from
    /// yaw and the intent flags. Zero when no flag is set.
    pub fn wish_direction(&self) -> Vec3 {
        let forward = Vec3::new(self.yaw.sin(), 0.0, self.yaw.cos());
        let right = Vec3::new((self.yaw + FRAC_PI_2).sin(), 0.0, (self.yaw + FRAC_PI_2).cos());

        let mut direction = Vec3::ZERO;
        if self.intent.forward {
            direction += forward;
        }
        if self.intent.backward {
            direction -= forward;
        }
        if self.intent.right {
            direction += right;
        }
        if self.intent.left {
            direction -= right;
        }
        direction.normalize_or_zero()
    }

    pub fn current_speed(&self, cfg: &GameplayConfig) -> f32 {
        if self.running {
            cfg.walk_speed * cfg.run_multiplier
        } else {
            cfg.walk_speed
        }
    }

    /// Full view direction including pitch, for the selection raycast.
    pub fn look_direction(&self) -> Vec3 {
        let (pitch_sin, pitch_cos) = self.pitch.sin_cos();
        Vec3::new(
            self.yaw.sin() * pitch_cos,
            pitch_sin,
            self.yaw.cos() * pitch_cos,
        )
        .normalize()
    }

    /// Sets the view orientation. Pitch is clamped just short of straight
    /// up/down so the look direction never degenerates.
    pub fn set_look(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch.clamp(-FRAC_PI_2 + 0.01, FRAC_PI_2 - 0.01);
    }

    /// Queues a jump for the next physics step; only consumed while
    /// grounded.
    pub fn queue_jump(&mut self) {
        self.jump_queued = true;
    }

    pub fn take_jump(&mut self) -> bool {
        std::mem::take(&mut self.jump_queued)
    }

    pub fn spawn_point(&self) -> Vec3 {
        self.spawn_point
    }

    pub fn respawn(&mut self) {
        self.position = self.spawn_point;
        self.velocity = Vec3::ZERO;
        self.grounded = false;
    }
}
