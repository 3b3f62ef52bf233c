//! Movement controller state machine.
//!
//! States are derived every tick from two probes rather than stored:
//!
//! ```text
//! grounded && !on_wall  -> Grounded
//! !grounded && on_wall  -> WallSliding
//! !grounded && !on_wall -> Airborne
//! grounded && on_wall   -> Grounded, slide-locked (gravity and velocity zeroed)
//! ```
//!
//! Geometry is reached only through [`ContactProbe`], so this file has no
//! physics dependency.

use bevy::prelude::*;

use crate::common::tunables::MovementTunables;

/// Ground/wall queries against the current world state.
pub trait ContactProbe {
    fn grounded(&self) -> bool;

    /// Wall contact on the side `facing` points to.
    fn on_wall(&self, facing: f32) -> bool;
}

/// Probe results for one body, filled by `sense_contacts` each tick.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Contacts {
    pub grounded: bool,
    pub wall_left: bool,
    pub wall_right: bool,
}

impl ContactProbe for Contacts {
    fn grounded(&self) -> bool {
        self.grounded
    }

    fn on_wall(&self, facing: f32) -> bool {
        if facing < 0.0 { self.wall_left } else { self.wall_right }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MoveInput {
    /// Horizontal axis in [-1, 1].
    pub axis: f32,
    pub jump: bool,
}

/// Rigid body values the controller writes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    pub velocity: Vec2,
    pub gravity_scale: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JumpKind {
    Ground,
    NeutralWallKick,
    DirectionalWallKick,
}

#[derive(Component, Debug, Clone, PartialEq)]
pub struct Movement {
    pub horizontal_input: f32,
    pub grounded: bool,
    pub on_wall: bool,
    pub wall_jump_cooldown: f32,
    /// Sign of the sprite's horizontal scale: 1 faces right, -1 faces left.
    pub facing: f32,
}

impl Default for Movement {
    fn default() -> Self {
        Self {
            horizontal_input: 0.0,
            grounded: false,
            on_wall: false,
            wall_jump_cooldown: 0.0,
            facing: 1.0,
        }
    }
}

impl Movement {
    /// Idle, grounded and clear of walls.
    pub fn can_attack(&self) -> bool {
        self.horizontal_input == 0.0 && self.grounded && !self.on_wall
    }

    pub fn step(
        &mut self,
        input: MoveInput,
        probe: &impl ContactProbe,
        body: &mut Body,
        params: &MovementTunables,
        dt: f32,
    ) -> Option<JumpKind> {
        self.horizontal_input = input.axis.clamp(-1.0, 1.0);
        if self.horizontal_input > params.input_deadzone {
            self.facing = 1.0;
        } else if self.horizontal_input < -params.input_deadzone {
            self.facing = -1.0;
        }

        self.grounded = probe.grounded();
        self.on_wall = probe.on_wall(self.facing);

        if self.wall_jump_cooldown >= params.wall_jump_lockout {
            // Cooldown grows with time; only a wall jump resets it.
            self.wall_jump_cooldown += dt;
            return None;
        }

        body.velocity.x = self.horizontal_input * params.speed;

        if self.on_wall && self.grounded {
            body.gravity_scale = 0.0;
            body.velocity = Vec2::ZERO;
        } else {
            body.gravity_scale = params.gravity_scale;
        }

        if input.jump { self.jump(body, params) } else { None }
    }

    fn jump(&mut self, body: &mut Body, params: &MovementTunables) -> Option<JumpKind> {
        if self.grounded {
            body.velocity.y = params.jump_power;
            return Some(JumpKind::Ground);
        }

        if !self.on_wall {
            return None;
        }

        let kind = if self.horizontal_input == 0.0 {
            body.velocity = Vec2::new(-self.facing * params.neutral_wall_kick, 0.0);
            self.facing = -self.facing;
            JumpKind::NeutralWallKick
        } else {
            let [x, y] = params.directional_wall_kick;
            body.velocity = Vec2::new(-self.facing * x, y);
            JumpKind::DirectionalWallKick
        };
        self.wall_jump_cooldown = 0.0;
        Some(kind)
    }
}
