//! Tunable gameplay constants.
//!
//! World units are meters. Every section falls back to its defaults when
//! missing from the config file, so a partial `.ron` is valid.

use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::common::error::ConfigResult;

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tunables {
    /// Render scale only. Physics runs in meters.
    pub pixels_per_meter: f32,
    /// Downward acceleration, m/s^2, before each body's gravity scale.
    pub gravity: f32,
    pub movement: MovementTunables,
    pub attack: AttackTunables,
    pub fireball: FireballTunables,
    pub health: HealthTunables,
    pub saw: SawTunables,
    pub fire_trap: FireTrapTunables,
    pub camera: CameraTunables,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 64.0,
            gravity: 9.81,
            movement: MovementTunables::default(),
            attack: AttackTunables::default(),
            fireball: FireballTunables::default(),
            health: HealthTunables::default(),
            saw: SawTunables::default(),
            fire_trap: FireTrapTunables::default(),
            camera: CameraTunables::default(),
        }
    }
}

impl Tunables {
    pub fn from_ron_str(src: &str) -> ConfigResult<Self> {
        Ok(ron::from_str(src)?)
    }

    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let src = std::fs::read_to_string(path)?;
        Self::from_ron_str(&src)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementTunables {
    pub speed: f32,
    pub jump_power: f32,
    pub gravity_scale: f32,
    pub input_deadzone: f32,
    /// Movement input is honoured only while the wall-jump cooldown is below this.
    pub wall_jump_lockout: f32,
    pub neutral_wall_kick: f32,
    pub directional_wall_kick: [f32; 2],
    pub probe_distance: f32,
    pub body_size: [f32; 2],
}

impl Default for MovementTunables {
    fn default() -> Self {
        Self {
            speed: 10.0,
            jump_power: 20.0,
            gravity_scale: 7.0,
            input_deadzone: 0.01,
            wall_jump_lockout: 0.2,
            neutral_wall_kick: 10.0,
            directional_wall_kick: [3.0, 6.0],
            probe_distance: 0.1,
            body_size: [0.8, 1.4],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttackTunables {
    pub cooldown: f32,
    pub fire_point: [f32; 2],
}

impl Default for AttackTunables {
    fn default() -> Self {
        Self { cooldown: 0.25, fire_point: [0.6, 0.2] }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FireballTunables {
    pub speed: f32,
    pub lifetime: f32,
    pub explode_duration: f32,
    pub pool_size: usize,
}

impl Default for FireballTunables {
    fn default() -> Self {
        Self { speed: 12.0, lifetime: 3.0, explode_duration: 0.35, pool_size: 10 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthTunables {
    pub player_max: f32,
    pub iframes_duration: f32,
    pub flashes: u32,
}

impl Default for HealthTunables {
    fn default() -> Self {
        Self { player_max: 10.0, iframes_duration: 1.0, flashes: 3 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SawTunables {
    pub travel_distance: f32,
    pub speed: f32,
    pub damage: f32,
}

impl Default for SawTunables {
    fn default() -> Self {
        Self { travel_distance: 2.0, speed: 4.0, damage: 1.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FireTrapTunables {
    pub damage: f32,
    pub activation_delay: f32,
    pub active_time: f32,
}

impl Default for FireTrapTunables {
    fn default() -> Self {
        Self { damage: 1.0, activation_delay: 1.0, active_time: 2.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraTunables {
    /// SmoothDamp time constant.
    pub smooth_time: f32,
    pub room_offset_x: f32,
}

impl Default for CameraTunables {
    fn default() -> Self {
        Self { smooth_time: 0.3, room_offset_x: 0.0 }
    }
}
