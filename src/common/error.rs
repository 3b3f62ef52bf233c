//! Error types.

use bevy::prelude::Entity;
use thiserror::Error;

/// Gameplay failures that used to be silent no-ops.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlatformerError {
    #[error("fireball pool exhausted: all {capacity} fireballs in flight")]
    PoolExhausted { capacity: usize },

    #[error("attack on cooldown: {remaining}s remaining")]
    OnCooldown { remaining: f32 },

    #[error("attack not allowed: moving, airborne or against a wall")]
    CannotAttack,

    #[error("entity {0:?} is missing or has no health")]
    MissingTarget(Entity),

    #[error("invalid state transition: {from} -> {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },
}

pub type PlatformerResult<T> = Result<T, PlatformerError>;

/// Failures while loading tunables.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
