//! Output signals consumed by the host renderer and audio.
//!
//! Gameplay never waits on these. Triggers are fire-and-forget messages,
//! animator flags are plain component state read each frame.

use bevy::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimTrigger {
    Jump,
    Attack,
    Hurt,
    Dead,
    Explode,
}

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationTrigger {
    pub entity: Entity,
    pub trigger: AnimTrigger,
}

/// Boolean animator parameters.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AnimatorParams {
    pub run: bool,
    pub grounded: bool,
    pub activated: bool,
}

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundCue {
    FireTrap,
}
