//! Gameplay system ordering.
//!
//! ```text
//! FixedUpdate:      Sense -> Move -> Attack -> Projectiles -> Hazards -> Health
//! FixedPostUpdate:  (avian collision events) -> Resolve -> React -> Commit
//! ```
//!
//! Every set runs only in `GameState::InGame`.

use avian2d::collision::narrow_phase::CollisionEventSystems;
use bevy::prelude::*;

use crate::common::state::GameState;

/// Per-tick simulation, in order.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickSet {
    Sense,
    Move,
    Attack,
    Projectiles,
    Hazards,
    Health,
}

/// Reactions to collision begin/end messages, in order.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactSet {
    Resolve,
    React,
    Commit,
}

pub fn configure(app: &mut App) {
    app.configure_sets(
        FixedUpdate,
        (
            TickSet::Sense,
            TickSet::Move,
            TickSet::Attack,
            TickSet::Projectiles,
            TickSet::Hazards,
            TickSet::Health,
        )
            .chain()
            .run_if(in_state(GameState::InGame)),
    );

    app.configure_sets(
        FixedPostUpdate,
        (ContactSet::Resolve, ContactSet::React, ContactSet::Commit)
            .chain()
            .after(CollisionEventSystems)
            .run_if(in_state(GameState::InGame)),
    );
}
