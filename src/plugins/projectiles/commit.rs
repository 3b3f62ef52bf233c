//! Return commit: recycle fireballs back into the pool.
//!
//! This system is the "owner" of the *Inactive invariants*.
//!
//! Invariant: Inactive fireballs must be:
//! - hidden
//! - parked off-screen
//! - collide with nothing (filters empty)

use avian2d::prelude::*;
use bevy::prelude::*;

use super::components::{Fireball, FireballState, PooledFireball};
use super::pool::{inactive_fireball_layers, PARKED};

pub fn return_to_pool_commit(
    mut q: Query<(
        &mut Fireball,
        &mut Visibility,
        &mut Transform,
        &mut CollisionLayers,
    ), With<PooledFireball>>,
) {
    for (mut fireball, mut vis, mut tf, mut layers) in &mut q {
        if fireball.state != FireballState::PendingReturn { continue; }

        fireball.state = FireballState::Inactive;
        *vis = Visibility::Hidden;
        tf.translation = PARKED;
        *layers = inactive_fireball_layers();
    }
}
