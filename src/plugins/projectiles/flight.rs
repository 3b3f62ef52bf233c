//! Per-tick fireball motion, lifetime and explosion clip.

use bevy::prelude::*;

use crate::common::tunables::Tunables;

use super::components::{Fireball, PooledFireball};

pub fn advance_fireballs(
    time: Res<Time>,
    tunables: Res<Tunables>,
    mut q: Query<(&mut Fireball, &mut Transform, &mut Sprite), With<PooledFireball>>,
) {
    let dt = time.delta_secs();
    let cfg = &tunables.fireball;

    for (mut fireball, mut tf, mut sprite) in &mut q {
        if !fireball.is_active() {
            continue;
        }
        tf.translation.x += fireball.advance(dt, cfg.speed, cfg.lifetime);
        sprite.flip_x = fireball.facing < 0.0;
    }
}
