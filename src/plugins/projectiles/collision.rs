use avian2d::prelude::*;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::common::signals::{AnimTrigger, AnimationTrigger};
use crate::common::tunables::Tunables;

use super::components::{Fireball, PooledFireball};
use super::pool::inactive_fireball_layers;

/// First overlap explodes the fireball and switches its collider off,
/// so exactly one hit registers per flight.
pub fn process_fireball_hits(
    tunables: Res<Tunables>,
    mut started: MessageReader<CollisionStart>,
    mut q_fireballs: Query<(&mut Fireball, &mut CollisionLayers), With<PooledFireball>>,
    mut triggers: MessageWriter<AnimationTrigger>,
    // Per-frame dedupe
    mut seen: Local<HashSet<Entity>>,
) {
    seen.clear();

    for ev in started.read() {
        let (a, b) = (ev.collider1, ev.collider2);
        let fireball_e = if q_fireballs.contains(a) {
            a
        } else if q_fireballs.contains(b) {
            b
        } else {
            continue;
        };

        if !seen.insert(fireball_e) {
            continue;
        }

        let Ok((mut fireball, mut layers)) = q_fireballs.get_mut(fireball_e) else {
            continue;
        };

        if !fireball.register_hit(tunables.fireball.explode_duration) {
            continue;
        }

        *layers = inactive_fireball_layers();
        triggers.write(AnimationTrigger { entity: fireball_e, trigger: AnimTrigger::Explode });
    }
}
