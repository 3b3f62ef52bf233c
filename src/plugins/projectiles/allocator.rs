//! Cast consumer: launch fireballs from the pool.
//!
//! # Fail-fast invariants
//! - The pool slot list contains only valid pooled fireball entities.
//! - Therefore, a slot returned by the scan must match the fireball query.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::components::{Fireball, PooledFireball};
use super::messages::CastFireball;
use super::pool::{active_fireball_layers, FireballPool};

pub fn allocate_fireballs(
    pool: Res<FireballPool>,
    mut reader: MessageReader<CastFireball>,
    mut q: Query<
        (&mut Fireball, &mut Transform, &mut Visibility, &mut CollisionLayers),
        With<PooledFireball>,
    >,
) {
    for req in reader.read() {
        let e = match pool.first_inactive(|e| q.get(e).ok().map(|(f, ..)| f.state)) {
            Ok(e) => e,
            Err(err) => {
                // Capacity decision, not a correctness failure.
                warn!("cast dropped: {err}");
                continue;
            }
        };

        let (mut fireball, mut tf, mut vis, mut layers) = q
            .get_mut(e)
            .expect("FireballPool contained an entity missing pooled fireball components");

        fireball.launch(req.direction);
        tf.translation = req.origin.extend(2.0);
        *vis = Visibility::Visible;
        *layers = active_fireball_layers();
    }
}
