use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::error::{PlatformerError, PlatformerResult};
use crate::common::layers::{dormant_layers, Layer};
use crate::common::tunables::Tunables;

use super::components::{Fireball, FireballState, PooledFireball};

const FIREBALL_SIZE: f32 = 0.4;
pub(super) const PARKED: Vec3 = Vec3::new(0.0, -100.0, 2.0);

/// Fixed-size, ordered set of reusable fireballs.
#[derive(Resource, Debug, Default)]
pub struct FireballPool {
    pub slots: Vec<Entity>,
}

impl FireballPool {
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// First inactive slot by linear scan.
    ///
    /// A saturated pool is reported, never resolved by recycling a fireball in flight.
    pub fn first_inactive(
        &self,
        state_of: impl Fn(Entity) -> Option<FireballState>,
    ) -> PlatformerResult<Entity> {
        first_inactive_index(self.slots.iter().map(|&e| state_of(e)))
            .map(|i| self.slots[i])
            .ok_or(PlatformerError::PoolExhausted { capacity: self.capacity() })
    }
}

/// Index of the first slot known to be inactive. Unknown slots are skipped.
pub fn first_inactive_index(
    states: impl IntoIterator<Item = Option<FireballState>>,
) -> Option<usize> {
    states
        .into_iter()
        .position(|s| s == Some(FireballState::Inactive))
}

#[inline]
pub fn active_fireball_layers() -> CollisionLayers {
    CollisionLayers::new(
        Layer::Fireball,
        [Layer::Ground, Layer::Wall, Layer::Hazard, Layer::FireTrap],
    )
}

/// "Disabled" without structural changes: empty filters means we collide with nothing.
#[inline]
pub fn inactive_fireball_layers() -> CollisionLayers {
    dormant_layers(Layer::Fireball)
}

/// Pre-spawn pooled fireballs (inactive).
pub fn init_fireball_pool(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut pool: ResMut<FireballPool>,
) {
    pool.slots.clear();
    let cap = tunables.fireball.pool_size;
    pool.slots.reserve(cap);

    for i in 0..cap {
        let e = commands
            .spawn((
                Name::new(format!("Fireball{i}")),
                PooledFireball,
                Fireball::default(),
                Sprite {
                    color: Color::srgb(1.0, 0.55, 0.1),
                    custom_size: Some(Vec2::splat(FIREBALL_SIZE)),
                    ..default()
                },
                Transform::from_translation(PARKED),
                Visibility::Hidden,
                RigidBody::Kinematic,
                Collider::circle(FIREBALL_SIZE * 0.5),
                Sensor,
                inactive_fireball_layers(),
                CollisionEventsEnabled,
            ))
            .id();

        pool.slots.push(e);
    }

    debug!("fireball pool ready: {cap} slots");
}
