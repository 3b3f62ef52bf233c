//! Health collectibles: heal on player overlap, then disappear.
//!
//! Pickup runs inside the fixed physics step, so the collectible is only
//! silenced there (filters emptied, hidden) and marked. The despawn happens
//! later in `PostUpdate`.

use avian2d::prelude::*;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::contact::orient;
use crate::common::layers::{dormant_layers, player_trigger_layers, Layer};
use crate::common::schedule::ContactSet;
use crate::common::state::GameState;
use crate::plugins::health::{Health, HealthSignal, HealthSignalKind};
use crate::plugins::player::Player;

const PICKUP_SIZE: f32 = 0.5;

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct HealthCollectible {
    pub value: f32,
}

/// Marker: picked up, waiting for despawn.
#[derive(Component, Debug, Clone, Copy)]
pub struct Collected;

pub fn plugin(app: &mut App) {
    app.add_systems(FixedPostUpdate, pickup_health.in_set(ContactSet::Resolve))
        .add_systems(PostUpdate, despawn_collected);
}

pub fn spawn_health_collectible(commands: &mut Commands, pos: Vec3, value: f32) -> Entity {
    commands
        .spawn((
            Name::new("HealthCollectible"),
            HealthCollectible { value },
            Sprite {
                color: Color::srgb(0.9, 0.2, 0.35),
                custom_size: Some(Vec2::splat(PICKUP_SIZE)),
                ..default()
            },
            Transform::from_translation(pos),
            RigidBody::Static,
            Collider::rectangle(PICKUP_SIZE, PICKUP_SIZE),
            Sensor,
            player_trigger_layers(Layer::Pickup),
            CollisionEventsEnabled,
            DespawnOnExit(GameState::InGame),
        ))
        .id()
}

pub fn pickup_health(
    mut commands: Commands,
    mut started: MessageReader<CollisionStart>,
    mut q_pickups: Query<
        (&HealthCollectible, &mut CollisionLayers, &mut Visibility),
        Without<Collected>,
    >,
    mut q_player: Query<&mut Health, With<Player>>,
    mut signals: MessageWriter<HealthSignal>,
    mut taken: Local<HashSet<Entity>>,
) {
    taken.clear();

    for ev in started.read() {
        let Some((pickup_e, other)) =
            orient(ev.collider1, ev.collider2, |e| q_pickups.contains(e))
        else {
            continue;
        };
        if taken.contains(&pickup_e) {
            continue;
        }
        let Ok(mut health) = q_player.get_mut(other) else {
            continue;
        };
        let Ok((pickup, mut layers, mut vis)) = q_pickups.get_mut(pickup_e) else {
            continue;
        };

        match health.add_health(pickup.value) {
            Ok(now) => {
                debug!("{other:?} picked up {} health, now {now}", pickup.value);
                signals.write(HealthSignal { entity: other, kind: HealthSignalKind::Healed });
            }
            Err(err) => {
                debug!("pickup ignored: {err}");
                continue;
            }
        }

        taken.insert(pickup_e);
        *layers = dormant_layers(Layer::Pickup);
        *vis = Visibility::Hidden;
        commands.entity(pickup_e).insert(Collected);
    }
}

fn despawn_collected(mut commands: Commands, q: Query<Entity, With<Collected>>) {
    for e in &q {
        commands.entity(e).despawn();
    }
}
