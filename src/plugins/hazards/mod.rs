//! Hazards plugin: saws and fire traps.
//!
//! ```text
//! FixedUpdate  TickSet::Hazards     patrol_saws, tick_fire_traps (burn)
//! FixedPost    ContactSet::Resolve  saw_contact_damage, fire_trap_occupancy
//! PostUpdate                        tint_fire_traps
//! ```
//!
//! Every hazard belongs to a room through `RoomTrap` and does nothing while
//! its room is inactive.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::contact::orient;
use crate::common::error::PlatformerError;
use crate::common::layers::{dormant_layers, hazard_layers, Layer};
use crate::common::schedule::{ContactSet, TickSet};
use crate::common::signals::{AnimatorParams, SoundCue};
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::health::{apply_damage, Health, HealthSignal, Incapacitated};
use crate::plugins::player::Player;
use crate::plugins::rooms::RoomTrap;

pub mod fire_trap;
pub mod saw;

pub use fire_trap::{FireTrap, FireTrapEvent, FireTrapPhase};
pub use saw::Saw;

const SAW_RADIUS: f32 = 0.5;
const SAW_COLOR: Color = Color::srgb(0.7, 0.72, 0.78);
const FIRE_TRAP_SIZE: Vec2 = Vec2::new(1.0, 0.5);
const FIRE_IDLE: Color = Color::srgb(0.45, 0.2, 0.1);
const FIRE_ARMING: Color = Color::srgb(1.0, 0.0, 0.0);
const FIRE_ACTIVE: Color = Color::srgb(1.0, 0.7, 0.2);

pub fn plugin(app: &mut App) {
    app.add_systems(
        FixedUpdate,
        (patrol_saws, tick_fire_traps).in_set(TickSet::Hazards),
    )
    .add_systems(
        FixedPostUpdate,
        (saw_contact_damage, fire_trap_occupancy).in_set(ContactSet::Resolve),
    )
    .add_systems(PostUpdate, tint_fire_traps);
}

#[inline]
fn room_enabled(trap: Option<&RoomTrap>) -> bool {
    trap.is_none_or(|t| t.enabled)
}

/// Collision intent for a hazard of kind `membership` in an active or inactive room.
#[inline]
pub fn hazard_layers_for(membership: Layer, enabled: bool) -> CollisionLayers {
    if enabled { hazard_layers(membership) } else { dormant_layers(membership) }
}

// -----------------------------------------------------------------------------
// Spawn
// -----------------------------------------------------------------------------

pub fn spawn_saw(
    commands: &mut Commands,
    tunables: &Tunables,
    room: usize,
    pos: Vec3,
    enabled: bool,
) -> Entity {
    let cfg = &tunables.saw;
    commands
        .spawn((
            Name::new(format!("Saw{room}")),
            Saw::new(pos.x, cfg.travel_distance, cfg.speed, cfg.damage),
            RoomTrap { room, home: pos, enabled },
            Sprite {
                color: SAW_COLOR,
                custom_size: Some(Vec2::splat(SAW_RADIUS * 2.0)),
                ..default()
            },
            Transform::from_translation(pos),
            if enabled { Visibility::Inherited } else { Visibility::Hidden },
            RigidBody::Kinematic,
            Collider::circle(SAW_RADIUS),
            Sensor,
            hazard_layers_for(Layer::Hazard, enabled),
            CollisionEventsEnabled,
            DespawnOnExit(GameState::InGame),
        ))
        .id()
}

pub fn spawn_fire_trap(
    commands: &mut Commands,
    tunables: &Tunables,
    room: usize,
    pos: Vec3,
    enabled: bool,
) -> Entity {
    let cfg = &tunables.fire_trap;
    commands
        .spawn((
            Name::new(format!("FireTrap{room}")),
            FireTrap::new(cfg.damage, cfg.activation_delay, cfg.active_time),
            RoomTrap { room, home: pos, enabled },
            AnimatorParams::default(),
            Sprite {
                color: FIRE_IDLE,
                custom_size: Some(FIRE_TRAP_SIZE),
                ..default()
            },
            Transform::from_translation(pos),
            if enabled { Visibility::Inherited } else { Visibility::Hidden },
            RigidBody::Static,
            Collider::rectangle(FIRE_TRAP_SIZE.x, FIRE_TRAP_SIZE.y),
            Sensor,
            hazard_layers_for(Layer::FireTrap, enabled),
            CollisionEventsEnabled,
            DespawnOnExit(GameState::InGame),
        ))
        .id()
}

// -----------------------------------------------------------------------------
// Tick
// -----------------------------------------------------------------------------

pub fn patrol_saws(
    time: Res<Time>,
    mut q: Query<(&mut Saw, &mut Transform, Option<&RoomTrap>), Without<Incapacitated>>,
) {
    let dt = time.delta_secs();
    for (mut saw, mut tf, trap) in &mut q {
        if !room_enabled(trap) {
            continue;
        }
        tf.translation.x = saw.step(tf.translation.x, dt);
    }
}

/// Advance arming/active windows and burn the occupant of active traps.
pub fn tick_fire_traps(
    time: Res<Time>,
    mut q_traps: Query<(Entity, &mut FireTrap, &mut AnimatorParams, Option<&RoomTrap>)>,
    mut q_health: Query<&mut Health>,
    mut signals: MessageWriter<HealthSignal>,
    mut sounds: MessageWriter<SoundCue>,
) {
    let dt = time.delta_secs();

    for (e, mut trap, mut anim, room) in &mut q_traps {
        if !room_enabled(room) {
            continue;
        }

        match trap.tick(dt) {
            Some(FireTrapEvent::Activated) => {
                info!("{e:?} fire trap active");
                sounds.write(SoundCue::FireTrap);
                anim.activated = true;
            }
            Some(FireTrapEvent::Deactivated) => {
                debug!("{e:?} fire trap idle");
                anim.activated = false;
            }
            None => {}
        }

        let Some(target) = trap.burn_target() else {
            continue;
        };
        // Occupant may have been despawned since it stepped on.
        let Ok(mut health) = q_health.get_mut(target) else {
            debug!("{e:?} {}", PlatformerError::MissingTarget(target));
            trap.on_exit(target);
            continue;
        };
        apply_damage(target, &mut health, trap.damage, &mut signals);
    }
}

// -----------------------------------------------------------------------------
// Contacts
// -----------------------------------------------------------------------------

/// One hit per overlap-enter.
pub fn saw_contact_damage(
    mut started: MessageReader<CollisionStart>,
    q_saws: Query<(&Saw, Option<&RoomTrap>)>,
    mut q_player: Query<&mut Health, With<Player>>,
    mut signals: MessageWriter<HealthSignal>,
) {
    for ev in started.read() {
        let Some((saw_e, other)) = orient(ev.collider1, ev.collider2, |e| q_saws.contains(e))
        else {
            continue;
        };
        let Ok((saw, room)) = q_saws.get(saw_e) else {
            continue;
        };
        if !room_enabled(room) {
            continue;
        }
        let Ok(mut health) = q_player.get_mut(other) else {
            continue;
        };
        apply_damage(other, &mut health, saw.damage, &mut signals);
    }
}

/// Track who stands on each fire trap. Entering an idle trap arms it.
pub fn fire_trap_occupancy(
    mut started: MessageReader<CollisionStart>,
    mut ended: MessageReader<CollisionEnd>,
    mut q_traps: Query<(Entity, &mut FireTrap, Option<&RoomTrap>)>,
    q_player: Query<(), With<Player>>,
) {
    for ev in started.read() {
        let Some((trap_e, other)) = orient(ev.collider1, ev.collider2, |e| q_traps.contains(e))
        else {
            continue;
        };
        if !q_player.contains(other) {
            continue;
        }
        let Ok((_, mut trap, room)) = q_traps.get_mut(trap_e) else {
            continue;
        };
        if room_enabled(room) && trap.on_enter(other) {
            debug!("{trap_e:?} fire trap arming");
        }
    }

    for ev in ended.read() {
        let Some((trap_e, other)) = orient(ev.collider1, ev.collider2, |e| q_traps.contains(e))
        else {
            continue;
        };
        if let Ok((_, mut trap, _)) = q_traps.get_mut(trap_e) {
            trap.on_exit(other);
        }
    }
}

pub fn tint_fire_traps(mut q: Query<(&FireTrap, &mut Sprite)>) {
    for (trap, mut sprite) in &mut q {
        sprite.color = match trap.phase() {
            FireTrapPhase::Idle => FIRE_IDLE,
            FireTrapPhase::Arming(_) => FIRE_ARMING,
            FireTrapPhase::Active(_) => FIRE_ACTIVE,
        };
    }
}
