//! Player plugin: the wizard.
//!
//! Pipeline:
//! - Update: sample input, write `PlayerInput` resource (attack press is latched)
//! - FixedUpdate `Sense`: box-cast probes fill `Contacts`
//! - FixedUpdate `Move`: `Movement::step` drives velocity, gravity and facing
//! - FixedUpdate `Attack`: cooldown gate, then a `CastFireball` request
//! - PostUpdate: mirror the sprite to the facing side

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::layers::{player_layers, Layer};
use crate::common::schedule::TickSet;
use crate::common::signals::{AnimTrigger, AnimationTrigger, AnimatorParams};
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::health::{BaseTint, Health, Incapacitated};

pub mod attack;
pub mod movement;

use attack::AttackState;
use movement::{Body, Contacts, JumpKind, MoveInput, Movement};

pub const SPAWN: Vec2 = Vec2::new(-7.0, -3.5);
const WIZARD_COLOR: Color = Color::srgb(0.45, 0.35, 0.95);

#[derive(Component)]
pub struct Player;

#[derive(Resource, Default, Debug)]
pub struct PlayerInput {
    pub axis: f32,
    /// Held, not edge-triggered.
    pub jump: bool,
    /// Latched on press, consumed by the next fixed tick.
    pub attack: bool,
}

pub fn plugin(app: &mut App) {
    app.insert_resource(PlayerInput::default())
        .add_systems(OnEnter(GameState::InGame), spawn)
        .add_systems(Update, gather_input)
        .add_systems(FixedUpdate, sense_contacts.in_set(TickSet::Sense))
        .add_systems(FixedUpdate, apply_movement.in_set(TickSet::Move))
        .add_systems(FixedUpdate, attack::request_fireball.in_set(TickSet::Attack))
        .add_systems(PostUpdate, face_sprite);
}

fn spawn(mut commands: Commands, tunables: Res<Tunables>) {
    let [w, h] = tunables.movement.body_size;
    let health = &tunables.health;

    commands.spawn((
        (
            Name::new("Wizard"),
            Player,
            Movement::default(),
            Contacts::default(),
            AttackState::new(tunables.attack.cooldown),
            Health::new(health.player_max, health.iframes_duration, health.flashes),
            BaseTint(WIZARD_COLOR),
            AnimatorParams::default(),
        ),
        Sprite {
            color: WIZARD_COLOR,
            custom_size: Some(Vec2::new(w, h)),
            ..default()
        },
        Transform::from_translation(SPAWN.extend(1.0)),
        (
            RigidBody::Dynamic,
            LockedAxes::ROTATION_LOCKED,
            Collider::rectangle(w, h),
            player_layers(),
            GravityScale(tunables.movement.gravity_scale),
            Friction::ZERO,
            LinearVelocity::ZERO,
            CollisionEventsEnabled,
            TranslationInterpolation,
        ),
        DespawnOnExit(GameState::InGame),
    ));
}

fn gather_input(keys: Option<Res<ButtonInput<KeyCode>>>, mut input: ResMut<PlayerInput>) {
    let Some(keys) = keys else {
        return;
    };

    let mut axis = 0.0;
    if keys.any_pressed([KeyCode::ArrowLeft, KeyCode::KeyA]) {
        axis -= 1.0;
    }
    if keys.any_pressed([KeyCode::ArrowRight, KeyCode::KeyD]) {
        axis += 1.0;
    }

    input.axis = axis;
    input.jump = keys.pressed(KeyCode::ArrowUp);
    if keys.just_pressed(KeyCode::Space) {
        input.attack = true;
    }
}

/// Box-cast the player's body down and to both sides.
fn sense_contacts(
    spatial: SpatialQuery,
    tunables: Res<Tunables>,
    mut q: Query<(&Transform, &mut Contacts), With<Player>>,
) {
    let [w, h] = tunables.movement.body_size;
    let shape = Collider::rectangle(w, h);
    let config = ShapeCastConfig::from_max_distance(tunables.movement.probe_distance);
    let ground = SpatialQueryFilter::from_mask(Layer::Ground);
    let wall = SpatialQueryFilter::from_mask(Layer::Wall);

    for (tf, mut contacts) in &mut q {
        let origin = tf.translation.truncate();
        let hit = |dir: Dir2, filter: &SpatialQueryFilter| {
            spatial.cast_shape(&shape, origin, 0.0, dir, &config, filter).is_some()
        };

        *contacts = Contacts {
            grounded: hit(Dir2::NEG_Y, &ground),
            wall_left: hit(Dir2::NEG_X, &wall),
            wall_right: hit(Dir2::X, &wall),
        };
    }
}

fn apply_movement(
    time: Res<Time>,
    tunables: Res<Tunables>,
    input: Res<PlayerInput>,
    mut triggers: MessageWriter<AnimationTrigger>,
    mut q: Query<
        (
            Entity,
            &mut Movement,
            &Contacts,
            &mut LinearVelocity,
            &mut GravityScale,
            &mut AnimatorParams,
        ),
        (With<Player>, Without<Incapacitated>),
    >,
) {
    let dt = time.delta_secs();
    let move_input = MoveInput { axis: input.axis, jump: input.jump };

    for (e, mut movement, contacts, mut vel, mut gravity, mut anim) in &mut q {
        let mut body = Body { velocity: vel.0, gravity_scale: gravity.0 };
        let jumped = movement.step(move_input, contacts, &mut body, &tunables.movement, dt);

        vel.0 = body.velocity;
        gravity.0 = body.gravity_scale;
        anim.run = movement.horizontal_input != 0.0;
        anim.grounded = movement.grounded;

        match jumped {
            Some(JumpKind::Ground) => {
                triggers.write(AnimationTrigger { entity: e, trigger: AnimTrigger::Jump });
            }
            Some(kind) => debug!("{e:?} wall jump: {kind:?}"),
            None => {}
        }
    }
}

fn face_sprite(mut q: Query<(&Movement, &mut Sprite), With<Player>>) {
    for (movement, mut sprite) in &mut q {
        sprite.flip_x = movement.facing < 0.0;
    }
}

#[cfg(test)]
mod tests;
