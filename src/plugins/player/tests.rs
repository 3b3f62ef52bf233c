use avian2d::prelude::*;
use bevy::prelude::*;

use super::attack::{fire_point, AttackState};
use super::movement::*;
use super::*;
use crate::common::error::PlatformerError;
use crate::common::test_utils::{drain_messages, init_messages, run_system_once, set_time_delta};
use crate::common::tunables::{MovementTunables, Tunables};
use crate::plugins::projectiles::CastFireball;

const DT: f32 = 1.0 / 60.0;

/// Probe stub: fixed answers regardless of facing.
struct Probe {
    ground: bool,
    wall: bool,
}

impl ContactProbe for Probe {
    fn grounded(&self) -> bool {
        self.ground
    }

    fn on_wall(&self, _facing: f32) -> bool {
        self.wall
    }
}

fn body(velocity: Vec2) -> Body {
    Body { velocity, gravity_scale: 7.0 }
}

fn params() -> MovementTunables {
    MovementTunables::default()
}

// -----------------------------------------------------------------------------
// Movement state machine
// -----------------------------------------------------------------------------

#[test]
fn facing_follows_input_outside_deadzone() {
    let mut m = Movement::default();
    let probe = Probe { ground: true, wall: false };
    let mut b = body(Vec2::ZERO);

    m.step(MoveInput { axis: -1.0, jump: false }, &probe, &mut b, &params(), DT);
    assert_eq!(m.facing, -1.0);
    assert_eq!(b.velocity.x, -params().speed);

    // Inside the deadzone facing is kept.
    m.step(MoveInput { axis: 0.005, jump: false }, &probe, &mut b, &params(), DT);
    assert_eq!(m.facing, -1.0);
}

#[test]
fn grounded_against_wall_is_slide_locked() {
    let mut m = Movement::default();
    let mut b = body(Vec2::new(4.0, -9.0));

    m.step(
        MoveInput { axis: 1.0, jump: false },
        &Probe { ground: true, wall: true },
        &mut b,
        &params(),
        DT,
    );

    assert_eq!(b.velocity, Vec2::ZERO);
    assert_eq!(b.gravity_scale, 0.0);
    assert!(!m.can_attack());
}

#[test]
fn gravity_restored_off_the_wall() {
    let mut m = Movement::default();
    let mut b = Body { velocity: Vec2::ZERO, gravity_scale: 0.0 };

    m.step(MoveInput::default(), &Probe { ground: false, wall: false }, &mut b, &params(), DT);
    assert_eq!(b.gravity_scale, params().gravity_scale);
}

#[test]
fn ground_jump_sets_exact_jump_power() {
    for prior in [-30.0, 0.0, 12.5] {
        let mut m = Movement::default();
        let mut b = body(Vec2::new(0.0, prior));
        let kind = m.step(
            MoveInput { axis: 0.0, jump: true },
            &Probe { ground: true, wall: false },
            &mut b,
            &params(),
            DT,
        );
        assert_eq!(kind, Some(JumpKind::Ground));
        assert_eq!(b.velocity.y, params().jump_power);
    }
}

#[test]
fn neutral_wall_kick_pushes_away_and_flips_facing() {
    let mut m = Movement { facing: 1.0, wall_jump_cooldown: 0.1, ..default() };
    let mut b = body(Vec2::new(0.0, -3.0));

    let kind = m.step(
        MoveInput { axis: 0.0, jump: true },
        &Probe { ground: false, wall: true },
        &mut b,
        &params(),
        DT,
    );

    assert_eq!(kind, Some(JumpKind::NeutralWallKick));
    assert_eq!(b.velocity, Vec2::new(-10.0, 0.0));
    assert_eq!(m.facing, -1.0);
    assert_eq!(m.wall_jump_cooldown, 0.0);
}

#[test]
fn directional_wall_kick_keeps_facing() {
    let mut m = Movement::default();
    let mut b = body(Vec2::ZERO);

    let kind = m.step(
        MoveInput { axis: -1.0, jump: true },
        &Probe { ground: false, wall: true },
        &mut b,
        &params(),
        DT,
    );

    // Input flipped facing to -1 first, so the kick points right.
    assert_eq!(kind, Some(JumpKind::DirectionalWallKick));
    assert_eq!(b.velocity, Vec2::new(3.0, 6.0));
    assert_eq!(m.facing, -1.0);
}

#[test]
fn airborne_without_wall_cannot_jump() {
    let mut m = Movement::default();
    let mut b = body(Vec2::new(0.0, -5.0));
    let kind = m.step(
        MoveInput { axis: 0.0, jump: true },
        &Probe { ground: false, wall: false },
        &mut b,
        &params(),
        DT,
    );
    assert_eq!(kind, None);
    assert_eq!(b.velocity.y, -5.0);
}

#[test]
fn lockout_ignores_input_and_accumulates_cooldown() {
    let mut m = Movement { wall_jump_cooldown: 0.2, ..default() };
    let mut b = body(Vec2::new(-10.0, 0.0));

    let kind = m.step(
        MoveInput { axis: 1.0, jump: true },
        &Probe { ground: true, wall: false },
        &mut b,
        &params(),
        0.05,
    );

    assert_eq!(kind, None);
    assert_eq!(b.velocity, Vec2::new(-10.0, 0.0));
    assert!((m.wall_jump_cooldown - 0.25).abs() < 1e-6);
}

#[test]
fn contacts_pick_the_wall_on_the_facing_side() {
    let c = Contacts { grounded: false, wall_left: true, wall_right: false };
    assert!(c.on_wall(-1.0));
    assert!(!c.on_wall(1.0));
}

#[test]
fn can_attack_requires_idle_grounded_clear_of_walls() {
    let mut m = Movement::default();
    let mut b = body(Vec2::ZERO);
    let p = params();

    m.step(MoveInput::default(), &Probe { ground: true, wall: false }, &mut b, &p, DT);
    assert!(m.can_attack());

    let running = MoveInput { axis: 1.0, jump: false };
    m.step(running, &Probe { ground: true, wall: false }, &mut b, &p, DT);
    assert!(!m.can_attack());

    m.step(MoveInput::default(), &Probe { ground: false, wall: false }, &mut b, &p, DT);
    assert!(!m.can_attack());
}

// -----------------------------------------------------------------------------
// Attack controller
// -----------------------------------------------------------------------------

#[test]
fn first_attack_is_free_then_cooldown_applies() {
    let mut a = AttackState::new(0.5);
    assert_eq!(a.try_attack(true), Ok(()));

    a.tick(0.25);
    assert!(matches!(a.try_attack(true), Err(PlatformerError::OnCooldown { .. })));

    // Exactly at the cooldown is still too early.
    a.tick(0.25);
    assert!(a.try_attack(true).is_err());

    a.tick(0.01);
    assert_eq!(a.try_attack(true), Ok(()));
}

#[test]
fn attack_never_succeeds_twice_within_cooldown() {
    let cooldown = 0.25;
    let mut a = AttackState::new(cooldown);
    let mut last_success: Option<f32> = None;
    let mut t = 0.0;

    for _ in 0..600 {
        if a.try_attack(true).is_ok() {
            if let Some(prev) = last_success {
                assert!(t - prev > cooldown - 1e-4);
            }
            last_success = Some(t);
        }
        a.tick(DT);
        t += DT;
    }
    assert!(last_success.is_some());
}

#[test]
fn rejected_when_movement_forbids_it() {
    let mut a = AttackState::new(0.25);
    assert_eq!(a.try_attack(false), Err(PlatformerError::CannotAttack));
    // Rejection does not consume the cooldown.
    assert_eq!(a.try_attack(true), Ok(()));
}

#[test]
fn fire_point_mirrors_with_facing() {
    let origin = Vec2::new(1.0, 2.0);
    assert_eq!(fire_point(origin, [0.5, 0.25], 1.0), Vec2::new(1.5, 2.25));
    assert_eq!(fire_point(origin, [0.5, 0.25], -1.0), Vec2::new(0.5, 2.25));
}

// -----------------------------------------------------------------------------
// Systems
// -----------------------------------------------------------------------------

fn player_world() -> World {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.insert_resource(PlayerInput::default());
    init_messages::<AnimationTrigger>(&mut world);
    init_messages::<CastFireball>(&mut world);
    set_time_delta(&mut world, DT);
    world
}

#[test]
fn spawn_creates_player() {
    let mut world = player_world();
    run_system_once(&mut world, super::spawn);

    let mut q = world.query::<(&Player, &Health, &Movement, &AttackState, &CollisionLayers)>();
    let (_, health, _, _, layers) = q.single(&world).unwrap();
    assert_eq!(health.current(), Tunables::default().health.player_max);
    assert!(layers.filters.has_all(Layer::Hazard));
}

#[test]
fn apply_movement_writes_velocity_and_animator() {
    let mut world = player_world();
    world.resource_mut::<PlayerInput>().axis = 1.0;
    let e = world
        .spawn((
            Player,
            Movement::default(),
            Contacts { grounded: true, ..default() },
            LinearVelocity::ZERO,
            GravityScale(0.0),
            AnimatorParams::default(),
        ))
        .id();

    run_system_once(&mut world, super::apply_movement);

    let speed = Tunables::default().movement.speed;
    assert_eq!(world.get::<LinearVelocity>(e).unwrap().0, Vec2::new(speed, 0.0));
    assert_eq!(world.get::<GravityScale>(e).unwrap().0, 7.0);
    let anim = world.get::<AnimatorParams>(e).unwrap();
    assert!(anim.run && anim.grounded);
}

#[test]
fn ground_jump_emits_jump_trigger() {
    let mut world = player_world();
    world.resource_mut::<PlayerInput>().jump = true;
    let e = world
        .spawn((
            Player,
            Movement::default(),
            Contacts { grounded: true, ..default() },
            LinearVelocity::ZERO,
            GravityScale(7.0),
            AnimatorParams::default(),
        ))
        .id();

    run_system_once(&mut world, super::apply_movement);

    let triggers = drain_messages::<AnimationTrigger>(&mut world);
    assert_eq!(triggers, vec![AnimationTrigger { entity: e, trigger: AnimTrigger::Jump }]);
}

#[test]
fn incapacitated_player_does_not_move() {
    let mut world = player_world();
    world.resource_mut::<PlayerInput>().axis = -1.0;
    let e = world
        .spawn((
            Player,
            Incapacitated,
            Movement::default(),
            Contacts { grounded: true, ..default() },
            LinearVelocity::ZERO,
            GravityScale(7.0),
            AnimatorParams::default(),
        ))
        .id();

    run_system_once(&mut world, super::apply_movement);
    assert_eq!(world.get::<LinearVelocity>(e).unwrap().0, Vec2::ZERO);
}

#[test]
fn attack_request_casts_fireball_in_facing_direction() {
    let mut world = player_world();
    world.resource_mut::<PlayerInput>().attack = true;
    world.spawn((
        Player,
        Transform::from_xyz(2.0, 1.0, 0.0),
        Movement { grounded: true, facing: -1.0, ..default() },
        AttackState::new(0.25),
    ));

    run_system_once(&mut world, attack::request_fireball);

    let casts = drain_messages::<CastFireball>(&mut world);
    assert_eq!(casts.len(), 1);
    assert_eq!(casts[0].direction, -1.0);
    let [ox, oy] = Tunables::default().attack.fire_point;
    assert_eq!(casts[0].origin, Vec2::new(2.0 - ox, 1.0 + oy));
    assert!(!world.resource::<PlayerInput>().attack);
}

#[test]
fn attack_request_while_moving_is_dropped() {
    let mut world = player_world();
    world.resource_mut::<PlayerInput>().attack = true;
    world.spawn((
        Player,
        Transform::default(),
        Movement { grounded: true, horizontal_input: 1.0, ..default() },
        AttackState::new(0.25),
    ));

    run_system_once(&mut world, attack::request_fireball);

    assert!(drain_messages::<CastFireball>(&mut world).is_empty());
    assert!(!world.resource::<PlayerInput>().attack);
}
