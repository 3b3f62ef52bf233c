//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - we then call `wizard_platformer::game::configure_headless` to install gameplay plugins.
//! - time advances by exactly one fixed step per `app.update()`.

#![allow(dead_code)]

use std::time::Duration;

use avian2d::prelude::*;
use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use wizard_platformer::plugins::player::Player;

pub const STEP: f64 = 1.0 / 64.0;

pub fn app_headless() -> App {
    let mut app = App::new();

    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(STEP)));

    wizard_platformer::game::configure_headless(&mut app);
    // `App::run` normally does this; plugins such as avian register resources in `finish`.
    app.finish();
    app.cleanup();
    app
}

/// Boot into `InGame` and let the level spawn.
pub fn app_in_game() -> App {
    let mut app = app_headless();
    app.update();
    app
}

pub fn step(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}

pub fn player(app: &mut App) -> Entity {
    app.world_mut()
        .query_filtered::<Entity, With<Player>>()
        .single(app.world())
        .expect("exactly one player")
}

/// First entity carrying `T`, optionally matching a name prefix.
pub fn find<T: Component>(app: &mut App, name_prefix: &str) -> Entity {
    app.world_mut()
        .query_filtered::<(Entity, &Name), With<T>>()
        .iter(app.world())
        .find(|(_, n)| n.as_str().starts_with(name_prefix))
        .map(|(e, _)| e)
        .expect("entity not found")
}

pub fn collision_start(app: &mut App, a: Entity, b: Entity) {
    app.world_mut().write_message(CollisionStart {
        collider1: a,
        collider2: b,
        body1: Some(a),
        body2: Some(b),
    });
}

pub fn collision_end(app: &mut App, a: Entity, b: Entity) {
    app.world_mut().write_message(CollisionEnd {
        collider1: a,
        collider2: b,
        body1: Some(a),
        body2: Some(b),
    });
}

/// Teleport a body: physics position, transform and velocity.
pub fn place(app: &mut App, e: Entity, at: Vec2) {
    let mut entity = app.world_mut().entity_mut(e);
    if let Some(mut pos) = entity.get_mut::<Position>() {
        pos.0 = at;
    }
    if let Some(mut tf) = entity.get_mut::<Transform>() {
        tf.translation.x = at.x;
        tf.translation.y = at.y;
    }
    if let Some(mut vel) = entity.get_mut::<LinearVelocity>() {
        vel.0 = Vec2::ZERO;
    }
}
