//! Feature plugins.

use bevy::prelude::*;

use crate::plugins::projectiles::ProjectilesPlugin;

pub mod collectibles;
pub mod core;
pub mod feedback;
pub mod hazards;
pub mod health;
pub mod physics;
pub mod player;
pub mod projectiles;
pub mod rooms;
pub mod world;

// Render-only
pub mod camera;
pub mod lighting;
pub mod ui;

/// Register gameplay plugins that work in headless tests.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    physics::plugin(app);
    world::plugin(app);
    rooms::plugin(app);
    player::plugin(app);
    health::plugin(app);
    hazards::plugin(app);
    collectibles::plugin(app);
    feedback::plugin(app);
    app.add_plugins(ProjectilesPlugin);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    lighting::plugin(app);
    camera::plugin(app);
    ui::health_bar::plugin(app);
}

/// Register all plugins (full app).
pub fn register_all(app: &mut App) {
    register_gameplay(app);
    register_render(app);
}
