//! Game composition root.
//!
//! Provides two public configuration functions:
//! - `configure_full`: includes DefaultPlugins (window/render/log) + game plugins.
//! - `configure_headless`: minimal configuration for integration tests.

use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::WindowResolution;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins;

#[cfg(target_os = "windows")]
use bevy::render::{
    settings::{Backends, PowerPreference, WgpuSettings},
    RenderPlugin,
};

pub const TUNABLES_PATH: &str = "assets/tunables.ron";
const LOG_FILTER: &str = "info,wgpu=error,naga=warn,wizard_platformer=debug";

pub fn run() {
    App::new().add_plugins(configure_full).run();
}

/// Full configuration for `cargo run`.
pub fn configure_full(app: &mut App) {
    let default_plugins = DefaultPlugins
        .set(WindowPlugin {
            primary_window: Some(Window {
                title: "Wizard Platformer".into(),
                resolution: WindowResolution::new(1280, 720),
                ..default()
            }),
            ..default()
        })
        .set(LogPlugin {
            filter: LOG_FILTER.into(),
            ..default()
        });

    // DX12 on the high-performance adapter; Vulkan is unreliable on some Windows drivers.
    #[cfg(target_os = "windows")]
    let default_plugins = default_plugins.set(RenderPlugin {
        render_creation: WgpuSettings {
            backends: Some(Backends::DX12),
            power_preference: PowerPreference::HighPerformance,
            ..default()
        }
        .into(),
        ..default()
    });

    app.add_plugins(default_plugins);

    // LogPlugin is up, so the outcome can be reported.
    app.insert_resource(load_tunables(TUNABLES_PATH));

    configure_game(app);
    plugins::register_render(app);
}

/// Headless configuration for integration tests.
///
/// Notes:
/// - Do NOT add DefaultPlugins.
/// - Do NOT add render-only plugins (Firefly/camera/UI).
/// - Tunables stay at their defaults unless the test inserts its own first.
pub fn configure_headless(app: &mut App) {
    configure_game(app);
}

/// Configuration shared by both full and headless apps.
fn configure_game(app: &mut App) {
    app.init_state::<GameState>();
    plugins::register_gameplay(app);
}

/// Tunables from disk, or defaults if the file is missing or broken.
pub fn load_tunables(path: &str) -> Tunables {
    match Tunables::load(path) {
        Ok(t) => {
            info!("loaded tunables from {path}");
            t
        }
        Err(err) => {
            warn!("using default tunables, {path}: {err}");
            Tunables::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn missing_or_broken_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("tunables.ron");
        assert_eq!(load_tunables(missing.to_str().unwrap()), Tunables::default());

        let mut broken = tempfile::NamedTempFile::new().unwrap();
        write!(broken, "(saw: (speed: [1, 2]))").unwrap();
        assert_eq!(load_tunables(broken.path().to_str().unwrap()), Tunables::default());
    }

    #[test]
    fn shipped_tunables_parse() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/", "assets/tunables.ron");
        let t = Tunables::load(path).unwrap();
        assert_eq!(t.fireball.pool_size, Tunables::default().fireball.pool_size);
    }
}
