//! Lighting plugin (Firefly) (render-only).
//!
//! A warm light follows the wizard. Each fire trap carries its own light that
//! is dark unless the trap is burning. Saws cast shadows.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::*;

use crate::common::state::GameState;
use crate::plugins::hazards::{FireTrap, Saw};
use crate::plugins::player::Player;

const PLAYER_LIGHT_RANGE: f32 = 7.0;
const TRAP_GLOW_RANGE: f32 = 3.0;
const TRAP_GLOW: Color = Color::srgb(1.0, 0.55, 0.15);

#[derive(Component)]
pub struct PlayerLight;

pub fn plugin(app: &mut App) {
    if !app.is_plugin_added::<FireflyPlugin>() {
        app.add_plugins(FireflyPlugin);
    }

    app.add_systems(OnEnter(GameState::InGame), setup)
        .add_systems(Update, (follow_player_light, attach_hazard_lighting, glow_fire_traps));
}

fn setup(mut commands: Commands) {
    commands.spawn((
        Name::new("PlayerLight"),
        PlayerLight,
        PointLight2d {
            color: Color::srgb(1.0, 0.9, 0.75),
            radius: PLAYER_LIGHT_RANGE,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 10.0),
        DespawnOnExit(GameState::InGame),
    ));
}

fn follow_player_light(
    q_player: Query<&Transform, (With<Player>, Without<PlayerLight>)>,
    mut q_light: Query<&mut Transform, (With<PlayerLight>, Without<Player>)>,
) {
    let Ok(tf_player) = q_player.single() else {
        return;
    };
    let Ok(mut tf_light) = q_light.single_mut() else {
        return;
    };

    tf_light.translation.x = tf_player.translation.x;
    tf_light.translation.y = tf_player.translation.y;
}

fn attach_hazard_lighting(
    mut commands: Commands,
    q_traps: Query<Entity, Added<FireTrap>>,
    q_saws: Query<(Entity, &Sprite), Added<Saw>>,
) {
    for e in &q_traps {
        commands.entity(e).insert(PointLight2d {
            color: Color::BLACK,
            radius: TRAP_GLOW_RANGE,
            ..default()
        });
    }
    for (e, sprite) in &q_saws {
        let radius = sprite.custom_size.map_or(0.5, |s| s.x * 0.5);
        commands.entity(e).insert(Occluder2d::circle(radius));
    }
}

fn glow_fire_traps(mut q: Query<(&FireTrap, &mut PointLight2d), Changed<FireTrap>>) {
    for (trap, mut light) in &mut q {
        light.color = if trap.is_active() { TRAP_GLOW } else { Color::BLACK };
    }
}
