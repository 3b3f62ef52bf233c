//! Health bar: a dim track for max health with the current fraction drawn on top.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::plugins::health::Health;
use crate::plugins::player::Player;

const BAR_WIDTH: f32 = 200.0;
const BAR_HEIGHT: f32 = 16.0;

/// The foreground bar whose width tracks current health.
#[derive(Component)]
pub struct CurrentHealthBar;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_health_bar)
        .add_systems(Update, update_health_bar.run_if(in_state(GameState::InGame)));
}

fn spawn_health_bar(mut commands: Commands) {
    commands.spawn((
        Name::new("HealthBar"),
        Node {
            position_type: PositionType::Absolute,
            left: px(16.0),
            top: px(16.0),
            width: px(BAR_WIDTH),
            height: px(BAR_HEIGHT),
            ..default()
        },
        BackgroundColor(Color::srgba(0.3, 0.05, 0.05, 0.8)),
        DespawnOnExit(GameState::InGame),
        children![(
            CurrentHealthBar,
            Node {
                width: percent(100),
                height: percent(100),
                ..default()
            },
            BackgroundColor(Color::srgb(0.85, 0.15, 0.2)),
        )],
    ));
}

fn update_health_bar(
    q_player: Query<&Health, (With<Player>, Changed<Health>)>,
    mut q_bar: Query<&mut Node, With<CurrentHealthBar>>,
) {
    let Ok(health) = q_player.single() else {
        return;
    };
    for mut node in &mut q_bar {
        node.width = percent(health.fraction() * 100.0);
    }
}
