//! World plugin: two rooms side by side, a door between them, and their hazards.
//!
//! ```text
//!  x = -10            0                10               20               30
//!   |  room 0 (center 0)               D  room 1 (center 20)               |
//!   |     [plat]      saw    |pillar| fire    fire   pickup  [plat]   saw    |
//!   |==================================|===================================|
//! ```
//!
//! Room 0 starts active; room 1's hazards stay dormant until the door is crossed.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::layers::{player_trigger_layers, solid_layers, Layer};
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::collectibles::spawn_health_collectible;
use crate::plugins::hazards::{spawn_fire_trap, spawn_saw};
use crate::plugins::rooms::{Door, Room};

pub const ROOM_WIDTH: f32 = 20.0;
pub const ROOM_COUNT: usize = 2;
const FLOOR_TOP: f32 = -4.5;
const FLOOR_THICKNESS: f32 = 1.0;
const WALL_HEIGHT: f32 = 12.0;
const DOOR_SIZE: Vec2 = Vec2::new(0.5, 3.0);
const HEAL_VALUE: f32 = 1.0;

const GROUND_COLOR: Color = Color::srgb(0.25, 0.27, 0.33);
const WALL_COLOR: Color = Color::srgb(0.2, 0.21, 0.26);

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), (spawn_rooms, spawn_level, spawn_hazards));
}

#[inline]
pub fn room_center(index: usize) -> f32 {
    index as f32 * ROOM_WIDTH
}

fn spawn_rooms(mut commands: Commands) {
    for index in 0..ROOM_COUNT {
        commands.spawn((
            Name::new(format!("Room{index}")),
            Room { index, center_x: room_center(index) },
            Transform::from_xyz(room_center(index), 0.0, 0.0),
            DespawnOnExit(GameState::InGame),
        ));
    }

    // Between room i and i + 1.
    for prev in 0..ROOM_COUNT - 1 {
        let x = room_center(prev) + ROOM_WIDTH * 0.5;
        commands.spawn((
            Name::new(format!("Door{prev}")),
            Door { prev_room: prev, next_room: prev + 1 },
            Sprite {
                color: Color::srgba(0.6, 0.5, 0.3, 0.35),
                custom_size: Some(DOOR_SIZE),
                ..default()
            },
            Transform::from_xyz(x, FLOOR_TOP + DOOR_SIZE.y * 0.5, 0.5),
            RigidBody::Static,
            Collider::rectangle(DOOR_SIZE.x, DOOR_SIZE.y),
            Sensor,
            player_trigger_layers(Layer::Door),
            CollisionEventsEnabled,
            DespawnOnExit(GameState::InGame),
        ));
    }
}

fn spawn_level(mut commands: Commands) {
    let mut spawn_block = |name: String, kind: Layer, center: Vec2, size: Vec2| {
        let color = if kind == Layer::Wall { WALL_COLOR } else { GROUND_COLOR };
        commands.spawn((
            Name::new(name),
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(center.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            solid_layers(kind),
            DespawnOnExit(GameState::InGame),
        ));
    };

    let left = -ROOM_WIDTH * 0.5;
    let right = room_center(ROOM_COUNT - 1) + ROOM_WIDTH * 0.5;

    for i in 0..ROOM_COUNT {
        spawn_block(
            format!("Floor{i}"),
            Layer::Ground,
            Vec2::new(room_center(i), FLOOR_TOP - FLOOR_THICKNESS * 0.5),
            Vec2::new(ROOM_WIDTH, FLOOR_THICKNESS),
        );
    }

    let wall_y = FLOOR_TOP + WALL_HEIGHT * 0.5;
    let wall = Vec2::new(1.0, WALL_HEIGHT);
    spawn_block("WallLeft".into(), Layer::Wall, Vec2::new(left - 0.5, wall_y), wall);
    spawn_block("WallRight".into(), Layer::Wall, Vec2::new(right + 0.5, wall_y), wall);
    spawn_block(
        "WallPillar".into(),
        Layer::Wall,
        Vec2::new(4.0, FLOOR_TOP + 1.5),
        Vec2::new(1.0, 3.0),
    );

    spawn_block("Platform0".into(), Layer::Ground, Vec2::new(-3.0, -2.0), Vec2::new(3.0, 0.5));
    spawn_block("Platform1".into(), Layer::Ground, Vec2::new(22.0, -1.5), Vec2::new(3.0, 0.5));
}

fn spawn_hazards(mut commands: Commands, tunables: Res<Tunables>) {
    let saw_y = FLOOR_TOP + 0.5;
    let fire_y = FLOOR_TOP + 0.25;

    spawn_saw(&mut commands, &tunables, 0, Vec3::new(0.0, saw_y, 1.0), true);
    spawn_fire_trap(&mut commands, &tunables, 0, Vec3::new(6.0, fire_y, 0.8), true);

    spawn_fire_trap(&mut commands, &tunables, 1, Vec3::new(16.0, fire_y, 0.8), false);
    spawn_saw(&mut commands, &tunables, 1, Vec3::new(24.0, saw_y, 1.0), false);

    spawn_health_collectible(&mut commands, Vec3::new(20.0, -3.5, 1.0), HEAL_VALUE);
}
