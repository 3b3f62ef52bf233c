//! Camera plugin (render-only): one fixed view per room.
//!
//! ```text
//! OnEnter(InGame): spawn MainCamera framing room 0
//! Update:          MoveCameraToRoom -> RoomCamera.target_x
//!                  x approaches target_x with a critically damped spring
//! ```

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::*;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::rooms::MoveCameraToRoom;

#[derive(Component, Debug, Default)]
pub struct MainCamera;

/// Horizontal spring state.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct RoomCamera {
    pub target_x: f32,
    pub velocity: f32,
}

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_camera)
        .add_systems(
            Update,
            (retarget_camera, glide_to_room)
                .chain()
                .run_if(in_state(GameState::InGame)),
        );
}

fn spawn_camera(mut commands: Commands, tunables: Res<Tunables>) {
    let x = tunables.camera.room_offset_x;
    commands.spawn((
        Name::new("MainCamera"),
        Camera2d,
        MainCamera,
        RoomCamera { target_x: x, velocity: 0.0 },
        Projection::Orthographic(OrthographicProjection {
            scale: 1.0 / tunables.pixels_per_meter.max(1.0),
            ..OrthographicProjection::default_2d()
        }),
        FireflyConfig::default(),
        Transform::from_xyz(x, 0.0, 999.0),
        DespawnOnExit(GameState::InGame),
    ));
}

fn retarget_camera(mut moves: MessageReader<MoveCameraToRoom>, mut q: Query<&mut RoomCamera>) {
    // Only the newest command matters.
    let Some(cmd) = moves.read().last() else {
        return;
    };
    for mut cam in &mut q {
        cam.target_x = cmd.x;
    }
}

fn glide_to_room(
    time: Res<Time>,
    tunables: Res<Tunables>,
    mut q: Query<(&mut RoomCamera, &mut Transform)>,
) {
    let dt = time.delta_secs();
    for (mut cam, mut tf) in &mut q {
        let RoomCamera { target_x, mut velocity } = *cam;
        tf.translation.x = smooth_damp(
            tf.translation.x,
            target_x,
            &mut velocity,
            tunables.camera.smooth_time,
            dt,
        );
        cam.velocity = velocity;
    }
}

/// Critically damped approach of `current` to `target` over roughly `smooth_time`
/// seconds. Never overshoots.
pub fn smooth_damp(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    dt: f32,
) -> f32 {
    if dt <= 0.0 {
        return current;
    }
    let smooth_time = smooth_time.max(1e-4);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let out = target + (change + temp) * decay;

    if (target - current > 0.0) == (out > target) {
        *velocity = 0.0;
        return target;
    }
    out
}
