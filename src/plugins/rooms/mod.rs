//! Rooms plugin: doors switch the active room and steer the camera.
//!
//! ```text
//! CollisionStart(player, door)
//!   -> ActivateRoom { entered, true }, ActivateRoom { left, false }
//!   -> MoveCameraToRoom { x }
//! ActivateRoom -> every RoomTrap of that room goes home, resets, wakes or sleeps
//! ```
//!
//! Entering from the left of a door leads to its next room, from the right to
//! its previous one.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::contact::orient;
use crate::common::layers::Layer;
use crate::common::schedule::ContactSet;
use crate::common::signals::AnimatorParams;
use crate::common::tunables::Tunables;
use crate::plugins::hazards::{hazard_layers_for, FireTrap, Saw};
use crate::plugins::player::Player;

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Room {
    pub index: usize,
    pub center_x: f32,
}

/// A hazard owned by a room, with the position it returns to on activation.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct RoomTrap {
    pub room: usize,
    pub home: Vec3,
    pub enabled: bool,
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Door {
    pub prev_room: usize,
    pub next_room: usize,
}

impl Door {
    /// `(entered, left)` for a player touching the door at `player_x`.
    #[inline]
    pub fn crossing(&self, player_x: f32, door_x: f32) -> (usize, usize) {
        if player_x < door_x {
            (self.next_room, self.prev_room)
        } else {
            (self.prev_room, self.next_room)
        }
    }
}

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ActiveRoom(pub usize);

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActivateRoom {
    pub room: usize,
    pub active: bool,
}

/// Camera command: settle on this x.
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct MoveCameraToRoom {
    pub x: f32,
}

pub fn plugin(app: &mut App) {
    app.init_resource::<ActiveRoom>()
        .add_message::<ActivateRoom>()
        .add_message::<MoveCameraToRoom>()
        .add_systems(FixedPostUpdate, door_transitions.in_set(ContactSet::Resolve))
        .add_systems(FixedPostUpdate, apply_room_activation.in_set(ContactSet::React));
}

pub fn door_transitions(
    tunables: Res<Tunables>,
    mut started: MessageReader<CollisionStart>,
    q_doors: Query<(&Door, &Transform)>,
    q_player: Query<&Transform, With<Player>>,
    q_rooms: Query<&Room>,
    mut activate: MessageWriter<ActivateRoom>,
    mut camera: MessageWriter<MoveCameraToRoom>,
) {
    for ev in started.read() {
        let Some((door_e, other)) = orient(ev.collider1, ev.collider2, |e| q_doors.contains(e))
        else {
            continue;
        };
        let Ok(player_tf) = q_player.get(other) else {
            continue;
        };
        let Ok((door, door_tf)) = q_doors.get(door_e) else {
            continue;
        };

        let (entered, left) = door.crossing(player_tf.translation.x, door_tf.translation.x);

        match q_rooms.iter().find(|r| r.index == entered) {
            Some(room) => {
                camera.write(MoveCameraToRoom { x: room.center_x + tunables.camera.room_offset_x });
            }
            None => warn!("{door_e:?} leads to unknown room {entered}"),
        }

        activate.write(ActivateRoom { room: entered, active: true });
        activate.write(ActivateRoom { room: left, active: false });
    }
}

/// Send every trap of the room home and reset it; wake or sleep its collider.
pub fn apply_room_activation(
    mut reader: MessageReader<ActivateRoom>,
    mut active_room: ResMut<ActiveRoom>,
    mut q: Query<(
        &mut RoomTrap,
        &mut Transform,
        &mut CollisionLayers,
        &mut Visibility,
        Option<&mut Saw>,
        Option<&mut FireTrap>,
        Option<&mut AnimatorParams>,
    )>,
) {
    for msg in reader.read() {
        if msg.active && active_room.0 != msg.room {
            info!("room {} -> room {}", active_room.0, msg.room);
            active_room.0 = msg.room;
        }

        for (mut trap, mut tf, mut layers, mut vis, saw, fire, anim) in &mut q {
            if trap.room != msg.room {
                continue;
            }

            trap.enabled = msg.active;
            tf.translation = trap.home;
            let kind = if fire.is_some() { Layer::FireTrap } else { Layer::Hazard };
            *layers = hazard_layers_for(kind, msg.active);
            *vis = if msg.active { Visibility::Inherited } else { Visibility::Hidden };

            if let Some(mut saw) = saw {
                saw.reset();
            }
            if let Some(mut fire) = fire {
                fire.reset();
            }
            if let Some(mut anim) = anim {
                anim.activated = false;
            }
        }
    }
}
