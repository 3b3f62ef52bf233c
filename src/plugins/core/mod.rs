//! Core plugin: shared resources, gameplay ordering and cross-cutting messages.

use bevy::prelude::*;

use crate::common::schedule;
use crate::common::signals::{AnimationTrigger, SoundCue};
use crate::common::tunables::Tunables;

pub fn plugin(app: &mut App) {
    // The full app may have loaded tunables from disk already.
    if !app.world().contains_resource::<Tunables>() {
        app.init_resource::<Tunables>();
    }
    app.insert_resource(ClearColor(Color::srgb(0.05, 0.05, 0.07)))
        .add_message::<AnimationTrigger>()
        .add_message::<SoundCue>();

    schedule::configure(app);
}
