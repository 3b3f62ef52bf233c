//! Test helpers.
//!
//! Bevy provides `World::run_system_once` (via the `RunSystemOnce` trait) for quickly
//! executing a system in tests without building a full schedule.
//!
//! Systems that use `Commands` enqueue structural changes. We call `world.flush()` after
//! running so queued commands are applied before assertions.

use std::time::Duration;

use bevy::ecs::message::Messages;
use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::prelude::*;

/// Run a system once on the given world, then flush deferred commands.
/// Returns the system output.
pub fn run_system_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system run failed");
    world.flush();
    out
}

/// Insert a `Time` whose last delta is `dt` seconds.
pub fn set_time_delta(world: &mut World, dt: f32) {
    if world.get_resource::<Time>().is_none() {
        world.insert_resource(Time::<()>::default());
    }
    world
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(dt));
}

/// Ensure the `Messages<M>` storage behind `MessageReader`/`MessageWriter` exists.
pub fn init_messages<M: Message>(world: &mut World) {
    if world.get_resource::<Messages<M>>().is_none() {
        world.init_resource::<Messages<M>>();
    }
}

/// Take every buffered message of type `M`.
pub fn drain_messages<M: Message>(world: &mut World) -> Vec<M> {
    init_messages::<M>(world);
    world.resource_mut::<Messages<M>>().drain().collect()
}
