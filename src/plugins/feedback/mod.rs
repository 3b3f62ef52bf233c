//! Renderer and audio boundary.
//!
//! Gameplay publishes animation triggers and sound cues without knowing who
//! plays them. This plugin is the consumer: there are no clips or sound files,
//! so each signal is logged at debug level, and triggers that have a visible
//! stand-in (the attack pop) apply it here.

use bevy::prelude::*;

use crate::common::signals::{AnimTrigger, AnimationTrigger, SoundCue};

const ATTACK_POP: f32 = 1.15;
const POP_DECAY: f32 = 6.0;

/// Short scale pulse on the entity that attacked.
#[derive(Component, Debug, Clone, Copy)]
pub struct Pop(f32);

pub fn plugin(app: &mut App) {
    app.add_systems(Update, (log_animation_triggers, play_sound_cues))
        .add_systems(PostUpdate, decay_pops);
}

pub fn log_animation_triggers(
    mut commands: Commands,
    mut triggers: MessageReader<AnimationTrigger>,
) {
    for t in triggers.read() {
        debug!("anim {:?} -> {:?}", t.trigger, t.entity);
        if t.trigger == AnimTrigger::Attack {
            if let Ok(mut ec) = commands.get_entity(t.entity) {
                ec.insert(Pop(ATTACK_POP));
            }
        }
    }
}

pub fn play_sound_cues(mut cues: MessageReader<SoundCue>) {
    for cue in cues.read() {
        debug!("sound {cue:?}");
    }
}

fn decay_pops(
    time: Res<Time>,
    mut commands: Commands,
    mut q: Query<(Entity, &mut Pop, &mut Transform)>,
) {
    let dt = time.delta_secs();
    for (e, mut pop, mut tf) in &mut q {
        pop.0 = 1.0 + (pop.0 - 1.0) * (-POP_DECAY * dt).exp();
        if pop.0 - 1.0 < 0.01 {
            tf.scale = Vec3::ONE;
            commands.entity(e).remove::<Pop>();
        } else {
            tf.scale = Vec3::splat(pop.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::test_utils::{init_messages, run_system_once, set_time_delta};

    #[test]
    fn attack_trigger_pops_and_settles() {
        let mut world = World::new();
        init_messages::<AnimationTrigger>(&mut world);
        let e = world.spawn(Transform::default()).id();
        world.write_message(AnimationTrigger { entity: e, trigger: AnimTrigger::Attack });

        run_system_once(&mut world, log_animation_triggers);
        assert!(world.get::<Pop>(e).is_some());

        set_time_delta(&mut world, 0.1);
        run_system_once(&mut world, decay_pops);
        let scale = world.get::<Transform>(e).unwrap().scale.x;
        assert!(scale > 1.0 && scale < ATTACK_POP);

        for _ in 0..20 {
            run_system_once(&mut world, decay_pops);
        }
        assert!(world.get::<Pop>(e).is_none());
        assert_eq!(world.get::<Transform>(e).unwrap().scale, Vec3::ONE);
    }

    #[test]
    fn other_triggers_leave_entities_alone() {
        let mut world = World::new();
        init_messages::<AnimationTrigger>(&mut world);
        let e = world.spawn(Transform::default()).id();
        world.write_message(AnimationTrigger { entity: e, trigger: AnimTrigger::Hurt });

        run_system_once(&mut world, log_animation_triggers);
        assert!(world.get::<Pop>(e).is_none());
    }
}
