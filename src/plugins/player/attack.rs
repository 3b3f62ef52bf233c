//! Attack controller: cooldown gate + fireball cast request.
//!
//! This is the producer side of the fireball pipeline. It never touches the
//! pool; it only writes `CastFireball` intent for the allocator.

use bevy::prelude::*;

use crate::common::error::{PlatformerError, PlatformerResult};
use crate::common::signals::{AnimTrigger, AnimationTrigger};
use crate::common::tunables::Tunables;
use crate::plugins::health::Incapacitated;
use crate::plugins::projectiles::CastFireball;

use super::movement::Movement;
use super::{Player, PlayerInput};

#[derive(Component, Debug, Clone, PartialEq)]
pub struct AttackState {
    /// Seconds since the last attack. Starts unbounded so the first attack is free.
    pub cooldown_timer: f32,
    pub attack_cooldown: f32,
}

impl AttackState {
    pub fn new(attack_cooldown: f32) -> Self {
        Self { cooldown_timer: f32::INFINITY, attack_cooldown }
    }

    pub fn try_attack(&mut self, can_attack: bool) -> PlatformerResult<()> {
        if self.cooldown_timer <= self.attack_cooldown {
            return Err(PlatformerError::OnCooldown {
                remaining: self.attack_cooldown - self.cooldown_timer,
            });
        }
        if !can_attack {
            return Err(PlatformerError::CannotAttack);
        }
        self.cooldown_timer = 0.0;
        Ok(())
    }

    #[inline]
    pub fn tick(&mut self, dt: f32) {
        self.cooldown_timer += dt;
    }
}

/// Mirror the configured fire point to the side the player faces.
#[inline]
pub fn fire_point(origin: Vec2, offset: [f32; 2], facing: f32) -> Vec2 {
    origin + Vec2::new(offset[0] * facing.signum(), offset[1])
}

pub fn request_fireball(
    time: Res<Time>,
    tunables: Res<Tunables>,
    mut input: ResMut<PlayerInput>,
    mut q_player: Query<
        (Entity, &Transform, &Movement, &mut AttackState),
        (With<Player>, Without<Incapacitated>),
    >,
    mut casts: MessageWriter<CastFireball>,
    mut triggers: MessageWriter<AnimationTrigger>,
) {
    // The latch is consumed even when the attack is rejected.
    let requested = std::mem::take(&mut input.attack);

    let Ok((e, tf, movement, mut attack)) = q_player.single_mut() else {
        return;
    };

    if requested {
        match attack.try_attack(movement.can_attack()) {
            Ok(()) => {
                triggers.write(AnimationTrigger { entity: e, trigger: AnimTrigger::Attack });
                casts.write(CastFireball {
                    origin: fire_point(
                        tf.translation.truncate(),
                        tunables.attack.fire_point,
                        movement.facing,
                    ),
                    direction: movement.facing.signum(),
                });
            }
            Err(err) => debug!("attack rejected: {err}"),
        }
    }

    attack.tick(time.delta_secs());
}
