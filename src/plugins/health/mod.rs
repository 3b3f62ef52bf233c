//! Health plugin: clamped damage and healing, iFrames, one-way death latch.
//!
//! `Health` carries the whole state machine. Callers mutate it through
//! [`apply_damage`], which publishes a `HealthSignal` for the transitions
//! the rest of the game reacts to:
//!
//! ```text
//! Hurt -> animation trigger, iFrames start (hazard layer suppressed)
//! Died -> animation trigger, `Incapacitated` inserted exactly once
//! ```
//!
//! iFrames are explicit countdown state ticked in `TickSet::Health`.
//! Damage arriving during iFrames is still applied. Only collision with the
//! hazard layer is suppressed for the window.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::countdown::Countdown;
use crate::common::error::{PlatformerError, PlatformerResult};
use crate::common::layers::{player_layers, player_layers_invulnerable, Layer};
use crate::common::schedule::{ContactSet, TickSet};
use crate::common::signals::{AnimTrigger, AnimationTrigger};
use crate::plugins::player::Player;

const FLASH_COLOR: Color = Color::srgba(1.0, 0.0, 0.0, 0.5);

/// Marker: movement, attack and patrol systems skip this entity.
#[derive(Component, Debug, Clone, Copy)]
pub struct Incapacitated;

/// Sprite colour restored when a damage flash ends.
#[derive(Component, Debug, Clone, Copy)]
pub struct BaseTint(pub Color);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Invulnerability {
    remaining: Countdown,
    duration: f32,
    flashes: u32,
}

impl Invulnerability {
    fn new(duration: f32, flashes: u32) -> Self {
        Self {
            remaining: Countdown::new(duration),
            duration: duration.max(0.0),
            flashes,
        }
    }

    #[inline]
    pub fn remaining(&self) -> f32 {
        self.remaining.get()
    }

    /// The window is split into `flashes * 2` equal slots; even slots are tinted.
    pub fn flash_visible(&self) -> bool {
        if self.flashes == 0 || self.duration <= 0.0 {
            return false;
        }
        let slot = self.duration / (self.flashes * 2) as f32;
        let elapsed = self.duration - self.remaining.get();
        let index = (elapsed / slot) as u32;
        index < self.flashes * 2 && index % 2 == 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DamageOutcome {
    Hurt,
    Died,
    AlreadyDead,
}

#[derive(Component, Debug, Clone, PartialEq)]
pub struct Health {
    current: f32,
    max: f32,
    dead: bool,
    invulnerability: Option<Invulnerability>,
    iframes_duration: f32,
    flashes: u32,
}

impl Health {
    pub fn new(max: f32, iframes_duration: f32, flashes: u32) -> Self {
        let max = max.max(0.0);
        Self {
            current: max,
            max,
            dead: false,
            invulnerability: None,
            iframes_duration,
            flashes,
        }
    }

    #[inline]
    pub fn current(&self) -> f32 {
        self.current
    }

    #[inline]
    pub fn max(&self) -> f32 {
        self.max
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.dead
    }

    #[inline]
    pub fn is_invulnerable(&self) -> bool {
        self.invulnerability.is_some()
    }

    #[inline]
    pub fn invulnerability(&self) -> Option<&Invulnerability> {
        self.invulnerability.as_ref()
    }

    /// Fraction of max health left, in [0, 1].
    pub fn fraction(&self) -> f32 {
        if self.max <= 0.0 { 0.0 } else { self.current / self.max }
    }

    pub fn take_damage(&mut self, amount: f32) -> DamageOutcome {
        if self.dead {
            return DamageOutcome::AlreadyDead;
        }

        self.current = (self.current - amount).clamp(0.0, self.max);

        if self.current > 0.0 {
            // A new hit restarts the window.
            self.invulnerability = Some(Invulnerability::new(self.iframes_duration, self.flashes));
            DamageOutcome::Hurt
        } else {
            self.dead = true;
            self.invulnerability = None;
            DamageOutcome::Died
        }
    }

    /// Heal, never exceeding max. Returns the new current value.
    pub fn add_health(&mut self, amount: f32) -> PlatformerResult<f32> {
        if self.dead {
            return Err(PlatformerError::InvalidTransition { from: "dead", to: "healed" });
        }
        self.current = (self.current + amount).clamp(0.0, self.max);
        Ok(self.current)
    }

    /// Advance the iFrames window. Returns true on the tick it ends.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(inv) = &mut self.invulnerability else {
            return false;
        };
        inv.remaining.tick_down(dt);
        if inv.remaining.is_positive() {
            return false;
        }
        self.invulnerability = None;
        true
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HealthSignalKind {
    Hurt,
    Died,
    Healed,
}

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct HealthSignal {
    pub entity: Entity,
    pub kind: HealthSignalKind,
}

/// Damage entry point for every damage source.
pub fn apply_damage(
    entity: Entity,
    health: &mut Health,
    amount: f32,
    signals: &mut MessageWriter<HealthSignal>,
) -> DamageOutcome {
    let outcome = health.take_damage(amount);
    let kind = match outcome {
        DamageOutcome::Hurt => HealthSignalKind::Hurt,
        DamageOutcome::Died => HealthSignalKind::Died,
        DamageOutcome::AlreadyDead => return outcome,
    };
    signals.write(HealthSignal { entity, kind });
    outcome
}

pub fn plugin(app: &mut App) {
    app.add_message::<HealthSignal>()
        .add_systems(FixedUpdate, tick_invulnerability.in_set(TickSet::Health))
        .add_systems(
            FixedPostUpdate,
            (react_to_health_signals, sync_invulnerability_layers)
                .chain()
                .in_set(ContactSet::React),
        )
        .add_systems(PostUpdate, flash_tint);
}

pub fn tick_invulnerability(time: Res<Time>, mut q: Query<(Entity, &mut Health)>) {
    let dt = time.delta_secs();
    for (e, mut health) in &mut q {
        if health.tick(dt) {
            debug!("{e:?} iFrames ended");
        }
    }
}

/// Turn health transitions into animation triggers and death side effects.
pub fn react_to_health_signals(
    mut commands: Commands,
    mut signals: MessageReader<HealthSignal>,
    mut triggers: MessageWriter<AnimationTrigger>,
    mut q_velocity: Query<&mut LinearVelocity>,
) {
    for signal in signals.read() {
        match signal.kind {
            HealthSignalKind::Hurt => {
                triggers.write(AnimationTrigger {
                    entity: signal.entity,
                    trigger: AnimTrigger::Hurt,
                });
            }
            HealthSignalKind::Died => {
                info!("{:?} died", signal.entity);
                triggers.write(AnimationTrigger {
                    entity: signal.entity,
                    trigger: AnimTrigger::Dead,
                });
                if let Ok(mut vel) = q_velocity.get_mut(signal.entity) {
                    vel.x = 0.0;
                }
                if let Ok(mut ec) = commands.get_entity(signal.entity) {
                    ec.insert(Incapacitated);
                }
            }
            HealthSignalKind::Healed => {
                debug!("{:?} healed", signal.entity);
            }
        }
    }
}

/// Keep the player's hazard filter in sync with its iFrames window.
pub fn sync_invulnerability_layers(
    mut q: Query<(&Health, &mut CollisionLayers), With<Player>>,
) {
    for (health, mut layers) in &mut q {
        let suppressed = !layers.filters.has_all(Layer::Hazard);
        if health.is_invulnerable() == suppressed {
            continue;
        }
        *layers = if health.is_invulnerable() {
            player_layers_invulnerable()
        } else {
            player_layers()
        };
    }
}

pub fn flash_tint(mut q: Query<(&Health, &BaseTint, &mut Sprite)>) {
    for (health, base, mut sprite) in &mut q {
        sprite.color = match health.invulnerability() {
            Some(inv) if inv.flash_visible() => FLASH_COLOR,
            _ => base.0,
        };
    }
}
