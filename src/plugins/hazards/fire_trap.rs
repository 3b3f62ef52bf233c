//! Fire trap: Idle -> Arming -> Active -> Idle, driven by explicit countdowns.
//!
//! The player entering while Idle arms the trap. Once active it burns whoever
//! is standing on it every tick until the active window closes. Leaving clears
//! the occupant straight away, so the burn stops on exit even mid-window.

use bevy::prelude::*;

use crate::common::countdown::Countdown;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum FireTrapPhase {
    #[default]
    Idle,
    Arming(Countdown),
    Active(Countdown),
}

/// Phase changes reported by [`FireTrap::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FireTrapEvent {
    Activated,
    Deactivated,
}

#[derive(Component, Debug, Clone, PartialEq)]
pub struct FireTrap {
    phase: FireTrapPhase,
    occupant: Option<Entity>,
    pub damage: f32,
    pub activation_delay: f32,
    pub active_time: f32,
}

impl FireTrap {
    pub fn new(damage: f32, activation_delay: f32, active_time: f32) -> Self {
        Self {
            phase: FireTrapPhase::Idle,
            occupant: None,
            damage,
            activation_delay,
            active_time,
        }
    }

    #[inline]
    pub fn phase(&self) -> FireTrapPhase {
        self.phase
    }

    #[inline]
    pub fn occupant(&self) -> Option<Entity> {
        self.occupant
    }

    #[inline]
    pub fn is_arming(&self) -> bool {
        matches!(self.phase, FireTrapPhase::Arming(_))
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self.phase, FireTrapPhase::Active(_))
    }

    /// Player stepped on. Returns true if this started the arming countdown.
    pub fn on_enter(&mut self, player: Entity) -> bool {
        self.occupant = Some(player);
        if self.phase != FireTrapPhase::Idle {
            return false;
        }
        self.phase = FireTrapPhase::Arming(Countdown::new(self.activation_delay));
        true
    }

    pub fn on_exit(&mut self, player: Entity) {
        if self.occupant == Some(player) {
            self.occupant = None;
        }
    }

    /// Advance the phase timer by `dt`.
    pub fn tick(&mut self, dt: f32) -> Option<FireTrapEvent> {
        match &mut self.phase {
            FireTrapPhase::Idle => None,
            FireTrapPhase::Arming(left) => {
                left.tick_down(dt);
                if left.is_positive() {
                    return None;
                }
                self.phase = FireTrapPhase::Active(Countdown::new(self.active_time));
                Some(FireTrapEvent::Activated)
            }
            FireTrapPhase::Active(left) => {
                left.tick_down(dt);
                if left.is_positive() {
                    return None;
                }
                self.phase = FireTrapPhase::Idle;
                Some(FireTrapEvent::Deactivated)
            }
        }
    }

    /// Who gets burned this tick, if anyone.
    #[inline]
    pub fn burn_target(&self) -> Option<Entity> {
        if self.is_active() { self.occupant } else { None }
    }

    pub fn reset(&mut self) {
        self.phase = FireTrapPhase::Idle;
        self.occupant = None;
    }
}
