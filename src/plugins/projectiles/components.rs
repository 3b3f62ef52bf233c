use bevy::prelude::*;

/// Marker for pre-spawned pool members.
#[derive(Component)]
pub struct PooledFireball;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FireballState {
    #[default]
    Inactive,
    Flying,
    /// Hit something; the explosion clip is playing.
    Exploding,
    /// Waiting for the commit system to hand it back to the pool.
    PendingReturn,
}

#[derive(Component, Debug, Clone, PartialEq)]
pub struct Fireball {
    pub state: FireballState,
    /// -1 or 1.
    pub direction: f32,
    pub age: f32,
    /// Sign of the sprite's horizontal scale.
    pub facing: f32,
    explode_remaining: f32,
}

impl Default for Fireball {
    fn default() -> Self {
        Self {
            state: FireballState::Inactive,
            direction: 1.0,
            age: 0.0,
            facing: 1.0,
            explode_remaining: 0.0,
        }
    }
}

impl Fireball {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.state != FireballState::Inactive
    }

    #[inline]
    pub fn has_hit(&self) -> bool {
        self.state == FireballState::Exploding
    }

    /// Reset for a new flight and turn the sprite to match `direction`.
    pub fn launch(&mut self, direction: f32) {
        self.age = 0.0;
        self.direction = direction;
        self.state = FireballState::Flying;
        self.explode_remaining = 0.0;
        if self.facing.signum() != direction.signum() {
            self.facing = -self.facing;
        }
    }

    /// Advance one tick. Returns the horizontal displacement to apply.
    pub fn advance(&mut self, dt: f32, speed: f32, lifetime: f32) -> f32 {
        match self.state {
            FireballState::Flying => {
                let dx = speed * dt * self.direction;
                self.age += dt;
                if self.age > lifetime {
                    self.state = FireballState::PendingReturn;
                }
                dx
            }
            FireballState::Exploding => {
                self.explode_remaining = (self.explode_remaining - dt).max(0.0);
                if self.explode_remaining <= 0.0 {
                    self.state = FireballState::PendingReturn;
                }
                0.0
            }
            FireballState::Inactive | FireballState::PendingReturn => 0.0,
        }
    }

    /// First overlap while flying. Returns false if the hit is ignored.
    pub fn register_hit(&mut self, explode_duration: f32) -> bool {
        if self.state != FireballState::Flying {
            return false;
        }
        self.state = FireballState::Exploding;
        self.explode_remaining = explode_duration;
        true
    }
}
