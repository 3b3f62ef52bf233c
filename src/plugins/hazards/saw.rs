//! Saw: bounded horizontal patrol, damage once per overlap-enter.

use bevy::prelude::*;

#[derive(Component, Debug, Clone, PartialEq)]
pub struct Saw {
    left_edge: f32,
    right_edge: f32,
    moving_left: bool,
    pub speed: f32,
    pub damage: f32,
}

impl Saw {
    /// Bounds are fixed once from the spawn position.
    pub fn new(spawn_x: f32, travel_distance: f32, speed: f32, damage: f32) -> Self {
        let d = travel_distance.abs();
        Self {
            left_edge: spawn_x - d,
            right_edge: spawn_x + d,
            moving_left: false,
            speed,
            damage,
        }
    }

    #[inline]
    pub fn bounds(&self) -> (f32, f32) {
        (self.left_edge, self.right_edge)
    }

    #[inline]
    pub fn moving_left(&self) -> bool {
        self.moving_left
    }

    /// Next x position. The step that would cross a bound lands exactly on it;
    /// the step taken at a bound reverses direction without moving.
    pub fn step(&mut self, x: f32, dt: f32) -> f32 {
        let travel = self.speed * dt;
        if self.moving_left {
            if x > self.left_edge {
                (x - travel).max(self.left_edge)
            } else {
                self.moving_left = false;
                x
            }
        } else if x < self.right_edge {
            (x + travel).min(self.right_edge)
        } else {
            self.moving_left = true;
            x
        }
    }

    /// Back to the spawn heading.
    pub fn reset(&mut self) {
        self.moving_left = false;
    }
}
