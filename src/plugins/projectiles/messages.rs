//! Buffered cast requests.
//!
//! Producers create *intent*, the allocator applies it (pool scan + component writes).
//! This is a producer → queue → consumer pipeline.

use bevy::prelude::*;

#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct CastFireball {
    pub origin: Vec2,
    /// -1 or 1.
    pub direction: f32,
}
