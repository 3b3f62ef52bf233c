//! Collision pair orientation.
//!
//! Avian reports `collider1`/`collider2` in no particular order, so every
//! contact reaction first works out which side is which.

use bevy::prelude::*;

/// Orient `(a, b)` so the side matching `is_first` comes first.
///
/// Returns `None` when neither side matches. If both match, `a` wins.
#[inline]
pub fn orient(a: Entity, b: Entity, is_first: impl Fn(Entity) -> bool) -> Option<(Entity, Entity)> {
    if is_first(a) {
        Some((a, b))
    } else if is_first(b) {
        Some((b, a))
    } else {
        None
    }
}
