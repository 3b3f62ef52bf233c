//! Collision layers.

use avian2d::prelude::*;

#[derive(PhysicsLayer, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    #[default]
    Default,
    Ground,
    Wall,
    Player,
    Hazard,
    FireTrap,
    Fireball,
    Pickup,
    Door,
}

/// Player collision intent while vulnerable.
#[inline]
pub fn player_layers() -> CollisionLayers {
    CollisionLayers::new(
        Layer::Player,
        [
            Layer::Ground,
            Layer::Wall,
            Layer::Hazard,
            Layer::FireTrap,
            Layer::Pickup,
            Layer::Door,
        ],
    )
}

/// Player collision intent during iFrames: contact hazards are ignored.
///
/// Fire traps stay in the filter. Dropping them would end the overlap and
/// the trap would lose its occupant mid-burn.
#[inline]
pub fn player_layers_invulnerable() -> CollisionLayers {
    CollisionLayers::new(
        Layer::Player,
        [Layer::Ground, Layer::Wall, Layer::FireTrap, Layer::Pickup, Layer::Door],
    )
}

/// Membership kept, filters empty: the collider interacts with nothing.
#[inline]
pub fn dormant_layers(membership: Layer) -> CollisionLayers {
    CollisionLayers::new(membership, [] as [Layer; 0])
}

/// Static level geometry of the given kind.
#[inline]
pub fn solid_layers(membership: Layer) -> CollisionLayers {
    CollisionLayers::new(membership, [Layer::Player, Layer::Fireball])
}

/// Saws (`Hazard`) and fire traps (`FireTrap`): hurt the player, stop fireballs.
#[inline]
pub fn hazard_layers(membership: Layer) -> CollisionLayers {
    CollisionLayers::new(membership, [Layer::Player, Layer::Fireball])
}

/// Triggers only the player can touch (pickups, doors).
#[inline]
pub fn player_trigger_layers(membership: Layer) -> CollisionLayers {
    CollisionLayers::new(membership, [Layer::Player])
}
