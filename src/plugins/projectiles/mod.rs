//! Projectiles plugin: **message-based producer → consumer** casting + fixed-size pooling.
//!
//! # Data flow
//! ```text
//!   FixedUpdate (TickSet::Attack, TickSet::Projectiles)
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  (A) Producer: player::attack::request_fireball                            │
//!│      - reads: latched attack input, Movement, AttackState                  │
//!│      - writes: CastFireball message                                        │
//!│                                                                            │
//!│  (B) Consumer: allocate_fireballs                                          │
//!│      - scans: FireballPool.slots in order, first Inactive wins             │
//!│      - mutates: Fireball, Transform, Visibility, CollisionLayers           │
//!│                                                                            │
//!│  (C) advance_fireballs: translate, age, lifetime and explosion clip        │
//!└────────────────────────────────────────────────────────────────────────────┘
//!                │
//!                v
//!   FixedPostUpdate (after avian collision events)
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  (D) ContactSet::Resolve: process_fireball_hits                            │
//!│      - Flying -> Exploding, filters emptied                                │
//!│                                                                            │
//!│  (E) ContactSet::Commit: return_to_pool_commit                             │
//!│      - PendingReturn -> Inactive, hidden, parked                           │
//!└────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Where do we still branch?
//! - Capacity: every slot may be in flight → allocator drops the cast and logs
//!   `PoolExhausted`. An in-flight fireball is never repositioned.
//! Everything else is treated as an invariant violation.

pub mod allocator;
pub mod collision;
pub mod commit;
pub mod components;
pub mod flight;
pub mod messages;
pub mod pool;

use bevy::prelude::*;

use crate::common::schedule::{ContactSet, TickSet};

pub use components::{Fireball, FireballState, PooledFireball};
pub use messages::CastFireball;
pub use pool::FireballPool;

pub struct ProjectilesPlugin;

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<pool::FireballPool>()
            .add_message::<CastFireball>()
            .add_systems(Startup, pool::init_fireball_pool);

        app.add_systems(
            FixedUpdate,
            (allocator::allocate_fireballs, flight::advance_fireballs)
                .chain()
                .in_set(TickSet::Projectiles),
        );

        app.add_systems(
            FixedPostUpdate,
            collision::process_fireball_hits.in_set(ContactSet::Resolve),
        )
        .add_systems(
            FixedPostUpdate,
            commit::return_to_pool_commit.in_set(ContactSet::Commit),
        );
    }
}
