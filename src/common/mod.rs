//! Common, shared types.

pub mod contact;
pub mod countdown;
pub mod error;
pub mod layers;
pub mod schedule;
pub mod signals;
pub mod state;
pub mod tunables;

#[cfg(test)]
pub mod test_utils;
