//! Decision functions consulted once per turn.
//!
//! A strategy reads the fully-updated world and returns the actions for this
//! turn. It may keep its own state between turns but must not hold on to
//! references into the world.

pub mod standard;

pub use standard::StandardStrategy;

use tankbot_core::commands::ActionSet;

use crate::world::WorldModel;

/// Per-turn decision function.
pub trait Strategy {
    fn decide(&mut self, world: &WorldModel) -> ActionSet;
}

impl<F> Strategy for F
where
    F: FnMut(&WorldModel) -> ActionSet,
{
    fn decide(&mut self, world: &WorldModel) -> ActionSet {
        self(world)
    }
}
