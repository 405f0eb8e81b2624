use bevy::prelude::*;

/// Phases of one simulation tick. `game::GamePlugin` chains these in order;
/// the plate protocol relies on intents resolving before effects and on all
/// destruction happening in `FrameEnd`.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum GameSchedule {
    /// Timer upkeep (plate cooldowns).
    FrameStart,
    /// Raw input collapsed into intents, aim ray resolved.
    ResolveIntent,
    /// Movement and kinematic integration.
    PerformAction,
    /// Inventory mutation and plate capture.
    Effect,
    /// TTL, off-map and discarded-entity sweep.
    FrameEnd,
}
