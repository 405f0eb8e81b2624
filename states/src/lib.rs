use bevy::prelude::*;

#[derive(States, Default, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Waiting for the kitchen settings asset to hydrate.
    #[default]
    Loading,
    Playing,
    /// Terminal until an explicit session reset.
    Won,
}
