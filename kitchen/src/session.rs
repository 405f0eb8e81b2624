use {
    bevy::prelude::*,
    kitchen_components::Ingredient,
    messages::SessionReset,
    session_resources::{Hand, PlateStack, Session},
    states::GameState,
};

/// Tears the shift down and starts a new one: every world ingredient is
/// despawned synchronously (no residual plate evaluation can fire for
/// them), the hand, plate and session are zeroed, and gameplay resumes.
pub fn on_session_reset(
    _trigger: On<SessionReset>,
    mut commands: Commands,
    ingredients: Query<Entity, With<Ingredient>>,
    mut session: ResMut<Session>,
    mut hand: ResMut<Hand>,
    mut plate: ResMut<PlateStack>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let cleared = ingredients.iter().count();
    for entity in ingredients.iter() {
        commands.entity(entity).despawn();
    }
    session.reset();
    hand.0 = None;
    plate.clear();
    next_state.set(GameState::Playing);
    info!(cleared, "session reset");
}
