use {
    crate::INGREDIENT_HIT_RADIUS,
    bevy::prelude::*,
    game_assets::KitchenSettings,
    kitchen_components::{
        AngularVelocity, Discarded, HitRadius, Ingredient, Interactable, Lifetime, PlateCooldown,
        Velocity,
    },
    messages::{PickUpIntent, ThrowIntent},
    session_resources::{Hand, Session},
};

/// Fills the empty hand from a spawner or a loose world ingredient. A loose
/// source vanishes from the world in the same invocation that fills the
/// hand, so the item never exists in both places.
pub fn handle_pickup(
    mut intents: MessageReader<PickUpIntent>,
    mut commands: Commands,
    mut session: ResMut<Session>,
    mut hand: ResMut<Hand>,
    loose: Query<(), (With<Ingredient>, Without<Discarded>)>,
) {
    for intent in intents.read() {
        if session.game_won {
            continue;
        }
        if !hand.is_empty() {
            debug!("hand already full, ignoring pickup");
            continue;
        }
        if let Some(source) = intent.source {
            if loose.get(source).is_err() {
                debug!(?source, "pickup target no longer exists");
                continue;
            }
            commands.entity(source).despawn();
        }
        hand.0 = Some(intent.ingredient);
        session.post_message(format!("Picked up {}", intent.ingredient.label()));
    }
}

/// Launches the held ingredient as a fresh world entity with the intent's
/// spawn kinematics. Empty hand or a won game: no-op.
pub fn handle_throw(
    mut intents: MessageReader<ThrowIntent>,
    mut commands: Commands,
    mut session: ResMut<Session>,
    mut hand: ResMut<Hand>,
    settings: Res<KitchenSettings>,
) {
    for intent in intents.read() {
        if session.game_won {
            continue;
        }
        let Some(ingredient) = hand.0.take() else {
            continue;
        };
        let entity = commands
            .spawn((
                Name::new("Ingredient"),
                Ingredient(ingredient),
                Interactable {
                    ingredient,
                    is_spawner: false,
                },
                HitRadius(INGREDIENT_HIT_RADIUS),
                Transform::from_translation(intent.origin),
                Velocity(intent.velocity),
                AngularVelocity(Vec3::ZERO),
                Lifetime(Timer::from_seconds(
                    settings.shelf_life_secs,
                    TimerMode::Once,
                )),
                PlateCooldown::ready(settings.rejection_cooldown_secs),
            ))
            .id();
        session.post_message("Yeet!");
        debug!(?entity, ?ingredient, "ingredient thrown");
    }
}
