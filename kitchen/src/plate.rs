use {
    bevy::prelude::*,
    game_assets::KitchenSettings,
    kitchen_components::{
        AngularVelocity, CaptureRadius, Discarded, Ingredient, IngredientType, Plate,
        PlateCooldown, Velocity,
    },
    rand::Rng,
    session_resources::{PlateStack, Session},
    states::GameState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropVerdict {
    /// The plate took the ingredient; the caller removes the entity.
    Consumed,
    /// Wrong ingredient for the current plate state; the caller keeps the
    /// entity alive and ejects it.
    Bounced,
    /// Protocol is inert (game already won); neither consume nor eject.
    Ignored,
}

/// The assembly decision table, first match wins. Mutates plate and session
/// state on acceptance; rejections only post a message.
pub fn evaluate_drop(
    ingredient: IngredientType,
    plate: &mut PlateStack,
    session: &mut Session,
    settings: &KitchenSettings,
) -> DropVerdict {
    if session.game_won {
        return DropVerdict::Ignored;
    }
    match ingredient {
        IngredientType::Bun if plate.has_bun => {
            session.post_message("Already have a Bun! Get the Sausage!");
            DropVerdict::Bounced
        }
        IngredientType::Sausage if !plate.has_bun => {
            session.post_message("Need a Bun first!");
            DropVerdict::Bounced
        }
        IngredientType::Bun => {
            plate.has_bun = true;
            session.post_message("Bun Plated! Now get the Sausage!");
            DropVerdict::Consumed
        }
        IngredientType::Sausage if !plate.has_sausage => {
            // Order complete: the plate empties for the next one.
            plate.clear();
            session.complete_order(
                settings.order_score,
                settings.win_bonus,
                settings.target_hot_dogs,
            );
            DropVerdict::Consumed
        }
        // Sausage on an already-finished plate: bounce without touching the
        // previous message.
        IngredientType::Sausage => DropVerdict::Bounced,
    }
}

/// Evaluates every live ingredient inside the plate's capture radius whose
/// cooldown has elapsed. Consumed entities are discarded; bounced entities
/// get an outward impulse at a random angle, a random spin, and a re-armed
/// cooldown so they are not re-launched every frame while still inside the
/// zone.
pub fn plate_capture(
    mut commands: Commands,
    mut session: ResMut<Session>,
    mut plate_stack: ResMut<PlateStack>,
    settings: Res<KitchenSettings>,
    mut next_state: ResMut<NextState<GameState>>,
    plates: Query<(&Transform, &CaptureRadius), With<Plate>>,
    mut ingredients: Query<
        (
            Entity,
            &Ingredient,
            &Transform,
            &mut Velocity,
            &mut AngularVelocity,
            &mut PlateCooldown,
        ),
        (Without<Plate>, Without<Discarded>),
    >,
) {
    let Ok((plate_transform, capture)) = plates.single() else {
        return;
    };
    let anchor = plate_transform.translation;
    let mut rng = rand::rng();

    for (entity, ingredient, transform, mut velocity, mut spin, mut cooldown) in
        ingredients.iter_mut()
    {
        if !cooldown.elapsed() {
            continue;
        }
        if transform.translation.distance(anchor) > capture.0 {
            continue;
        }
        match evaluate_drop(ingredient.0, &mut plate_stack, &mut session, &settings) {
            DropVerdict::Consumed => {
                commands.entity(entity).insert(Discarded);
                debug!(?entity, "ingredient plated");
                if session.game_won {
                    next_state.set(GameState::Won);
                }
            }
            DropVerdict::Bounced => {
                let angle = rng.random_range(0.0..std::f32::consts::TAU);
                velocity.0 = Vec3::new(
                    angle.sin() * settings.eject_force,
                    settings.eject_lift,
                    angle.cos() * settings.eject_force,
                );
                spin.0 = Vec3::new(
                    rng.random_range(0.0..10.0),
                    rng.random_range(0.0..10.0),
                    rng.random_range(0.0..10.0),
                );
                cooldown.0.reset();
                debug!(?entity, "ingredient rejected off the plate");
            }
            DropVerdict::Ignored => {}
        }
    }
}
