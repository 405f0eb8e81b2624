use {
    crate::OFF_MAP_Y,
    bevy::prelude::*,
    kitchen_components::{Discarded, Ingredient, Lifetime, PlateCooldown},
};

pub fn tick_plate_cooldowns(time: Res<Time>, mut cooldowns: Query<&mut PlateCooldown>) {
    for mut cooldown in cooldowns.iter_mut() {
        cooldown.0.tick(time.delta());
    }
}

/// Unconditional shelf-life bound: whatever an ingredient is doing, it is
/// discarded when its lifetime fires.
pub fn expire_ingredients(
    time: Res<Time>,
    mut commands: Commands,
    mut query: Query<(Entity, &mut Lifetime), (With<Ingredient>, Without<Discarded>)>,
) {
    for (entity, mut lifetime) in query.iter_mut() {
        if lifetime.0.tick(time.delta()).just_finished() {
            debug!(?entity, "ingredient went stale");
            commands.entity(entity).insert(Discarded);
        }
    }
}

pub fn despawn_fallen(
    mut commands: Commands,
    query: Query<(Entity, &Transform), (With<Ingredient>, Without<Discarded>)>,
) {
    for (entity, transform) in query.iter() {
        if transform.translation.y < OFF_MAP_Y {
            debug!(?entity, "ingredient fell off the map");
            commands.entity(entity).insert(Discarded);
        }
    }
}

/// Single despawn point for everything marked this frame. Marking the same
/// entity from several systems is fine; it is despawned once.
pub fn despawn_discarded(mut commands: Commands, query: Query<Entity, With<Discarded>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
