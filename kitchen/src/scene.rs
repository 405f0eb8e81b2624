use {
    bevy::prelude::*,
    game_assets::KitchenSettings,
    kitchen_components::{CaptureRadius, HitRadius, IngredientType, Interactable, Plate, Spawner},
};

/// World position the plate evaluates distances against.
pub const PLATE_ANCHOR: Vec3 = Vec3::new(0.0, 1.0, -10.0);
pub const BUN_CRATE_POSITION: Vec3 = Vec3::new(-5.0, 1.6, -4.0);
pub const SAUSAGE_CRATE_POSITION: Vec3 = Vec3::new(5.0, 1.6, -4.0);

/// Spawners need to be easy to grab from across the counter, so their hit
/// sphere is much larger than the crate itself.
const SPAWNER_HIT_RADIUS: f32 = 2.8;

/// Spawns the logical kitchen: two ingredient crates and the assembly
/// plate. Visuals are attached by the presentation layer. Re-entering
/// `Playing` after a reset finds the kitchen already present and leaves it
/// alone.
pub fn spawn_kitchen(
    mut commands: Commands,
    settings: Res<KitchenSettings>,
    existing: Query<(), With<Plate>>,
) {
    if !existing.is_empty() {
        return;
    }
    info!("setting up the kitchen");

    commands.spawn((
        Name::new("Bun Crate"),
        Spawner,
        Interactable {
            ingredient: IngredientType::Bun,
            is_spawner: true,
        },
        HitRadius(SPAWNER_HIT_RADIUS),
        Transform::from_translation(BUN_CRATE_POSITION),
    ));

    commands.spawn((
        Name::new("Sausage Crate"),
        Spawner,
        Interactable {
            ingredient: IngredientType::Sausage,
            is_spawner: true,
        },
        HitRadius(SPAWNER_HIT_RADIUS),
        Transform::from_translation(SAUSAGE_CRATE_POSITION),
    ));

    commands.spawn((
        Name::new("Assembly Plate"),
        Plate,
        CaptureRadius(settings.plate_capture_radius),
        Transform::from_translation(PLATE_ANCHOR),
    ));
}
