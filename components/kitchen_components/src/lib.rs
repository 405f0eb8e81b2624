use bevy::prelude::*;

#[derive(Reflect, Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[reflect(Default)]
pub enum IngredientType {
    #[default]
    Bun,
    Sausage,
}

impl IngredientType {
    /// Display name used on the HUD and in status messages.
    pub fn label(&self) -> &'static str {
        match self {
            IngredientType::Bun => "BUN",
            IngredientType::Sausage => "SAUSAGE",
        }
    }
}

/// A thrown ingredient flying (or lying) around the kitchen.
#[derive(Component, Reflect, Default, Debug, Clone, Copy)]
#[reflect(Component, Default)]
pub struct Ingredient(pub IngredientType);

/// Marks an entity as a valid pickup target for the crosshair.
/// Spawners yield unlimited copies and are never removed from the world;
/// loose ingredients are removed on pickup.
#[derive(Component, Reflect, Default, Debug, Clone, Copy)]
#[reflect(Component, Default)]
pub struct Interactable {
    pub ingredient: IngredientType,
    pub is_spawner: bool,
}

/// Radius of the sphere the aim ray is tested against. Spawners carry a
/// deliberately oversized radius so they are easy to grab from the counter.
#[derive(Component, Reflect, Default, Debug, Clone, Copy)]
#[reflect(Component, Default)]
pub struct HitRadius(pub f32);

/// Stationary infinite ingredient source.
#[derive(Component, Reflect, Default)]
#[reflect(Component)]
pub struct Spawner;

/// The assembly plate ingredients are thrown onto.
#[derive(Component, Reflect, Default)]
#[reflect(Component)]
pub struct Plate;

/// Ingredients inside this distance of the plate anchor are evaluated.
#[derive(Component, Reflect, Default, Debug, Clone, Copy)]
#[reflect(Component, Default)]
pub struct CaptureRadius(pub f32);

#[derive(Component, Reflect, Default, Debug, Clone, Copy)]
#[reflect(Component, Default)]
pub struct Velocity(pub Vec3);

#[derive(Component, Reflect, Default, Debug, Clone, Copy)]
#[reflect(Component, Default)]
pub struct AngularVelocity(pub Vec3);

/// Ingredients are removed unconditionally when this fires, whatever else
/// happened to them.
#[derive(Component, Reflect, Default)]
#[reflect(Component)]
pub struct Lifetime(pub Timer);

/// Debounce for plate evaluation. Armed on rejection; while running the
/// plate ignores the entity even though it is still inside the capture
/// radius.
#[derive(Component, Reflect, Default)]
#[reflect(Component)]
pub struct PlateCooldown(pub Timer);

impl PlateCooldown {
    /// A cooldown that has already elapsed, so a fresh ingredient is
    /// evaluated on its first contact with the plate zone.
    pub fn ready(duration_secs: f32) -> Self {
        let mut timer = Timer::from_seconds(duration_secs, TimerMode::Once);
        timer.tick(std::time::Duration::from_secs_f32(duration_secs));
        Self(timer)
    }

    pub fn elapsed(&self) -> bool {
        self.0.is_finished()
    }
}

/// Marked entities are despawned once per frame in `GameSchedule::FrameEnd`.
/// Marking twice (TTL firing the same tick as plate consumption) is a no-op,
/// which keeps entity destruction idempotent.
#[derive(Component, Reflect, Default)]
#[reflect(Component)]
pub struct Discarded;
