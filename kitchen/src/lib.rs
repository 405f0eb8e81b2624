use {
    bevy::prelude::*,
    kitchen_components::{
        AngularVelocity, CaptureRadius, Discarded, HitRadius, Ingredient, Interactable, Lifetime,
        Plate, PlateCooldown, Spawner, Velocity,
    },
    states::GameState,
    system_schedule::GameSchedule,
};

pub mod inventory;
pub mod lifecycle;
pub mod plate;
pub mod scene;

mod session;

pub use session::on_session_reset;

/// Hit sphere for loose ingredients lying around the kitchen.
pub const INGREDIENT_HIT_RADIUS: f32 = 0.5;
/// Below this the entity has left the map and is cleaned up.
pub const OFF_MAP_Y: f32 = -10.0;

pub struct KitchenPlugin;

impl Plugin for KitchenPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Ingredient>()
            .register_type::<Interactable>()
            .register_type::<HitRadius>()
            .register_type::<Spawner>()
            .register_type::<Plate>()
            .register_type::<CaptureRadius>()
            .register_type::<Velocity>()
            .register_type::<AngularVelocity>()
            .register_type::<Lifetime>()
            .register_type::<PlateCooldown>()
            .register_type::<Discarded>();

        app.add_systems(OnEnter(GameState::Playing), scene::spawn_kitchen);

        app.add_systems(
            Update,
            (
                lifecycle::tick_plate_cooldowns.in_set(GameSchedule::FrameStart),
                (
                    inventory::handle_pickup,
                    inventory::handle_throw,
                    plate::plate_capture,
                )
                    .in_set(GameSchedule::Effect)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
                (
                    lifecycle::expire_ingredients,
                    lifecycle::despawn_fallen,
                    lifecycle::despawn_discarded,
                )
                    .in_set(GameSchedule::FrameEnd)
                    .chain(),
            ),
        );

        app.add_observer(on_session_reset);
    }
}
