use {bevy::prelude::*, kitchen_components::IngredientType};

pub struct MessagesPlugin;

impl Plugin for MessagesPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<PickUpIntent>()
            .add_message::<ThrowIntent>()
            .register_type::<PickUpIntent>()
            .register_type::<ThrowIntent>();
    }
}

/// Request to put an ingredient into the hand. `source` is the world entity
/// to remove for loose pickups, `None` for spawner pickups (infinite
/// sources, nothing to remove).
#[derive(Message, Reflect, Debug)]
#[reflect(Default)]
pub struct PickUpIntent {
    pub ingredient: IngredientType,
    pub source: Option<Entity>,
}

impl Default for PickUpIntent {
    fn default() -> Self {
        Self {
            ingredient: IngredientType::Bun,
            source: None,
        }
    }
}

/// Request to launch the held ingredient with the given spawn kinematics.
#[derive(Message, Reflect, Default, Debug)]
#[reflect(Default)]
pub struct ThrowIntent {
    pub origin: Vec3,
    pub velocity: Vec3,
}

/// Fired by the win overlay's button; the kitchen observer tears the shift
/// down and starts a new one.
#[derive(Event, Debug, Default)]
pub struct SessionReset;
