//! Drives a whole shift headless: five hot dogs assembled through the real
//! plugin wiring, then a reset back to a fresh kitchen.

use {
    bevy::{prelude::*, state::app::StatesPlugin},
    game_assets::KitchenSettings,
    kitchen::KitchenPlugin,
    kitchen_components::{Ingredient, Plate},
    messages::{MessagesPlugin, PickUpIntent, SessionReset, ThrowIntent},
    session_resources::{Hand, PlateStack, Session, SessionResourcesPlugin},
    states::GameState,
    system_schedule::GameSchedule,
    std::time::Duration,
};

const PLATE_ANCHOR: Vec3 = Vec3::new(0.0, 1.0, -10.0);

fn shift_app() -> App {
    let mut app = App::new();
    app.add_plugins((StatesPlugin, MessagesPlugin, SessionResourcesPlugin));
    app.init_state::<GameState>();
    app.init_resource::<Time>();
    app.insert_resource(KitchenSettings::default());
    app.configure_sets(
        Update,
        (
            GameSchedule::FrameStart,
            GameSchedule::ResolveIntent,
            GameSchedule::PerformAction,
            GameSchedule::Effect,
            GameSchedule::FrameEnd,
        )
            .chain(),
    );
    app.add_plugins(KitchenPlugin);
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::Playing);
    app.update();
    app
}

fn step(app: &mut App, secs: f32) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(secs));
    app.update();
}

fn deliver(app: &mut App, ingredient: kitchen_components::IngredientType) {
    app.world_mut().write_message(PickUpIntent {
        ingredient,
        source: None,
    });
    step(app, 0.016);
    assert_eq!(app.world().resource::<Hand>().0, Some(ingredient));

    // A throw straight onto the plate: spawn kinematics land the entity
    // inside the capture radius, so the very next evaluation resolves it.
    app.world_mut().write_message(ThrowIntent {
        origin: PLATE_ANCHOR,
        velocity: Vec3::ZERO,
    });
    step(app, 0.016);
    assert!(app.world().resource::<Hand>().is_empty());
    step(app, 0.016);
}

fn ingredient_count(app: &mut App) -> usize {
    app.world_mut()
        .query_filtered::<(), With<Ingredient>>()
        .iter(app.world())
        .count()
}

#[test]
fn five_hot_dogs_win_the_shift_and_reset_starts_over() {
    let mut app = shift_app();

    // The kitchen itself got set up on entering Playing.
    assert_eq!(
        app.world_mut()
            .query_filtered::<(), With<Plate>>()
            .iter(app.world())
            .count(),
        1
    );

    for order in 1..=5u32 {
        deliver(&mut app, kitchen_components::IngredientType::Bun);
        assert!(app.world().resource::<PlateStack>().has_bun);

        deliver(&mut app, kitchen_components::IngredientType::Sausage);
        let session = app.world().resource::<Session>();
        assert_eq!(session.completed_count, order);
        let plate = app.world().resource::<PlateStack>();
        assert!(!plate.has_bun && !plate.has_sausage);
    }

    let session = app.world().resource::<Session>();
    assert!(session.game_won);
    assert_eq!(session.score, 5 * 100 + 500);
    assert_eq!(session.last_message, "MISSION COMPLETE!");
    step(&mut app, 0.016);
    assert_eq!(
        *app.world().resource::<State<GameState>>().get(),
        GameState::Won
    );

    // Gameplay is latched off until the reset.
    app.world_mut().write_message(PickUpIntent {
        ingredient: kitchen_components::IngredientType::Bun,
        source: None,
    });
    step(&mut app, 0.016);
    assert!(app.world().resource::<Hand>().is_empty());

    app.world_mut().trigger(SessionReset);
    step(&mut app, 0.016);

    let session = app.world().resource::<Session>();
    assert_eq!(session.score, 0);
    assert_eq!(session.completed_count, 0);
    assert!(!session.game_won);
    assert_eq!(ingredient_count(&mut app), 0);
    assert_eq!(
        *app.world().resource::<State<GameState>>().get(),
        GameState::Playing
    );
}
