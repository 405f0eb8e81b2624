use {
    bevy::prelude::*,
    game_assets::AssetsPlugin,
    hud::HudPlugin,
    kitchen::KitchenPlugin,
    messages::MessagesPlugin,
    player::PlayerPlugin,
    session_resources::SessionResourcesPlugin,
    states::GameState,
    system_schedule::GameSchedule,
};

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>();

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

        app.add_plugins((
            MessagesPlugin,
            SessionResourcesPlugin,
            AssetsPlugin,
            KitchenPlugin,
            PlayerPlugin,
            HudPlugin,
        ));

        app.add_systems(Startup, setup_camera_and_light);
    }
}

fn setup_camera_and_light(mut commands: Commands) {
    commands.spawn((Name::new("Camera"), Camera3d::default()));

    commands.insert_resource(GlobalAmbientLight {
        brightness: 300.0,
        ..default()
    });
    commands.spawn((
        Name::new("Sun"),
        DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(20.0, 30.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
