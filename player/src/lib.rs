use {
    bevy::prelude::*,
    player_components::{LookAngles, Player},
    states::GameState,
    system_schedule::GameSchedule,
};

pub mod input;
pub mod movement;
pub mod targeting;

pub const MOVE_SPEED: f32 = 6.0;
pub const JUMP_IMPULSE: f32 = 6.0;
pub const GRAVITY: f32 = -25.0;
/// Camera sits this far above the body center.
pub const EYE_HEIGHT: f32 = 1.7;
pub const PLAYER_RADIUS: f32 = 0.6;
/// Thrown items leave from slightly in front of the eye so they do not
/// spawn inside the player.
pub const THROW_SPAWN_OFFSET: f32 = 1.2;
const PLAYER_SPAWN: Vec3 = Vec3::new(0.0, 2.0, 10.0);

/// Whether the OS pointer is captured. Captured: aim with the screen-center
/// ray; released: aim with the cursor ray.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct PointerLock(pub bool);

/// Edge/level input collapsed into movement intents; gameplay systems never
/// look at raw key codes.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct MoveIntents {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Player>()
            .register_type::<LookAngles>()
            .init_resource::<MoveIntents>()
            .init_resource::<PointerLock>();

        app.add_systems(OnEnter(GameState::Playing), spawn_player)
            .add_systems(OnEnter(GameState::Won), input::release_pointer_on_win);

        app.add_systems(
            Update,
            (
                (
                    input::gather_move_intents,
                    input::mouse_look,
                    targeting::update_crosshair_target,
                    input::primary_action,
                )
                    .chain()
                    .in_set(GameSchedule::ResolveIntent)
                    .run_if(not(in_state(GameState::Loading))),
                (
                    movement::apply_movement,
                    movement::integrate_bodies,
                    movement::sync_camera,
                )
                    .chain()
                    .in_set(GameSchedule::PerformAction)
                    .run_if(not(in_state(GameState::Loading))),
            ),
        );

        app.add_observer(input::relock_pointer_on_reset);
    }
}

fn spawn_player(mut commands: Commands, existing: Query<(), With<Player>>) {
    if !existing.is_empty() {
        return;
    }
    info!("spawning player");
    commands.spawn((
        Name::new("Player"),
        Player,
        LookAngles::default(),
        Transform::from_translation(PLAYER_SPAWN),
        kitchen_components::Velocity(Vec3::ZERO),
    ));
}
