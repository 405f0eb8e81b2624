use {
    bevy::{log::LogPlugin, prelude::*},
    game::GamePlugin,
};

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins.set(LogPlugin {
                filter: "error,\
                    game_assets=info,\
                    kitchen=debug,\
                    player=info,\
                    hud=info"
                    .into(),
                level: bevy::log::Level::TRACE,
                ..Default::default()
            }),
        )
        .add_plugins(GamePlugin)
        .run();
}
