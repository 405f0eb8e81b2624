use {
    bevy::{asset::LoadState, prelude::*},
    bevy_common_assets::ron::RonAssetPlugin,
    serde::{Deserialize, Serialize},
    session_resources::Session,
    states::GameState,
};

pub struct AssetsPlugin;

impl Plugin for AssetsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RonAssetPlugin::<KitchenSettings>::new(&["settings.ron"]))
            .init_resource::<GameAssets>()
            .add_systems(Startup, start_loading)
            .add_systems(
                Update,
                hydrate_settings.run_if(in_state(GameState::Loading)),
            );
    }
}

/// Gameplay tuning, deserialized from `assets/kitchen.settings.ron` and
/// inserted as a plain resource once loaded. `Default` carries the shipped
/// values so headless tests never touch the asset pipeline.
#[derive(Asset, Resource, TypePath, Debug, Clone, Deserialize, Serialize)]
pub struct KitchenSettings {
    pub target_hot_dogs: u32,
    pub order_score: u32,
    pub win_bonus: u32,
    /// Unconditional ingredient lifetime, in seconds.
    pub shelf_life_secs: f32,
    /// Plate re-evaluation debounce after a rejection, in seconds.
    pub rejection_cooldown_secs: f32,
    pub plate_capture_radius: f32,
    pub interaction_distance: f32,
    pub throw_force: f32,
    pub throw_lift: f32,
    pub eject_force: f32,
    pub eject_lift: f32,
}

impl Default for KitchenSettings {
    fn default() -> Self {
        Self {
            target_hot_dogs: 5,
            order_score: 100,
            win_bonus: 500,
            shelf_life_secs: 15.0,
            rejection_cooldown_secs: 1.0,
            plate_capture_radius: 2.0,
            interaction_distance: 20.0,
            throw_force: 18.0,
            throw_lift: 4.0,
            eject_force: 10.0,
            eject_lift: 10.0,
        }
    }
}

#[derive(Resource, Default)]
pub struct GameAssets {
    pub settings: Handle<KitchenSettings>,
}

fn start_loading(mut assets: ResMut<GameAssets>, asset_server: Res<AssetServer>) {
    info!("loading kitchen settings");
    assets.settings = asset_server.load("kitchen.settings.ron");
}

fn hydrate_settings(
    mut commands: Commands,
    game_assets: Res<GameAssets>,
    settings: Res<Assets<KitchenSettings>>,
    asset_server: Res<AssetServer>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let loaded = match settings.get(&game_assets.settings) {
        Some(loaded) => loaded.clone(),
        None => {
            if matches!(
                asset_server.load_state(&game_assets.settings),
                LoadState::Failed(_)
            ) {
                warn!("kitchen settings failed to load, using built-in defaults");
                KitchenSettings::default()
            } else {
                return;
            }
        }
    };

    info!(target_hot_dogs = loaded.target_hot_dogs, "kitchen settings ready");
    commands.insert_resource(Session::welcome(loaded.target_hot_dogs));
    commands.insert_resource(loaded);
    next_state.set(GameState::Playing);
}
