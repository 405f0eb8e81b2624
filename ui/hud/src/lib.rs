//! Presentation sink for the kitchen: screen HUD, win overlay and world
//! visuals. Reads the structured session state; never mutates gameplay
//! except for the reset button firing `SessionReset`.

use {
    bevy::prelude::*,
    game_assets::KitchenSettings,
    kitchen_components::IngredientType,
    messages::SessionReset,
    player::PointerLock,
    session_resources::{CrosshairTarget, Hand, PlateStack, Session},
    states::GameState,
};

mod world;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnEnter(GameState::Playing),
            (spawn_hud, world::spawn_backdrop),
        )
        .add_systems(OnEnter(GameState::Won), spawn_win_overlay)
        .add_systems(OnExit(GameState::Won), despawn_win_overlay)
        .add_systems(
            Update,
            (
                update_score_panel,
                update_order_card,
                update_message_banner,
                update_held_item_panel,
                update_lock_hint,
                update_crosshair,
                handle_cook_again_button.run_if(in_state(GameState::Won)),
            )
                .run_if(not(in_state(GameState::Loading))),
        );

        app.add_observer(world::dress_spawner)
            .add_observer(world::dress_plate)
            .add_observer(world::dress_ingredient);
    }
}

const PANEL_BG: Color = Color::srgba(0.0, 0.0, 0.0, 0.7);
const ACCENT: Color = Color::srgb_u8(250, 204, 21);
const DONE_GREEN: Color = Color::srgb_u8(74, 222, 128);
const DIM_GRAY: Color = Color::srgb(0.6, 0.6, 0.6);

pub fn ingredient_color(ingredient: IngredientType) -> Color {
    match ingredient {
        IngredientType::Bun => Color::srgb_u8(252, 211, 77),
        IngredientType::Sausage => Color::srgb_u8(239, 68, 68),
    }
}

// ============================================================================
// Markers
// ============================================================================

#[derive(Component)]
struct HudRoot;

#[derive(Component)]
struct ScoreText;

#[derive(Component)]
struct ProgressText;

#[derive(Component)]
struct OrderRow(IngredientType);

#[derive(Component)]
struct InstructionText;

#[derive(Component)]
struct MessageText;

#[derive(Component)]
struct HeldItemText;

#[derive(Component)]
struct LockHintText;

#[derive(Component)]
struct CrosshairDot;

#[derive(Component)]
struct GrabLabel;

#[derive(Component)]
struct WinOverlay;

#[derive(Component)]
struct CookAgainButton;

// ============================================================================
// Layout
// ============================================================================

fn spawn_hud(mut commands: Commands, existing: Query<(), With<HudRoot>>) {
    if !existing.is_empty() {
        return;
    }

    commands
        .spawn((
            HudRoot,
            Name::new("Hud"),
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                ..default()
            },
        ))
        .with_children(|root| {
            spawn_score_panel(root);
            spawn_order_card(root);
            spawn_message_banner(root);
            spawn_held_item_panel(root);
            spawn_lock_hint(root);
            spawn_crosshair(root);
        });
}

fn spawn_score_panel(root: &mut ChildSpawnerCommands) {
    root.spawn((
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(16.0),
            left: Val::Px(16.0),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(4.0),
            padding: UiRect::all(Val::Px(14.0)),
            border_radius: BorderRadius::all(Val::Px(12.0)),
            ..default()
        },
        BackgroundColor(PANEL_BG),
    ))
    .with_children(|panel| {
        panel.spawn((
            Text::new("HOT DOG HERO"),
            TextFont {
                font_size: 18.0,
                ..default()
            },
            TextColor(ACCENT),
        ));
        panel.spawn((
            ScoreText,
            Text::new("SCORE 0"),
            TextFont {
                font_size: 28.0,
                ..default()
            },
            TextColor(Color::WHITE),
        ));
        panel.spawn((
            ProgressText,
            Text::new("PROGRESS 0 / 5"),
            TextFont {
                font_size: 14.0,
                ..default()
            },
            TextColor(ACCENT),
        ));
    });
}

fn spawn_order_card(root: &mut ChildSpawnerCommands) {
    root.spawn((
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(16.0),
            right: Val::Px(16.0),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(6.0),
            padding: UiRect::all(Val::Px(14.0)),
            min_width: Val::Px(220.0),
            border_radius: BorderRadius::all(Val::Px(12.0)),
            ..default()
        },
        BackgroundColor(PANEL_BG),
    ))
    .with_children(|card| {
        card.spawn((
            Text::new("CURRENT ORDER"),
            TextFont {
                font_size: 13.0,
                ..default()
            },
            TextColor(DIM_GRAY),
        ));
        card.spawn((
            OrderRow(IngredientType::Bun),
            Text::new("1. Bun"),
            TextFont {
                font_size: 16.0,
                ..default()
            },
            TextColor(ACCENT),
        ));
        card.spawn((
            OrderRow(IngredientType::Sausage),
            Text::new("2. Sausage"),
            TextFont {
                font_size: 16.0,
                ..default()
            },
            TextColor(DIM_GRAY),
        ));
        card.spawn((
            InstructionText,
            Text::new(""),
            TextFont {
                font_size: 14.0,
                ..default()
            },
            TextColor(Color::srgb_u8(147, 197, 253)),
        ));
    });
}

fn spawn_message_banner(root: &mut ChildSpawnerCommands) {
    root.spawn(Node {
        position_type: PositionType::Absolute,
        top: Val::Percent(25.0),
        width: Val::Percent(100.0),
        justify_content: JustifyContent::Center,
        ..default()
    })
    .with_children(|banner| {
        banner.spawn((
            MessageText,
            Text::new(""),
            TextFont {
                font_size: 30.0,
                ..default()
            },
            TextColor(Color::WHITE),
        ));
    });
}

fn spawn_held_item_panel(root: &mut ChildSpawnerCommands) {
    root.spawn((
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(16.0),
            left: Val::Px(16.0),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(2.0),
            padding: UiRect::all(Val::Px(14.0)),
            border_radius: BorderRadius::all(Val::Px(12.0)),
            ..default()
        },
        BackgroundColor(PANEL_BG),
    ))
    .with_children(|panel| {
        panel.spawn((
            Text::new("HANDS"),
            TextFont {
                font_size: 12.0,
                ..default()
            },
            TextColor(DIM_GRAY),
        ));
        panel.spawn((
            HeldItemText,
            Text::new("Empty"),
            TextFont {
                font_size: 20.0,
                ..default()
            },
            TextColor(Color::WHITE),
        ));
    });
}

fn spawn_lock_hint(root: &mut ChildSpawnerCommands) {
    root.spawn((
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(16.0),
            right: Val::Px(16.0),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(4.0),
            padding: UiRect::all(Val::Px(14.0)),
            border_radius: BorderRadius::all(Val::Px(12.0)),
            ..default()
        },
        BackgroundColor(PANEL_BG),
    ))
    .with_children(|panel| {
        panel.spawn((
            LockHintText,
            Text::new("CLICK TO START"),
            TextFont {
                font_size: 14.0,
                ..default()
            },
            TextColor(Color::srgb_u8(248, 113, 113)),
        ));
        panel.spawn((
            Text::new("[W,A,S,D] Move  [Space] Jump\n[Left Click] Grab / Throw"),
            TextFont {
                font_size: 11.0,
                ..default()
            },
            TextColor(DIM_GRAY),
        ));
    });
}

fn spawn_crosshair(root: &mut ChildSpawnerCommands) {
    root.spawn(Node {
        position_type: PositionType::Absolute,
        top: Val::Percent(50.0),
        left: Val::Percent(50.0),
        ..default()
    })
    .with_children(|center| {
        center.spawn((
            CrosshairDot,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Px(4.0),
                height: Val::Px(4.0),
                border_radius: BorderRadius::all(Val::Percent(50.0)),
                ..default()
            },
            BackgroundColor(Color::WHITE),
        ));
        center.spawn((
            GrabLabel,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(22.0),
                ..default()
            },
            Text::new("GRAB"),
            TextFont {
                font_size: 11.0,
                ..default()
            },
            TextColor(ACCENT),
            Visibility::Hidden,
        ));
    });
}

// ============================================================================
// Update systems
// ============================================================================

fn update_score_panel(
    session: Res<Session>,
    settings: Res<KitchenSettings>,
    mut scores: Query<&mut Text, (With<ScoreText>, Without<ProgressText>)>,
    mut progress: Query<&mut Text, (With<ProgressText>, Without<ScoreText>)>,
) {
    if !session.is_changed() {
        return;
    }
    if let Ok(mut text) = scores.single_mut() {
        text.0 = format!("SCORE {}", session.score);
    }
    if let Ok(mut text) = progress.single_mut() {
        text.0 = format!(
            "PROGRESS {} / {}",
            session.completed_count, settings.target_hot_dogs
        );
    }
}

/// Mirrors the assembly steps: green once plated, highlighted while it is
/// the next thing to fetch, with a HOLDING tag when it is already in hand.
fn update_order_card(
    session: Res<Session>,
    plate: Res<PlateStack>,
    hand: Res<Hand>,
    mut rows: Query<(&OrderRow, &mut Text, &mut TextColor), Without<InstructionText>>,
    mut instruction: Query<&mut Text, With<InstructionText>>,
) {
    let next = plate.next_needed();
    for (row, mut text, mut color) in rows.iter_mut() {
        let step_done = match row.0 {
            IngredientType::Bun => plate.has_bun,
            IngredientType::Sausage => plate.has_sausage,
        };
        let ordinal = match row.0 {
            IngredientType::Bun => "1. Bun",
            IngredientType::Sausage => "2. Sausage",
        };
        let holding = hand.0 == Some(row.0) && !step_done;
        text.0 = if holding {
            format!("{ordinal}  [HOLDING]")
        } else {
            ordinal.to_string()
        };
        color.0 = if step_done {
            DONE_GREEN
        } else if next == Some(row.0) {
            ACCENT
        } else {
            DIM_GRAY
        };
    }

    if let Ok(mut text) = instruction.single_mut() {
        text.0 = if session.game_won {
            "You are the Hot Dog Hero!".to_string()
        } else {
            match next {
                Some(needed) if hand.0 == Some(needed) => "Throw it on the plate!".to_string(),
                Some(needed) => format!("Go pick up a {}", needed.label()),
                None => "Hot Dog Complete!".to_string(),
            }
        };
    }
}

fn update_message_banner(session: Res<Session>, mut banners: Query<&mut Text, With<MessageText>>) {
    if !session.is_changed() {
        return;
    }
    if let Ok(mut text) = banners.single_mut() {
        text.0 = session.last_message.clone();
    }
}

fn update_held_item_panel(hand: Res<Hand>, mut texts: Query<&mut Text, With<HeldItemText>>) {
    if !hand.is_changed() {
        return;
    }
    if let Ok(mut text) = texts.single_mut() {
        text.0 = match hand.0 {
            Some(held) => held.label().to_string(),
            None => "Empty".to_string(),
        };
    }
}

fn update_lock_hint(
    lock: Res<PointerLock>,
    mut hints: Query<(&mut Text, &mut TextColor), With<LockHintText>>,
) {
    if !lock.is_changed() {
        return;
    }
    if let Ok((mut text, mut color)) = hints.single_mut() {
        if lock.0 {
            text.0 = "GAME ACTIVE".to_string();
            color.0 = DONE_GREEN;
        } else {
            text.0 = "CLICK TO START".to_string();
            color.0 = Color::srgb_u8(248, 113, 113);
        }
    }
}

fn update_crosshair(
    lock: Res<PointerLock>,
    crosshair: Res<CrosshairTarget>,
    mut dots: Query<(&mut Node, &mut BackgroundColor, &mut Visibility), With<CrosshairDot>>,
    mut labels: Query<&mut Visibility, (With<GrabLabel>, Without<CrosshairDot>)>,
) {
    let hovering = crosshair.hovered.is_some();
    if let Ok((mut node, mut background, mut visibility)) = dots.single_mut() {
        *visibility = if lock.0 {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        let size = if hovering { 14.0 } else { 4.0 };
        node.width = Val::Px(size);
        node.height = Val::Px(size);
        background.0 = if hovering { ACCENT } else { Color::WHITE };
    }
    if let Ok(mut visibility) = labels.single_mut() {
        *visibility = if lock.0 && hovering {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
}

// ============================================================================
// Win overlay
// ============================================================================

fn spawn_win_overlay(
    mut commands: Commands,
    session: Res<Session>,
    settings: Res<KitchenSettings>,
) {
    commands
        .spawn((
            WinOverlay,
            Name::new("WinOverlay"),
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.8)),
            GlobalZIndex(10),
        ))
        .with_children(|overlay| {
            overlay
                .spawn((
                    Node {
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        row_gap: Val::Px(12.0),
                        padding: UiRect::all(Val::Px(32.0)),
                        border: UiRect::all(Val::Px(2.0)),
                        border_radius: BorderRadius::all(Val::Px(20.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.12, 0.14, 0.18)),
                    BorderColor::all(ACCENT),
                ))
                .with_children(|panel| {
                    panel.spawn((
                        Text::new("VICTORY!"),
                        TextFont {
                            font_size: 44.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                    ));
                    panel.spawn((
                        Text::new(format!(
                            "You served {} delicious hot dogs.",
                            settings.target_hot_dogs
                        )),
                        TextFont {
                            font_size: 16.0,
                            ..default()
                        },
                        TextColor(DIM_GRAY),
                    ));
                    panel.spawn((
                        Text::new(format!("FINAL SCORE  {}", session.score)),
                        TextFont {
                            font_size: 28.0,
                            ..default()
                        },
                        TextColor(DONE_GREEN),
                    ));
                    panel
                        .spawn((
                            CookAgainButton,
                            Button,
                            Node {
                                padding: UiRect::axes(Val::Px(28.0), Val::Px(12.0)),
                                justify_content: JustifyContent::Center,
                                align_items: AlignItems::Center,
                                border_radius: BorderRadius::all(Val::Px(12.0)),
                                ..default()
                            },
                            BackgroundColor(ACCENT),
                        ))
                        .with_children(|button| {
                            button.spawn((
                                Text::new("Cook Again"),
                                TextFont {
                                    font_size: 18.0,
                                    ..default()
                                },
                                TextColor(Color::BLACK),
                            ));
                        });
                });
        });
}

fn despawn_win_overlay(mut commands: Commands, overlays: Query<Entity, With<WinOverlay>>) {
    for overlay in overlays.iter() {
        commands.entity(overlay).despawn();
    }
}

/// One `SessionReset` per press; `Changed<Interaction>` only fires on the
/// edge.
fn handle_cook_again_button(
    mut commands: Commands,
    interactions: Query<&Interaction, (Changed<Interaction>, With<CookAgainButton>)>,
) {
    for interaction in interactions.iter() {
        if *interaction == Interaction::Pressed {
            info!("cook again pressed");
            commands.trigger(SessionReset);
        }
    }
}
