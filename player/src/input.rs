use {
    crate::{EYE_HEIGHT, MoveIntents, PointerLock, THROW_SPAWN_OFFSET},
    bevy::{
        input::mouse::AccumulatedMouseMotion,
        prelude::*,
        window::{CursorGrabMode, CursorOptions, PrimaryWindow},
    },
    game_assets::KitchenSettings,
    messages::{PickUpIntent, SessionReset, ThrowIntent},
    player_components::{LookAngles, Player},
    session_resources::{CrosshairTarget, Hand},
};

const LOOK_SENSITIVITY: f32 = 0.002;
/// Just shy of straight up/down so the view never flips.
const MAX_PITCH: f32 = 1.55;

pub fn gather_move_intents(keys: Res<ButtonInput<KeyCode>>, mut intents: ResMut<MoveIntents>) {
    intents.forward = keys.pressed(KeyCode::KeyW) || keys.pressed(KeyCode::ArrowUp);
    intents.backward = keys.pressed(KeyCode::KeyS) || keys.pressed(KeyCode::ArrowDown);
    intents.left = keys.pressed(KeyCode::KeyA) || keys.pressed(KeyCode::ArrowLeft);
    intents.right = keys.pressed(KeyCode::KeyD) || keys.pressed(KeyCode::ArrowRight);
    intents.jump = keys.pressed(KeyCode::Space);
}

pub fn mouse_look(
    motion: Res<AccumulatedMouseMotion>,
    lock: Res<PointerLock>,
    mut players: Query<&mut LookAngles, With<Player>>,
) {
    if !lock.0 || motion.delta == Vec2::ZERO {
        return;
    }
    let Ok(mut look) = players.single_mut() else {
        return;
    };
    look.yaw -= motion.delta.x * LOOK_SENSITIVITY;
    look.pitch = (look.pitch - motion.delta.y * LOOK_SENSITIVITY).clamp(-MAX_PITCH, MAX_PITCH);
}

/// Primary click: captures the pointer if it is free (that click does
/// nothing else), then throws with a full hand or picks up whatever the
/// crosshair hovers with an empty one. Escape releases the pointer.
pub fn primary_action(
    mouse: Res<ButtonInput<MouseButton>>,
    keys: Res<ButtonInput<KeyCode>>,
    mut lock: ResMut<PointerLock>,
    mut windows: Query<&mut CursorOptions, With<PrimaryWindow>>,
    hand: Res<Hand>,
    crosshair: Res<CrosshairTarget>,
    players: Query<(&Transform, &LookAngles), With<Player>>,
    settings: Res<KitchenSettings>,
    mut pickups: MessageWriter<PickUpIntent>,
    mut throws: MessageWriter<ThrowIntent>,
) {
    if keys.just_pressed(KeyCode::Escape) && lock.0 {
        lock.0 = false;
        set_pointer_capture(&mut windows, false);
    }
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    if !lock.0 {
        lock.0 = true;
        set_pointer_capture(&mut windows, true);
        return;
    }

    if hand.is_empty() {
        if let Some(hovered) = crosshair.hovered {
            pickups.write(PickUpIntent {
                ingredient: hovered.ingredient,
                source: (!hovered.is_spawner).then_some(hovered.entity),
            });
        }
    } else {
        let Ok((transform, look)) = players.single() else {
            return;
        };
        let dir = look.forward();
        let eye = transform.translation + Vec3::Y * EYE_HEIGHT;
        throws.write(ThrowIntent {
            origin: eye + dir * THROW_SPAWN_OFFSET,
            velocity: dir * settings.throw_force + Vec3::Y * settings.throw_lift,
        });
    }
}

/// The win overlay needs a visible cursor for its button.
pub fn release_pointer_on_win(
    mut lock: ResMut<PointerLock>,
    mut windows: Query<&mut CursorOptions, With<PrimaryWindow>>,
) {
    lock.0 = false;
    set_pointer_capture(&mut windows, false);
}

pub fn relock_pointer_on_reset(
    _trigger: On<SessionReset>,
    mut lock: ResMut<PointerLock>,
    mut windows: Query<&mut CursorOptions, With<PrimaryWindow>>,
) {
    lock.0 = true;
    set_pointer_capture(&mut windows, true);
}

fn set_pointer_capture(
    windows: &mut Query<&mut CursorOptions, With<PrimaryWindow>>,
    captured: bool,
) {
    let Ok(mut cursor) = windows.single_mut() else {
        return;
    };
    cursor.grab_mode = if captured {
        CursorGrabMode::Locked
    } else {
        CursorGrabMode::None
    };
    cursor.visible = !captured;
}
