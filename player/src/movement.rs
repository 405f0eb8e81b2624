use {
    crate::{EYE_HEIGHT, GRAVITY, JUMP_IMPULSE, MOVE_SPEED, MoveIntents, PLAYER_RADIUS},
    bevy::prelude::*,
    kitchen_components::{AngularVelocity, Velocity},
    player_components::{LookAngles, Player},
};

/// The kitchen floor is a 50x50 slab; beyond it everything falls off-map.
const FLOOR_HALF_EXTENT: f32 = 25.0;
/// Loose ingredients come to rest roughly half a bun above the floor.
const INGREDIENT_REST_Y: f32 = 0.15;
/// Crude ground friction so rejected food does not slide forever.
const GROUND_DRAG: f32 = 0.8;

pub fn apply_movement(
    intents: Res<MoveIntents>,
    mut players: Query<(&LookAngles, &mut Velocity), With<Player>>,
) {
    let Ok((look, mut velocity)) = players.single_mut() else {
        return;
    };
    let (sin_yaw, cos_yaw) = look.yaw.sin_cos();
    let forward = Vec3::new(-sin_yaw, 0.0, -cos_yaw);
    let right = Vec3::new(cos_yaw, 0.0, -sin_yaw);

    let mut dir = Vec3::ZERO;
    if intents.forward {
        dir += forward;
    }
    if intents.backward {
        dir -= forward;
    }
    if intents.right {
        dir += right;
    }
    if intents.left {
        dir -= right;
    }
    let dir = dir.normalize_or_zero() * MOVE_SPEED;
    velocity.0.x = dir.x;
    velocity.0.z = dir.z;

    if intents.jump && velocity.0.y.abs() < 0.1 {
        velocity.0.y = JUMP_IMPULSE;
    }
}

/// Shared integrator for the player body and every ingredient: gravity,
/// velocity integration, spin, and a floor plane inside the kitchen bounds.
/// Outside the bounds bodies keep falling until the off-map sweep takes
/// them.
pub fn integrate_bodies(
    time: Res<Time>,
    mut bodies: Query<(
        &mut Transform,
        &mut Velocity,
        Option<&mut AngularVelocity>,
        Has<Player>,
    )>,
) {
    let dt = time.delta_secs();
    for (mut transform, mut velocity, spin, is_player) in bodies.iter_mut() {
        velocity.0.y += GRAVITY * dt;
        transform.translation += velocity.0 * dt;

        let mut grounded = false;
        let rest_y = if is_player {
            PLAYER_RADIUS
        } else {
            INGREDIENT_REST_Y
        };
        let p = transform.translation;
        if p.y < rest_y && p.x.abs() < FLOOR_HALF_EXTENT && p.z.abs() < FLOOR_HALF_EXTENT {
            transform.translation.y = rest_y;
            velocity.0.y = 0.0;
            grounded = true;
        }

        if let Some(mut spin) = spin {
            if spin.0 != Vec3::ZERO {
                let rotation = Quat::from_scaled_axis(spin.0 * dt);
                transform.rotation = rotation * transform.rotation;
            }
            if grounded {
                velocity.0.x *= GROUND_DRAG;
                velocity.0.z *= GROUND_DRAG;
                spin.0 *= GROUND_DRAG;
            }
        }
    }
}

/// First-person rig: the camera rides the player body at eye height.
pub fn sync_camera(
    players: Query<(&Transform, &LookAngles), With<Player>>,
    mut cameras: Query<&mut Transform, (With<Camera3d>, Without<Player>)>,
) {
    let Ok((player_transform, look)) = players.single() else {
        return;
    };
    let Ok(mut camera_transform) = cameras.single_mut() else {
        return;
    };
    camera_transform.translation = player_transform.translation + Vec3::Y * EYE_HEIGHT;
    camera_transform.rotation = Quat::from_euler(EulerRot::YXZ, look.yaw, look.pitch, 0.0);
}
