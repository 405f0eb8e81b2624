use {
    crate::PointerLock,
    bevy::{prelude::*, window::PrimaryWindow},
    game_assets::KitchenSettings,
    kitchen_components::{HitRadius, Interactable},
    session_resources::{CrosshairTarget, Hand, Hovered},
};

#[derive(Debug, Clone, Copy)]
pub struct TargetHit {
    pub entity: Entity,
    pub ingredient: kitchen_components::IngredientType,
    pub is_spawner: bool,
    pub distance: f32,
}

/// Nearest interactable hit sphere along the aim ray, or `None`. A
/// geometric intersection beyond `max_distance` does not count.
pub fn resolve_target(
    origin: Vec3,
    direction: Vec3,
    max_distance: f32,
    candidates: impl IntoIterator<Item = (Entity, Vec3, f32, Interactable)>,
) -> Option<TargetHit> {
    let direction = direction.normalize_or_zero();
    if direction == Vec3::ZERO {
        return None;
    }

    let mut best: Option<TargetHit> = None;
    for (entity, center, radius, interactable) in candidates {
        let to_center = center - origin;
        let along = to_center.dot(direction);
        if along < 0.0 {
            continue;
        }
        let offset_sq = to_center.length_squared() - along * along;
        let radius_sq = radius * radius;
        if offset_sq > radius_sq {
            continue;
        }
        let distance = (along - (radius_sq - offset_sq).sqrt()).max(0.0);
        if distance > max_distance {
            continue;
        }
        if best.is_none_or(|b| distance < b.distance) {
            best = Some(TargetHit {
                entity,
                ingredient: interactable.ingredient,
                is_spawner: interactable.is_spawner,
                distance,
            });
        }
    }
    best
}

/// Keeps [`CrosshairTarget`] pointed at whatever the aim ray hits. Only
/// meaningful with an empty hand; a full hand can only throw, so the hover
/// goes dark. Captured pointer aims through the screen center, released
/// pointer through the cursor.
pub fn update_crosshair_target(
    hand: Res<Hand>,
    lock: Res<PointerLock>,
    settings: Res<KitchenSettings>,
    mut crosshair: ResMut<CrosshairTarget>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    interactables: Query<(Entity, &Transform, &HitRadius, &Interactable)>,
) {
    if !hand.is_empty() {
        crosshair.hovered = None;
        return;
    }
    let Ok((camera, camera_transform)) = cameras.single() else {
        crosshair.hovered = None;
        return;
    };

    let (origin, direction) = if lock.0 {
        (
            camera_transform.translation(),
            camera_transform.forward().as_vec3(),
        )
    } else {
        let ray = windows
            .single()
            .ok()
            .and_then(|window| window.cursor_position())
            .and_then(|cursor| camera.viewport_to_world(camera_transform, cursor).ok());
        let Some(ray) = ray else {
            crosshair.hovered = None;
            return;
        };
        (ray.origin, ray.direction.as_vec3())
    };

    crosshair.hovered = resolve_target(
        origin,
        direction,
        settings.interaction_distance,
        interactables
            .iter()
            .map(|(entity, transform, radius, interactable)| {
                (entity, transform.translation, radius.0, *interactable)
            }),
    )
    .map(|hit| Hovered {
        entity: hit.entity,
        ingredient: hit.ingredient,
        is_spawner: hit.is_spawner,
    });
}

#[cfg(test)]
mod tests {
    use {super::*, kitchen_components::IngredientType};

    fn interactable(ingredient: IngredientType, is_spawner: bool) -> Interactable {
        Interactable {
            ingredient,
            is_spawner,
        }
    }

    fn fresh_entities<const N: usize>() -> [Entity; N] {
        let mut world = World::new();
        std::array::from_fn(|_| world.spawn_empty().id())
    }

    #[test]
    fn nearest_candidate_along_the_ray_wins() {
        let [near, far] = fresh_entities();
        let hit = resolve_target(
            Vec3::ZERO,
            Vec3::NEG_Z,
            20.0,
            vec![
                (far, Vec3::new(0.0, 0.0, -12.0), 0.5, interactable(IngredientType::Sausage, false)),
                (near, Vec3::new(0.0, 0.0, -4.0), 0.5, interactable(IngredientType::Bun, false)),
            ],
        )
        .unwrap();
        assert_eq!(hit.entity, near);
        assert_eq!(hit.ingredient, IngredientType::Bun);
        assert!((hit.distance - 3.5).abs() < 1e-4);
    }

    #[test]
    fn hits_beyond_interaction_distance_are_invalid() {
        let [target] = fresh_entities();
        let hit = resolve_target(
            Vec3::ZERO,
            Vec3::NEG_Z,
            20.0,
            vec![(
                target,
                Vec3::new(0.0, 0.0, -30.0),
                0.5,
                interactable(IngredientType::Bun, false),
            )],
        );
        assert!(hit.is_none());
    }

    #[test]
    fn offset_and_behind_candidates_miss() {
        let [target] = fresh_entities();
        // Too far off-axis.
        assert!(
            resolve_target(
                Vec3::ZERO,
                Vec3::NEG_Z,
                20.0,
                vec![(
                    target,
                    Vec3::new(2.0, 0.0, -5.0),
                    0.5,
                    interactable(IngredientType::Bun, false),
                )],
            )
            .is_none()
        );
        // Behind the player.
        assert!(
            resolve_target(
                Vec3::ZERO,
                Vec3::NEG_Z,
                20.0,
                vec![(
                    target,
                    Vec3::new(0.0, 0.0, 5.0),
                    0.5,
                    interactable(IngredientType::Bun, false),
                )],
            )
            .is_none()
        );
    }

    #[test]
    fn oversized_spawner_radius_catches_sloppy_aim() {
        let [spawner] = fresh_entities();
        let hit = resolve_target(
            Vec3::ZERO,
            Vec3::NEG_Z,
            20.0,
            vec![(
                spawner,
                Vec3::new(2.0, 0.0, -5.0),
                2.8,
                interactable(IngredientType::Sausage, true),
            )],
        )
        .unwrap();
        assert!(hit.is_spawner);
        assert_eq!(hit.ingredient, IngredientType::Sausage);
    }
}
