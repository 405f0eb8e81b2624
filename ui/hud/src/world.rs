//! Attaches render meshes to the logical kitchen entities. Gameplay spawns
//! plain transforms; everything visible hangs off them as children.

use {
    super::ingredient_color,
    bevy::prelude::*,
    kitchen_components::{Ingredient, Interactable, IngredientType, Plate, Spawner},
    std::f32::consts::{FRAC_PI_2, FRAC_PI_4},
};

const CRATE_BROWN: Color = Color::srgb_u8(93, 64, 55);
const TABLE_BROWN: Color = Color::srgb_u8(139, 69, 19);
const COUNTER_SLATE: Color = Color::srgb_u8(38, 50, 56);
const FLOOR_DARK: Color = Color::srgb(0.1, 0.1, 0.1);
const PLATE_WHITE: Color = Color::srgb_u8(236, 239, 241);

#[derive(Component)]
pub(crate) struct Backdrop;

/// Floor and tables: static scenery with no gameplay behind it.
pub(crate) fn spawn_backdrop(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    existing: Query<(), With<Backdrop>>,
) {
    if !existing.is_empty() {
        return;
    }

    commands.spawn((
        Backdrop,
        Name::new("Floor"),
        Mesh3d(meshes.add(Plane3d::default().mesh().size(50.0, 50.0))),
        MeshMaterial3d(materials.add(FLOOR_DARK)),
    ));

    let table = meshes.add(Cuboid::new(4.0, 0.2, 3.0));
    for (position, color) in [
        (Vec3::new(-5.0, 0.9, -4.0), TABLE_BROWN),
        (Vec3::new(5.0, 0.9, -4.0), TABLE_BROWN),
        (Vec3::new(0.0, 0.9, -10.0), COUNTER_SLATE),
    ] {
        commands.spawn((
            Backdrop,
            Name::new("Table"),
            Mesh3d(table.clone()),
            MeshMaterial3d(materials.add(color)),
            Transform::from_translation(position),
        ));
    }
}

/// Crate box plus a floating icon of what it dispenses.
pub(crate) fn dress_spawner(
    trigger: On<Add, Spawner>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    spawners: Query<&Interactable, With<Spawner>>,
) {
    let entity = trigger.entity;
    let Ok(interactable) = spawners.get(entity) else {
        return;
    };

    commands
        .entity(entity)
        .insert(Visibility::default())
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(meshes.add(Cuboid::new(1.8, 1.2, 1.8))),
                MeshMaterial3d(materials.add(CRATE_BROWN)),
            ));
            parent.spawn((
                Mesh3d(meshes.add(Capsule3d::new(0.25, 0.8))),
                MeshMaterial3d(materials.add(ingredient_color(interactable.ingredient))),
                Transform::from_xyz(0.0, 1.0, 0.0)
                    .with_rotation(Quat::from_rotation_z(FRAC_PI_4)),
            ));
        });
}

pub(crate) fn dress_plate(
    trigger: On<Add, Plate>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands
        .entity(trigger.entity)
        .insert(Visibility::default())
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(meshes.add(Cylinder::new(1.5, 0.1))),
                MeshMaterial3d(materials.add(Color::srgb_u8(207, 216, 220))),
            ));
            parent.spawn((
                Mesh3d(meshes.add(Cylinder::new(1.2, 0.1))),
                MeshMaterial3d(materials.add(PLATE_WHITE)),
                Transform::from_xyz(0.0, 0.05, 0.0),
            ));
        });
}

pub(crate) fn dress_ingredient(
    trigger: On<Add, Ingredient>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    ingredients: Query<&Ingredient>,
) {
    let entity = trigger.entity;
    let Ok(ingredient) = ingredients.get(entity) else {
        return;
    };
    let material = MeshMaterial3d(materials.add(ingredient_color(ingredient.0)));

    commands
        .entity(entity)
        .insert(Visibility::default())
        .with_children(|parent| {
            match ingredient.0 {
                IngredientType::Bun => {
                    parent.spawn((Mesh3d(meshes.add(Cuboid::new(0.7, 0.3, 0.4))), material));
                }
                IngredientType::Sausage => {
                    parent.spawn((
                        Mesh3d(meshes.add(Capsule3d::new(0.1, 0.6))),
                        material,
                        Transform::from_rotation(Quat::from_rotation_x(FRAC_PI_2)),
                    ));
                }
            };
        });
}
