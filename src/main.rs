use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::PI;

use bevy_marquee_select::constants::*;
use bevy_marquee_select::{Selectable, SelectionCamera, SelectionChanged, SelectionPlugin};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(SelectionPlugin::default())
        .add_systems(Startup, (setup_scene, spawn_cubes))
        .add_systems(Update, (demo_camera_movement, log_selection_changes))
        .run();
}

fn setup_scene(mut commands: Commands) {
    // Directional light (sun)
    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform {
            translation: Vec3::new(0.0, 50.0, 0.0),
            rotation: Quat::from_rotation_x(-PI / 4.0),
            ..default()
        },
    ));

    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.4, 0.4, 0.6),
        brightness: 300.0,
        affects_lightmapped_meshes: false,
    });

    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 60.0, 90.0).looking_at(Vec3::ZERO, Vec3::Y),
        SelectionCamera,
    ));

    commands.spawn((
        Text::new("Left-click: Select | Left-drag: Box select | WASD: Pan"),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
    ));
}

fn spawn_cubes(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut rng = rand::thread_rng();
    let mesh = meshes.add(Cuboid::new(1.0, 1.0, 1.0));
    // Shared on purpose: the plugin gives every selectable its own instance
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        ..default()
    });

    let half_field = DEMO_FIELD_SIZE / 2.0;
    for _ in 0..DEMO_CUBE_COUNT {
        let size = rng.gen_range(DEMO_CUBE_MIN_SIZE..DEMO_CUBE_MAX_SIZE);
        let position = Vec3::new(
            rng.gen_range(-half_field..half_field),
            size / 2.0,
            rng.gen_range(-half_field..half_field),
        );

        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(position).with_scale(Vec3::splat(size)),
            Selectable::default(),
        ));
    }

    info!("Spawned {} selectable cubes", DEMO_CUBE_COUNT);
}

fn demo_camera_movement(
    time: Res<Time>,
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut camera_query: Query<&mut Transform, With<SelectionCamera>>,
) {
    let Ok(mut transform) = camera_query.single_mut() else { return };

    let mut movement = Vec3::ZERO;
    if keyboard_input.pressed(KeyCode::KeyW) || keyboard_input.pressed(KeyCode::ArrowUp) {
        movement.z -= 1.0;
    }
    if keyboard_input.pressed(KeyCode::KeyS) || keyboard_input.pressed(KeyCode::ArrowDown) {
        movement.z += 1.0;
    }
    if keyboard_input.pressed(KeyCode::KeyA) || keyboard_input.pressed(KeyCode::ArrowLeft) {
        movement.x -= 1.0;
    }
    if keyboard_input.pressed(KeyCode::KeyD) || keyboard_input.pressed(KeyCode::ArrowRight) {
        movement.x += 1.0;
    }

    if movement.length() > 0.0 {
        transform.translation += movement.normalize() * DEMO_CAMERA_SPEED * time.delta_secs();
    }
}

fn log_selection_changes(mut selection_changed: EventReader<SelectionChanged>) {
    for event in selection_changed.read() {
        info!("Selection now holds {} cubes", event.selected.len());
    }
}
