use bevy::prelude::*;
use bevy::window::{CursorGrabMode, PrimaryWindow};
use std::env;

use spaceflight::{
    components::PlayerController,
    plugins::{ChaseCameraPlugin, DiagnosticsPlugin, FlightPlugin},
    resources::{FlightConfig, FlightInput},
    systems::spawn_player_ship,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Optional path to a YAML flight config
    let config = match env::args().nth(1) {
        Some(path) => FlightConfig::from_file(path)?,
        None => FlightConfig::default(),
    };
    let flight = FlightPlugin::with_config(config)?;

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "spaceflight".to_string(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins((flight, ChaseCameraPlugin, DiagnosticsPlugin))
        .add_systems(Startup, attach_ship_mesh.after(spawn_player_ship))
        .add_systems(Update, cursor_grab_system)
        .run();

    Ok(())
}

fn attach_ship_mesh(
    mut commands: Commands,
    query: Query<Entity, With<PlayerController>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Ok(ship) = query.get_single() else {
        warn!("No player ship to attach a mesh to");
        return;
    };

    let hull = materials.add(StandardMaterial {
        base_color: Color::srgb(1.0, 0.27, 0.27),
        unlit: true,
        ..default()
    });
    commands
        .entity(ship)
        .insert((Mesh3d(meshes.add(Cuboid::new(0.8, 0.8, 3.0))), MeshMaterial3d(hull)));
}

/// Keep the OS cursor locked while mouse aim is engaged.
fn cursor_grab_system(
    input: Res<FlightInput>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    let Ok(mut window) = windows.get_single_mut() else {
        return;
    };

    let locked = input.mouse_aim_active();
    let grab_mode = if locked {
        CursorGrabMode::Locked
    } else {
        CursorGrabMode::None
    };
    if window.cursor_options.grab_mode != grab_mode {
        window.cursor_options.grab_mode = grab_mode;
        window.cursor_options.visible = !locked;
    }
}
