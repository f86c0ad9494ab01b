use bevy::prelude::*;

use crate::components::ChaseCamera;
use crate::plugins::FlightSet;
use crate::systems::{chase_camera_system, ship_transform_sync_system};

pub struct ChaseCameraPlugin;

impl Plugin for ChaseCameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera).add_systems(
            FixedUpdate,
            chase_camera_system
                .in_set(FlightSet::Present)
                .after(ship_transform_sync_system),
        );
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 3.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
        ChaseCamera::default(),
        Name::new("chase_camera"),
    ));
}
