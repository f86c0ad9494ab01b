mod dynamics;

use bevy::prelude::*;

use crate::components::{PlayerController, ShipState};
use crate::resources::{FlightFault, FlightInput, TuningConstants};

pub use dynamics::tick;

/// Spawn the player craft at rest at the origin.
pub fn spawn_player_ship(mut commands: Commands) {
    commands.spawn((
        ShipState::default(),
        PlayerController::default(),
        Name::new("player_ship"),
        Transform::default(),
    ));
    info!("Spawned player ship");
}

/// Consume one input snapshot and advance the player ship by one tick.
///
/// A rejected snapshot skips the tick. A state that fails validation after
/// the tick is reset to rest and reported as a [`FlightFault`].
pub fn flight_tick_system(
    mut query: Query<(&mut ShipState, &PlayerController)>,
    mut input: ResMut<FlightInput>,
    tuning: Res<TuningConstants>,
    mut faults: EventWriter<FlightFault>,
) {
    let snapshot = input.take_snapshot();

    let Ok((mut state, controller)) = query.get_single_mut() else {
        return;
    };
    if controller.locked {
        return;
    }

    if let Err(err) = tick(&mut state, &snapshot, &tuning) {
        warn!("Skipping flight tick: {}", err);
        return;
    }

    if let Err(err) = state.validate() {
        error!("{}; resetting ship to rest", err);
        *state = ShipState::default();
        faults.send(FlightFault {
            reason: err.to_string(),
        });
    }
}
