use bevy::prelude::*;

/// Marks the craft flown by the local player.
///
/// A locked craft is skipped by the flight tick: pending input is still
/// consumed, but the ship state is left alone.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerController {
    pub locked: bool,
}
