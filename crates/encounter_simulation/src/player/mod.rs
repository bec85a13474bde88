//! Player domain — движение игрока от input
//!
//! Stateless: каждый тик AxisInput → direction → velocity_toward → PhysicsBody.
//! AxisInput заполняет хост (клиент читает клавиатуру/геймпад, тесты — руками).

use bevy::prelude::*;

pub mod input;
pub mod systems;

pub use input::*;
pub use systems::*;

use crate::SimulationSet;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AxisInput>().add_systems(
            FixedUpdate,
            drive_player_from_input.in_set(SimulationSet::Intent),
        );
    }
}
