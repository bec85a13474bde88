//! Player systems

use bevy::prelude::*;

use crate::components::{PhysicsBody, Player, PlayerConfig};
use crate::movement::velocity_toward;
use crate::physics::VelocitySink;
use super::input::{AxisInput, AxisSource};

/// Система: AxisInput → velocity игрока
///
/// Невалидный PlayerConfig → дефолтная скорость (ошибка уже залогирована при спавне).
pub fn drive_player_from_input(
    input: Res<AxisInput>,
    mut players: Query<(&PlayerConfig, &mut PhysicsBody), With<Player>>,
) {
    let direction = input.direction();

    for (config, mut body) in players.iter_mut() {
        let speed = if config.validate().is_ok() {
            config.speed
        } else {
            PlayerConfig::default().speed
        };

        body.set_velocity(velocity_toward(direction, speed));
    }
}
