//! Spawn helpers для акторов
//!
//! Создают entity с полным набором компонентов ядра.
//! Rapier тело хост добавляет отдельно: `commands.entity(e).insert(rapier_actor_body())`.

use bevy::prelude::*;

use crate::components::{Actor, Player, PlayerConfig};
use crate::patrol::PatrolConfig;

/// Spawn игрока в `position`
pub fn spawn_player(commands: &mut Commands, position: Vec3, config: PlayerConfig) -> Entity {
    if let Err(err) = config.validate() {
        crate::log_error(&format!("Player: invalid config ({}), default speed will be used", err));
    }

    commands
        .spawn((
            Transform::from_translation(position),
            Actor::player(),
            Player,
            config,
        ))
        .id()
}

/// Spawn патрульного врага
///
/// Позицию не задаём: initialize_patrol_actors поставит актора
/// в сэмплированную initial position на первом тике.
pub fn spawn_patrol_enemy(commands: &mut Commands, config: PatrolConfig) -> Entity {
    commands.spawn((Actor::enemy(), config)).id()
}
