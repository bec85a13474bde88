//! Player control marker + конфиг игрока

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{ensure_positive, ConfigError};

/// Marker component для player-controlled entity
///
/// Акторы С этим компонентом получают velocity от input (`crate::player`),
/// акторы БЕЗ него — от patrol controller.
#[derive(Component, Debug, Clone, Copy, Default)]
#[require(PlayerConfig)]
pub struct Player;

/// Конфиг игрока
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct PlayerConfig {
    /// Скорость движения (m/s)
    pub speed: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self { speed: 5.0 }
    }
}

impl PlayerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("player.speed", self.speed)
    }
}
