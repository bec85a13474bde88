//! Конфигурация симуляции и ошибки валидации
//!
//! Конфиги акторов (`PatrolConfig`, `PlayerConfig`) живут рядом со своими доменами,
//! здесь — общие настройки мира и `ConfigError`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ошибка валидации конфигурации
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be a positive finite number, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },
}

/// Проверка: значение > 0 и конечное
pub fn ensure_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

pub fn ensure_finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}

/// Глобальные настройки симуляции
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSettings {
    /// Seed для `DeterministicRng`
    pub seed: u64,
    /// Частота FixedUpdate (Hz)
    pub fixed_hz: f64,
    /// Y плоскости патрулирования (ground axis)
    pub ground_level: f32,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            seed: 42,
            fixed_hz: 60.0,
            ground_level: 0.0,
        }
    }
}

impl SimulationSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("fixed_hz", self.fixed_hz as f32)?;
        ensure_finite("ground_level", self.ground_level)
    }
}
