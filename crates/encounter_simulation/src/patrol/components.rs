//! Patrol components (config, state machine state)

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{ensure_positive, ConfigError};

/// Режим выбора следующей patrol точки
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect, Serialize, Deserialize)]
pub enum PatrolMode {
    /// Случайная точка в квадрате initial ± bound
    #[default]
    Random,
    /// initial + X * bound (фиксированный offset, НЕ чередуется)
    Horizontal,
    /// initial + Z * bound (фиксированный offset, НЕ чередуется)
    Vertical,
}

/// Параметры патруля (неизменны после спавна)
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct PatrolConfig {
    /// Half-extent квадратной зоны патруля (метры)
    pub bound: f32,
    pub mode: PatrolMode,
    /// Таймаут на достижение точки (секунды)
    pub retarget_period: f32,
    /// Скорость движения (m/s)
    pub speed: f32,
}

impl Default for PatrolConfig {
    fn default() -> Self {
        Self {
            bound: 10.0,
            mode: PatrolMode::Random,
            retarget_period: 3.0,
            speed: 2.0,
        }
    }
}

impl PatrolConfig {
    pub fn with_mode(mode: PatrolMode) -> Self {
        Self { mode, ..default() }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("patrol.bound", self.bound)?;
        ensure_positive("patrol.retarget_period", self.retarget_period)?;
        ensure_positive("patrol.speed", self.speed)
    }
}

/// Причина смены patrol точки (для диагностики)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum RetargetReason {
    /// Первая точка при спавне
    Spawn,
    /// Дошли до точки (distance < REACHED_DISTANCE)
    Reached,
    /// Истёк retarget_period
    Timeout,
    /// Контакт с другим актором прервал текущий leg
    Contact,
}

/// Состояние патрульного актора
///
/// Инвариант: target_position.y == initial_position.y,
/// target_position.{x,z} ∈ [initial - bound, initial + bound].
/// Создаётся только через `PatrolState::spawn`.
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct PatrolState {
    pub(crate) initial_position: Vec3,
    pub(crate) target_position: Vec3,
    pub(crate) elapsed_since_retarget: f32,
    pub(crate) config: PatrolConfig,
}

impl PatrolState {
    pub fn initial_position(&self) -> Vec3 {
        self.initial_position
    }

    pub fn target_position(&self) -> Vec3 {
        self.target_position
    }

    pub fn elapsed_since_retarget(&self) -> f32 {
        self.elapsed_since_retarget
    }

    pub fn config(&self) -> &PatrolConfig {
        &self.config
    }

    /// Y плоскости патруля
    pub fn ground_level(&self) -> f32 {
        self.initial_position.y
    }
}
