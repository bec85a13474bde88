//! Patrol events

use bevy::prelude::*;

use super::components::RetargetReason;

/// Event: патрульный актор выбрал новую точку
///
/// Диагностический hook (debug overlay, тесты). Корректность от него не зависит.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct PatrolRetargeted {
    pub entity: Entity,
    pub target: Vec3,
    pub reason: RetargetReason,
}
