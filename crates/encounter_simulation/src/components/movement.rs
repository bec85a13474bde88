//! Movement компоненты: velocity актора

use bevy::prelude::*;

/// Физическое тело актора (со стороны ядра)
///
/// Ядро пишет только `velocity`. Позицию меняет интегратор
/// (`HeadlessPhysicsPlugin` или Rapier через `RapierBridgePlugin`).
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct PhysicsBody {
    /// Текущая velocity (m/s)
    pub velocity: Vec3,
}
