//! Порты физического тела: чтение позиции, запись velocity
//!
//! Controller'ы работают через эти trait'ы, а не напрямую с ECS —
//! state machine тестируется без физического движка.

use bevy::prelude::*;

use crate::components::PhysicsBody;

/// Источник текущей позиции актора (read-only)
pub trait PositionSource {
    fn position(&self) -> Vec3;
}

/// Приёмник velocity команды
pub trait VelocitySink {
    fn set_velocity(&mut self, velocity: Vec3);
}

impl PositionSource for Transform {
    fn position(&self) -> Vec3 {
        self.translation
    }
}

impl VelocitySink for PhysicsBody {
    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }
}

/// ECS тело актора: Transform (позиция от интегратора) + PhysicsBody (velocity от ядра)
pub struct ActorBody<'a> {
    pub transform: &'a Transform,
    pub body: &'a mut PhysicsBody,
}

impl PositionSource for ActorBody<'_> {
    fn position(&self) -> Vec3 {
        self.transform.position()
    }
}

impl VelocitySink for ActorBody<'_> {
    fn set_velocity(&mut self, velocity: Vec3) {
        self.body.set_velocity(velocity);
    }
}
