//! Базовые компоненты акторов: Actor, ActorCategory, CollisionRadius

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Категория актора (замена строковых тегов "Player" / "Enemy")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum ActorCategory {
    Player,
    Enemy,
}

impl ActorCategory {
    /// Контакт с актором этой категории прерывает текущий leg патруля
    pub fn interrupts_patrol(self) -> bool {
        matches!(self, ActorCategory::Player | ActorCategory::Enemy)
    }
}

/// Актор (игрок или патрульный враг)
///
/// Автоматически добавляет Transform, PhysicsBody, CollisionRadius через Required Components.
/// Категория неизменна после спавна.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
#[require(Transform, crate::components::PhysicsBody, CollisionRadius)]
pub struct Actor {
    pub category: ActorCategory,
}

impl Actor {
    pub fn player() -> Self {
        Self {
            category: ActorCategory::Player,
        }
    }

    pub fn enemy() -> Self {
        Self {
            category: ActorCategory::Enemy,
        }
    }

    pub fn is(&self, category: ActorCategory) -> bool {
        self.category == category
    }
}

/// Радиус актора для headless детектора контактов (метры)
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct CollisionRadius(pub f32);

impl Default for CollisionRadius {
    fn default() -> Self {
        Self(0.5) // совпадает с capsule радиусом rapier коллайдера + запас
    }
}
