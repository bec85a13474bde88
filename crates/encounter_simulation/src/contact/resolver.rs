//! Contact resolver: эвристика инициатора контакта
//!
//! Идея: если актор двигался В СТОРОНУ второго (dot > 0 в горизонтальной
//! плоскости), то он и врезался. Best-effort, не authoritative.

use bevy::prelude::*;

use crate::transition::{TransitionService, BATTLE_CONTEXT};

/// Вектора короче этого (squared) считаются нулевыми при нормализации
pub const NORMALIZE_EPSILON_SQUARED: f32 = 1e-6;

/// Кто инициировал контакт
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum ContactInitiator {
    /// Актор, получивший callback, двигался к другому
    ThisActor,
    /// Всё остальное (включая вырожденные случаи: нулевая velocity/delta)
    OtherActor,
}

/// Effects контакта: классификация + запрошенный переход
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactResolution {
    pub initiator: ContactInitiator,
    pub transition: &'static str,
}

impl ContactResolution {
    /// Отправить запрос перехода в сервис (ровно один на контакт)
    pub fn apply<S: TransitionService + ?Sized>(&self, service: &mut S) {
        service.request_transition(self.transition);
    }

    pub fn initiated_by_this_actor(&self) -> bool {
        self.initiator == ContactInitiator::ThisActor
    }
}

/// Нормализация с guard'ом: near-zero / non-finite → Vec3::ZERO
pub fn safe_normalize(vector: Vec3) -> Vec3 {
    let length_squared = vector.length_squared();
    if !length_squared.is_finite() || length_squared < NORMALIZE_EPSILON_SQUARED {
        return Vec3::ZERO;
    }

    vector / length_squared.sqrt()
}

fn flatten(vector: Vec3) -> Vec3 {
    Vec3::new(vector.x, 0.0, vector.z)
}

/// Классификация инициатора по позиции/velocity (ground axis игнорируется)
pub fn classify_initiator(
    self_position: Vec3,
    self_velocity: Vec3,
    other_position: Vec3,
) -> ContactInitiator {
    let delta = safe_normalize(flatten(other_position - self_position));
    let velocity = safe_normalize(flatten(self_velocity));

    if delta.dot(velocity) > 0.0 {
        ContactInitiator::ThisActor
    } else {
        ContactInitiator::OtherActor
    }
}

/// Полное разрешение контакта: классификация + безусловный переход в бой
pub fn resolve_contact(
    self_position: Vec3,
    self_velocity: Vec3,
    other_position: Vec3,
) -> ContactResolution {
    ContactResolution {
        initiator: classify_initiator(self_position, self_velocity, other_position),
        transition: BATTLE_CONTEXT,
    }
}
