//! Contact events

use bevy::prelude::*;

use crate::components::ActorCategory;
use super::resolver::ContactInitiator;

/// Event: актор вошёл в контакт с другим телом
///
/// Генерируется физическим мостом (headless детектор или Rapier),
/// по одному событию на каждую сторону контакта.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct ActorContact {
    /// Актор, который получает callback
    pub entity: Entity,
    /// Второе тело контакта
    pub other: Entity,
    /// Категория второго тела (None — не актор: стена, пропс)
    pub other_category: Option<ActorCategory>,
    /// Позиция второго тела в момент контакта
    pub other_position: Vec3,
}

/// Event: результат классификации контакта игрока с врагом
///
/// Чисто диагностический: поведение от initiator НЕ зависит.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct ContactClassified {
    pub player: Entity,
    pub enemy: Entity,
    pub initiator: ContactInitiator,
}
