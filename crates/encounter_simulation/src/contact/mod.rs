//! Contact domain — контакты акторов и классификация инициатора
//!
//! Содержит:
//! - ActorContact (вход в контакт, от физического моста)
//! - resolve_contact (эвристика "кто врезался" + запрос перехода в бой)
//! - ContactPlugin (player ↔ enemy контакты → ContextTransitionRequested)

use bevy::prelude::*;

pub mod events;
pub mod resolver;
pub mod systems;

// Tests (separate files with _tests suffix)
#[cfg(test)]
mod resolver_tests;

pub use events::*;
pub use resolver::*;
pub use systems::*;

use crate::transition::ContextTransitionRequested;
use crate::SimulationSet;

/// Contact Plugin
///
/// Каждый qualifying контакт даёт ровно один ContextTransitionRequested,
/// даже если контакты приходят в соседних тиках (debounce — забота хоста).
pub struct ContactPlugin;

impl Plugin for ContactPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ActorContact>()
            .add_event::<ContactClassified>()
            .add_event::<ContextTransitionRequested>()
            .add_systems(
                FixedUpdate,
                resolve_player_contacts.in_set(SimulationSet::React),
            );
    }
}
