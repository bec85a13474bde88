//! Patrol domain — автономное патрулирование врага
//!
//! Per-frame flow (FixedUpdate):
//! 1. initialize_patrol_actors — спавн: initial position + первая точка (один раз)
//! 2. patrol_step — таймер, velocity к точке, Reached/Timeout → Retarget
//! 3. retarget_patrol_on_contact — контакт с Player/Enemy → немедленный Retarget

use bevy::prelude::*;

pub mod components;
pub mod controller;
pub mod events;
pub mod systems;

// Tests (separate files with _tests suffix)
#[cfg(test)]
mod controller_tests;

pub use components::*;
pub use controller::*;
pub use events::*;
pub use systems::*;

use crate::config::SimulationSettings;
use crate::contact::ActorContact;
use crate::{DeterministicRng, SimulationSet};

/// Patrol Plugin
pub struct PatrolPlugin;

impl Plugin for PatrolPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PatrolRetargeted>()
            .add_event::<ActorContact>()
            .init_resource::<SimulationSettings>()
            .init_resource::<DeterministicRng>()
            .add_systems(
                FixedUpdate,
                (
                    (initialize_patrol_actors, patrol_step)
                        .chain()
                        .in_set(SimulationSet::Intent),
                    retarget_patrol_on_contact.in_set(SimulationSet::React),
                ),
            );
    }
}
