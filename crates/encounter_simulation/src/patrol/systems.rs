//! Patrol systems (ECS обёртка над PatrolState)

use bevy::prelude::*;

use crate::components::PhysicsBody;
use crate::config::SimulationSettings;
use crate::contact::ActorContact;
use crate::physics::ActorBody;
use crate::DeterministicRng;
use super::components::{PatrolConfig, PatrolState, RetargetReason};
use super::events::PatrolRetargeted;

/// Система: инициализация патрульных акторов
///
/// Срабатывает один раз на entity (Without<PatrolState>):
/// - сэмплирует initial position и ставит туда актора (teleport)
/// - выбирает первую точку, чтобы target был до первого step
///
/// Невалидный PatrolConfig → log_error + дефолтный конфиг.
pub fn initialize_patrol_actors(
    mut commands: Commands,
    mut actors: Query<(Entity, &PatrolConfig, &mut Transform, &mut PhysicsBody), Without<PatrolState>>,
    settings: Res<SimulationSettings>,
    mut rng: ResMut<DeterministicRng>,
    mut retargeted: EventWriter<PatrolRetargeted>,
) {
    for (entity, config, mut transform, mut body) in actors.iter_mut() {
        let config = match config.validate() {
            Ok(()) => *config,
            Err(err) => {
                crate::log_error(&format!(
                    "Patrol {:?}: invalid config ({}), falling back to defaults",
                    entity, err
                ));
                PatrolConfig::default()
            }
        };

        let state = PatrolState::spawn(config, settings.ground_level, &mut rng.rng);

        transform.translation = state.initial_position();
        body.velocity = Vec3::ZERO;

        crate::log_info(&format!(
            "Patrol {:?} spawned at {:?} ({:?}, bound {})",
            entity,
            state.initial_position(),
            config.mode,
            config.bound
        ));

        retargeted.write(PatrolRetargeted {
            entity,
            target: state.target_position(),
            reason: RetargetReason::Spawn,
        });
        commands.entity(entity).insert(state);
    }
}

/// Система: patrol tick (movement + retarget по Reached/Timeout)
pub fn patrol_step(
    mut actors: Query<(Entity, &mut PatrolState, &Transform, &mut PhysicsBody)>,
    time: Res<Time<Fixed>>,
    mut rng: ResMut<DeterministicRng>,
    mut retargeted: EventWriter<PatrolRetargeted>,
) {
    let delta = time.delta_secs();

    for (entity, mut state, transform, mut body) in actors.iter_mut() {
        let mut ports = ActorBody {
            transform,
            body: &mut *body,
        };

        let step = state.step(delta, &mut ports, &mut rng.rng);

        if let Some(reason) = step.retarget {
            retargeted.write(PatrolRetargeted {
                entity,
                target: state.target_position(),
                reason,
            });
        }
    }
}

/// Система: контакт с Player/Enemy прерывает текущий leg
///
/// Порядок относительно patrol_step на том же тике не важен.
pub fn retarget_patrol_on_contact(
    mut contacts: EventReader<ActorContact>,
    mut actors: Query<&mut PatrolState>,
    mut rng: ResMut<DeterministicRng>,
    mut retargeted: EventWriter<PatrolRetargeted>,
) {
    for contact in contacts.read() {
        let Ok(mut state) = actors.get_mut(contact.entity) else {
            continue;
        };

        if let Some(target) = state.on_contact(contact.other_category, &mut rng.rng) {
            retargeted.write(PatrolRetargeted {
                entity: contact.entity,
                target,
                reason: RetargetReason::Contact,
            });
        }
    }
}
