//! Rapier bridge: kinematic тела + трансляция коллизий
//!
//! Архитектура:
//! - RigidBody::KinematicVelocityBased — Rapier интегрирует velocity сам
//! - PhysicsBody.velocity (ядро) → rapier Velocity.linvel
//! - CollisionEvent::Started → ActorContact (по событию на каждую сторону)
//!
//! RapierPhysicsPlugin подключает хост (нужен полноценный App с TransformPlugin).

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::components::{Actor, PhysicsBody};
use crate::contact::ActorContact;
use crate::SimulationSet;

/// Rapier компоненты для актора
///
/// Kinematic-kinematic пары по умолчанию не генерируют события —
/// включаем KINEMATIC_KINEMATIC явно.
pub fn rapier_actor_body() -> impl Bundle {
    (
        RigidBody::KinematicVelocityBased,
        Collider::capsule_y(0.5, 0.4), // Высота 1.8m (0.5 + 0.5 + 2 * 0.4), радиус 0.4m
        Velocity::default(),
        LockedAxes::ROTATION_LOCKED,
        ActiveEvents::COLLISION_EVENTS,
        ActiveCollisionTypes::default() | ActiveCollisionTypes::KINEMATIC_KINEMATIC,
    )
}

/// Система: PhysicsBody.velocity → rapier Velocity
pub fn sync_velocity_to_rapier(mut query: Query<(&PhysicsBody, &mut Velocity)>) {
    for (body, mut rapier_velocity) in query.iter_mut() {
        rapier_velocity.linvel = body.velocity;
    }
}

/// Система: rapier CollisionEvent::Started → ActorContact
///
/// Stopped игнорируем (ядру нужен только вход в контакт).
/// Коллизия с не-актором (стена, пол) даёт `other_category: None`.
pub fn translate_rapier_collisions(
    mut collisions: EventReader<CollisionEvent>,
    actors: Query<&Actor>,
    transforms: Query<&Transform>,
    mut contacts: EventWriter<ActorContact>,
) {
    for collision in collisions.read() {
        let CollisionEvent::Started(first, second, _flags) = collision else {
            continue;
        };

        for (entity, other) in [(*first, *second), (*second, *first)] {
            if actors.get(entity).is_err() {
                continue;
            }

            let Ok(other_transform) = transforms.get(other) else {
                continue;
            };

            contacts.write(ActorContact {
                entity,
                other,
                other_category: actors.get(other).ok().map(|actor| actor.category),
                other_position: other_transform.translation,
            });
        }
    }
}

/// Plugin моста к Rapier
pub struct RapierBridgePlugin;

impl Plugin for RapierBridgePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<CollisionEvent>()
            .add_event::<ActorContact>()
            .add_systems(
                FixedUpdate,
                (
                    sync_velocity_to_rapier.in_set(SimulationSet::Integrate),
                    translate_rapier_collisions.in_set(SimulationSet::Detect),
                ),
            );
    }
}
