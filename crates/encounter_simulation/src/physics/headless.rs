//! Headless интегратор (без Rapier)
//!
//! Напрямую применяет PhysicsBody.velocity к Transform.translation
//! и детектит контакты акторов по расстоянию (сферы CollisionRadius).

use std::collections::HashSet;

use bevy::prelude::*;

use crate::components::{Actor, CollisionRadius, PhysicsBody};
use crate::contact::ActorContact;
use crate::SimulationSet;

/// Пары акторов, которые касаются на текущем тике
///
/// Нужно чтобы ActorContact отправлялся только на входе в контакт
/// (как OnCollisionEnter), а не каждый тик пока акторы перекрываются.
#[derive(Resource, Debug, Default)]
pub struct ActiveContacts {
    pairs: HashSet<(Entity, Entity)>,
}

impl ActiveContacts {
    pub fn is_touching(&self, a: Entity, b: Entity) -> bool {
        self.pairs.contains(&ordered_pair(a, b))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

fn ordered_pair(a: Entity, b: Entity) -> (Entity, Entity) {
    if a.index() <= b.index() {
        (a, b)
    } else {
        (b, a)
    }
}

/// Система интеграции velocity → Transform: position += velocity * dt
pub fn integrate_velocity_to_transform(
    mut query: Query<(&PhysicsBody, &mut Transform)>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (body, mut transform) in query.iter_mut() {
        transform.translation += body.velocity * delta;
    }
}

/// Система: proximity контакты между акторами
///
/// Для каждой новой пары пишет ДВА ActorContact (по одному на каждую сторону),
/// порядок детерминирован (сортировка по Entity index).
pub fn detect_actor_contacts(
    actors: Query<(Entity, &Actor, &Transform, &CollisionRadius)>,
    mut active: ResMut<ActiveContacts>,
    mut contacts: EventWriter<ActorContact>,
) {
    let mut bodies: Vec<(Entity, Actor, Vec3, f32)> = actors
        .iter()
        .map(|(entity, actor, transform, radius)| (entity, *actor, transform.translation, radius.0))
        .collect();
    bodies.sort_by_key(|(entity, ..)| entity.index());

    let mut touching = HashSet::new();

    for (i, &(a, actor_a, pos_a, radius_a)) in bodies.iter().enumerate() {
        for &(b, actor_b, pos_b, radius_b) in bodies.iter().skip(i + 1) {
            if pos_a.distance(pos_b) >= radius_a + radius_b {
                continue;
            }

            let pair = ordered_pair(a, b);
            touching.insert(pair);

            if active.pairs.contains(&pair) {
                continue; // контакт уже был на прошлом тике
            }

            contacts.write(ActorContact {
                entity: a,
                other: b,
                other_category: Some(actor_b.category),
                other_position: pos_b,
            });
            contacts.write(ActorContact {
                entity: b,
                other: a,
                other_category: Some(actor_a.category),
                other_position: pos_a,
            });
        }
    }

    active.pairs = touching;
}

/// Plugin headless физики
///
/// Хост подключает ЛИБО этот plugin, ЛИБО RapierBridgePlugin (+ RapierPhysicsPlugin).
pub struct HeadlessPhysicsPlugin;

impl Plugin for HeadlessPhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ActorContact>()
            .init_resource::<ActiveContacts>()
            .add_systems(
                FixedUpdate,
                (
                    integrate_velocity_to_transform.in_set(SimulationSet::Integrate),
                    detect_actor_contacts.in_set(SimulationSet::Detect),
                ),
            );
    }
}
