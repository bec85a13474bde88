//! Contact systems (player ↔ enemy)

use bevy::prelude::*;

use crate::components::{ActorCategory, PhysicsBody, Player};
use crate::transition::ContextTransitionRequested;
use super::events::{ActorContact, ContactClassified};
use super::resolver::{resolve_contact, ContactInitiator};

/// Система: контакт игрока с врагом → классификация + переход в бой
///
/// Velocity берём из PhysicsBody (то, что ядро скомандовало на этом тике).
pub fn resolve_player_contacts(
    mut contacts: EventReader<ActorContact>,
    players: Query<(&Transform, &PhysicsBody), With<Player>>,
    mut classified: EventWriter<ContactClassified>,
    mut transitions: EventWriter<ContextTransitionRequested>,
) {
    for contact in contacts.read() {
        if contact.other_category != Some(ActorCategory::Enemy) {
            continue;
        }

        let Ok((transform, body)) = players.get(contact.entity) else {
            continue;
        };

        let resolution = resolve_contact(transform.translation, body.velocity, contact.other_position);

        match resolution.initiator {
            ContactInitiator::ThisActor => crate::log("Player collided with enemy"),
            ContactInitiator::OtherActor => crate::log("Enemy collided with player"),
        }

        classified.write(ContactClassified {
            player: contact.entity,
            enemy: contact.other,
            initiator: resolution.initiator,
        });
        transitions.write(ContextTransitionRequested {
            requested_by: contact.entity,
            context: resolution.transition.to_string(),
        });
    }
}
