//! Physics boundary module
//!
//! Ядро НЕ интегрирует физику само — только пишет velocity и читает позицию.
//! Интегратор подключается хостом:
//! - `HeadlessPhysicsPlugin` — velocity → Transform + proximity контакты (тесты, headless bin)
//! - `RapierBridgePlugin` — velocity → rapier `Velocity`, rapier `CollisionEvent` → `ActorContact`

pub mod headless;
pub mod ports;
pub mod rapier_bridge;

// Re-export основных типов
pub use headless::{
    detect_actor_contacts, integrate_velocity_to_transform, ActiveContacts, HeadlessPhysicsPlugin,
};
pub use ports::{ActorBody, PositionSource, VelocitySink};
pub use rapier_bridge::{
    rapier_actor_body, sync_velocity_to_rapier, translate_rapier_collisions, RapierBridgePlugin,
};
