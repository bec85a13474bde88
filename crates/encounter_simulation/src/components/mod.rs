//! ECS Components для акторов
//!
//! Организация по доменам:
//! - actor: категория актора (Player/Enemy), радиус контакта
//! - movement: PhysicsBody (velocity, которую пишет ядро)
//! - player: Player marker + PlayerConfig
//!
//! Patrol компоненты живут в `crate::patrol` (state machine + config).

pub mod actor;
pub mod movement;
pub mod player;

// Re-exports для удобного импорта
pub use actor::*;
pub use movement::*;
pub use player::*;
