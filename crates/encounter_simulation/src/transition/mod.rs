//! Context transitions — запросы на смену игрового контекста (сцены)
//!
//! Ядро только ЗАПРАШИВАЕТ переход (fire-and-forget). Реальную загрузку сцены
//! делает хост: читает `TransitionLog` или слушает `ContextTransitionRequested`.
//! Дедупликации нет — если нужна идемпотентность, debounce на стороне хоста.

use bevy::prelude::*;

use crate::SimulationSet;

/// Контекст боя, в который уводит контакт игрока с врагом
pub const BATTLE_CONTEXT: &str = "BattleScene";

/// Event: запрос перехода в другой контекст
#[derive(Event, Debug, Clone, PartialEq)]
pub struct ContextTransitionRequested {
    /// Актор, чей контакт вызвал переход
    pub requested_by: Entity,
    /// Имя целевого контекста
    pub context: String,
}

/// Сервис переходов (порт для не-ECS вызывающих)
pub trait TransitionService {
    fn request_transition(&mut self, context: &str);
}

/// Журнал запрошенных переходов (ECS реализация TransitionService)
///
/// Хост забирает запросы через `drain()`.
#[derive(Resource, Debug, Default, Clone)]
pub struct TransitionLog {
    requests: Vec<String>,
}

impl TransitionLog {
    pub fn requests(&self) -> &[String] {
        &self.requests
    }

    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.requests)
    }
}

impl TransitionService for TransitionLog {
    fn request_transition(&mut self, context: &str) {
        self.requests.push(context.to_string());
    }
}

/// Система: ContextTransitionRequested → TransitionLog
pub fn record_transition_requests(
    mut requests: EventReader<ContextTransitionRequested>,
    mut log: ResMut<TransitionLog>,
) {
    for request in requests.read() {
        crate::log_info(&format!(
            "Context transition requested by {:?}: {}",
            request.requested_by, request.context
        ));
        log.request_transition(&request.context);
    }
}

pub struct TransitionPlugin;

impl Plugin for TransitionPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ContextTransitionRequested>()
            .init_resource::<TransitionLog>()
            .add_systems(
                FixedUpdate,
                record_transition_requests.in_set(SimulationSet::Record),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_keeps_duplicates() {
        let mut log = TransitionLog::default();
        log.request_transition(BATTLE_CONTEXT);
        log.request_transition(BATTLE_CONTEXT);

        assert_eq!(log.requests().len(), 2);
    }

    #[test]
    fn test_drain_empties_log() {
        let mut log = TransitionLog::default();
        log.request_transition(BATTLE_CONTEXT);

        assert_eq!(log.drain(), vec![BATTLE_CONTEXT.to_string()]);
        assert!(log.requests().is_empty());
    }
}
