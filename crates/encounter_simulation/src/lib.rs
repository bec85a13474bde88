//! Encounter Simulation Core
//!
//! ECS-ядро поведения двух акторов на overworld карте (Bevy 0.16):
//! - Player — движение от input, контакт с врагом → переход в BattleScene
//! - Enemy — патруль по случайным / осевым точкам в квадрате вокруг спавна
//!
//! Физика, рендер, загрузка сцен и input device — снаружи (порты + events).

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod components;
pub mod config;
pub mod contact;
pub mod logger;
pub mod movement;
pub mod patrol;
pub mod physics;
pub mod player;
pub mod spawn;
pub mod transition;

// Re-export базовых типов для удобства
pub use components::*;
pub use config::{ConfigError, SimulationSettings};
pub use contact::{
    classify_initiator, resolve_contact, ActorContact, ContactClassified, ContactInitiator,
    ContactPlugin, ContactResolution,
};
pub use logger::{init_logger, log, log_error, log_info, log_warning, set_log_level, set_logger, LogLevel, LogPrinter};
pub use movement::velocity_toward;
pub use patrol::{PatrolConfig, PatrolMode, PatrolPlugin, PatrolRetargeted, PatrolState, RetargetReason};
pub use physics::{HeadlessPhysicsPlugin, RapierBridgePlugin};
pub use player::{AxisInput, AxisSource, PlayerPlugin};
pub use spawn::{spawn_patrol_enemy, spawn_player};
pub use transition::{ContextTransitionRequested, TransitionLog, TransitionPlugin, BATTLE_CONTEXT};

/// Фазы тика симуляции (FixedUpdate), выполняются строго по порядку
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Controller'ы считают velocity (patrol, player input)
    Intent,
    /// Интегратор применяет velocity (headless или rapier sync)
    Integrate,
    /// Детект контактов → ActorContact
    Detect,
    /// Реакция на контакты (patrol retarget, contact resolver)
    React,
    /// Запись side effects (transition log)
    Record,
}

/// Главный plugin симуляции (объединяет все подсистемы)
///
/// Физику НЕ включает — хост добавляет HeadlessPhysicsPlugin или RapierBridgePlugin.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let settings = match app.world().get_resource::<SimulationSettings>() {
            Some(settings) => settings.clone(),
            None => SimulationSettings::default(),
        };

        let settings = match settings.validate() {
            Ok(()) => settings,
            Err(err) => {
                log_error(&format!("Invalid simulation settings ({}), using defaults", err));
                SimulationSettings::default()
            }
        };

        app.insert_resource(Time::<Fixed>::from_hz(settings.fixed_hz))
            .insert_resource(settings)
            .init_resource::<DeterministicRng>()
            .configure_sets(
                FixedUpdate,
                (
                    SimulationSet::Intent,
                    SimulationSet::Integrate,
                    SimulationSet::Detect,
                    SimulationSet::React,
                    SimulationSet::Record,
                )
                    .chain(),
            )
            .add_plugins((PatrolPlugin, PlayerPlugin, ContactPlugin, TransitionPlugin));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

impl FromWorld for DeterministicRng {
    fn from_world(world: &mut World) -> Self {
        let seed = world
            .get_resource::<SimulationSettings>()
            .map(|settings| settings.seed)
            .unwrap_or_else(|| SimulationSettings::default().seed);
        Self::new(seed)
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// SimulationPlugin и физический plugin добавляет вызывающий.
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();

    let settings = SimulationSettings {
        seed,
        ..default()
    };

    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(settings.fixed_hz))
        .insert_resource(settings);

    app
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
