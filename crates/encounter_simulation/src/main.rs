//! Headless симуляция overworld встречи
//!
//! Игрок идёт вправо по scripted input, три патрульных врага ходят вокруг.
//! Печатает запросы перехода в бой, которые хост превратил бы в загрузку сцены.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use encounter_simulation::{
    create_headless_app, spawn_patrol_enemy, spawn_player, AxisInput, HeadlessPhysicsPlugin,
    PatrolConfig, PatrolMode, PlayerConfig, SimulationPlugin, TransitionLog,
};

fn main() {
    let seed = 42;
    println!("Starting encounter headless simulation (seed: {})", seed);

    let mut app = create_headless_app(seed);
    // Каждый update = ровно один fixed тик (60Hz), независимо от скорости машины
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(1.0 / 60.0)))
        .add_plugins((SimulationPlugin, HeadlessPhysicsPlugin));

    {
        let mut commands = app.world_mut().commands();
        spawn_player(&mut commands, Vec3::ZERO, PlayerConfig::default());
        for mode in [PatrolMode::Random, PatrolMode::Horizontal, PatrolMode::Vertical] {
            spawn_patrol_enemy(&mut commands, PatrolConfig::with_mode(mode));
        }
    }
    app.world_mut().flush();

    for tick in 0..1000 {
        // Scripted input: вправо, каждые 200 тиков разворот
        let horizontal = if (tick / 200) % 2 == 0 { 1.0 } else { -1.0 };
        app.insert_resource(AxisInput::new(horizontal, 0.0));

        app.update();

        let requests = app.world_mut().resource_mut::<TransitionLog>().drain();
        for context in requests {
            println!("Tick {}: transition requested → {}", tick, context);
        }

        if tick % 100 == 0 {
            let entity_count = app.world().entities().len();
            println!("Tick {}: {} entities", tick, entity_count);
        }
    }

    println!("Simulation complete!");
}
