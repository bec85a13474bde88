//! Patrol controller: выбор точек + движение к ним
//!
//! State machine из двух состояний:
//! - Seeking — всегда активно (движемся к target_position)
//! - Retarget — мгновенный переход (новая точка + сброс таймера)
//! Idle нет: актор либо идёт к точке, либо только что выбрал новую.

use bevy::prelude::*;
use rand::Rng;

use crate::components::ActorCategory;
use crate::movement::velocity_toward;
use crate::physics::{PositionSource, VelocitySink};
use super::components::{PatrolConfig, PatrolMode, PatrolState, RetargetReason};

/// Дистанция, ближе которой точка считается достигнутой
pub const REACHED_DISTANCE: f32 = 0.1;

/// Результат одного тика патруля
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatrolStep {
    /// Velocity, отправленная в VelocitySink
    pub velocity: Vec3,
    /// Some — на этом тике выбрана новая точка
    pub retarget: Option<RetargetReason>,
}

/// Случайная точка в квадрате center ± bound на плоскости y = ground_level
pub fn sample_in_square<R: Rng + ?Sized>(center: Vec3, bound: f32, ground_level: f32, rng: &mut R) -> Vec3 {
    Vec3::new(
        center.x + rng.gen_range(-bound..=bound),
        ground_level,
        center.z + rng.gen_range(-bound..=bound),
    )
}

impl PatrolState {
    /// Спавн: initial position вокруг origin (y = ground_level) + первая точка
    ///
    /// Хост должен поставить актора в `initial_position()` (teleport при спавне).
    pub fn spawn<R: Rng + ?Sized>(config: PatrolConfig, ground_level: f32, rng: &mut R) -> Self {
        let initial_position = sample_in_square(Vec3::ZERO, config.bound, ground_level, rng);

        let mut state = Self {
            initial_position,
            target_position: initial_position,
            elapsed_since_retarget: 0.0,
            config,
        };
        state.retarget(RetargetReason::Spawn, rng);
        state
    }

    /// Кандидат следующей точки по PatrolMode
    ///
    /// Horizontal/Vertical всегда дают ОДНУ И ТУ ЖЕ точку: актор доходит до неё
    /// и стоит (retarget в ту же точку) до следующего контакта. Это ожидаемое
    /// поведение режимов, не баг.
    pub fn next_target<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        let bound = self.config.bound;
        match self.config.mode {
            PatrolMode::Random => {
                sample_in_square(self.initial_position, bound, self.ground_level(), rng)
            }
            PatrolMode::Horizontal => self.initial_position + Vec3::X * bound,
            PatrolMode::Vertical => self.initial_position + Vec3::Z * bound,
        }
    }

    /// Retarget: новая точка + сброс таймера
    pub fn retarget<R: Rng + ?Sized>(&mut self, reason: RetargetReason, rng: &mut R) -> Vec3 {
        self.target_position = self.next_target(rng);
        self.elapsed_since_retarget = 0.0;

        crate::log(&format!(
            "Patrol retarget ({:?}): new target position {:?}",
            reason, self.target_position
        ));

        self.target_position
    }

    /// Retarget нужен? Reached имеет приоритет над Timeout
    pub fn retarget_reason(&self, position: Vec3) -> Option<RetargetReason> {
        if position.distance(self.target_position) < REACHED_DISTANCE {
            Some(RetargetReason::Reached)
        } else if self.elapsed_since_retarget >= self.config.retarget_period {
            Some(RetargetReason::Timeout)
        } else {
            None
        }
    }

    /// Один тик патруля
    ///
    /// 1. Таймер += delta
    /// 2. Velocity к target → body
    /// 3. Reached / Timeout → Retarget
    pub fn step<B, R>(&mut self, delta: f32, body: &mut B, rng: &mut R) -> PatrolStep
    where
        B: PositionSource + VelocitySink + ?Sized,
        R: Rng + ?Sized,
    {
        self.elapsed_since_retarget += delta;

        let position = body.position();
        let velocity = velocity_toward(self.target_position - position, self.config.speed);
        body.set_velocity(velocity);

        let retarget = self.retarget_reason(position);
        if let Some(reason) = retarget {
            self.retarget(reason, rng);
        }

        PatrolStep { velocity, retarget }
    }

    /// Контакт с другим телом: Player/Enemy → немедленный Retarget
    ///
    /// Таймер и дистанция игнорируются. Не-акторы (`None`) не влияют.
    pub fn on_contact<R: Rng + ?Sized>(
        &mut self,
        other: Option<ActorCategory>,
        rng: &mut R,
    ) -> Option<Vec3> {
        let category = other?;
        if !category.interrupts_patrol() {
            return None;
        }

        Some(self.retarget(RetargetReason::Contact, rng))
    }
}
