//! Player input: две нормализованные оси → direction на ground plane

use bevy::prelude::*;

/// Источник осей input (порт к input device layer)
///
/// Оси: horizontal → X, vertical → Z. Значения в [-1, 1].
pub trait AxisSource {
    fn horizontal(&self) -> f32;
    fn vertical(&self) -> f32;

    /// Direction на плоскости (ground axis = 0)
    fn direction(&self) -> Vec3 {
        input_direction(self.horizontal(), self.vertical())
    }
}

/// Direction из двух осей, каждая зажата в [-1, 1]
pub fn input_direction(horizontal: f32, vertical: f32) -> Vec3 {
    Vec3::new(clamp_axis(horizontal), 0.0, clamp_axis(vertical))
}

fn clamp_axis(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-1.0, 1.0)
    }
}

/// Текущее состояние осей (пишет хост каждый frame)
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct AxisInput {
    pub horizontal: f32,
    pub vertical: f32,
}

impl AxisInput {
    pub fn new(horizontal: f32, vertical: f32) -> Self {
        Self { horizontal, vertical }
    }
}

impl AxisSource for AxisInput {
    fn horizontal(&self) -> f32 {
        self.horizontal
    }

    fn vertical(&self) -> f32 {
        self.vertical
    }
}
