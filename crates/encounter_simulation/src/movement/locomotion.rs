//! Locomotion driver: direction → bounded velocity

use bevy::prelude::*;

/// Порог squared длины направления, ниже которого velocity = 0
///
/// Убирает дрожание актора, когда он уже почти в цели.
pub const MIN_DIRECTION_LENGTH_SQUARED: f32 = 0.1;

/// Velocity для движения в направлении `direction` со скоростью `speed`
///
/// `|result| == speed`, если guard пройден, иначе `Vec3::ZERO`.
/// Вырожденный вход (нулевой, NaN) не ошибка — отсекается guard'ом.
pub fn velocity_toward(direction: Vec3, speed: f32) -> Vec3 {
    let length_squared = direction.length_squared();
    if length_squared.is_nan() || length_squared < MIN_DIRECTION_LENGTH_SQUARED {
        return Vec3::ZERO;
    }

    direction.normalize() * speed
}
