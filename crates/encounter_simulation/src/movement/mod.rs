//! Movement domain — общий примитив движения для игрока и патруля
//!
//! Содержит:
//! - velocity_toward (direction + speed → velocity)
//! - MIN_DIRECTION_LENGTH_SQUARED (anti-jitter guard)

pub mod locomotion;


pub use locomotion::*;
