//! Tests for patrol controller.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::super::components::{PatrolConfig, PatrolMode, RetargetReason};
    use super::super::controller::*;
    use crate::components::ActorCategory;
    use crate::physics::{PositionSource, VelocitySink};

    /// Тестовое тело без физики: позицию двигаем руками
    #[derive(Default)]
    struct TestBody {
        position: Vec3,
        velocity: Vec3,
    }

    impl PositionSource for TestBody {
        fn position(&self) -> Vec3 {
            self.position
        }
    }

    impl VelocitySink for TestBody {
        fn set_velocity(&mut self, velocity: Vec3) {
            self.velocity = velocity;
        }
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    fn assert_within_bound(state: &crate::patrol::PatrolState, target: Vec3) {
        let initial = state.initial_position();
        let bound = state.config().bound;
        assert!((target.x - initial.x).abs() <= bound, "x out of bound: {:?} vs {:?}", target, initial);
        assert!((target.z - initial.z).abs() <= bound, "z out of bound: {:?} vs {:?}", target, initial);
        assert_eq!(target.y, initial.y, "target ушёл с ground plane");
    }

    #[test]
    fn test_patrol_config_default() {
        let config = PatrolConfig::default();
        assert_eq!(config.bound, 10.0);
        assert_eq!(config.mode, PatrolMode::Random);
        assert_eq!(config.retarget_period, 3.0);
        assert_eq!(config.speed, 2.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_patrol_config_rejects_zero_bound() {
        let config = PatrolConfig {
            bound: 0.0,
            ..default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_spawn_position_around_origin_on_ground() {
        let mut rng = rng();

        for _ in 0..200 {
            let state = crate::patrol::PatrolState::spawn(PatrolConfig::default(), 1.5, &mut rng);
            let initial = state.initial_position();

            assert!(initial.x.abs() <= 10.0 && initial.z.abs() <= 10.0);
            assert_eq!(initial.y, 1.5);
            assert_eq!(state.elapsed_since_retarget(), 0.0);
            assert_within_bound(&state, state.target_position());
        }
    }

    #[test]
    fn test_random_targets_stay_within_bound() {
        let mut rng = rng();
        let mut state = crate::patrol::PatrolState::spawn(PatrolConfig::default(), 0.0, &mut rng);

        for _ in 0..1000 {
            let target = state.retarget(RetargetReason::Timeout, &mut rng);
            assert_within_bound(&state, target);
        }
    }

    #[test]
    fn test_step_moves_toward_target_at_speed() {
        let mut rng = rng();
        let mut state = crate::patrol::PatrolState::spawn(PatrolConfig::with_mode(PatrolMode::Horizontal), 0.0, &mut rng);
        let mut body = TestBody {
            position: state.initial_position(),
            ..default()
        };

        let step = state.step(1.0 / 60.0, &mut body, &mut rng);

        assert_eq!(step.retarget, None);
        assert_eq!(body.velocity, step.velocity);
        assert!((body.velocity - Vec3::X * 2.0).length() < 1e-5, "velocity = {:?}", body.velocity);
    }

    #[test]
    fn test_reached_target_retargets_before_timeout() {
        let mut rng = rng();
        let mut state = crate::patrol::PatrolState::spawn(PatrolConfig::default(), 0.0, &mut rng);
        let old_target = state.target_position();
        let mut body = TestBody {
            position: old_target + Vec3::new(0.05, 0.0, 0.0),
            ..default()
        };

        let step = state.step(0.1, &mut body, &mut rng);

        assert_eq!(step.retarget, Some(RetargetReason::Reached));
        assert_eq!(state.elapsed_since_retarget(), 0.0);
        assert_ne!(state.target_position(), old_target);
        // Близко к цели — guard locomotion, не дёргаемся
        assert_eq!(body.velocity, Vec3::ZERO);
    }

    #[test]
    fn test_timeout_retargets_and_resets_timer() {
        let mut rng = rng();
        let mut state = crate::patrol::PatrolState::spawn(PatrolConfig::default(), 0.0, &mut rng);
        // Стоим далеко от цели (тело "застряло")
        let mut body = TestBody {
            position: state.target_position() + Vec3::new(5.0, 0.0, 0.0),
            ..default()
        };

        let delta = 0.5;
        for _ in 0..5 {
            let step = state.step(delta, &mut body, &mut rng);
            assert_eq!(step.retarget, None);
            body.position = state.target_position() + Vec3::new(5.0, 0.0, 0.0);
        }
        assert!((state.elapsed_since_retarget() - 2.5).abs() < 1e-5);

        let step = state.step(delta, &mut body, &mut rng);
        assert_eq!(step.retarget, Some(RetargetReason::Timeout));
        assert_eq!(state.elapsed_since_retarget(), 0.0);
    }

    #[test]
    fn test_horizontal_mode_repeats_same_target() {
        let mut rng = rng();
        let mut state = crate::patrol::PatrolState::spawn(PatrolConfig::with_mode(PatrolMode::Horizontal), 0.0, &mut rng);
        let expected = state.initial_position() + Vec3::new(10.0, 0.0, 0.0);

        assert_eq!(state.target_position(), expected);
        for _ in 0..10 {
            assert_eq!(state.retarget(RetargetReason::Reached, &mut rng), expected);
        }
    }

    #[test]
    fn test_vertical_mode_repeats_same_target() {
        let mut rng = rng();
        let mut state = crate::patrol::PatrolState::spawn(PatrolConfig::with_mode(PatrolMode::Vertical), 0.0, &mut rng);
        let expected = state.initial_position() + Vec3::new(0.0, 0.0, 10.0);

        assert_eq!(state.target_position(), expected);
        for _ in 0..10 {
            assert_eq!(state.retarget(RetargetReason::Timeout, &mut rng), expected);
        }
    }

    #[test]
    fn test_fixed_mode_sits_at_far_point() {
        // Дошли до фиксированной точки → retarget в неё же → velocity 0
        let mut rng = rng();
        let mut state = crate::patrol::PatrolState::spawn(PatrolConfig::with_mode(PatrolMode::Vertical), 0.0, &mut rng);
        let mut body = TestBody {
            position: state.target_position(),
            ..default()
        };

        for _ in 0..3 {
            let step = state.step(1.0 / 60.0, &mut body, &mut rng);
            assert_eq!(step.retarget, Some(RetargetReason::Reached));
            assert_eq!(step.velocity, Vec3::ZERO);
        }
    }

    #[test]
    fn test_contact_with_actor_forces_retarget() {
        let mut rng = rng();

        for category in [ActorCategory::Player, ActorCategory::Enemy] {
            let mut state = crate::patrol::PatrolState::spawn(PatrolConfig::default(), 0.0, &mut rng);
            let mut body = TestBody {
                position: state.target_position() + Vec3::new(5.0, 0.0, 0.0),
                ..default()
            };
            state.step(1.0, &mut body, &mut rng);
            assert_eq!(state.elapsed_since_retarget(), 1.0);

            let target = state.on_contact(Some(category), &mut rng);

            assert!(target.is_some(), "{:?} контакт должен прервать leg", category);
            assert_eq!(state.elapsed_since_retarget(), 0.0);
            assert_eq!(target, Some(state.target_position()));
        }
    }

    #[test]
    fn test_contact_with_untagged_body_ignored() {
        let mut rng = rng();
        let mut state = crate::patrol::PatrolState::spawn(PatrolConfig::default(), 0.0, &mut rng);
        let mut body = TestBody {
            position: state.target_position() + Vec3::new(5.0, 0.0, 0.0),
            ..default()
        };
        state.step(1.0, &mut body, &mut rng);
        let target = state.target_position();

        assert_eq!(state.on_contact(None, &mut rng), None);
        assert_eq!(state.target_position(), target);
        assert_eq!(state.elapsed_since_retarget(), 1.0);
    }

    #[test]
    fn test_same_seed_same_targets() {
        let mut rng_a = rng();
        let mut rng_b = rng();

        let state_a = crate::patrol::PatrolState::spawn(PatrolConfig::default(), 0.0, &mut rng_a);
        let state_b = crate::patrol::PatrolState::spawn(PatrolConfig::default(), 0.0, &mut rng_b);

        assert_eq!(state_a, state_b);
    }
}
