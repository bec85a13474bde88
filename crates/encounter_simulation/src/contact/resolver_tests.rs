//! Tests for contact resolver.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use super::super::resolver::*;
    use crate::transition::{TransitionLog, BATTLE_CONTEXT};

    #[test]
    fn test_moving_toward_other_initiates() {
        let initiator = classify_initiator(Vec3::ZERO, Vec3::X, Vec3::X);
        assert_eq!(initiator, ContactInitiator::ThisActor);
    }

    #[test]
    fn test_moving_away_does_not_initiate() {
        let initiator = classify_initiator(Vec3::ZERO, Vec3::NEG_X, Vec3::X);
        assert_eq!(initiator, ContactInitiator::OtherActor);
    }

    #[test]
    fn test_ground_axis_ignored() {
        // Падение вниз на врага сбоку — не считается "врезался"
        let initiator = classify_initiator(Vec3::ZERO, Vec3::new(0.0, -10.0, 0.0), Vec3::new(1.0, -1.0, 0.0));
        assert_eq!(initiator, ContactInitiator::OtherActor);

        let initiator = classify_initiator(
            Vec3::new(0.0, 2.0, 0.0),
            Vec3::new(1.0, 5.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
        );
        assert_eq!(initiator, ContactInitiator::ThisActor);
    }

    #[test]
    fn test_zero_velocity_is_not_initiator() {
        let initiator = classify_initiator(Vec3::ZERO, Vec3::ZERO, Vec3::X);
        assert_eq!(initiator, ContactInitiator::OtherActor);
    }

    #[test]
    fn test_coincident_positions_are_safe() {
        let initiator = classify_initiator(Vec3::ONE, Vec3::X, Vec3::ONE);
        assert_eq!(initiator, ContactInitiator::OtherActor);
    }

    #[test]
    fn test_safe_normalize() {
        assert_eq!(safe_normalize(Vec3::ZERO), Vec3::ZERO);
        assert_eq!(safe_normalize(Vec3::new(1e-4, 0.0, 0.0)), Vec3::ZERO);
        assert_eq!(safe_normalize(Vec3::new(f32::INFINITY, 0.0, 0.0)), Vec3::ZERO);
        assert!((safe_normalize(Vec3::new(0.0, 0.0, 3.0)) - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_transition_requested_regardless_of_initiator() {
        let mut log = TransitionLog::default();

        let initiated = resolve_contact(Vec3::ZERO, Vec3::X, Vec3::X);
        let not_initiated = resolve_contact(Vec3::ZERO, Vec3::NEG_X, Vec3::X);

        assert!(initiated.initiated_by_this_actor());
        assert!(!not_initiated.initiated_by_this_actor());

        initiated.apply(&mut log);
        assert_eq!(log.requests(), [BATTLE_CONTEXT.to_string()]);

        not_initiated.apply(&mut log);
        assert_eq!(log.requests().len(), 2);
    }
}
