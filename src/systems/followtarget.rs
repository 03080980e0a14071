//! Follow-target system.
//!
//! Moves every entity with [`FollowTarget`](crate::components::followtarget::FollowTarget)
//! and a position towards its target point. Inside `follow_distance` the
//! entity stays put; outside it, the entity steps straight at the target by at
//! most `follow_max_speed` per frame.
//!
//! The step is counted per frame, not scaled by delta time, so motion speed
//! depends on the frame rate.

use crate::components::followtarget::{
    FOLLOW_DISTANCE, FOLLOW_MAX_SPEED, FOLLOW_TARGET, check_follow_value,
};
use crate::components::position::POSITION;
use crate::ecs::component::ComponentKind;
use crate::ecs::entity::Entity;
use crate::ecs::system::System;
use crate::error::Result;
use crate::resources::surface::RenderSurface;

pub const FOLLOW_TARGET_SYSTEM: &str = "FollowTarget";

/// Advance one entity by one frame.
pub fn follow_target(entity: &mut Entity) -> Result<()> {
    let attrs = entity.attributes();
    let position = attrs.require_vector(POSITION)?;
    let target = attrs.require_point(FOLLOW_TARGET)?.get();
    let max_speed = check_follow_value(FOLLOW_MAX_SPEED, attrs.require_number(FOLLOW_MAX_SPEED)?)?;
    let distance = check_follow_value(FOLLOW_DISTANCE, attrs.require_number(FOLLOW_DISTANCE)?)?;

    if position.distance_to(target) > distance {
        let step = target.subtract(position).clamp(max_speed);
        entity.set_position(position.add(step));
    }
    Ok(())
}

pub fn follow_target_system() -> System {
    System::new(
        FOLLOW_TARGET_SYSTEM,
        [ComponentKind::FollowTarget, ComponentKind::Position],
    )
    .with_logic(|entity: &mut Entity, _dt: f64, _surface: &mut dyn RenderSurface| {
        follow_target(entity)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::followtarget::FollowTarget;
    use crate::components::position::Position;
    use crate::ecs::entity::EntityAllocator;
    use crate::resources::sharedpoint::SharedPoint;
    use crate::resources::surface::RecordingSurface;
    use crate::vector2::Vector2;
    use approx::assert_relative_eq;

    fn follower(at: Vector2, target: &SharedPoint, max_speed: f64, distance: f64) -> Entity {
        Entity::new(&EntityAllocator::new())
            .with(Position(at))
            .unwrap()
            .with(
                FollowTarget::new(target.clone())
                    .with_max_speed(max_speed)
                    .with_distance(distance),
            )
            .unwrap()
    }

    #[test]
    fn test_steps_towards_far_target_capped() {
        let target = SharedPoint::new(Vector2::new(200.0, 100.0));
        let mut e = follower(Vector2::new(0.0, 100.0), &target, 5.0, 20.0);
        follow_target(&mut e).unwrap();
        assert_eq!(e.position(), Some(Vector2::new(5.0, 100.0)));
    }

    #[test]
    fn test_stays_inside_dead_zone() {
        let target = SharedPoint::new(Vector2::new(10.0, 0.0));
        let mut e = follower(Vector2::new(0.0, 0.0), &target, 5.0, 20.0);
        follow_target(&mut e).unwrap();
        assert_eq!(e.position(), Some(Vector2::ZERO));

        // exactly on the boundary counts as inside
        let target = SharedPoint::new(Vector2::new(20.0, 0.0));
        let mut e = follower(Vector2::new(0.0, 0.0), &target, 5.0, 20.0);
        follow_target(&mut e).unwrap();
        assert_eq!(e.position(), Some(Vector2::ZERO));
    }

    #[test]
    fn test_short_step_is_not_stretched() {
        // 3 units away, dead zone 1, cap 5 -> lands exactly on target
        let target = SharedPoint::new(Vector2::new(3.0, 0.0));
        let mut e = follower(Vector2::ZERO, &target, 5.0, 1.0);
        follow_target(&mut e).unwrap();
        assert_eq!(e.position(), Some(Vector2::new(3.0, 0.0)));
    }

    #[test]
    fn test_displacement_never_exceeds_max_speed() {
        let target = SharedPoint::new(Vector2::new(-300.0, 400.0));
        let mut e = follower(Vector2::new(10.0, -10.0), &target, 7.5, 0.0);
        for _ in 0..20 {
            let before = e.position().unwrap();
            follow_target(&mut e).unwrap();
            let moved = e.position().unwrap().distance_to(before);
            assert!(moved <= 7.5 + 1e-9);
        }
    }

    #[test]
    fn test_tracks_moving_shared_target() {
        let target = SharedPoint::new(Vector2::new(100.0, 0.0));
        let mut e = follower(Vector2::ZERO, &target, 5.0, 0.0);
        follow_target(&mut e).unwrap();
        target.set(Vector2::new(5.0, 100.0));
        follow_target(&mut e).unwrap();
        let p = e.position().unwrap();
        assert_relative_eq!(p.x, 5.0, epsilon = 1e-9);
        assert_relative_eq!(p.y, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_negative_speed_set_later_is_an_error() {
        let target = SharedPoint::new(Vector2::new(200.0, 0.0));
        let mut e = follower(Vector2::ZERO, &target, 5.0, 0.0);
        e.attributes_mut().set(FOLLOW_MAX_SPEED, -5.0);
        assert!(follow_target(&mut e).is_err());
        assert_eq!(e.position(), Some(Vector2::ZERO));
    }

    #[test]
    fn test_system_ignores_delta_time() {
        let target = SharedPoint::new(Vector2::new(200.0, 100.0));
        let mut es = vec![follower(Vector2::new(0.0, 100.0), &target, 5.0, 20.0)];
        let mut sys = follow_target_system();
        let mut surface = RecordingSurface::new(10, 10);
        sys.run(es.iter_mut(), 1000.0, &mut surface).unwrap();
        assert_eq!(es[0].position(), Some(Vector2::new(5.0, 100.0)));
    }
}
