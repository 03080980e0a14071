//! Target-following component.
//!
//! An entity with [`FollowTarget`] chases a [`SharedPoint`]. The follow
//! system moves it by at most `follow_max_speed` per frame and leaves it alone
//! while it is within `follow_distance` of the target.
//!
//! The target is a shared handle, not a copy. [`FollowTarget::pointer`] hands
//! every follower a clone of the input snapshot's pointer point, so all of
//! them track the same moving cursor. Use [`FollowTarget::new`] with a
//! dedicated point to follow something else.

use crate::ecs::component::{Component, ComponentKind};
use crate::error::{EngineError, Result};
use crate::resources::input::InputSnapshot;
use crate::resources::sharedpoint::SharedPoint;

pub const FOLLOW_TARGET: &str = "follow_target";
pub const FOLLOW_MAX_SPEED: &str = "follow_max_speed";
pub const FOLLOW_DISTANCE: &str = "follow_distance";

/// Default step cap, in world units per frame.
pub const DEFAULT_FOLLOW_MAX_SPEED: f64 = 5.0;
/// Default dead-zone radius around the target.
pub const DEFAULT_FOLLOW_DISTANCE: f64 = 20.0;

/// Speeds and distances must be finite and not negative.
pub fn check_follow_value(key: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(EngineError::InvalidAttribute {
            key: key.to_string(),
            reason: format!("must be finite and not negative, got {value}"),
        })
    }
}

#[derive(Clone, Debug)]
pub struct FollowTarget {
    pub target: SharedPoint,
    pub max_speed: f64,
    pub distance: f64,
}

impl FollowTarget {
    pub fn new(target: SharedPoint) -> Self {
        Self {
            target,
            max_speed: DEFAULT_FOLLOW_MAX_SPEED,
            distance: DEFAULT_FOLLOW_DISTANCE,
        }
    }

    /// Follow the pointer of `input`.
    pub fn pointer(input: &InputSnapshot) -> Self {
        Self::new(input.pointer_handle())
    }

    /// Out-of-range values are refused when the component is attached.
    pub fn with_max_speed(mut self, max_speed: f64) -> Self {
        self.max_speed = max_speed;
        self
    }

    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }
}

impl From<FollowTarget> for Component {
    fn from(f: FollowTarget) -> Self {
        Component::new(ComponentKind::FollowTarget)
            .with(FOLLOW_TARGET, f.target)
            .with(FOLLOW_MAX_SPEED, f.max_speed)
            .with(FOLLOW_DISTANCE, f.distance)
    }
}
