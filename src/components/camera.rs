//! Camera component.
//!
//! The entity carrying it defines the view origin. Its `camera` attribute is a
//! [`SharedPoint`] that the camera system keeps in sync with the entity's
//! position and that the renderer reads when projecting to the screen.

use crate::ecs::component::{Component, ComponentKind};
use crate::resources::sharedpoint::SharedPoint;

pub const CAMERA: &str = "camera";

#[derive(Clone, Debug)]
pub struct Camera {
    /// Point published to the renderer.
    pub view: SharedPoint,
}

impl Camera {
    pub fn new(view: SharedPoint) -> Self {
        Self { view }
    }
}

impl From<Camera> for Component {
    fn from(c: Camera) -> Self {
        Component::new(ComponentKind::Camera).with(CAMERA, c.view)
    }
}
